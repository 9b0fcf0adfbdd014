use std::collections::HashSet;
use std::hash::Hash;

pub struct Helpers {}

impl Helpers {
    /// # remove duplicates from a list
    /// keeps the first occurrence of every value, in the original order.
    ///
    /// ## Arguments
    /// * `values` - the values to deduplicate
    ///
    /// ## Returns
    /// * `Vec<T>` - the unique values
    pub fn unique<T, I>(values: I) -> Vec<T>
    where
        T: Eq + Hash + Clone,
        I: IntoIterator<Item = T>,
    {
        let mut seen = HashSet::new();

        values
            .into_iter()
            .filter(|value| seen.insert(value.clone()))
            .collect()
    }
}
