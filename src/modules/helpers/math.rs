use std::fmt;

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::{Serialize, Serializer};

pub struct Math {}

impl Math {
    /// # format a decimal with a fixed number of decimals
    /// the value is rounded half up when it carries more decimals than requested,
    /// and padded with zeros when it carries less.
    ///
    /// ## Arguments
    /// * `number` - the value to format
    /// * `decimals` - the number of digits after the decimal point
    ///
    /// ## Returns
    /// * `String` - the formatted value, e.g. `1.200` for 1.2 with 3 decimals
    pub fn to_fixed(number: &BigDecimal, decimals: u32) -> String {
        let rounded = number.with_scale_round(i64::from(decimals), RoundingMode::HalfUp);
        let negative = rounded < BigDecimal::zero();

        let (digits, _) = rounded.abs().as_bigint_and_exponent();
        let mut digits = digits.to_string();

        let decimals = decimals as usize;
        if digits.len() <= decimals {
            digits = format!("{}{}", "0".repeat(decimals + 1 - digits.len()), digits);
        }

        let (whole, fraction) = digits.split_at(digits.len() - decimals);
        let sign = if negative { "-" } else { "" };

        if fraction.is_empty() {
            format!("{sign}{whole}")
        } else {
            format!("{sign}{whole}.{fraction}")
        }
    }
}

/// # Decimal rendered with a fixed scale
/// numeric columns are handed to consumers as strings so the declared scale survives,
/// `Fixed::<3>` turns a stored 34.25 into `"34.250"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixed<const SCALE: u32>(pub BigDecimal);

impl<const SCALE: u32> From<BigDecimal> for Fixed<SCALE> {
    fn from(value: BigDecimal) -> Self {
        Fixed(value)
    }
}

impl<const SCALE: u32> fmt::Display for Fixed<SCALE> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", Math::to_fixed(&self.0, SCALE))
    }
}

impl<const SCALE: u32> Serialize for Fixed<SCALE> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
