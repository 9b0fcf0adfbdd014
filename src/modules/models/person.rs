use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::modules::helpers::filters::Scope;
use crate::modules::helpers::roles::PersonRole;
use crate::schema::people;

/// the people linked to one result or entry, with the role each of them held
pub type LinkedPeople = Vec<(PersonRole, Person)>;

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = people, check_for_backend(diesel::pg::Pg))]
pub struct Person {
    pub id: String,
    pub name: String,
    pub country: String,
}

impl Person {
    /// # get people from ids
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `ids` - the ids of the people
    ///
    /// ## Returns
    /// * `Vec<Person>` - the people that exist, ordered by id
    pub fn get_by_ids(conn: &mut PgConnection, ids: &[String]) -> QueryResult<Vec<Person>> {
        people::table
            .filter(people::id.eq_any(ids))
            .order(people::id.asc())
            .select(Person::as_select())
            .load(conn)
    }

    /// # get everyone who held a role in a race result
    /// every person is returned once, no matter in how many results they held the role.
    /// the series and season of the scope are matched against the race of the result.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `role` - the role to look for
    /// * `scope` - the series and season to narrow to
    ///
    /// ## Returns
    /// * `Vec<Person>` - the people, ordered by id
    pub fn with_role(conn: &mut PgConnection, role: PersonRole, scope: &Scope) -> QueryResult<Vec<Person>> {
        use crate::schema::{race_results, race_results_people, races};

        let mut query = race_results_people::table
            .inner_join(people::table)
            .inner_join(race_results::table.inner_join(races::table))
            .filter(race_results_people::type_.eq(role))
            .select(Person::as_select())
            .distinct()
            .order(people::id.asc())
            .into_boxed();

        if let Some(series) = scope.series() {
            query = query.filter(races::series_id.eq(series.to_string()));
        }

        if let Some(season) = scope.season() {
            query = query.filter(races::season.eq(season));
        }

        query.load(conn)
    }
}
