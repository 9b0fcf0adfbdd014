use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::modules::helpers::filters::Scope;
use crate::schema::{race_results, races, teams};

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = teams, check_for_backend(diesel::pg::Pg))]
pub struct Team {
    pub id: String,
    pub name: String,
    pub alias: String,
    pub owner_id: String,
}

impl Team {
    /// # get the teams in a scope
    /// without a series every team is returned, also the ones that never finished a race.
    /// with a series only teams with a race result in that series (and season) are returned.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `scope` - the series and season to narrow to
    ///
    /// ## Returns
    /// * `Vec<Team>` - the teams, ordered by id
    pub fn in_scope(conn: &mut PgConnection, scope: &Scope) -> QueryResult<Vec<Team>> {
        let Some(series) = scope.series() else {
            return teams::table
                .order(teams::id.asc())
                .select(Team::as_select())
                .load(conn);
        };

        let mut query = teams::table
            .inner_join(race_results::table.inner_join(races::table))
            .filter(races::series_id.eq(series.to_string()))
            .select(Team::as_select())
            .distinct()
            .order(teams::id.asc())
            .into_boxed();

        if let Some(season) = scope.season() {
            query = query.filter(races::season.eq(season));
        }

        query.load(conn)
    }
}
