use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::modules::helpers::filters::Scope;
use crate::schema::{race_results, races, vehicles};

/// # A vehicle and its free-form attributes
/// `metadata` is a json object (e.g. `{"make": "Ford"}`), new attributes need no migration.
#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = vehicles, check_for_backend(diesel::pg::Pg))]
pub struct Vehicle {
    pub id: i32,
    pub number: i32,
    pub owner_id: Option<String>,
    pub metadata: serde_json::Value,
}

impl Vehicle {
    /// # get the vehicles in a scope
    /// works the same as `Team::in_scope`: unfiltered lists every vehicle, a series
    /// narrows to vehicles with a race result in that series (and season).
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `scope` - the series and season to narrow to
    ///
    /// ## Returns
    /// * `Vec<Vehicle>` - the vehicles, ordered by id
    pub fn in_scope(conn: &mut PgConnection, scope: &Scope) -> QueryResult<Vec<Vehicle>> {
        let Some(series) = scope.series() else {
            return vehicles::table
                .order(vehicles::id.asc())
                .select(Vehicle::as_select())
                .load(conn);
        };

        let mut query = vehicles::table
            .inner_join(race_results::table.inner_join(races::table))
            .filter(races::series_id.eq(series.to_string()))
            .select(Vehicle::as_select())
            .distinct()
            .order(vehicles::id.asc())
            .into_boxed();

        if let Some(season) = scope.season() {
            query = query.filter(races::season.eq(season));
        }

        query.load(conn)
    }
}
