use bigdecimal::BigDecimal;
use chrono::NaiveDateTime;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::modules::helpers::filters::SeasonKey;
use crate::schema::{race_tracks, races};

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = race_tracks, check_for_backend(diesel::pg::Pg))]
pub struct RaceTrack {
    pub id: String,
    pub site: String,
    pub circuit_name: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
}

#[derive(Queryable, Selectable, Identifiable, PartialEq, Debug, Clone)]
#[diesel(table_name = races, check_for_backend(diesel::pg::Pg))]
pub struct Race {
    pub id: String,
    pub round: i32,
    pub name: String,
    pub season: i32,
    pub race_track_id: String,
    pub date: NaiveDateTime,
    pub laps: i32,
    pub length: BigDecimal,
    pub distance: BigDecimal,
    pub series_id: String,
}

impl Race {
    /// # get the races of a season
    /// ordered by date, races on the same date by round.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `key` - the series and season
    ///
    /// ## Returns
    /// * `Vec<(Race, RaceTrack)>` - the races and the tracks they are held on
    pub fn in_season(conn: &mut PgConnection, key: &SeasonKey) -> QueryResult<Vec<(Race, RaceTrack)>> {
        races::table
            .inner_join(race_tracks::table)
            .filter(races::series_id.eq(&key.series))
            .filter(races::season.eq(key.season))
            .order((races::date.asc(), races::round.asc(), races::id.asc()))
            .select((Race::as_select(), RaceTrack::as_select()))
            .load(conn)
    }
}
