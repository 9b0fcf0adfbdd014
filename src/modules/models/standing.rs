use bigdecimal::BigDecimal;
use chrono::NaiveTime;
use diesel::pg::PgConnection;
use diesel::prelude::*;

use crate::modules::helpers::filters::SeasonKey;
use crate::modules::models::person::Person;
use crate::modules::models::team::Team;
use crate::modules::models::vehicle::Vehicle;
use crate::schema::{driver_standings, owner_standings, people, race_standings, team_standings, teams, vehicles};

/// counters every standing keeps for a series and season
#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = driver_standings, check_for_backend(diesel::pg::Pg))]
pub struct DriverStanding {
    pub id: i32,
    pub driver_id: String,
    pub vehicle_id: i32,
    pub series_id: String,
    pub season: i32,
    pub position: i32,
    pub points: i32,
    pub poles: i32,
    pub wins: i32,
    pub starts: i32,
    pub dnfs: i32,
    pub top5: i32,
    pub top10: i32,
}

#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = team_standings, check_for_backend(diesel::pg::Pg))]
pub struct TeamStanding {
    pub id: i32,
    pub team_id: String,
    pub vehicle_id: i32,
    pub series_id: String,
    pub season: i32,
    pub position: i32,
    pub points: i32,
    pub poles: i32,
    pub wins: i32,
    pub starts: i32,
    pub dnfs: i32,
    pub top5: i32,
    pub top10: i32,
}

#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = owner_standings, check_for_backend(diesel::pg::Pg))]
pub struct OwnerStanding {
    pub id: i32,
    pub vehicle_id: i32,
    pub series_id: String,
    pub season: i32,
    pub position: i32,
    pub points: i32,
    pub poles: i32,
    pub wins: i32,
    pub starts: i32,
    pub dnfs: i32,
    pub top5: i32,
    pub top10: i32,
}

#[derive(Queryable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = race_standings, check_for_backend(diesel::pg::Pg))]
pub struct RaceStanding {
    pub id: i32,
    pub race_id: String,
    pub race_time: NaiveTime,
    pub caution_flags: i32,
    pub caution_flag_laps: i32,
    pub lead_changes: i32,
    pub pole_speed: BigDecimal,
    pub avg_speed: BigDecimal,
    pub victory_margin: BigDecimal,
}

impl DriverStanding {
    /// # get the driver standings of a season
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `key` - the series and season
    ///
    /// ## Returns
    /// * `Vec<(DriverStanding, Person, Vehicle)>` - the standings with their driver and vehicle
    pub fn in_season(conn: &mut PgConnection, key: &SeasonKey) -> QueryResult<Vec<(DriverStanding, Person, Vehicle)>> {
        driver_standings::table
            .inner_join(people::table)
            .inner_join(vehicles::table)
            .filter(driver_standings::series_id.eq(&key.series))
            .filter(driver_standings::season.eq(key.season))
            .order(driver_standings::id.asc())
            .select((DriverStanding::as_select(), Person::as_select(), Vehicle::as_select()))
            .load(conn)
    }
}

impl TeamStanding {
    /// # get the team standings of a season
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `key` - the series and season
    ///
    /// ## Returns
    /// * `Vec<(TeamStanding, Team, Vehicle)>` - the standings with their team and vehicle
    pub fn in_season(conn: &mut PgConnection, key: &SeasonKey) -> QueryResult<Vec<(TeamStanding, Team, Vehicle)>> {
        team_standings::table
            .inner_join(teams::table)
            .inner_join(vehicles::table)
            .filter(team_standings::series_id.eq(&key.series))
            .filter(team_standings::season.eq(key.season))
            .order(team_standings::id.asc())
            .select((TeamStanding::as_select(), Team::as_select(), Vehicle::as_select()))
            .load(conn)
    }
}

impl OwnerStanding {
    /// # get the owner standings of a season
    /// the owner of a standing is the owner of its vehicle.
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `key` - the series and season
    ///
    /// ## Returns
    /// * `Vec<(OwnerStanding, Vehicle)>` - the standings with their vehicle
    pub fn in_season(conn: &mut PgConnection, key: &SeasonKey) -> QueryResult<Vec<(OwnerStanding, Vehicle)>> {
        owner_standings::table
            .inner_join(vehicles::table)
            .filter(owner_standings::series_id.eq(&key.series))
            .filter(owner_standings::season.eq(key.season))
            .order(owner_standings::id.asc())
            .select((OwnerStanding::as_select(), Vehicle::as_select()))
            .load(conn)
    }
}

impl RaceStanding {
    /// # get the standings of a race
    ///
    /// ## Arguments
    /// * `conn` - the database connection
    /// * `race_id` - the id of the race
    ///
    /// ## Returns
    /// * `Vec<RaceStanding>` - the standings of the race
    pub fn for_race(conn: &mut PgConnection, race_id: &str) -> QueryResult<Vec<RaceStanding>> {
        race_standings::table
            .filter(race_standings::race_id.eq(race_id))
            .order(race_standings::id.asc())
            .select(RaceStanding::as_select())
            .load(conn)
    }
}
