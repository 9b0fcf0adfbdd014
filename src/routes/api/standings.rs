use diesel::pg::PgConnection;
use log::error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, State};
use serde::Serialize;

use crate::macros::database_error_handeler::db_handle_get_error_http;
use crate::modules::helpers::filters::SeasonKey;
use crate::modules::helpers::math::Fixed;
use crate::modules::models::standing::{DriverStanding, OwnerStanding, RaceStanding, TeamStanding};
use crate::modules::models::team::Team;
use crate::modules::projections::{ApiPerson, ApiResult, ApiTeam, ApiVehicle, Owners, ResourceList};
use crate::modules::store::Store;
use crate::routes::api::version::ApiVersion;

/// counters shared by driver, team and owner standings
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiCounters {
    pub position: i32,
    pub points: i32,
    pub poles: i32,
    pub wins: i32,
    pub starts: i32,
    pub dnfs: i32,
    pub top5: i32,
    pub top10: i32,
}

macro_rules! counters_of {
    ( $standing:expr ) => {
        ApiCounters {
            position: $standing.position,
            points: $standing.points,
            poles: $standing.poles,
            wins: $standing.wins,
            starts: $standing.starts,
            dnfs: $standing.dnfs,
            top5: $standing.top5,
            top10: $standing.top10,
        }
    };
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiDriverStanding {
    pub id: i32,
    pub driver: ApiPerson,
    pub vehicle: ApiVehicle,
    pub series: String,
    pub season: i32,
    #[serde(flatten)]
    pub counters: ApiCounters,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiTeamStanding {
    pub id: i32,
    pub team: ApiTeam,
    pub vehicle: ApiVehicle,
    pub series: String,
    pub season: i32,
    #[serde(flatten)]
    pub counters: ApiCounters,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiOwnerStanding {
    pub id: i32,
    pub vehicle: ApiVehicle,
    pub series: String,
    pub season: i32,
    #[serde(flatten)]
    pub counters: ApiCounters,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiRaceStanding {
    pub race_id: String,
    pub race_time: String,
    pub caution_flags: i32,
    pub caution_flag_laps: i32,
    pub lead_changes: i32,
    pub pole_speed: Fixed<3>,
    pub avg_speed: Fixed<3>,
    pub victory_margin: Fixed<3>,
}

impl From<RaceStanding> for ApiRaceStanding {
    fn from(standing: RaceStanding) -> Self {
        ApiRaceStanding {
            race_id: standing.race_id,
            race_time: standing.race_time.format("%H:%M:%S").to_string(),
            caution_flags: standing.caution_flags,
            caution_flag_laps: standing.caution_flag_laps,
            lead_changes: standing.lead_changes,
            pole_speed: Fixed::from(standing.pole_speed),
            avg_speed: Fixed::from(standing.avg_speed),
            victory_margin: Fixed::from(standing.victory_margin),
        }
    }
}

#[get("/<version>/<series>/<season>/driverstandings")]
pub fn get_driver_standings(
    version: ApiVersion,
    series: &str,
    season: &str,
    store: &State<Store>,
) -> ApiResult<ApiDriverStanding> {
    const KEY: &str = "driverstandings";

    if !version.is_supported() {
        return Ok(Json(ResourceList::empty(KEY)));
    }
    let Some(key) = SeasonKey::resolve(series, season) else {
        return Ok(Json(ResourceList::empty(KEY)));
    };

    let mut pooled = db_handle_get_error_http!(store.connection(), "routes/api/standings:get_driver_standings", "connection");
    let connection: &mut PgConnection = &mut pooled;

    let rows = db_handle_get_error_http!(
        DriverStanding::in_season(connection, &key),
        "routes/api/standings:get_driver_standings",
        KEY
    );
    let owners = db_handle_get_error_http!(
        Owners::load(connection, std::iter::empty::<&Team>(), rows.iter().map(|(_, _, vehicle)| vehicle)),
        "routes/api/standings:get_driver_standings",
        "vehicle owners"
    );

    let standings = rows
        .into_iter()
        .map(|(standing, driver, vehicle)| ApiDriverStanding {
            id: standing.id,
            driver: ApiPerson::from(&driver),
            vehicle: ApiVehicle::new(&vehicle, &owners),
            counters: counters_of!(standing),
            series: standing.series_id,
            season: standing.season,
        })
        .collect();

    Ok(Json(ResourceList::new(KEY, standings)))
}

#[get("/<version>/<series>/<season>/teamstandings")]
pub fn get_team_standings(
    version: ApiVersion,
    series: &str,
    season: &str,
    store: &State<Store>,
) -> ApiResult<ApiTeamStanding> {
    const KEY: &str = "teamstandings";

    if !version.is_supported() {
        return Ok(Json(ResourceList::empty(KEY)));
    }
    let Some(key) = SeasonKey::resolve(series, season) else {
        return Ok(Json(ResourceList::empty(KEY)));
    };

    let mut pooled = db_handle_get_error_http!(store.connection(), "routes/api/standings:get_team_standings", "connection");
    let connection: &mut PgConnection = &mut pooled;

    let rows = db_handle_get_error_http!(
        TeamStanding::in_season(connection, &key),
        "routes/api/standings:get_team_standings",
        KEY
    );
    let owners = db_handle_get_error_http!(
        Owners::load(
            connection,
            rows.iter().map(|(_, team, _)| team),
            rows.iter().map(|(_, _, vehicle)| vehicle)
        ),
        "routes/api/standings:get_team_standings",
        "team and vehicle owners"
    );

    let standings = rows
        .into_iter()
        .map(|(standing, team, vehicle)| ApiTeamStanding {
            id: standing.id,
            team: ApiTeam::new(&team, &owners),
            vehicle: ApiVehicle::new(&vehicle, &owners),
            counters: counters_of!(standing),
            series: standing.series_id,
            season: standing.season,
        })
        .collect();

    Ok(Json(ResourceList::new(KEY, standings)))
}

#[get("/<version>/<series>/<season>/ownerstandings")]
pub fn get_owner_standings(
    version: ApiVersion,
    series: &str,
    season: &str,
    store: &State<Store>,
) -> ApiResult<ApiOwnerStanding> {
    const KEY: &str = "ownerstandings";

    if !version.is_supported() {
        return Ok(Json(ResourceList::empty(KEY)));
    }
    let Some(key) = SeasonKey::resolve(series, season) else {
        return Ok(Json(ResourceList::empty(KEY)));
    };

    let mut pooled = db_handle_get_error_http!(store.connection(), "routes/api/standings:get_owner_standings", "connection");
    let connection: &mut PgConnection = &mut pooled;

    let rows = db_handle_get_error_http!(
        OwnerStanding::in_season(connection, &key),
        "routes/api/standings:get_owner_standings",
        KEY
    );
    let owners = db_handle_get_error_http!(
        Owners::load(connection, std::iter::empty::<&Team>(), rows.iter().map(|(_, vehicle)| vehicle)),
        "routes/api/standings:get_owner_standings",
        "vehicle owners"
    );

    let standings = rows
        .into_iter()
        .map(|(standing, vehicle)| ApiOwnerStanding {
            id: standing.id,
            vehicle: ApiVehicle::new(&vehicle, &owners),
            counters: counters_of!(standing),
            series: standing.series_id,
            season: standing.season,
        })
        .collect();

    Ok(Json(ResourceList::new(KEY, standings)))
}

#[get("/<version>/racestandings/<race_id>")]
pub fn get_race_standings(version: ApiVersion, race_id: &str, store: &State<Store>) -> ApiResult<ApiRaceStanding> {
    const KEY: &str = "racestandings";

    if !version.is_supported() {
        return Ok(Json(ResourceList::empty(KEY)));
    }

    let mut pooled = db_handle_get_error_http!(store.connection(), "routes/api/standings:get_race_standings", "connection");
    let connection: &mut PgConnection = &mut pooled;

    let standings = db_handle_get_error_http!(
        RaceStanding::for_race(connection, race_id),
        "routes/api/standings:get_race_standings",
        format!("standings of race {}", race_id)
    );

    Ok(Json(ResourceList::new(KEY, standings.into_iter().map(ApiRaceStanding::from).collect())))
}
