use chrono::NaiveDateTime;
use diesel::pg::PgConnection;
use log::error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, State};
use serde::Serialize;

use crate::macros::database_error_handeler::db_handle_get_error_http;
use crate::modules::helpers::filters::SeasonKey;
use crate::modules::helpers::math::Fixed;
use crate::modules::models::race::{Race, RaceTrack};
use crate::modules::projections::{ApiResult, ResourceList};
use crate::modules::store::Store;
use crate::routes::api::version::ApiVersion;

const KEY: &str = "races";

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiRaceTrack {
    pub id: String,
    pub site: String,
    pub circuit_name: String,
    pub city: String,
    pub state: Option<String>,
    pub country: String,
}

impl From<RaceTrack> for ApiRaceTrack {
    fn from(track: RaceTrack) -> Self {
        ApiRaceTrack {
            id: track.id,
            site: track.site,
            circuit_name: track.circuit_name,
            city: track.city,
            state: track.state,
            country: track.country,
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiRace {
    pub id: String,
    pub round: i32,
    pub name: String,
    pub season: i32,
    pub race_track: ApiRaceTrack,
    pub date: NaiveDateTime,
    pub laps: i32,
    pub length: Fixed<3>,
    pub distance: Fixed<1>,
    pub series: String,
}

impl ApiRace {
    pub fn new(race: Race, track: RaceTrack) -> ApiRace {
        ApiRace {
            id: race.id,
            round: race.round,
            name: race.name,
            season: race.season,
            race_track: ApiRaceTrack::from(track),
            date: race.date,
            laps: race.laps,
            length: Fixed::from(race.length),
            distance: Fixed::from(race.distance),
            series: race.series_id,
        }
    }
}

/// # get the races of a season
/// ordered by date.
#[get("/<version>/<series>/<season>/races")]
pub fn get_by_season(version: ApiVersion, series: &str, season: &str, store: &State<Store>) -> ApiResult<ApiRace> {
    if !version.is_supported() {
        return Ok(Json(ResourceList::empty(KEY)));
    }

    let Some(key) = SeasonKey::resolve(series, season) else {
        return Ok(Json(ResourceList::empty(KEY)));
    };

    let mut pooled = db_handle_get_error_http!(store.connection(), "routes/api/races:get_by_season", "connection");
    let connection: &mut PgConnection = &mut pooled;

    let races = db_handle_get_error_http!(
        Race::in_season(connection, &key),
        "routes/api/races:get_by_season",
        format!("races of {} {}", key.series, key.season)
    );

    let races = races.into_iter().map(|(race, track)| ApiRace::new(race, track)).collect();
    Ok(Json(ResourceList::new(KEY, races)))
}
