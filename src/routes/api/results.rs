//! Results and entries of a single round.
//!
//! Each record carries the race, team and vehicle it belongs to plus one key per
//! role that was filled for it (`driver`, `crew-chief`, ...).

use bigdecimal::BigDecimal;
use diesel::pg::PgConnection;
use diesel::QueryResult;
use log::error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, State};
use serde::Serialize;

use crate::macros::database_error_handeler::db_handle_get_error_http;
use crate::modules::helpers::filters::{EntryKey, RoundKey, Session};
use crate::modules::helpers::math::Fixed;
use crate::modules::helpers::roles::RoleAssignments;
use crate::modules::models::person::LinkedPeople;
use crate::modules::models::practice_result::{PracticeResult, PracticeResultPerson};
use crate::modules::models::qualifying_result::{QualifyingResult, QualifyingResultPerson};
use crate::modules::models::race::Race;
use crate::modules::models::race_entry::{RaceEntry, RaceEntryPerson, RaceEntryRow};
use crate::modules::models::race_result::{RaceResult, RaceResultPerson, RaceResultRow};
use crate::modules::models::team::Team;
use crate::modules::models::vehicle::Vehicle;
use crate::modules::projections::{ApiRaceRef, ApiResult, ApiTeam, ApiVehicle, Owners, ResourceList};
use crate::modules::store::Store;
use crate::routes::api::version::ApiVersion;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiRaceResult {
    pub race: ApiRaceRef,
    pub team: ApiTeam,
    pub vehicle: ApiVehicle,
    pub sponsor: String,
    pub grid: i32,
    pub position: i32,
    pub laps: i32,
    pub status: String,
    pub laps_led: i32,
    pub points: i32,
    pub money: Fixed<2>,
    #[serde(flatten)]
    pub people: RoleAssignments,
}

impl ApiRaceResult {
    pub fn new(row: RaceResultRow, people: RoleAssignments, owners: &Owners) -> ApiRaceResult {
        let (result, race, team, vehicle) = row;

        ApiRaceResult {
            race: ApiRaceRef::from(&race),
            team: ApiTeam::new(&team, owners),
            vehicle: ApiVehicle::new(&vehicle, owners),
            sponsor: result.sponsor,
            grid: result.grid,
            position: result.position,
            laps: result.laps,
            status: result.status,
            laps_led: result.laps_led,
            points: result.points,
            money: Fixed::from(result.money),
            people,
        }
    }

    pub fn bulk_new(rows: Vec<RaceResultRow>, people: Vec<RoleAssignments>, owners: &Owners) -> Vec<ApiRaceResult> {
        rows.into_iter()
            .zip(people)
            .map(|(row, people)| ApiRaceResult::new(row, people, owners))
            .collect()
    }
}

/// # Qualifying or practice result
/// both sessions share the same shape.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiSessionResult {
    pub race: ApiRaceRef,
    pub team: ApiTeam,
    pub vehicle: ApiVehicle,
    pub session: i32,
    pub position: i32,
    pub lap_time: Fixed<3>,
    #[serde(flatten)]
    pub people: RoleAssignments,
}

/// columns every timed session result carries
pub trait SessionTiming {
    fn session(&self) -> i32;
    fn position(&self) -> i32;
    fn lap_time(&self) -> &BigDecimal;
}

impl SessionTiming for QualifyingResult {
    fn session(&self) -> i32 {
        self.session
    }

    fn position(&self) -> i32 {
        self.position
    }

    fn lap_time(&self) -> &BigDecimal {
        &self.lap_time
    }
}

impl SessionTiming for PracticeResult {
    fn session(&self) -> i32 {
        self.session
    }

    fn position(&self) -> i32 {
        self.position
    }

    fn lap_time(&self) -> &BigDecimal {
        &self.lap_time
    }
}

/// a session result row joined to its race, team and vehicle
pub type SessionRow<S> = (S, Race, Team, Vehicle);

impl ApiSessionResult {
    pub fn new<S: SessionTiming>(row: SessionRow<S>, people: RoleAssignments, owners: &Owners) -> ApiSessionResult {
        let (result, race, team, vehicle) = row;

        ApiSessionResult {
            race: ApiRaceRef::from(&race),
            team: ApiTeam::new(&team, owners),
            vehicle: ApiVehicle::new(&vehicle, owners),
            session: result.session(),
            position: result.position(),
            lap_time: Fixed::from(result.lap_time().clone()),
            people,
        }
    }

    pub fn bulk_new<S: SessionTiming>(
        rows: Vec<SessionRow<S>>,
        people: Vec<RoleAssignments>,
        owners: &Owners,
    ) -> Vec<ApiSessionResult> {
        rows.into_iter()
            .zip(people)
            .map(|(row, people)| ApiSessionResult::new(row, people, owners))
            .collect()
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ApiRaceEntry {
    pub race: ApiRaceRef,
    pub team: ApiTeam,
    pub vehicle: ApiVehicle,
    pub entry_type: String,
    #[serde(flatten)]
    pub people: RoleAssignments,
}

impl ApiRaceEntry {
    pub fn new(row: RaceEntryRow, people: RoleAssignments, owners: &Owners) -> ApiRaceEntry {
        let (_, race, team, vehicle, entry_type) = row;

        ApiRaceEntry {
            race: ApiRaceRef::from(&race),
            team: ApiTeam::new(&team, owners),
            vehicle: ApiVehicle::new(&vehicle, owners),
            entry_type: entry_type.entry_type,
            people,
        }
    }
}

#[get("/<version>/<series>/<season>/raceresults/<round>")]
pub fn get_race_results(
    version: ApiVersion,
    series: &str,
    season: &str,
    round: &str,
    store: &State<Store>,
) -> ApiResult<ApiRaceResult> {
    const KEY: &str = "raceresults";

    if !version.is_supported() {
        return Ok(Json(ResourceList::empty(KEY)));
    }
    let Some(key) = RoundKey::resolve(series, season, round) else {
        return Ok(Json(ResourceList::empty(KEY)));
    };

    let mut pooled = db_handle_get_error_http!(store.connection(), "routes/api/results:get_race_results", "connection");
    let connection: &mut PgConnection = &mut pooled;

    let rows = db_handle_get_error_http!(
        RaceResult::for_round(connection, &key),
        "routes/api/results:get_race_results",
        KEY
    );
    let results: Vec<RaceResult> = rows.iter().map(|(result, ..)| result.clone()).collect();

    let people = db_handle_get_error_http!(
        RaceResultPerson::for_results(connection, &results),
        "routes/api/results:get_race_results",
        "people of race results"
    );
    let owners = db_handle_get_error_http!(
        Owners::load(
            connection,
            rows.iter().map(|(_, _, team, _)| team),
            rows.iter().map(|(_, _, _, vehicle)| vehicle)
        ),
        "routes/api/results:get_race_results",
        "team and vehicle owners"
    );

    let results = ApiRaceResult::bulk_new(rows, RoleAssignments::for_groups(people), &owners);
    Ok(Json(ResourceList::new(KEY, results)))
}

#[get("/<version>/<series>/<season>/qualifyingresults/<round>")]
pub fn get_qualifying_results(
    version: ApiVersion,
    series: &str,
    season: &str,
    round: &str,
    store: &State<Store>,
) -> ApiResult<ApiSessionResult> {
    let key = RoundKey::resolve(series, season, round);
    session_results(version, store, "qualifyingresults", key, Session::resolve(None), qualifying_rows)
}

#[get("/<version>/<series>/<season>/qualifyingresults/<round>/<session>")]
pub fn get_qualifying_session(
    version: ApiVersion,
    series: &str,
    season: &str,
    round: &str,
    session: &str,
    store: &State<Store>,
) -> ApiResult<ApiSessionResult> {
    let key = RoundKey::resolve(series, season, round);
    session_results(version, store, "qualifyingresults", key, Session::resolve(Some(session)), qualifying_rows)
}

#[get("/<version>/<series>/<season>/practiceresults/<round>")]
pub fn get_practice_results(
    version: ApiVersion,
    series: &str,
    season: &str,
    round: &str,
    store: &State<Store>,
) -> ApiResult<ApiSessionResult> {
    let key = RoundKey::resolve(series, season, round);
    session_results(version, store, "practiceresults", key, Session::resolve(None), practice_rows)
}

#[get("/<version>/<series>/<season>/practiceresults/<round>/<session>")]
pub fn get_practice_session(
    version: ApiVersion,
    series: &str,
    season: &str,
    round: &str,
    session: &str,
    store: &State<Store>,
) -> ApiResult<ApiSessionResult> {
    let key = RoundKey::resolve(series, season, round);
    session_results(version, store, "practiceresults", key, Session::resolve(Some(session)), practice_rows)
}

type LoadedSession<S> = (Vec<SessionRow<S>>, Vec<LinkedPeople>);

fn qualifying_rows(
    conn: &mut PgConnection,
    key: &RoundKey,
    session: Session,
) -> QueryResult<LoadedSession<QualifyingResult>> {
    let rows = QualifyingResult::for_round(conn, key, session)?;
    let results: Vec<QualifyingResult> = rows.iter().map(|(result, ..)| result.clone()).collect();
    let people = QualifyingResultPerson::for_results(conn, &results)?;

    Ok((rows, people))
}

fn practice_rows(
    conn: &mut PgConnection,
    key: &RoundKey,
    session: Session,
) -> QueryResult<LoadedSession<PracticeResult>> {
    let rows = PracticeResult::for_round(conn, key, session)?;
    let results: Vec<PracticeResult> = rows.iter().map(|(result, ..)| result.clone()).collect();
    let people = PracticeResultPerson::for_results(conn, &results)?;

    Ok((rows, people))
}

/// # answer a qualifying or practice route
/// an unsupported version or an unresolved round or session answers with an empty list
/// before a connection is checked out.
///
/// ## Arguments
/// * `version` - the requested api version
/// * `store` - the store to load from
/// * `list_key` - the key of the response body
/// * `key` - the resolved round, if any
/// * `session` - the resolved session, if any
/// * `load` - loads the rows of the round with the people of every row
///
/// ## Returns
/// * `ApiResult<ApiSessionResult>` - the results, or a 500 when storage fails
fn session_results<S, L>(
    version: ApiVersion,
    store: &Store,
    list_key: &'static str,
    key: Option<RoundKey>,
    session: Option<Session>,
    load: L,
) -> ApiResult<ApiSessionResult>
where
    S: SessionTiming,
    L: FnOnce(&mut PgConnection, &RoundKey, Session) -> QueryResult<LoadedSession<S>>,
{
    if !version.is_supported() {
        return Ok(Json(ResourceList::empty(list_key)));
    }
    let (Some(key), Some(session)) = (key, session) else {
        return Ok(Json(ResourceList::empty(list_key)));
    };

    let mut pooled = db_handle_get_error_http!(store.connection(), "routes/api/results:session_results", "connection");
    let connection: &mut PgConnection = &mut pooled;

    let (rows, people) = db_handle_get_error_http!(
        load(connection, &key, session),
        "routes/api/results:session_results",
        list_key
    );
    let owners = db_handle_get_error_http!(
        Owners::load(
            connection,
            rows.iter().map(|(_, _, team, _)| team),
            rows.iter().map(|(_, _, _, vehicle)| vehicle)
        ),
        "routes/api/results:session_results",
        "team and vehicle owners"
    );

    let results = ApiSessionResult::bulk_new(rows, RoleAssignments::for_groups(people), &owners);
    Ok(Json(ResourceList::new(list_key, results)))
}

#[get("/<version>/<series>/<season>/raceentry/<entry_type>/<round>")]
pub fn get_race_entries(
    version: ApiVersion,
    series: &str,
    season: &str,
    entry_type: &str,
    round: &str,
    store: &State<Store>,
) -> ApiResult<ApiRaceEntry> {
    const KEY: &str = "raceentry";

    if !version.is_supported() {
        return Ok(Json(ResourceList::empty(KEY)));
    }
    let Some(key) = EntryKey::resolve(series, season, entry_type, round) else {
        return Ok(Json(ResourceList::empty(KEY)));
    };

    let mut pooled = db_handle_get_error_http!(store.connection(), "routes/api/results:get_race_entries", "connection");
    let connection: &mut PgConnection = &mut pooled;

    let rows = db_handle_get_error_http!(
        RaceEntry::for_key(connection, &key),
        "routes/api/results:get_race_entries",
        KEY
    );
    let entries: Vec<RaceEntry> = rows.iter().map(|(entry, ..)| entry.clone()).collect();

    let people = db_handle_get_error_http!(
        RaceEntryPerson::for_entries(connection, &entries),
        "routes/api/results:get_race_entries",
        "people of race entries"
    );
    let owners = db_handle_get_error_http!(
        Owners::load(
            connection,
            rows.iter().map(|(_, _, team, _, _)| team),
            rows.iter().map(|(_, _, _, vehicle, _)| vehicle)
        ),
        "routes/api/results:get_race_entries",
        "team and vehicle owners"
    );

    let entries = rows
        .into_iter()
        .zip(RoleAssignments::for_groups(people))
        .map(|(row, people)| ApiRaceEntry::new(row, people, &owners))
        .collect();

    Ok(Json(ResourceList::new(KEY, entries)))
}
