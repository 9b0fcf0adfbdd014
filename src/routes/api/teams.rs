use diesel::pg::PgConnection;
use log::error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, State};

use crate::macros::database_error_handeler::db_handle_get_error_http;
use crate::modules::helpers::filters::Scope;
use crate::modules::models::team::Team;
use crate::modules::models::vehicle::Vehicle;
use crate::modules::projections::{ApiResult, ApiTeam, Owners, ResourceList};
use crate::modules::store::Store;
use crate::routes::api::version::ApiVersion;

const KEY: &str = "teams";

#[get("/<version>/teams")]
pub fn get_all(version: ApiVersion, store: &State<Store>) -> ApiResult<ApiTeam> {
    list(version, store, Scope::resolve(None, None))
}

#[get("/<version>/<series>/teams", rank = 2)]
pub fn get_by_series(version: ApiVersion, series: &str, store: &State<Store>) -> ApiResult<ApiTeam> {
    list(version, store, Scope::resolve(Some(series), None))
}

#[get("/<version>/<series>/<season>/teams")]
pub fn get_by_season(version: ApiVersion, series: &str, season: &str, store: &State<Store>) -> ApiResult<ApiTeam> {
    list(version, store, Scope::resolve(Some(series), Some(season)))
}

fn list(version: ApiVersion, store: &Store, scope: Option<Scope>) -> ApiResult<ApiTeam> {
    if !version.is_supported() {
        return Ok(Json(ResourceList::empty(KEY)));
    }

    let Some(scope) = scope else {
        return Ok(Json(ResourceList::empty(KEY)));
    };

    let mut pooled = db_handle_get_error_http!(store.connection(), "routes/api/teams:list", "connection");
    let connection: &mut PgConnection = &mut pooled;

    let teams = db_handle_get_error_http!(Team::in_scope(connection, &scope), "routes/api/teams:list", "teams");
    let owners = db_handle_get_error_http!(
        Owners::load(connection, &teams, std::iter::empty::<&Vehicle>()),
        "routes/api/teams:list",
        "team owners"
    );

    let teams = teams.iter().map(|team| ApiTeam::new(team, &owners)).collect();
    Ok(Json(ResourceList::new(KEY, teams)))
}
