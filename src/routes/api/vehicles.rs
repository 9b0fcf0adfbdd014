use diesel::pg::PgConnection;
use log::error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{get, State};

use crate::macros::database_error_handeler::db_handle_get_error_http;
use crate::modules::helpers::filters::Scope;
use crate::modules::models::team::Team;
use crate::modules::models::vehicle::Vehicle;
use crate::modules::projections::{ApiResult, ApiVehicle, Owners, ResourceList};
use crate::modules::store::Store;
use crate::routes::api::version::ApiVersion;

const KEY: &str = "vehicles";

#[get("/<version>/vehicles")]
pub fn get_all(version: ApiVersion, store: &State<Store>) -> ApiResult<ApiVehicle> {
    list(version, store, Scope::resolve(None, None))
}

#[get("/<version>/<series>/vehicles", rank = 2)]
pub fn get_by_series(version: ApiVersion, series: &str, store: &State<Store>) -> ApiResult<ApiVehicle> {
    list(version, store, Scope::resolve(Some(series), None))
}

#[get("/<version>/<series>/<season>/vehicles")]
pub fn get_by_season(version: ApiVersion, series: &str, season: &str, store: &State<Store>) -> ApiResult<ApiVehicle> {
    list(version, store, Scope::resolve(Some(series), Some(season)))
}

fn list(version: ApiVersion, store: &Store, scope: Option<Scope>) -> ApiResult<ApiVehicle> {
    if !version.is_supported() {
        return Ok(Json(ResourceList::empty(KEY)));
    }

    let Some(scope) = scope else {
        return Ok(Json(ResourceList::empty(KEY)));
    };

    let mut pooled = db_handle_get_error_http!(store.connection(), "routes/api/vehicles:list", "connection");
    let connection: &mut PgConnection = &mut pooled;

    let vehicles = db_handle_get_error_http!(
        Vehicle::in_scope(connection, &scope),
        "routes/api/vehicles:list",
        "vehicles"
    );
    let owners = db_handle_get_error_http!(
        Owners::load(connection, std::iter::empty::<&Team>(), &vehicles),
        "routes/api/vehicles:list",
        "vehicle owners"
    );

    let vehicles = vehicles.iter().map(|vehicle| ApiVehicle::new(vehicle, &owners)).collect();
    Ok(Json(ResourceList::new(KEY, vehicles)))
}
