use rocket::{routes, Build, Rocket};

use crate::modules::store::Store;
use crate::routes::api;

pub mod errors;
pub mod schema;
pub mod modules;

pub mod macros {
    pub mod database_error_handeler;
}

pub mod routes {
    pub mod api {
        pub mod version;

        pub mod people;
        pub mod teams;
        pub mod vehicles;
        pub mod races;
        pub mod standings;
        pub mod results;
    }
}

/// # build the webserver
/// every route is mounted under `/api`, the store is handed to the routes as managed state.
///
/// ## Arguments
/// * `store` - the opened store
///
/// ## Returns
/// * `Rocket<Build>` - the webserver, ready to launch
pub fn build_rocket(store: Store) -> Rocket<Build> {
    rocket::build()
        .manage(store)
        .mount("/api", api::people::routes())
        .mount(
            "/api",
            routes![
                // teams
                api::teams::get_all,
                api::teams::get_by_series,
                api::teams::get_by_season,
                // vehicles
                api::vehicles::get_all,
                api::vehicles::get_by_series,
                api::vehicles::get_by_season,
                // races
                api::races::get_by_season,
                // standings
                api::standings::get_driver_standings,
                api::standings::get_team_standings,
                api::standings::get_owner_standings,
                api::standings::get_race_standings,
                // results
                api::results::get_race_entries,
                api::results::get_race_results,
                api::results::get_qualifying_results,
                api::results::get_qualifying_session,
                api::results::get_practice_results,
                api::results::get_practice_session,
            ],
        )
}
