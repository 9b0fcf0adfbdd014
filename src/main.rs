use log::info;
use snafu::ResultExt;

use motorsport_data_api::build_rocket;
use motorsport_data_api::errors::{CustomResult, LaunchSnafu};
use motorsport_data_api::modules::helpers::config::Config;
use motorsport_data_api::modules::helpers::logging::setup_logging;
use motorsport_data_api::modules::store::Store;

#[rocket::main]
async fn main() -> CustomResult<()> {
    let config = Config::from_env()?;
    setup_logging(&config)?;

    let store = Store::open(&config)?;

    info!(target:"main", "starting webserver");

    // start the webserver
    build_rocket(store).launch().await.context(LaunchSnafu)?;

    Ok(())
}
