use log::info;

use motorsport_data_api::errors::CustomResult;
use motorsport_data_api::modules::helpers::config::Config;
use motorsport_data_api::modules::helpers::logging::setup_logging;
use motorsport_data_api::modules::store::Store;

fn main() -> CustomResult<()> {
    let config = Config::from_env()?;
    setup_logging(&config)?;

    let store = Store::open(&config)?;
    let applied = store.run_migrations()?;

    info!(target:"migrate", "applied {} migration(s)", applied);

    Ok(())
}
