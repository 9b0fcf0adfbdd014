use std::collections::HashMap;
use std::env;
use std::time::Duration;

use dotenvy::dotenv;
use log::LevelFilter;

use crate::errors::{CustomResult, InvalidVariableSnafu, MissingVariableSnafu};

const DEFAULT_POOL_SIZE: u32 = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LOG_FILE: &str = "program.log";

/// # Runtime configuration
/// everything the server needs before it can open the database and start logging.
/// the http address and port are configured through rocket's own `ROCKET_*` variables.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub pool_size: u32,
    pub connection_timeout: Duration,
    pub logging_level: LevelFilter,
    pub log_file: String,
}

impl Config {
    /// # load the config from the environment
    /// reads the `.env` file first when there is one.
    ///
    /// ## Returns
    /// * `Config` - the loaded config
    pub fn from_env() -> CustomResult<Config> {
        dotenv().ok();

        Config::from_vars(&env::vars().collect())
    }

    /// # load the config from a set of variables
    ///
    /// ## Arguments
    /// * `vars` - the variables to read from
    ///
    /// ## Returns
    /// * `Config` - the loaded config
    pub fn from_vars(vars: &HashMap<String, String>) -> CustomResult<Config> {
        let database_url = match vars.get("DATABASE_URL") {
            Some(url) if !url.is_empty() => url.clone(),
            _ => return MissingVariableSnafu { name: "DATABASE_URL" }.fail(),
        };

        let pool_size = match vars.get("DATABASE_POOL_SIZE") {
            None => DEFAULT_POOL_SIZE,
            Some(value) => match value.parse::<u32>() {
                Ok(size) if size > 0 => size,
                _ => {
                    return InvalidVariableSnafu { name: "DATABASE_POOL_SIZE", value: value.clone() }.fail();
                }
            },
        };

        let timeout_secs = match vars.get("DATABASE_TIMEOUT_SECS") {
            None => DEFAULT_TIMEOUT_SECS,
            Some(value) => match value.parse::<u64>() {
                Ok(secs) => secs,
                Err(_) => {
                    return InvalidVariableSnafu { name: "DATABASE_TIMEOUT_SECS", value: value.clone() }.fail();
                }
            },
        };

        let logging_level = parse_level(vars.get("LOGGING_LEVEL").map(String::as_str).unwrap_or("INFO"));

        let log_file = vars
            .get("LOG_FILE")
            .cloned()
            .unwrap_or_else(|| DEFAULT_LOG_FILE.to_string());

        Ok(Config {
            database_url,
            pool_size,
            connection_timeout: Duration::from_secs(timeout_secs),
            logging_level,
            log_file,
        })
    }
}

/// unknown levels fall back to info
fn parse_level(verbosity: &str) -> LevelFilter {
    match verbosity {
        "OFF" => LevelFilter::Off,
        "ERROR" => LevelFilter::Error,
        "WARN" => LevelFilter::Warn,
        "DEBUG" => LevelFilter::Debug,
        "TRACE" => LevelFilter::Trace,
        _ => LevelFilter::Info,
    }
}
