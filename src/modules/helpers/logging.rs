use fern::Dispatch;
use snafu::ResultExt;

use crate::errors::{CustomResult, LoggingSnafu};
use crate::modules::helpers::config::Config;

pub fn setup_logging(config: &Config) -> CustomResult<()> {
    let log_file = fern::log_file(&config.log_file)
        .map_err(fern::InitError::Io)
        .context(LoggingSnafu)?;

    Dispatch::new()
        .level(config.logging_level)
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} [{}][{}] {}",
                chrono::Local::now().format("[%Y-%m-%d][%H:%M:%S]"),
                record.target(),
                record.level(),
                message
            ))
        })
        .chain(std::io::stdout())
        .chain(log_file)
        .apply()
        .map_err(fern::InitError::SetLoggerError)
        .context(LoggingSnafu)?;

    Ok(())
}
