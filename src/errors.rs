use snafu::prelude::*;

pub type CustomResult<T> = Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum Error {
    #[snafu(display("Environment variable {name} is not set"))]
    MissingVariableError { name: String },

    #[snafu(display("Environment variable {name} has an invalid value: {value}"))]
    InvalidVariableError { name: String, value: String },

    #[snafu(display("Failed to setup logging: {source}"))]
    LoggingError { source: fern::InitError },

    #[snafu(display("Failed to open the database pool: {source}"))]
    PoolError { source: diesel::r2d2::PoolError },

    #[snafu(display("Failed to run migrations: {source}"))]
    MigrationError { source: Box<dyn std::error::Error + Send + Sync> },

    #[snafu(display("Failed to launch the webserver: {source}"))]
    LaunchError {
        #[snafu(source(from(rocket::Error, Box::new)))]
        source: Box<rocket::Error>,
    },
}
