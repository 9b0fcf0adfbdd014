use diesel::pg::PgConnection;
use diesel::r2d2::{ConnectionManager, Pool, PooledConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;
use snafu::ResultExt;

use crate::errors::{CustomResult, MigrationSnafu, PoolSnafu};
use crate::modules::helpers::config::Config;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub type PgPool = Pool<ConnectionManager<PgConnection>>;
pub type PgPooled = PooledConnection<ConnectionManager<PgConnection>>;

/// # Handle to the database
/// opened once when the server starts and handed to every request through rocket's managed state.
/// the pool is dropped, and its connections closed, when rocket shuts down.
#[derive(Clone)]
pub struct Store {
    pool: PgPool,
}

impl Store {
    /// # open the store
    /// builds the pool and checks that the database can be reached.
    ///
    /// ## Arguments
    /// * `config` - the loaded config
    ///
    /// ## Returns
    /// * `Store` - the opened store
    pub fn open(config: &Config) -> CustomResult<Store> {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.pool_size)
            .connection_timeout(config.connection_timeout)
            .test_on_check_out(true)
            .build(manager)
            .context(PoolSnafu)?;

        info!(target:"modules/store:open", "opened database pool (max_size: {})", config.pool_size);

        Ok(Store { pool })
    }

    /// # open the store without connecting
    /// connections are only made when a request checks one out.
    ///
    /// ## Arguments
    /// * `config` - the loaded config
    ///
    /// ## Returns
    /// * `Store` - the unconnected store
    pub fn open_lazy(config: &Config) -> Store {
        let manager = ConnectionManager::<PgConnection>::new(&config.database_url);

        let pool = Pool::builder()
            .max_size(config.pool_size)
            .min_idle(Some(0))
            .connection_timeout(config.connection_timeout)
            .build_unchecked(manager);

        Store { pool }
    }

    /// # wrap an already built pool
    /// for pools that need more than `Config` describes, e.g. a connection customizer.
    ///
    /// ## Arguments
    /// * `pool` - the pool to hand out connections from
    ///
    /// ## Returns
    /// * `Store` - the store over the pool
    pub fn from_pool(pool: PgPool) -> Store {
        Store { pool }
    }

    /// # check out a connection
    ///
    /// ## Returns
    /// * `PgPooled` - a pooled connection, returned to the pool on drop
    pub fn connection(&self) -> CustomResult<PgPooled> {
        self.pool.get().context(PoolSnafu)
    }

    /// # apply pending migrations
    ///
    /// ## Returns
    /// * `usize` - the number of migrations that were applied
    pub fn run_migrations(&self) -> CustomResult<usize> {
        let mut pooled = self.connection()?;
        let conn: &mut PgConnection = &mut pooled;

        let applied = conn.run_pending_migrations(MIGRATIONS).context(MigrationSnafu)?;

        Ok(applied.len())
    }
}
