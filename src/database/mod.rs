use crate::database::error::DatabaseError;
use crate::database::error::DatabaseError::{ConnectionFailed, MissingDatabaseUrl};
use crate::database::migrations::run_migrations;
use crate::error::Result;
use crate::tools::env_args::retrieve_expected_arg_value;
use crate::tools::log_error_and_return;
use diesel::SqliteConnection;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool};

pub(crate) mod dao;
pub(crate) mod error;
mod migrations;
mod model;
mod schema;

const DATABASE_URL_ARG: &str = "--database-url";
/// How long a connection waits for another one's write lock before giving up.
const BUSY_TIMEOUT_MS: u32 = 5000;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

/// Open the pool pointed at by `--database-url` and bring the schema up to date.
pub fn init_db() -> Result<DbPool> {
    let database_url = retrieve_expected_arg_value(DATABASE_URL_ARG, MissingDatabaseUrl)?;
    let pool = create_pool(&database_url)?;
    let mut connection = pool.get().map_err(log_error_and_return(ConnectionFailed))?;
    run_migrations(&mut connection)?;

    Ok(pool)
}

fn create_pool(database_url: &str) -> Result<DbPool, DatabaseError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_customizer(Box::new(BusyTimeout))
        .build(manager)
        .map_err(log_error_and_return(ConnectionFailed))
}

/// Let concurrent writers queue on the database lock rather than fail at once.
#[derive(Debug)]
struct BusyTimeout;

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for BusyTimeout {
    fn on_acquire(
        &self,
        connection: &mut SqliteConnection,
    ) -> std::result::Result<(), diesel::r2d2::Error> {
        connection
            .batch_execute(&format!("PRAGMA busy_timeout = {BUSY_TIMEOUT_MS};"))
            .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Run `function` against a freshly migrated database living in a temporary folder.
#[cfg(test)]
pub fn with_temp_database<F, T>(function: F) -> T
where
    F: FnOnce(DbPool) -> T,
{
    with_temp_pool(true, function)
}

/// Same as [with_temp_database], but the schema is never created:
/// any query fails as the store would when it is unreachable.
#[cfg(test)]
pub fn with_broken_database<F, T>(function: F) -> T
where
    F: FnOnce(DbPool) -> T,
{
    with_temp_pool(false, function)
}

#[cfg(test)]
fn with_temp_pool<F, T>(migrate: bool, function: F) -> T
where
    F: FnOnce(DbPool) -> T,
{
    use crate::tools::test::tests::temp_dir;

    let temp_dir = temp_dir();
    let database_url = temp_dir.join("database.db").to_str().unwrap().to_string();
    let pool = create_pool(&database_url).unwrap();
    if migrate {
        run_migrations(&mut pool.get().unwrap()).unwrap();
    }

    let result = function(pool);
    let _ = std::fs::remove_dir_all(temp_dir);
    result
}
