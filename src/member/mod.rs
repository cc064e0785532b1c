use crate::database::DbPool;
use crate::member::error::MemberError;
use crate::member::error::MemberError::StorageUnavailable;
use crate::tools::log_message_and_return;
use diesel::SqliteConnection;
use diesel::r2d2::{ConnectionManager, PooledConnection};

pub mod config;
pub mod error;
pub mod fiscal_code;
pub mod look_up;
pub mod registration;
pub mod validation;

type Result<T, E = MemberError> = std::result::Result<T, E>;

pub const MEMBER_NOT_FOUND_MESSAGE: &str = "Codice Utente non presente in archivio";
pub const INVALID_ACCESS_CODE_MESSAGE: &str = "CAN non valido";

/// A connection borrowed from the pool for the duration of one operation.
fn connection(pool: &DbPool) -> Result<PooledConnection<ConnectionManager<SqliteConnection>>> {
    pool.get().map_err(log_message_and_return(
        "Can't get a connection to the member store",
        StorageUnavailable,
    ))
}
