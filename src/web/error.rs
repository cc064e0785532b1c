use crate::member::error::MemberError;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::{Request, response};
use thiserror::Error;

pub const DATABASE_ERROR_MESSAGE: &str = "\
The member store can't be used at the moment.
The problem might be caused by one of the following things:

1.  The database file pointed at by the --database-url argument
    can't be opened, or its schema is not up to date.
    Restarting the server applies pending migrations.

2.  The database is locked by another process.

After you fix the problem, please try again.
";

/// Failures reaching the transport layer.
/// Every other outcome is encoded in the JSON payload with a 200 status.
#[derive(Debug, Error, PartialEq)]
pub enum WebError {
    #[error("{}", DATABASE_ERROR_MESSAGE)]
    StorageUnavailable,
}

impl From<MemberError> for WebError {
    fn from(value: MemberError) -> Self {
        match value {
            MemberError::StorageUnavailable => WebError::StorageUnavailable,
        }
    }
}

/// Plain-text body with a 500 status.
impl<'r> Responder<'r, 'static> for WebError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (Status::InternalServerError, self.to_string()).respond_to(request)
    }
}
