use super::{Result, connection};
use crate::database::DbPool;
use crate::database::dao;
use crate::database::error::DatabaseError;
use crate::member::error::MemberError::StorageUnavailable;
use crate::member::validation::validate;
use crate::tools::log_message_and_return;
use dto::member_fields::MemberFields;
use dto::registration::Registration;
use log::{debug, info};

/// Register a member, or update the one already known under the same `nis`.
///
/// Invalid fields are reported in the returned [Registration] and nothing is written.
/// The look-up and the write happen within a single immediate transaction,
/// so that concurrent registrations wait for each other instead of failing.
pub fn register_or_report(pool: &DbPool, fields: &MemberFields) -> Result<Registration> {
    let member = match validate(fields) {
        Ok(member) => member,
        Err(error) => {
            debug!("Rejected registration [fields: {fields:?}, error: {error}]");
            return Ok(Registration::invalid(fields, error.to_string()));
        }
    };

    let mut connection = connection(pool)?;
    connection
        .immediate_transaction::<_, DatabaseError, _>(|connection| {
            if dao::member::find_by_nis(connection, member.nis())?.is_some() {
                dao::member::update(connection, &member)?;
                info!("Member updated [nis: {}]", member.nis());
                Ok(Registration::updated(&member))
            } else {
                dao::member::insert(connection, &member)?;
                info!("Member inserted [nis: {}]", member.nis());
                Ok(Registration::inserted(&member))
            }
        })
        .map_err(log_message_and_return(
            "Can't register member",
            StorageUnavailable,
        ))
}
