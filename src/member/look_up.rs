use super::{INVALID_ACCESS_CODE_MESSAGE, MEMBER_NOT_FOUND_MESSAGE, Result, connection};
use crate::database::DbPool;
use crate::database::dao;
use crate::member::config::CardConfig;
use crate::member::error::MemberError::StorageUnavailable;
use crate::tools::log_message_and_return;
use dto::card_preview::CardPreview;
use dto::member::Member;
use dto::verification::Verification;
use log::debug;

/// First member registered under `nis`, if any.
/// `nis` is trimmed, as it is when registering.
pub fn lookup_by_identifier(pool: &DbPool, nis: &str) -> Result<Option<Member>> {
    let mut connection = connection(pool)?;
    dao::member::find_by_nis(&mut connection, nis.trim()).map_err(log_message_and_return(
        "Can't look member up",
        StorageUnavailable,
    ))
}

pub fn verify_identity(pool: &DbPool, nis: &str) -> Result<Verification> {
    let verification = match lookup_by_identifier(pool, nis)? {
        Some(member) => Verification::from(member),
        None => {
            debug!("Can't verify unknown member [nis: {nis}]");
            Verification::not_found(MEMBER_NOT_FOUND_MESSAGE)
        }
    };

    Ok(verification)
}

/// Data shown once a card has been read.
///
/// Without any access code, this is only a liveness probe and nothing is read from the store.
/// With a wrong one, the request is rejected.
/// Otherwise, the member matching `nis` is returned, or the canonical member when no `nis` is given.
pub fn fetch_card_preview(
    pool: &DbPool,
    card_config: &CardConfig,
    access_code: Option<&str>,
    nis: Option<&str>,
) -> Result<CardPreview> {
    let Some(access_code) = access_code else {
        return Ok(CardPreview::placeholder());
    };
    if !card_config.accepts(access_code) {
        debug!("Rejected card preview with invalid access code");
        return Ok(CardPreview::failure(INVALID_ACCESS_CODE_MESSAGE));
    }

    let member = match nis.map(str::trim).filter(|nis| !nis.is_empty()) {
        Some(nis) => lookup_by_identifier(pool, nis)?,
        None => landing_sample(pool)?,
    };

    Ok(member
        .map(CardPreview::from)
        .unwrap_or_else(|| CardPreview::failure(MEMBER_NOT_FOUND_MESSAGE)))
}

/// The canonical member, shown as a sample on the landing page.
pub fn landing_sample(pool: &DbPool) -> Result<Option<Member>> {
    let mut connection = connection(pool)?;
    dao::member::find_first(&mut connection).map_err(log_message_and_return(
        "Can't retrieve canonical member",
        StorageUnavailable,
    ))
}
