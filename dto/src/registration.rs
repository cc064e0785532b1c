use crate::member::Member;
use crate::member_fields::MemberFields;
use crate::response_status::ResponseStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Payload of the `/write` endpoint.
/// Identity fields are echoed back whatever the outcome.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Registration {
    nis: Option<String>,
    surname: Option<String>,
    name: Option<String>,
    status: ResponseStatus,
    #[serde(rename = "Error")]
    error: String,
}

impl Registration {
    pub fn inserted(member: &Member) -> Self {
        Self::echo(member, ResponseStatus::Inserted)
    }

    pub fn updated(member: &Member) -> Self {
        Self::echo(member, ResponseStatus::Updated)
    }

    /// Rejected before reaching the store.
    pub fn invalid(fields: &MemberFields, message: String) -> Self {
        Self {
            nis: fields.nis().clone(),
            surname: fields.surname().clone(),
            name: fields.name().clone(),
            status: ResponseStatus::Error,
            error: message,
        }
    }

    fn echo(member: &Member, status: ResponseStatus) -> Self {
        Self {
            nis: Some(member.nis().clone()),
            surname: Some(member.surname().clone()),
            name: Some(member.name().clone()),
            status,
            error: String::new(),
        }
    }
}
