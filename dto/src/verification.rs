use crate::member::Member;
use crate::response_status::ResponseStatus;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Payload of the `/verify/<nis>` endpoint.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Verification {
    surname: Option<String>,
    name: Option<String>,
    status: ResponseStatus,
    #[serde(rename = "Error")]
    error: String,
}

impl Verification {
    pub fn not_found(message: &str) -> Self {
        Self {
            surname: None,
            name: None,
            status: ResponseStatus::Ko,
            error: message.to_owned(),
        }
    }
}

impl From<Member> for Verification {
    fn from(member: Member) -> Self {
        Self {
            surname: Some(member.surname().clone()),
            name: Some(member.name().clone()),
            status: ResponseStatus::Ok,
            error: String::new(),
        }
    }
}
