use crate::member::Member;
use crate::response_status::ResponseStatus;
use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Payload of the `/card` endpoint.
/// Personal fields are only filled in when a member has been found behind a valid access code.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct CardPreview {
    nis: Option<String>,
    surname: Option<String>,
    name: Option<String>,
    birth_date: Option<NaiveDate>,
    birth_place: Option<String>,
    birth_prov: Option<String>,
    fiscal_code: Option<String>,
    res_addr: Option<String>,
    res_place: Option<String>,
    res_prov: Option<String>,
    status: ResponseStatus,
    error: String,
}

impl CardPreview {
    /// Success without any data, returned when no access code is provided.
    pub fn placeholder() -> Self {
        Self::empty(ResponseStatus::Ok, String::new())
    }

    pub fn failure(message: &str) -> Self {
        Self::empty(ResponseStatus::Ko, message.to_owned())
    }

    fn empty(status: ResponseStatus, error: String) -> Self {
        Self {
            nis: None,
            surname: None,
            name: None,
            birth_date: None,
            birth_place: None,
            birth_prov: None,
            fiscal_code: None,
            res_addr: None,
            res_place: None,
            res_prov: None,
            status,
            error,
        }
    }
}

impl From<Member> for CardPreview {
    fn from(member: Member) -> Self {
        Self {
            nis: Some(member.nis().clone()),
            surname: Some(member.surname().clone()),
            name: Some(member.name().clone()),
            birth_date: *member.birth_date(),
            birth_place: member.birth_place().clone(),
            birth_prov: member.birth_prov().clone(),
            fiscal_code: member.fiscal_code().clone(),
            res_addr: member.res_addr().clone(),
            res_place: member.res_place().clone(),
            res_prov: member.res_prov().clone(),
            status: ResponseStatus::Ok,
            error: String::new(),
        }
    }
}
