use chrono::NaiveDate;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A registered person, identified by their `nis`.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone)]
pub struct Member {
    nis: String,
    surname: String,
    name: String,
    birth_date: Option<NaiveDate>,
    birth_place: Option<String>,
    birth_prov: Option<String>,
    fiscal_code: Option<String>,
    res_addr: Option<String>,
    res_place: Option<String>,
    res_prov: Option<String>,
}

impl Member {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nis: String,
        surname: String,
        name: String,
        birth_date: Option<NaiveDate>,
        birth_place: Option<String>,
        birth_prov: Option<String>,
        fiscal_code: Option<String>,
        res_addr: Option<String>,
        res_place: Option<String>,
        res_prov: Option<String>,
    ) -> Self {
        Self {
            nis,
            surname,
            name,
            birth_date,
            birth_place,
            birth_prov,
            fiscal_code,
            res_addr,
            res_place,
            res_prov,
        }
    }
}

#[cfg(any(test, feature = "test"))]
pub mod tests {
    use super::*;

    pub const MARIO_ROSSI_NIS: &str = "N1";
    pub const GIULIA_BIANCHI_NIS: &str = "N2";

    pub fn mario_rossi() -> Member {
        Member::new(
            MARIO_ROSSI_NIS.to_owned(),
            "Rossi".to_owned(),
            "Mario".to_owned(),
            NaiveDate::from_ymd_opt(1980, 12, 23),
            Some("Roma".to_owned()),
            Some("RM".to_owned()),
            Some("RSSMRA80T23H501U".to_owned()),
            Some("Via del Corso 1".to_owned()),
            Some("Roma".to_owned()),
            Some("RM".to_owned()),
        )
    }

    pub fn giulia_bianchi() -> Member {
        Member::new(
            GIULIA_BIANCHI_NIS.to_owned(),
            "Bianchi".to_owned(),
            "Giulia".to_owned(),
            None,
            None,
            None,
            None,
            None,
            None,
            None,
        )
    }
}
