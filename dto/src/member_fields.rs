use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Raw field set submitted to register a member.
/// Nothing is validated yet: every field may be missing or blank.
#[derive(Debug, Serialize, Deserialize, Getters, PartialEq, Eq, Clone, Default)]
pub struct MemberFields {
    nis: Option<String>,
    surname: Option<String>,
    name: Option<String>,
    birth_date: Option<String>,
    birth_place: Option<String>,
    birth_prov: Option<String>,
    fiscal_code: Option<String>,
    res_addr: Option<String>,
    res_place: Option<String>,
    res_prov: Option<String>,
}

impl MemberFields {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        nis: Option<String>,
        surname: Option<String>,
        name: Option<String>,
        birth_date: Option<String>,
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

    impl MemberFields {
        /// Only the required fields, as they would come from a bare form.
        pub fn new_test(nis: Option<&str>, surname: Option<&str>, name: Option<&str>) -> Self {
            MemberFields {
                nis: nis.map(str::to_owned),
                surname: surname.map(str::to_owned),
                name: name.map(str::to_owned),
                ..Default::default()
            }
        }

        pub fn with_birth_date(mut self, birth_date: &str) -> Self {
            self.birth_date = Some(birth_date.to_owned());
            self
        }

        pub fn with_birth_prov(mut self, birth_prov: &str) -> Self {
            self.birth_prov = Some(birth_prov.to_owned());
            self
        }

        pub fn with_fiscal_code(mut self, fiscal_code: &str) -> Self {
            self.fiscal_code = Some(fiscal_code.to_owned());
            self
        }

        pub fn with_residence(mut self, res_addr: &str, res_place: &str, res_prov: &str) -> Self {
            self.res_addr = Some(res_addr.to_owned());
            self.res_place = Some(res_place.to_owned());
            self.res_prov = Some(res_prov.to_owned());
            self
        }
    }

    pub fn mario_rossi_fields() -> MemberFields {
        MemberFields::new(
            Some("N1".to_owned()),
            Some("Rossi".to_owned()),
            Some("Mario".to_owned()),
            Some("1980-12-23".to_owned()),
            Some("Roma".to_owned()),
            Some("RM".to_owned()),
            Some("RSSMRA80T23H501U".to_owned()),
            Some("Via del Corso 1".to_owned()),
            Some("Roma".to_owned()),
            Some("RM".to_owned()),
        )
    }
}
