use crate::member::error::Field;
use crate::member::error::ValidationError::{self, InvalidField, MissingField};
use crate::member::fiscal_code::birth_date_from_fiscal_code;
use chrono::NaiveDate;
use dto::member::Member;
use dto::member_fields::MemberFields;
use regex::Regex;
use std::sync::LazyLock;

/// Day and month may come unpadded from the card reader, which chrono accepts with this format.
const BIRTH_DATE_FORMAT: &str = "%Y-%m-%d";

static PROVINCE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("^[A-Za-z]{2}$").expect("Province regex should be valid"));

/// Turn a raw field set into a member ready to be stored.
///
/// Required fields are checked first, in order (`nis`, `surname`, `name`), and the first missing one wins.
/// Supplied optional fields are then checked against their column width and format.
/// Blank values are handled as if they had not been supplied.
pub fn validate(fields: &MemberFields) -> Result<Member, ValidationError> {
    let nis = required(fields.nis(), Field::Nis)?;
    let surname = required(fields.surname(), Field::Surname)?;
    let name = required(fields.name(), Field::Name)?;

    let birth_place = optional(fields.birth_place(), Field::BirthPlace)?;
    let birth_prov = province(fields.birth_prov(), Field::BirthProv)?;
    let fiscal_code =
        optional(fields.fiscal_code(), Field::FiscalCode)?.map(|code| code.to_uppercase());
    let res_addr = optional(fields.res_addr(), Field::ResAddr)?;
    let res_place = optional(fields.res_place(), Field::ResPlace)?;
    let res_prov = province(fields.res_prov(), Field::ResProv)?;
    let birth_date = birth_date(fields.birth_date(), fiscal_code.as_deref())?;

    Ok(Member::new(
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
    ))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn required(value: &Option<String>, field: Field) -> Result<String, ValidationError> {
    let value = non_blank(value).ok_or(MissingField(field))?;
    check_length(value, field)?;

    Ok(value.to_owned())
}

fn optional(value: &Option<String>, field: Field) -> Result<Option<String>, ValidationError> {
    non_blank(value)
        .map(|value| check_length(value, field).map(|_| value.to_owned()))
        .transpose()
}

fn province(value: &Option<String>, field: Field) -> Result<Option<String>, ValidationError> {
    non_blank(value)
        .map(|value| {
            if PROVINCE_REGEX.is_match(value) {
                Ok(value.to_uppercase())
            } else {
                Err(InvalidField(field))
            }
        })
        .transpose()
}

/// The supplied birth date if any, else the one carried by the fiscal code.
fn birth_date(
    value: &Option<String>,
    fiscal_code: Option<&str>,
) -> Result<Option<NaiveDate>, ValidationError> {
    match non_blank(value) {
        Some(value) => NaiveDate::parse_from_str(value, BIRTH_DATE_FORMAT)
            .map(Some)
            .map_err(|_| InvalidField(Field::BirthDate)),
        None => Ok(fiscal_code.and_then(birth_date_from_fiscal_code)),
    }
}

fn check_length(value: &str, field: Field) -> Result<(), ValidationError> {
    match field.max_length() {
        Some(max_length) if value.chars().count() > max_length => Err(InvalidField(field)),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dto::member::tests::mario_rossi;
    use dto::member_fields::tests::mario_rossi_fields;
    use parameterized::{ide, parameterized};

    ide!();

    #[test]
    fn should_validate_complete_fields() {
        assert_eq!(Ok(mario_rossi()), validate(&mario_rossi_fields()));
    }

    #[test]
    fn should_validate_required_fields_only() {
        let fields = MemberFields::new_test(Some("N2"), Some("Bianchi"), Some("Giulia"));

        let member = validate(&fields).unwrap();
        assert_eq!("N2", member.nis());
        assert_eq!("Bianchi", member.surname());
        assert_eq!("Giulia", member.name());
        assert_eq!(&None, member.birth_date());
        assert_eq!(&None, member.res_prov());
    }

    #[parameterized(
        fields = {
            MemberFields::new_test(None, Some("Rossi"), Some("Mario")),
            MemberFields::new_test(Some("N1"), None, Some("Mario")),
            MemberFields::new_test(Some("N1"), Some("Rossi"), None),
            MemberFields::new_test(None, None, None),
            MemberFields::new_test(Some("N1"), None, None),
            MemberFields::new_test(Some("  "), Some("Rossi"), Some("Mario")),
            MemberFields::new_test(Some("N1"), Some(""), Some("Mario")),
            MemberFields::new_test(None, Some("Rossi"), Some("Mario")).with_residence("Via del Corso 1", "Roma", "RM"),
            MemberFields::new_test(Some("N1"), Some("Rossi"), None).with_birth_date("not a date"),
        },
        expected_error = {
            MissingField(Field::Nis),
            MissingField(Field::Surname),
            MissingField(Field::Name),
            MissingField(Field::Nis),
            MissingField(Field::Surname),
            MissingField(Field::Nis),
            MissingField(Field::Surname),
            MissingField(Field::Nis),
            MissingField(Field::Name),
        }
    )]
    fn should_report_first_missing_field(fields: MemberFields, expected_error: ValidationError) {
        assert_eq!(Err(expected_error), validate(&fields));
    }

    #[parameterized(
        fields = {
            MemberFields::new_test(Some("N1"), Some("Rossi"), Some("Mario")).with_birth_date("23/12/1980"),
            MemberFields::new_test(Some("N1"), Some("Rossi"), Some("Mario")).with_birth_date("1980-13-01"),
            MemberFields::new_test(Some("N1"), Some("Rossi"), Some("Mario")).with_birth_prov("Roma"),
            MemberFields::new_test(Some("N1"), Some("Rossi"), Some("Mario")).with_birth_prov("R1"),
            MemberFields::new_test(Some("N1"), Some("Rossi"), Some("Mario")).with_residence("Via del Corso 1", "Roma", "RMA"),
            MemberFields::new_test(Some("N1"), Some("Rossi"), Some("Mario")).with_fiscal_code("RSSMRA80T23H501UX"),
            MemberFields::new_test(Some("N1"), Some("Rossi Rossi Rossi Rossi"), Some("Mario")),
            MemberFields::new_test(Some("N123456789012345678901"), Some("Rossi"), Some("Mario")),
        },
        expected_error = {
            InvalidField(Field::BirthDate),
            InvalidField(Field::BirthDate),
            InvalidField(Field::BirthProv),
            InvalidField(Field::BirthProv),
            InvalidField(Field::ResProv),
            InvalidField(Field::FiscalCode),
            InvalidField(Field::Surname),
            InvalidField(Field::Nis),
        }
    )]
    fn should_report_invalid_field(fields: MemberFields, expected_error: ValidationError) {
        assert_eq!(Err(expected_error), validate(&fields));
    }

    #[parameterized(
        error = {
            MissingField(Field::Nis),
            MissingField(Field::Surname),
            MissingField(Field::Name),
            InvalidField(Field::ResProv),
        },
        expected_message = {
            "Campo obbligatorio: Nis",
            "Campo obbligatorio: Cognome",
            "Campo obbligatorio: Nome",
            "Campo non valido: Provincia di residenza",
        }
    )]
    fn should_name_field_in_message(error: ValidationError, expected_message: &str) {
        assert_eq!(expected_message, error.to_string());
    }

    #[test]
    fn should_trim_and_normalize_values() {
        let fields = MemberFields::new_test(Some(" N1 "), Some("Rossi "), Some(" Mario"))
            .with_birth_prov("rm")
            .with_fiscal_code("rssmra80t23h501u");

        let member = validate(&fields).unwrap();
        assert_eq!("N1", member.nis());
        assert_eq!("Rossi", member.surname());
        assert_eq!("Mario", member.name());
        assert_eq!(&Some("RM".to_owned()), member.birth_prov());
        assert_eq!(&Some("RSSMRA80T23H501U".to_owned()), member.fiscal_code());
    }

    #[test]
    fn should_accept_unpadded_birth_date() {
        let fields =
            MemberFields::new_test(Some("N1"), Some("Rossi"), Some("Mario")).with_birth_date("1980-12-3");

        let member = validate(&fields).unwrap();
        assert_eq!(&NaiveDate::from_ymd_opt(1980, 12, 3), member.birth_date());
    }

    #[test]
    fn should_derive_birth_date_from_fiscal_code() {
        let fields = MemberFields::new_test(Some("N1"), Some("Rossi"), Some("Mario"))
            .with_fiscal_code("RSSMRA80T23H501U");

        let member = validate(&fields).unwrap();
        assert_eq!(&NaiveDate::from_ymd_opt(1980, 12, 23), member.birth_date());
    }

    #[test]
    fn should_prefer_supplied_birth_date_over_fiscal_code() {
        let fields = MemberFields::new_test(Some("N1"), Some("Rossi"), Some("Mario"))
            .with_fiscal_code("RSSMRA80T23H501U")
            .with_birth_date("1981-01-02");

        let member = validate(&fields).unwrap();
        assert_eq!(&NaiveDate::from_ymd_opt(1981, 1, 2), member.birth_date());
    }
}
