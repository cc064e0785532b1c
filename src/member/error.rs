use std::fmt::{Display, Formatter};
use thiserror::Error;

/// The only failure that can't be reported in the response body.
#[derive(Debug, Error, PartialEq)]
pub enum MemberError {
    #[error("The member store is unavailable.")]
    StorageUnavailable,
}

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Campo obbligatorio: {0}")]
    MissingField(Field),
    #[error("Campo non valido: {0}")]
    InvalidField(Field),
}

/// Fields of a registration, labelled as the registration form shows them.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Field {
    Nis,
    Surname,
    Name,
    BirthDate,
    BirthPlace,
    BirthProv,
    FiscalCode,
    ResAddr,
    ResPlace,
    ResProv,
}

impl Field {
    pub fn label(&self) -> &'static str {
        match self {
            Field::Nis => "Nis",
            Field::Surname => "Cognome",
            Field::Name => "Nome",
            Field::BirthDate => "Data di nascita",
            Field::BirthPlace => "Luogo di nascita",
            Field::BirthProv => "Provincia di nascita",
            Field::FiscalCode => "Codice fiscale",
            Field::ResAddr => "Indirizzo di residenza",
            Field::ResPlace => "Comune di residenza",
            Field::ResProv => "Provincia di residenza",
        }
    }

    /// Column width in the member table, for fields stored as free text.
    /// The birth date is parsed instead.
    pub fn max_length(&self) -> Option<usize> {
        match self {
            Field::Nis | Field::Surname | Field::Name => Some(20),
            Field::BirthPlace | Field::ResPlace => Some(50),
            Field::BirthProv | Field::ResProv => Some(2),
            Field::FiscalCode => Some(16),
            Field::ResAddr => Some(100),
            Field::BirthDate => None,
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parameterized::{ide, parameterized};

    ide!();

    #[parameterized(
        field = {
            Field::Nis,
            Field::BirthPlace,
            Field::ResProv,
            Field::FiscalCode,
            Field::ResAddr,
            Field::BirthDate,
        },
        expected_length = {
            Some(20),
            Some(50),
            Some(2),
            Some(16),
            Some(100),
            None,
        }
    )]
    fn should_give_column_width(field: Field, expected_length: Option<usize>) {
        assert_eq!(expected_length, field.max_length());
    }
}
