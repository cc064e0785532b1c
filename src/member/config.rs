use crate::tools::env_args::retrieve_arg_value;
use derive_getters::Getters;
use std::fmt::{Debug, Formatter};

const ACCESS_CODE_ARG: &str = "--access-code";
const DEFAULT_ACCESS_CODE: &str = "123456";

/// Settings of the card preview, handed to the web layer at start-up.
#[derive(Getters, Clone, PartialEq)]
pub struct CardConfig {
    access_code: String,
}

impl CardConfig {
    pub fn new(access_code: String) -> Self {
        Self { access_code }
    }

    /// Read from `--access-code`, falling back on the card's default CAN.
    pub fn from_args() -> Self {
        let access_code =
            retrieve_arg_value(ACCESS_CODE_ARG).unwrap_or_else(|| DEFAULT_ACCESS_CODE.to_owned());
        Self::new(access_code)
    }

    pub fn accepts(&self, access_code: &str) -> bool {
        self.access_code == access_code
    }
}

impl Default for CardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ACCESS_CODE.to_owned())
    }
}

impl Debug for CardConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "CardConfig {{access_code=MASKED}}")
    }
}
