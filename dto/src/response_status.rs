use serde::{Deserialize, Serialize};

/// Outcome carried in the `status` field of every JSON payload.
/// Logical failures are reported here, never through the transport status.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum ResponseStatus {
    Ok,
    Ko,
    Error,
    Inserted,
    Updated,
}
