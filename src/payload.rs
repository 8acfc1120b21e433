use serde::{Deserialize, Serialize};

/// The event body this function is invoked with.
///
/// A missing `message` decodes to an empty string.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestPayload {
    #[serde(default)]
    pub message: String,
}
