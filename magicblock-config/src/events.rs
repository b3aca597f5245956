use serde::{Deserialize, Serialize};
use strum_macros::EnumString;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct EventsConfig {
    #[serde(default)]
    pub decode_policy: DecodePolicy,
}

// -----------------
// DecodePolicy
// -----------------
/// What to do with a log line that carries this program's emission marker
/// but whose payload does not decode against any declared event.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Deserialize,
    Serialize,
    EnumString,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DecodePolicy {
    /// Leave the line out of the decoded events and keep going.
    #[default]
    Skip,
    /// Fail the whole simulation call.
    Strict,
}
