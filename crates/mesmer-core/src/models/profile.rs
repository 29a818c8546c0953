use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Categorical suggestibility-processing profile.
///
/// Wire strings match what the frontend displays, so the serialized form is
/// the published clinical label rather than the Rust variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Profile {
    #[serde(rename = "Physical Suggestible")]
    PhysicalSuggestible,
    #[serde(rename = "Emotional Suggestible")]
    EmotionalSuggestible,
    #[serde(rename = "Somnambulistic")]
    Somnambulistic,
    #[serde(rename = "Intellectual Suggestible")]
    IntellectualSuggestible,
}
