use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::answers::AnswerSet;
use super::profile::Profile;

/// Output of the scoring engine for one completed answer set.
///
/// Immutable once produced. `physical_percentage + emotional_percentage`
/// is always 100.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AssessmentResult {
    pub q1_score: u16,
    pub q2_score: u16,
    pub combined_score: u16,
    pub physical_percentage: u8,
    pub emotional_percentage: u8,
    pub profile: Profile,
    /// The answer set the scores were computed from, echoed back.
    #[serde(deserialize_with = "super::answers::string_keyed::deserialize")]
    pub answers: AnswerSet,
    pub completed_at: jiff::Timestamp,
    pub methodology: String,
}

/// A scored assessment as persisted and served to the frontend.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Assessment {
    pub id: Uuid,
    #[serde(flatten)]
    #[ts(flatten)]
    pub result: AssessmentResult,
}
