use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Which indicator group a question probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Category {
    Physical,
    Emotional,
}

/// One yes/no item of the E&P questionnaire battery.
///
/// Scoring reads only `id`, `questionnaire`, and `weight`. The `text`,
/// `tooltip`, `example`, and `icon` fields are presentation metadata that
/// travels to the frontend untouched.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    pub id: u8,
    pub text: String,
    pub category: Category,
    /// 1 = physical indicators (ids 1-18), 2 = emotional indicators (19-36).
    pub questionnaire: u8,
    /// Points awarded for a "yes" answer: 10 or 5.
    pub weight: u8,
    pub tooltip: String,
    pub example: Option<String>,
    /// Icon tag resolved to a glyph by the frontend.
    pub icon: String,
}

/// The questionnaire battery plus its published-source metadata.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Questionnaire {
    pub name: String,
    pub version: String,
    pub methodology: String,
    pub source: String,
    pub questions: Vec<Question>,
}
