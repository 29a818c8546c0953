//! mesmer-scoring
//!
//! The E&P suggestibility scoring engine: the question catalog, the
//! published percentage chart, the weighted scorer, the chart resolver,
//! and the profile classifier. Pure data and arithmetic; the one side
//! effect in the whole pipeline is the completion-timestamp read in
//! [`score_assessment`].

pub mod catalog;
pub mod chart;
pub mod error;
pub mod resolve;
pub mod scoring;

use mesmer_core::models::answers::AnswerSet;
use mesmer_core::models::assessment::AssessmentResult;

use error::ScoringError;

/// Methodology tag stamped on every result.
pub const METHODOLOGY: &str = "HMI E&P Suggestibility Assessment (Kappas Method)";

/// Score one completed answer set end to end.
///
/// Runs the weighted scorer, resolves the physical percentage against the
/// published chart, classifies the profile, and assembles the immutable
/// result with the answers echoed back. Fails only when the answer set is
/// missing any of the 36 ids.
pub fn score_assessment(answers: &AnswerSet) -> Result<AssessmentResult, ScoringError> {
    let scores = scoring::raw_scores(answers)?;
    let physical = resolve::physical_percentage(i32::from(scores.q1), i32::from(scores.combined));
    let emotional = 100 - physical;
    let profile = scoring::classify(physical);

    tracing::debug!(
        q1 = scores.q1,
        q2 = scores.q2,
        combined = scores.combined,
        physical_percentage = physical,
        profile = ?profile,
        "assessment_scored"
    );

    Ok(AssessmentResult {
        q1_score: scores.q1,
        q2_score: scores.q2,
        combined_score: scores.combined,
        physical_percentage: physical,
        emotional_percentage: emotional,
        profile,
        answers: answers.clone(),
        completed_at: jiff::Timestamp::now(),
        methodology: METHODOLOGY.to_string(),
    })
}
