//! Weighted scoring and profile classification.

use mesmer_core::models::answers::AnswerSet;
use mesmer_core::models::profile::Profile;
use mesmer_core::models::question::Category;

use crate::catalog;
use crate::error::ScoringError;

/// Raw weighted tallies for one completed answer set.
///
/// Both per-questionnaire scores are in `[0, 100]` and always multiples of
/// 5; `combined` is their sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawScores {
    pub q1: u16,
    pub q2: u16,
    pub combined: u16,
}

/// Sum the weights of affirmative answers per questionnaire.
///
/// Fails with [`ScoringError::Incomplete`] unless all 36 question ids are
/// present. This is the only way the scoring pipeline can fail; the caller
/// should resume collecting answers rather than retry.
pub fn raw_scores(answers: &AnswerSet) -> Result<RawScores, ScoringError> {
    let missing: Vec<u8> = catalog::questions()
        .iter()
        .map(|q| q.id)
        .filter(|id| !answers.contains_key(id))
        .collect();
    if !missing.is_empty() {
        return Err(ScoringError::Incomplete { missing });
    }

    let mut q1: u16 = 0;
    let mut q2: u16 = 0;
    for question in catalog::questions() {
        if answers.get(&question.id).copied().unwrap_or(false) {
            match question.category {
                Category::Physical => q1 += u16::from(question.weight),
                Category::Emotional => q2 += u16::from(question.weight),
            }
        }
    }

    Ok(RawScores {
        q1,
        q2,
        combined: q1 + q2,
    })
}

/// Classify the processing profile from the physical percentage.
///
/// `emotional = 100 - physical`. The branches are evaluated in order and
/// cover every percentage exactly once.
pub fn classify(physical_percentage: u8) -> Profile {
    let emotional = 100 - physical_percentage;
    if physical_percentage == 50 {
        Profile::Somnambulistic
    } else if emotional >= 80 {
        Profile::IntellectualSuggestible
    } else if physical_percentage > emotional {
        Profile::PhysicalSuggestible
    } else {
        Profile::EmotionalSuggestible
    }
}
