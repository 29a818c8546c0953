use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("incomplete assessment: missing answers for questions {missing:?}")]
    Incomplete { missing: Vec<u8> },
}
