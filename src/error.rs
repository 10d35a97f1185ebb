use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A marker string that is not part of the taxonomy.
    #[error("unknown marker: {0:?}")]
    UnknownMarker(String),
    /// A recognised construction whose token lacks a feature the rules rely on.
    #[error("token {token:?} is missing the {feature} feature")]
    MissingFeature { token: String, feature: &'static str },
    #[error("failed to parse sentence {sentence:?}: {reason}")]
    Parse { sentence: String, reason: String },
    #[error("token {index} points to head {head} outside of a sentence of {len} tokens")]
    InvalidHead { index: usize, head: usize, len: usize },
    #[error("malformed label {0:?}")]
    MalformedLabel(String),
    #[error("misaligned input: expected {expected} items, found {found}")]
    Misaligned { expected: usize, found: usize },
    /// The sanity sample did not reach the acceptance threshold.
    #[error("F1 score of {f1:.2} not reached; make sure that the installation and data paths are correct")]
    ThresholdNotReached { f1: f64 },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
