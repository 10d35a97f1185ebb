//! Detection of speaker gender, interlocutor gender, interlocutor number and
//! formality markers in parsed Polish sentences, and scoring of translation
//! hypotheses against gold markers.
//!
//! ```no_run
//! use context_markers::{Detector, ParseCache, Stopwords};
//!
//! let parser = ParseCache::from_file("data/parses.jsonl")?;
//! let stopwords = Stopwords::from_file("data/stopwords")?;
//! let detector = Detector::new(parser, stopwords);
//! let labels = detector.predict_pair("Byłaś tam?", "Were you there?")?;
//! println!("{}", labels);
//! # Ok::<(), context_markers::Error>(())
//! ```

pub mod agreement;
pub mod attributes;
pub mod dataset;
pub mod detector;
pub mod error;
pub mod evaluation;
pub mod parser;
pub mod rewrite;
pub mod sentence;
pub mod stopwords;

pub use agreement::Agreement;
pub use attributes::{attribute_of, canonical_order, opposite, Attribute, AttributeMap, AttributeSet, Marker};
pub use dataset::{Dataset, DetectorSample, Record, Split};
pub use detector::Detector;
pub use error::{Error, Result};
pub use evaluation::{calculate_f1, ConfusionCounts, Estimation, Evaluation, F1_THRESHOLD};
pub use parser::{MorphParser, ParseCache};
pub use sentence::{Feats, Pos, Sentence, SentenceBuilder, Token};
pub use stopwords::{ExclusionSet, Stopwords};
