//! Directional agreement: how often a hypothesis realises the intended marker
//! rather than its contrasting value.

use std::fmt::{self, Display};

use crate::{
    attributes::{Attribute, AttributeMap, Marker},
    detector::Detector,
    error::{Error, Result},
    parser::MorphParser,
};

/// Per-attribute counts of hypotheses carrying the intended marker
/// (`correct`) and its contrasting value (`incorrect`).
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Agreement {
    pub correct: AttributeMap<usize>,
    pub incorrect: AttributeMap<usize>,
}

impl Agreement {
    /// Share of correct realisations in percent, `None` when the attribute
    /// was never realised either way.
    pub fn rate(&self, attribute: Attribute) -> Option<f64> {
        let correct = self.correct[attribute];
        let total = correct + self.incorrect[attribute];
        if total == 0 {
            None
        } else {
            Some(correct as f64 / total as f64 * 100.0)
        }
    }

    /// Mean of the attribute rates that are defined.
    pub fn average(&self) -> Option<f64> {
        let rates: Vec<f64> = Attribute::ALL.iter().filter_map(|a| self.rate(*a)).collect();
        if rates.is_empty() {
            None
        } else {
            Some(rates.iter().sum::<f64>() / rates.len() as f64)
        }
    }

    pub fn merge(&mut self, other: &Agreement) {
        for attribute in Attribute::ALL {
            self.correct[attribute] += other.correct[attribute];
            self.incorrect[attribute] += other.incorrect[attribute];
        }
    }
}

impl Display for Agreement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Agreement by attribute (#correct, #incorrect) (rate):")?;
        for attribute in Attribute::ALL {
            match self.rate(attribute) {
                Some(rate) => writeln!(
                    f,
                    "\t{}: ({}, {}) ({:.2})",
                    attribute, self.correct[attribute], self.incorrect[attribute], rate
                )?,
                None => writeln!(f, "\t{}: (0, 0) (******)", attribute)?,
            }
        }
        match self.average() {
            Some(average) => write!(f, "Average result: {:.2} %", average),
            None => write!(f, "Average result: ******"),
        }
    }
}

impl<P: MorphParser> Detector<P> {
    /// Whether the markers detected in `sentence` include `marker`.
    pub fn verify_context(&self, sentence: &str, english: &str, marker: &str) -> Result<bool> {
        let marker: Marker = marker.parse()?;
        let attrs = self.predict_pair(sentence, english)?;
        Ok(attrs.get(marker.attribute()) == Some(marker))
    }

    /// Run the detector over aligned hypothesis/source/marker triples and
    /// count, per attribute, how often each hypothesis realises its marker and
    /// how often it realises the contrasting value instead.
    pub fn calculate_type_agreement<S: AsRef<str>>(
        &self,
        sentences: &[S],
        english: &[S],
        markers: &[S],
    ) -> Result<Agreement> {
        if english.len() != sentences.len() {
            return Err(Error::Misaligned { expected: sentences.len(), found: english.len() });
        }
        if markers.len() != sentences.len() {
            return Err(Error::Misaligned { expected: sentences.len(), found: markers.len() });
        }
        let mut agreement = Agreement::default();
        for ((sentence, english), marker) in sentences.iter().zip(english).zip(markers) {
            let marker: Marker = marker.as_ref().parse()?;
            let attrs = self.predict_pair(sentence.as_ref(), english.as_ref())?;
            let attribute = marker.attribute();
            if attrs.get(attribute) == Some(marker) {
                agreement.correct[attribute] += 1;
            }
            if attrs.get(attribute) == Some(marker.contrast()) {
                agreement.incorrect[attribute] += 1;
            }
        }
        log::info!(
            "correct assignments: {:?}; incorrect assignments: {:?}",
            agreement.correct.iter().map(|(a, n)| (a.name(), *n)).collect::<Vec<_>>(),
            agreement.incorrect.iter().map(|(a, n)| (a.name(), *n)).collect::<Vec<_>>(),
        );
        Ok(agreement)
    }
}
