use std::{
    fmt::{self, Display},
    iter::zip,
    ops::AddAssign,
};

use crate::attributes::{Attribute, AttributeMap};

/// F1 (in percent) the detector must exceed on the labelled sample.
pub const F1_THRESHOLD: f64 = 99.0;

/// Field-level tallies for one attribute.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConfusionCounts {
    /// Gold and prediction agree, including fields empty on both sides.
    pub true_positive: usize,
    /// True positives where neither side carries a marker.
    pub unmarked: usize,
    pub false_positive: usize,
    pub false_negative: usize,
}

impl ConfusionCounts {
    /// Score one field. Two empty fields agree; a wrong marker counts as both
    /// a false positive and a false negative.
    pub fn record(&mut self, gold: &str, prediction: &str) {
        match (gold.is_empty(), prediction.is_empty()) {
            (true, true) => {
                self.true_positive += 1;
                self.unmarked += 1;
            }
            (false, true) => self.false_negative += 1,
            (true, false) => self.false_positive += 1,
            (false, false) if gold == prediction => self.true_positive += 1,
            (false, false) => {
                self.false_positive += 1;
                self.false_negative += 1;
            }
        }
    }

    #[inline]
    pub fn precision(&self) -> f64 {
        percent(self.true_positive, self.true_positive + self.false_positive)
    }

    #[inline]
    pub fn recall(&self) -> f64 {
        percent(self.true_positive, self.true_positive + self.false_negative)
    }

    pub fn estimate(&self) -> Estimation {
        Estimation::new(self.precision(), self.recall())
    }
}

impl AddAssign for ConfusionCounts {
    fn add_assign(&mut self, other: Self) {
        self.true_positive += other.true_positive;
        self.unmarked += other.unmarked;
        self.false_positive += other.false_positive;
        self.false_negative += other.false_negative;
    }
}

fn percent(n: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        n as f64 / total as f64 * 100.0
    }
}

/// Precision, recall and F1, all in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimation {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
}

impl Estimation {
    pub fn new(precision: f64, recall: f64) -> Self {
        let f1 = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        Self { precision, recall, f1 }
    }
}

impl Display for Estimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "precision = {:.2}; recall = {:.2}; f1 = {:.2}", self.precision, self.recall, self.f1)
    }
}

/// Agreement between predicted and gold label strings over a data set.
#[derive(Debug, Default, Clone)]
pub struct Evaluation {
    tbl: AttributeMap<ConfusionCounts>,
    /// Number of label pairs seen.
    num_items: usize,
}

impl Evaluation {
    /// Compare one gold label string with one prediction, field by field.
    /// Missing fields read as empty.
    pub fn accumulate(&mut self, gold: &str, prediction: &str) {
        let gold: Vec<&str> = gold.split(',').collect();
        let prediction: Vec<&str> = prediction.split(',').collect();
        for (i, attribute) in Attribute::ALL.iter().enumerate() {
            let g = gold.get(i).copied().unwrap_or_default();
            let p = prediction.get(i).copied().unwrap_or_default();
            self.tbl[*attribute].record(g, p);
        }
        self.num_items += 1;
    }

    pub fn counts(&self, attribute: Attribute) -> &ConfusionCounts {
        &self.tbl[attribute]
    }

    /// Counts summed over all attributes.
    pub fn total(&self) -> ConfusionCounts {
        let mut total = ConfusionCounts::default();
        for (_, counts) in self.tbl.iter() {
            total += *counts;
        }
        total
    }

    pub fn num_items(&self) -> usize {
        self.num_items
    }

    /// Micro-averaged scores over every field.
    pub fn evaluate(&self) -> Estimation {
        self.total().estimate()
    }

    pub fn merge(&mut self, other: &Evaluation) {
        for attribute in Attribute::ALL {
            self.tbl[attribute] += other.tbl[attribute];
        }
        self.num_items += other.num_items;
    }
}

impl Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance by attribute (#tp, #fp, #fn, #unmarked) (precision, recall, F1):")?;
        for (attribute, c) in self.tbl.iter() {
            let e = c.estimate();
            writeln!(
                f,
                "\t{}: ({}, {}, {}, {}) ({:.2}, {:.2}, {:.2})",
                attribute, c.true_positive, c.false_positive, c.false_negative, c.unmarked, e.precision, e.recall, e.f1
            )?;
        }
        write!(f, "Overall over {} items: {}", self.num_items, self.evaluate())
    }
}

/// Score aligned prediction/gold label strings and tell whether F1 clears
/// [`F1_THRESHOLD`].
pub fn calculate_f1<A: AsRef<str>, B: AsRef<str>>(predictions: &[A], gold: &[B]) -> bool {
    if predictions.len() != gold.len() {
        log::warn!("scoring {} predictions against {} gold labels", predictions.len(), gold.len());
    }
    let mut evaluation = Evaluation::default();
    for (p, g) in zip(predictions, gold) {
        evaluation.accumulate(g.as_ref(), p.as_ref());
    }
    let estimation = evaluation.evaluate();
    log::info!("{}", estimation);
    estimation.f1 > F1_THRESHOLD
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_labels_pass() {
        let labels = ["<sp:feminine>,,,", "<sp:feminine>,,,"];
        assert!(calculate_f1(&labels, &labels));
    }

    #[test]
    fn wrong_marker_is_one_false_positive_and_one_false_negative() {
        let mut evaluation = Evaluation::default();
        evaluation.accumulate(",,,<informal>", ",,,<formal>");
        let c = evaluation.counts(Attribute::Formality);
        assert_eq!(c.false_positive, 1);
        assert_eq!(c.false_negative, 1);
        assert_eq!(c.true_positive, 0);
        for attribute in [Attribute::SpGender, Attribute::IlGender, Attribute::IlNumber] {
            assert_eq!(*evaluation.counts(attribute), ConfusionCounts { true_positive: 1, unmarked: 1, ..Default::default() });
        }
        assert!(!calculate_f1(&[",,,<formal>"], &[",,,<informal>"]));
    }

    #[test]
    fn missing_and_spurious_markers() {
        let mut evaluation = Evaluation::default();
        evaluation.accumulate("<sp:masculine>,,<plural>,", ",,<plural>,<formal>");
        assert_eq!(evaluation.counts(Attribute::SpGender).false_negative, 1);
        assert_eq!(evaluation.counts(Attribute::IlNumber).true_positive, 1);
        assert_eq!(evaluation.counts(Attribute::Formality).false_positive, 1);
        assert_eq!(evaluation.counts(Attribute::IlGender).unmarked, 1);
        // 2 tp, 1 fp, 1 fn
        let e = evaluation.evaluate();
        assert!((e.precision - 200.0 / 3.0).abs() < 1e-9);
        assert!((e.recall - 200.0 / 3.0).abs() < 1e-9);
        assert!((e.f1 - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_fields_count_as_agreement() {
        let mut evaluation = Evaluation::default();
        evaluation.accumulate("<sp:feminine>,,,", "<sp:feminine>,,,");
        assert_eq!(evaluation.total().true_positive, 4);
        assert_eq!(evaluation.total().unmarked, 3);

        let predictions = vec!["<sp:feminine>,,<singular>,", ",,,<formal>", "<sp:masculine>,,,"];
        let gold = vec!["<sp:feminine>,,,", ",,,<formal>", ",,,<informal>"];
        let mut evaluation = Evaluation::default();
        zip(&predictions, &gold).for_each(|(p, g)| evaluation.accumulate(g, p));
        let before = evaluation.evaluate();
        for _ in 0..10 {
            evaluation.accumulate(",,,", ",,,");
        }
        let after = evaluation.evaluate();
        assert!(after.precision > before.precision);
        assert!(after.recall > before.recall);
    }

    #[test]
    fn one_missed_marker_in_a_mostly_unmarked_sample() {
        let mut gold = vec![",,,<formal>"];
        gold.extend([",,,"; 9]);
        let predictions = [",,,"; 10];
        let mut evaluation = Evaluation::default();
        zip(&predictions, &gold).for_each(|(p, g)| evaluation.accumulate(g, p));
        let e = evaluation.evaluate();
        // 39 tp, 0 fp, 1 fn
        assert_eq!(e.precision, 100.0);
        assert!((e.recall - 97.5).abs() < 1e-9);
        assert!(e.f1 > 98.0 && e.f1 < F1_THRESHOLD);
    }

    #[test]
    fn short_labels_read_as_empty_fields() {
        let mut evaluation = Evaluation::default();
        evaluation.accumulate("<sp:feminine>", "<sp:feminine>,,,");
        assert_eq!(evaluation.total().true_positive, 4);
        assert_eq!(evaluation.total().unmarked, 3);
    }

    #[test]
    fn nothing_to_score_is_zero() {
        let e = Evaluation::default().evaluate();
        assert_eq!(e.f1, 0.0);
        assert!(!calculate_f1::<&str, &str>(&[], &[]));
    }

    #[test]
    fn merge_is_a_sum() {
        let mut a = Evaluation::default();
        a.accumulate("<sp:feminine>,,,", "<sp:feminine>,,,");
        let mut b = Evaluation::default();
        b.accumulate(",,,<formal>", ",,,");
        let mut whole = Evaluation::default();
        whole.accumulate("<sp:feminine>,,,", "<sp:feminine>,,,");
        whole.accumulate(",,,<formal>", ",,,");
        a.merge(&b);
        assert_eq!(a.total(), whole.total());
        assert_eq!(a.num_items(), 2);
        assert!(a.to_string().contains("Formality: (1, 0, 1, 1)"));
    }
}
