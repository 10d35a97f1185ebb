use std::{
    collections::HashSet,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::error::Result;

/// Lemmas excluded from noun-predicate gender readings.
pub trait ExclusionSet {
    fn contains(&self, lemma: &str) -> bool;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Stopword list, compared case-insensitively.
#[derive(Debug, Default, Clone)]
pub struct Stopwords {
    m: HashSet<String>,
}

impl From<Vec<String>> for Stopwords {
    fn from(value: Vec<String>) -> Self {
        value.iter().map(String::as_str).collect()
    }
}

impl<'a> FromIterator<&'a str> for Stopwords {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let m = iter
            .into_iter()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self { m }
    }
}

impl ExclusionSet for Stopwords {
    fn contains(&self, lemma: &str) -> bool {
        self.m.contains(&lemma.to_lowercase())
    }

    fn len(&self) -> usize {
        self.m.len()
    }
}

impl Stopwords {
    /// One word per line; blank lines are skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(path.as_ref())?;
        let lines = BufReader::new(f).lines().collect::<std::io::Result<Vec<_>>>()?;
        let stopwords = Stopwords::from(lines);
        log::debug!("loaded {} stopwords from {}", stopwords.len(), path.as_ref().display());
        Ok(stopwords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_ignores_case() {
        let stopwords = Stopwords::from(vec!["Coś".to_string(), "ktoś".to_string()]);
        assert!(stopwords.contains("coś"));
        assert!(stopwords.contains("KTOŚ"));
        assert!(!stopwords.contains("lekarz"));
        assert_eq!(stopwords.len(), 2);
    }

    #[test]
    fn blank_lines_are_skipped() {
        let stopwords: Stopwords = ["", "  ", "nic", "nic"].into_iter().collect();
        assert_eq!(stopwords.len(), 1);
        assert!(!stopwords.contains(""));
        assert!(Stopwords::default().is_empty());
    }
}
