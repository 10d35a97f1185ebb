//! The morphological parser is an external collaborator; the detector only
//! sees it through [`MorphParser`].

use std::{
    collections::HashMap,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    error::{Error, Result},
    sentence::Sentence,
};

pub trait MorphParser {
    fn parse(&self, text: &str) -> Result<Sentence>;
}

impl<P: MorphParser + ?Sized> MorphParser for &P {
    fn parse(&self, text: &str) -> Result<Sentence> {
        (**self).parse(text)
    }
}

/// Token graphs produced ahead of time by an external tagger, looked up by
/// sentence text.
#[derive(Debug, Default, Clone)]
pub struct ParseCache {
    m: HashMap<String, Sentence>,
}

impl ParseCache {
    /// Read a JSON-lines file with one serialized [`Sentence`] per line.
    /// Lines that fail to deserialize are logged and skipped.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let f = File::open(path.as_ref())?;
        let mut cache = ParseCache::default();
        for (n, line) in BufReader::new(f).lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            match serde_json::from_str::<Sentence>(&line) {
                Ok(sentence) => cache.insert(sentence),
                Err(e) => log::warn!("invalid parse at line {}: {e}", n + 1),
            }
        }
        log::info!("loaded {} parsed sentences from {}", cache.len(), path.as_ref().display());
        Ok(cache)
    }

    pub fn insert(&mut self, sentence: Sentence) {
        self.m.insert(sentence.text().to_string(), sentence);
    }

    pub fn len(&self) -> usize {
        self.m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }
}

impl FromIterator<Sentence> for ParseCache {
    fn from_iter<I: IntoIterator<Item = Sentence>>(iter: I) -> Self {
        let mut cache = ParseCache::default();
        iter.into_iter().for_each(|s| cache.insert(s));
        cache
    }
}

impl MorphParser for ParseCache {
    fn parse(&self, text: &str) -> Result<Sentence> {
        self.m.get(text).cloned().ok_or_else(|| Error::Parse {
            sentence: text.to_string(),
            reason: "no parse available".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sentence::Pos;

    #[test]
    fn lookup_by_text() {
        let sentence = Sentence::builder()
            .text("Chodź tu!")
            .token("Chodź", "chodzić", Pos::Verb, "sg:sec", "root", None)
            .token("tu", "tu", Pos::Adv, "", "advmod", Some(0))
            .token("!", "!", Pos::Punct, "", "punct", Some(0))
            .build()
            .unwrap();
        let cache: ParseCache = vec![sentence.clone()].into_iter().collect();
        assert_eq!(cache.parse("Chodź tu!").unwrap(), sentence);
        match cache.parse("Idź stąd!") {
            Err(Error::Parse { sentence, .. }) => assert_eq!(sentence, "Idź stąd!"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
