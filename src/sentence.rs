//! Token graph of one parsed sentence.
//!
//! Sentences are produced by a [`MorphParser`](crate::MorphParser) and are
//! read-only afterwards. Heads are positional references into the same
//! sentence; the root has no head.

use std::convert::TryFrom;

use bitflags::bitflags;
use serde::Deserialize;

use crate::{
    attributes::Gender,
    error::{Error, Result},
};

/// Universal part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Pos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    #[serde(other)]
    X,
}

bitflags! {
    /// Morphological codes of a token, built once from the colon-delimited tag.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Feats: u32 {
        const SG = 1 << 0;
        const PL = 1 << 1;
        const PRI = 1 << 2;
        const SEC = 1 << 3;
        const TER = 1 << 4;
        const M1 = 1 << 5;
        const M2 = 1 << 6;
        const M3 = 1 << 7;
        const F = 1 << 8;
        const N = 1 << 9;
        const NOM = 1 << 10;
        const GEN = 1 << 11;
        const DAT = 1 << 12;
        const ACC = 1 << 13;
        const INST = 1 << 14;
        const LOC = 1 << 15;
        const VOC = 1 << 16;

        const MASCULINE = Self::M1.bits() | Self::M2.bits() | Self::M3.bits();
    }
}

impl Feats {
    pub fn from_code(code: &str) -> Option<Feats> {
        let feats = match code {
            "sg" => Feats::SG,
            "pl" => Feats::PL,
            "pri" => Feats::PRI,
            "sec" => Feats::SEC,
            "ter" => Feats::TER,
            "m1" => Feats::M1,
            "m2" => Feats::M2,
            "m3" => Feats::M3,
            "f" => Feats::F,
            "n" => Feats::N,
            "nom" => Feats::NOM,
            "gen" => Feats::GEN,
            "dat" => Feats::DAT,
            "acc" => Feats::ACC,
            "inst" => Feats::INST,
            "loc" => Feats::LOC,
            "voc" => Feats::VOC,
            _ => return None,
        };
        Some(feats)
    }

    /// Parse a tag such as `sg:nom:m1`. Unknown codes are dropped; dotted
    /// alternatives (`m1.m2`) only contribute gender and number.
    pub fn parse(tag: &str) -> Feats {
        let mut feats = Feats::empty();
        for segment in tag.split(':') {
            if let Some(code) = Feats::from_code(segment) {
                feats |= code;
            } else if segment.contains('.') {
                for alternative in segment.split('.').filter_map(Feats::from_code) {
                    feats |= alternative & Feats::MASCULINE;
                }
            }
        }
        feats
    }

    /// Grammatical gender, feminine taking precedence over masculine.
    pub fn gender(self) -> Option<Gender> {
        if self.contains(Feats::F) {
            Some(Gender::Feminine)
        } else if self.intersects(Feats::MASCULINE) {
            Some(Gender::Masculine)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Surface form.
    pub text: String,
    pub lemma: String,
    pub pos: Pos,
    pub feats: Feats,
    /// Dependency relation to the head, e.g. `aux:clitic`.
    pub dep: String,
    pub head: Option<usize>,
    pub index: usize,
}

impl Token {
    pub fn has(&self, feats: Feats) -> bool {
        self.feats.contains(feats)
    }

    pub fn lemma_lower(&self) -> String {
        self.lemma.to_lowercase()
    }

    pub fn dep_in(&self, relations: &[&str]) -> bool {
        relations.contains(&self.dep.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "RawSentence")]
pub struct Sentence {
    text: String,
    tokens: Vec<Token>,
    ents: Vec<String>,
}

impl Sentence {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    pub fn head_of(&self, token: &Token) -> Option<&Token> {
        token.head.and_then(|i| self.tokens.get(i))
    }

    /// Tokens whose head is `token`.
    pub fn children<'a>(&'a self, token: &'a Token) -> impl Iterator<Item = &'a Token> + 'a {
        self.tokens.iter().filter(move |t| t.head == Some(token.index))
    }

    /// Whether `text` is the surface form of a named-entity span.
    pub fn is_entity(&self, text: &str) -> bool {
        self.ents.iter().any(|e| e == text)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn builder() -> SentenceBuilder {
        SentenceBuilder::default()
    }
}

#[derive(Debug, Clone, Deserialize)]
struct RawToken {
    text: String,
    #[serde(default)]
    lemma: String,
    pos: Pos,
    #[serde(default)]
    feats: String,
    #[serde(default)]
    dep: String,
    #[serde(default)]
    head: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawSentence {
    #[serde(default)]
    text: String,
    tokens: Vec<RawToken>,
    #[serde(default)]
    ents: Vec<String>,
}

impl TryFrom<RawSentence> for Sentence {
    type Error = Error;

    fn try_from(raw: RawSentence) -> Result<Self> {
        let len = raw.tokens.len();
        let mut tokens = Vec::with_capacity(len);
        for (index, t) in raw.tokens.into_iter().enumerate() {
            let head = match t.head {
                Some(head) if head >= len => return Err(Error::InvalidHead { index, head, len }),
                // a token headed by itself is the root
                Some(head) if head == index => None,
                head => head,
            };
            tokens.push(Token {
                feats: Feats::parse(&t.feats),
                text: t.text,
                lemma: t.lemma,
                pos: t.pos,
                dep: t.dep,
                head,
                index,
            });
        }
        let text = if raw.text.is_empty() {
            tokens.iter().map(|t| t.text.as_str()).collect::<Vec<_>>().join(" ")
        } else {
            raw.text
        };
        Ok(Sentence { text, tokens, ents: raw.ents })
    }
}

/// Hand-built token graphs, for fixtures and for callers with their own tagger.
#[derive(Debug, Clone, Default)]
pub struct SentenceBuilder {
    raw: RawSentence,
}

impl SentenceBuilder {
    pub fn text(mut self, text: &str) -> Self {
        self.raw.text = text.to_string();
        self
    }

    pub fn token(mut self, text: &str, lemma: &str, pos: Pos, feats: &str, dep: &str, head: Option<usize>) -> Self {
        self.raw.tokens.push(RawToken {
            text: text.to_string(),
            lemma: lemma.to_string(),
            pos,
            feats: feats.to_string(),
            dep: dep.to_string(),
            head,
        });
        self
    }

    pub fn entity(mut self, text: &str) -> Self {
        self.raw.ents.push(text.to_string());
        self
    }

    pub fn build(self) -> Result<Sentence> {
        Sentence::try_from(self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_feats() {
        let feats = Feats::parse("sg:nom:m1");
        assert!(feats.contains(Feats::SG | Feats::NOM | Feats::M1));
        assert!(!feats.contains(Feats::PL));
        assert_eq!(feats.gender(), Some(Gender::Masculine));

        assert_eq!(Feats::parse("pl:inst:f").gender(), Some(Gender::Feminine));
        assert_eq!(Feats::parse("sg:gen:n").gender(), None);
        assert_eq!(Feats::parse(""), Feats::empty());
        assert_eq!(Feats::parse("praet:perf"), Feats::empty());
    }

    #[test]
    fn dotted_alternatives_only_contribute_masculine_gender() {
        let feats = Feats::parse("sg:nom.voc:m1.m2");
        assert!(feats.contains(Feats::M1 | Feats::M2 | Feats::SG));
        assert!(!feats.intersects(Feats::NOM | Feats::VOC));

        let feats = Feats::parse("sec:sg.pl");
        assert!(feats.contains(Feats::SEC));
        assert!(!feats.intersects(Feats::SG | Feats::PL));
        assert_eq!(Feats::parse("nom:m1.f").gender(), Some(Gender::Masculine));
    }

    #[test]
    fn feminine_wins_over_masculine() {
        assert_eq!(Feats::parse("m1:f").gender(), Some(Gender::Feminine));
    }

    #[test]
    fn build_sentence() {
        let sentence = Sentence::builder()
            .token("Byłam", "być", Pos::Verb, "sg:f", "root", None)
            .token("tam", "tam", Pos::Adv, "", "advmod", Some(0))
            .entity("Warszawa")
            .build()
            .unwrap();
        assert_eq!(sentence.len(), 2);
        assert_eq!(sentence.text(), "Byłam tam");
        let tam = sentence.get(1).unwrap();
        assert_eq!(sentence.head_of(tam).map(|t| t.index), Some(0));
        assert_eq!(sentence.head_of(sentence.get(0).unwrap()), None);
        assert_eq!(sentence.children(sentence.get(0).unwrap()).count(), 1);
        assert!(sentence.is_entity("Warszawa"));
        assert!(!sentence.is_entity("tam"));
    }

    #[test]
    fn self_headed_token_is_root() {
        let sentence = Sentence::builder()
            .token("Idziesz", "iść", Pos::Verb, "sg:sec", "ROOT", Some(0))
            .build()
            .unwrap();
        assert_eq!(sentence.get(0).unwrap().head, None);
    }

    #[test]
    fn head_out_of_range_is_rejected() {
        let ret = Sentence::builder()
            .token("Idziesz", "iść", Pos::Verb, "sg:sec", "root", Some(3))
            .build();
        match ret {
            Err(Error::InvalidHead { index: 0, head: 3, len: 1 }) => {}
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn deserialize_sentence() {
        let json = r#"{
            "text": "Jesteś miła.",
            "tokens": [
                {"text": "Jesteś", "lemma": "być", "pos": "AUX", "feats": "sg:sec", "dep": "cop", "head": 1},
                {"text": "miła", "lemma": "miły", "pos": "ADJ", "feats": "sg:nom:f", "dep": "root", "head": null},
                {"text": ".", "lemma": ".", "pos": "PUNCT", "feats": "", "dep": "punct", "head": 1}
            ],
            "ents": []
        }"#;
        let sentence: Sentence = serde_json::from_str(json).unwrap();
        assert_eq!(sentence.len(), 3);
        assert_eq!(sentence.get(1).unwrap().pos, Pos::Adj);
        assert!(sentence.get(0).unwrap().has(Feats::SEC | Feats::SG));

        let unknown_pos = r#"{"tokens": [{"text": "x", "pos": "INTERP"}]}"#;
        let sentence: Sentence = serde_json::from_str(unknown_pos).unwrap();
        assert_eq!(sentence.get(0).unwrap().pos, Pos::X);

        let bad_head = r#"{"tokens": [{"text": "x", "pos": "X", "head": 5}]}"#;
        assert!(serde_json::from_str::<Sentence>(bad_head).is_err());
    }
}
