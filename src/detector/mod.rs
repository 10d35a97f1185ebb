//! Rule cascade assigning context markers to a parsed sentence.
//!
//! The rules run in a fixed order: speaker gender, formality, interlocutor.
//! A formal match resolves the interlocutor and ends the cascade.

pub mod formality;
pub mod guards;
pub mod interlocutor;
pub mod speaker;

use crate::{
    attributes::{AttributeSet, Marker, Party},
    dataset::DetectorSample,
    error::{Error, Result},
    evaluation::{Evaluation, F1_THRESHOLD},
    parser::MorphParser,
    sentence::{Feats, Pos, Sentence, Token},
    stopwords::{ExclusionSet, Stopwords},
};

pub use formality::check_if_formal;
pub use interlocutor::check_interlocutor;
pub use speaker::check_speaker_gender;

const AUX_RELATIONS: &[&str] = &["aux:clitic", "aux", "aux:pass"];
const COPULA_RELATIONS: &[&str] = &["aux:clitic", "cop"];
const ADJ_PREDICATE_RELATIONS: &[&str] = &["aux:clitic", "aux:pass", "cop", "obl:cmpr", "obl"];

/// Write the gender of `token`, if it has one, into the slot of `party`.
pub(crate) fn set_gender(token: &Token, party: Party, attrs: &mut AttributeSet) {
    if let Some(gender) = token.feats.gender() {
        attrs.set(Marker::gender(party, gender));
    }
}

/// Read `party`'s gender off the predicate a person-marked `token` attaches to:
/// a participle ("byłam"), an instrumental noun ("jesteś lekarką") or an
/// adjective ("jestem zmęczony").
pub(crate) fn agree_with_head<S: ExclusionSet>(
    sentence: &Sentence,
    token: &Token,
    stopwords: &S,
    party: Party,
    attrs: &mut AttributeSet,
) {
    let head = match sentence.head_of(token) {
        Some(head) => head,
        None => return,
    };
    match head.pos {
        Pos::Verb if token.dep_in(AUX_RELATIONS) => set_gender(head, party, attrs),
        Pos::Noun
            if head.has(Feats::INST)
                && token.dep_in(COPULA_RELATIONS)
                && guards::no_adposition_between(sentence, token.index, head.index)
                && !stopwords.contains(&head.lemma) =>
        {
            set_gender(head, party, attrs)
        }
        Pos::Adj if token.dep_in(ADJ_PREDICATE_RELATIONS) => set_gender(head, party, attrs),
        _ => {}
    }
}

pub struct Detector<P> {
    parser: P,
    stopwords: Stopwords,
}

impl<P> Detector<P> {
    pub fn new(parser: P, stopwords: Stopwords) -> Self {
        Self { parser, stopwords }
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Identify the markers of every phenomenon in `sentence`. A slot left
    /// unset means the sentence is ambivalent with respect to it.
    pub fn predict_types(&self, sentence: &Sentence, english: &str) -> Result<AttributeSet> {
        let mut attrs = AttributeSet::new();
        check_speaker_gender(sentence, &self.stopwords, &mut attrs);
        if check_if_formal(sentence, english, &mut attrs)? {
            return Ok(attrs);
        }
        check_interlocutor(sentence, &self.stopwords, &mut attrs);
        Ok(attrs)
    }
}

impl<P: MorphParser> Detector<P> {
    /// Parse `text`, falling back to an empty sentence when the parser fails.
    pub fn parse_sentence(&self, text: &str) -> Sentence {
        match self.parser.parse(text) {
            Ok(sentence) => sentence,
            Err(e) => {
                log::info!("{e}; skipping sentence: {text}");
                Sentence::default()
            }
        }
    }

    pub fn predict_pair(&self, polish: &str, english: &str) -> Result<AttributeSet> {
        let sentence = self.parse_sentence(polish);
        self.predict_types(&sentence, english)
    }

    /// Label strings for every sample, in order.
    pub fn annotate(&self, samples: &[DetectorSample]) -> Result<Vec<String>> {
        samples
            .iter()
            .map(|s| Ok(self.predict_pair(&s.polish, &s.english)?.to_string()))
            .collect()
    }

    /// Check the detector against a manually labelled sample before trusting
    /// it with a corpus.
    pub fn test_performance(&self, samples: &[DetectorSample]) -> Result<()> {
        log::info!("running detector sanity check on {} samples", samples.len());
        let annotations = self.annotate(samples)?;
        let mut evaluation = Evaluation::default();
        for (prediction, sample) in annotations.iter().zip(samples) {
            evaluation.accumulate(&sample.manually_labelled_context_csv, prediction);
        }
        let estimation = evaluation.evaluate();
        log::info!("{}", estimation);
        if estimation.f1 > F1_THRESHOLD {
            log::info!("threshold reached");
            Ok(())
        } else {
            Err(Error::ThresholdNotReached { f1: estimation.f1 })
        }
    }
}
