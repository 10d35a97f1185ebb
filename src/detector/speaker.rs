use crate::{
    attributes::{AttributeSet, Party},
    sentence::{Feats, Sentence},
    stopwords::ExclusionSet,
};

use super::agree_with_head;

/// Read the speaker's gender off predicates agreeing with a first-person
/// singular form ("byłam", "jestem zmęczony", "jestem lekarką").
///
/// Every qualifying token is visited and the last one decides the slot.
pub fn check_speaker_gender<S: ExclusionSet>(sentence: &Sentence, stopwords: &S, attrs: &mut AttributeSet) {
    for token in sentence.tokens() {
        if token.has(Feats::SG | Feats::PRI) {
            agree_with_head(sentence, token, stopwords, Party::Speaker, attrs);
        }
    }
}
