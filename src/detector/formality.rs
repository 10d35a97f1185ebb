use crate::{
    attributes::{AttributeSet, Marker, Party},
    error::{Error, Result},
    sentence::{Feats, Sentence},
};

use super::{
    guards::{has_determiner_child, has_non_genitive_appositive, mentions_honorific_title, mentions_nation_state},
    set_gender,
};

/// Look for formal address. Returns `Ok(true)` once the interlocutor has been
/// resolved by an honorific ("pan", "pani", "pański", "państwo"); the caller
/// must stop there.
///
/// A bare "proszę" only marks the register and does not stop the scan.
pub fn check_if_formal(sentence: &Sentence, english: &str, attrs: &mut AttributeSet) -> Result<bool> {
    let english_lower = english.to_lowercase();
    // "proszę" translating "please"/"ask" says nothing about the register
    let literal_request = english_lower.contains("please") || english_lower.contains("ask");
    let titled = mentions_honorific_title(english);

    for token in sentence.tokens() {
        if !literal_request && token.text.to_lowercase() == "proszę" {
            attrs.set(Marker::Formal);
        }

        let lemma = token.lemma_lower();
        if (lemma == "pan" || lemma == "pani")
            && !has_determiner_child(sentence, token)
            && !has_non_genitive_appositive(sentence, token)
            && !titled
        {
            attrs.set(Marker::Formal);
            set_gender(token, Party::Interlocutor, attrs);
            let number = if token.has(Feats::SG) {
                Marker::Singular
            } else if token.has(Feats::PL) {
                Marker::Plural
            } else {
                log::error!("honorific {:?} carries no number in {:?}", token.text, sentence.text());
                return Err(Error::MissingFeature { token: token.text.clone(), feature: "number" });
            };
            attrs.set(number);
            return Ok(true);
        } else if lemma == "pański" {
            attrs.set(Marker::Formal);
            attrs.set(Marker::Singular);
            attrs.set(Marker::IlMasculine);
            return Ok(true);
        }

        if token.lemma == "państwo" && !has_determiner_child(sentence, token) && !mentions_nation_state(english) {
            attrs.set(Marker::Formal);
            attrs.set(Marker::Plural);
            attrs.set(Marker::IlMixed);
            return Ok(true);
        }
    }
    Ok(false)
}
