//! Checks that suppress known false-positive configurations.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::sentence::{Feats, Pos, Sentence, Token};

static HONORIFIC_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"lad(ies|y)|gentlem[ea]n|(^| )(sir|mr[ .]|mrs[ .]|ms[ .]|herr)|lord|master|messieurs|dames|monsieur|madam[e ]|ma'am",
    )
    .expect("valid honorific pattern")
});

const NATION_STATE: &[&str] = &[
    "countr", "nation", "land", "state", "kingdom", "realm", "econom", "elsewhere", "rule",
];

/// "ci państwo" refers to particular people, not to the addressee.
pub fn has_determiner_child(sentence: &Sentence, token: &Token) -> bool {
    sentence.children(token).any(|t| t.dep == "det")
}

pub fn has_non_genitive_appositive(sentence: &Sentence, token: &Token) -> bool {
    sentence
        .children(token)
        .any(|t| t.dep == "appos" && !t.has(Feats::GEN))
}

/// Whether the English side names someone by title, in which case "pan"/"pani"
/// is a third-person reference rather than formal address.
pub fn mentions_honorific_title(english: &str) -> bool {
    HONORIFIC_TITLE.is_match(&english.to_lowercase())
}

/// Whether the English side talks about a state, disambiguating "państwo".
pub fn mentions_nation_state(english: &str) -> bool {
    let english = english.to_lowercase();
    NATION_STATE.iter().any(|w| english.contains(w))
}

/// True unless an adposition in `[i, j)` attaches to the token at `j`.
pub fn no_adposition_between(sentence: &Sentence, i: usize, j: usize) -> bool {
    !sentence
        .tokens()
        .iter()
        .skip(i)
        .take(j.saturating_sub(i))
        .any(|t| t.pos == Pos::Adp && t.head == Some(j))
}
