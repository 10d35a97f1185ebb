//! Render a label as an English description of the conversation, e.g.
//! `<sp:feminine>,<il:masculine>,<singular>,<informal>` becomes
//! "I am a woman. I am having an informal chat with a man."

use crate::attributes::{Attribute, AttributeSet, Marker};

fn speaker(labels: &AttributeSet) -> &'static str {
    match labels.get(Attribute::SpGender) {
        Some(Marker::SpFeminine) => "I am a woman.",
        Some(Marker::SpMasculine) => "I am a man.",
        _ => "",
    }
}

fn register(labels: &AttributeSet) -> &'static str {
    match labels.get(Attribute::Formality) {
        Some(Marker::Informal) => "I am having an informal chat with",
        Some(Marker::Formal)
            if labels.get(Attribute::IlGender).is_none() && labels.get(Attribute::IlNumber).is_none() =>
        {
            "I am having a formal conversation."
        }
        Some(Marker::Formal) => "I am having a formal conversation with",
        _ => "I am talking to",
    }
}

fn interlocutor(labels: &AttributeSet) -> &'static str {
    match (labels.get(Attribute::IlGender), labels.get(Attribute::IlNumber)) {
        (Some(Marker::IlMasculine), Some(Marker::Singular)) => " a man.",
        (Some(Marker::IlFeminine), Some(Marker::Singular)) => " a woman.",
        (Some(Marker::IlMasculine), Some(Marker::Plural)) => " a group of men.",
        (Some(Marker::IlFeminine), Some(Marker::Plural)) => " a group of women.",
        (_, Some(Marker::Singular)) => " a person.",
        (_, Some(Marker::Plural)) => " a group of people.",
        _ => "",
    }
}

/// Natural-language description of `labels`; empty when nothing is marked.
pub fn describe(labels: &AttributeSet) -> String {
    let addressed = [Attribute::IlGender, Attribute::IlNumber, Attribute::Formality]
        .iter()
        .any(|a| labels.get(*a).is_some());
    if !addressed {
        return speaker(labels).to_string();
    }
    format!("{} {}{}", speaker(labels), register(labels), interlocutor(labels))
        .trim()
        .to_string()
}
