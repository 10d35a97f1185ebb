use crate::{
    attributes::{AttributeSet, Marker, Party},
    sentence::{Feats, Pos, Sentence, Token},
    stopwords::ExclusionSet,
};

use super::{agree_with_head, set_gender};

const NUMBERS: [(Feats, Marker); 2] = [(Feats::SG, Marker::Singular), (Feats::PL, Marker::Plural)];

/// Relations under which an adjective attached to a second-person head
/// describes the addressee.
const ADDRESSEE_ADJ_RELATIONS: &[&str] = &[
    "xcomp:pred",
    "nsubj",
    "conj",
    "iobj",
    "xcomp",
    "amod",
    "vocative",
    "obl:cmpr",
];

/// "czym" + "ś" is "czymś" (something), not a second-person clitic.
fn is_indefinite_clitic(sentence: &Sentence, token: &Token) -> bool {
    token.text == "ś"
        && token.index > 0
        && sentence
            .get(token.index - 1)
            .map_or(false, |prev| prev.text == "czym" || prev.text == "kim")
}

/// Detect informal address from second-person forms and read the
/// interlocutor's number and gender off them. Later matches overwrite earlier
/// ones.
pub fn check_interlocutor<S: ExclusionSet>(sentence: &Sentence, stopwords: &S, attrs: &mut AttributeSet) {
    for token in sentence.tokens() {
        if let Some(head) = sentence.head_of(token) {
            for (number, marker) in NUMBERS {
                if !(head.has(Feats::SEC | number) && matches!(head.pos, Pos::Verb | Pos::Pron)) {
                    continue;
                }
                attrs.set(marker);
                attrs.set(Marker::Informal);

                if token.pos == Pos::Adj && token.has(number) && token.dep_in(ADDRESSEE_ADJ_RELATIONS) {
                    set_gender(token, Party::Interlocutor, attrs);
                }
                if token.pos == Pos::Noun
                    && (token.dep == "vocative" || (token.dep_in(&["appos", "obj"]) && token.has(Feats::VOC)))
                    && !sentence.is_entity(&token.text)
                {
                    set_gender(token, Party::Interlocutor, attrs);
                }
            }
        }

        match token.lemma_lower().as_str() {
            "twój" => {
                attrs.set(Marker::Singular);
                attrs.set(Marker::Informal);
            }
            "wasz" => {
                attrs.set(Marker::Plural);
                attrs.set(Marker::Informal);
            }
            _ => {}
        }

        let mut addressed = false;
        for (number, marker) in NUMBERS {
            if token.has(Feats::SEC | number) && !is_indefinite_clitic(sentence, token) {
                attrs.set(marker);
                attrs.set(Marker::Informal);
                addressed = true;
            }
        }
        if addressed {
            agree_with_head(sentence, token, stopwords, Party::Interlocutor, attrs);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stopwords::Stopwords;

    fn interlocutor(sentence: &Sentence) -> String {
        let mut attrs = AttributeSet::new();
        check_interlocutor(sentence, &Stopwords::default(), &mut attrs);
        attrs.to_string()
    }

    #[test]
    fn past_tense_clitic() {
        // Byłaś tam?
        let s = Sentence::builder()
            .token("Była", "być", Pos::Verb, "sg:f:imperf", "root", None)
            .token("ś", "być", Pos::Aux, "sg:sec:imperf", "aux:clitic", Some(0))
            .token("tam", "tam", Pos::Adv, "", "advmod", Some(0))
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",<il:feminine>,<singular>,<informal>");
    }

    #[test]
    fn plural_verb_without_gender() {
        // Idziecie?
        let s = Sentence::builder()
            .token("Idziecie", "iść", Pos::Verb, "pl:sec:imperf", "root", None)
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",,<plural>,<informal>");
    }

    #[test]
    fn adjective_attached_to_second_person_head() {
        // Wyglądasz zmęczona
        let s = Sentence::builder()
            .token("Wyglądasz", "wyglądać", Pos::Verb, "sg:sec:imperf", "root", None)
            .token("zmęczona", "zmęczony", Pos::Adj, "sg:nom:f:pos", "xcomp:pred", Some(0))
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",<il:feminine>,<singular>,<informal>");
    }

    #[test]
    fn adjective_with_other_number_is_ignored() {
        let s = Sentence::builder()
            .token("Wyglądasz", "wyglądać", Pos::Verb, "sg:sec:imperf", "root", None)
            .token("zmęczone", "zmęczony", Pos::Adj, "pl:nom:f:pos", "xcomp:pred", Some(0))
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",,<singular>,<informal>");
    }

    #[test]
    fn vocative_noun() {
        // Chodź, kochanie / Chodź, Anno
        let s = Sentence::builder()
            .token("Chodź", "chodzić", Pos::Verb, "sg:sec:imperf", "root", None)
            .token("synu", "syn", Pos::Noun, "sg:voc:m1", "vocative", Some(0))
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",<il:masculine>,<singular>,<informal>");

        let s = Sentence::builder()
            .token("Chodź", "chodzić", Pos::Verb, "sg:sec:imperf", "root", None)
            .token("Anno", "Anna", Pos::Noun, "sg:voc:f", "vocative", Some(0))
            .entity("Anno")
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",,<singular>,<informal>");
    }

    #[test]
    fn object_needs_vocative_case() {
        let s = Sentence::builder()
            .token("Widzisz", "widzieć", Pos::Verb, "sg:sec:imperf", "root", None)
            .token("siostrę", "siostra", Pos::Noun, "sg:acc:f", "obj", Some(0))
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",,<singular>,<informal>");
    }

    #[test]
    fn possessives() {
        let s = Sentence::builder()
            .token("Twój", "twój", Pos::Det, "sg:nom:m3", "det", Some(1))
            .token("dom", "dom", Pos::Noun, "sg:nom:m3", "root", None)
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",,<singular>,<informal>");

        let s = Sentence::builder()
            .token("Wasz", "wasz", Pos::Det, "sg:nom:m3", "det", Some(1))
            .token("dom", "dom", Pos::Noun, "sg:nom:m3", "root", None)
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",,<plural>,<informal>");
    }

    #[test]
    fn indefinite_clitic_is_not_address() {
        // Czymś się martwi
        let s = Sentence::builder()
            .token("czym", "co", Pos::Pron, "sg:inst:n", "obl", Some(3))
            .token("ś", "ś", Pos::Part, "sg:sec", "advmod", Some(0))
            .token("się", "się", Pos::Pron, "", "expl", Some(3))
            .token("martwi", "martwić", Pos::Verb, "sg:ter:imperf", "root", None)
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",,,");
    }

    #[test]
    fn second_person_copula_with_instrumental_noun() {
        // Jesteś nauczycielką
        let s = Sentence::builder()
            .token("Jesteś", "być", Pos::Aux, "sg:sec:imperf", "cop", Some(1))
            .token("nauczycielką", "nauczycielka", Pos::Noun, "sg:inst:f", "root", None)
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",<il:feminine>,<singular>,<informal>");
    }

    #[test]
    fn adjective_attached_to_second_person_pronoun() {
        // Ty sama
        let s = Sentence::builder()
            .token("Ty", "ty", Pos::Pron, "sg:nom:sec", "root", None)
            .token("sama", "sam", Pos::Adj, "sg:nom:f", "amod", Some(0))
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",<il:feminine>,<singular>,<informal>");

        // On sam
        let s = Sentence::builder()
            .token("On", "on", Pos::Pron, "sg:nom:m1:ter", "root", None)
            .token("sam", "sam", Pos::Adj, "sg:nom:m1", "amod", Some(0))
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",,,");
    }

    #[test]
    fn second_person_copula_with_adjective() {
        // Jesteś miła
        let s = Sentence::builder()
            .token("Jesteś", "być", Pos::Aux, "sg:sec:imperf", "cop", Some(1))
            .token("miła", "miły", Pos::Adj, "sg:nom:f", "root", None)
            .build()
            .unwrap();
        assert_eq!(interlocutor(&s), ",<il:feminine>,<singular>,<informal>");
    }
}
