use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::error::{Error, Result};

/// One of the four tracked phenomena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Attribute {
    /// Grammatical gender of the speaker.
    SpGender,
    /// Grammatical gender of the interlocutor.
    IlGender,
    /// Grammatical number of the interlocutor.
    IlNumber,
    /// Register of address.
    Formality,
}

impl Attribute {
    /// Attributes in label order.
    pub const ALL: [Attribute; 4] = [
        Attribute::SpGender,
        Attribute::IlGender,
        Attribute::IlNumber,
        Attribute::Formality,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Attribute::SpGender => "SpGender",
            Attribute::IlGender => "IlGender",
            Attribute::IlNumber => "IlNumber",
            Attribute::Formality => "Formality",
        }
    }

    /// Markers of this attribute, in canonical order.
    pub fn allowed_values(self) -> &'static [Marker] {
        match self {
            Attribute::SpGender => &[Marker::SpFeminine, Marker::SpMasculine],
            Attribute::IlGender => &[Marker::IlFeminine, Marker::IlMasculine, Marker::IlMixed],
            Attribute::IlNumber => &[Marker::Singular, Marker::Plural],
            Attribute::Formality => &[Marker::Formal, Marker::Informal],
        }
    }
}

impl Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Marker {
    SpFeminine,
    SpMasculine,
    IlFeminine,
    IlMasculine,
    IlMixed,
    Singular,
    Plural,
    Formal,
    Informal,
}

impl Marker {
    /// Every marker, grouped by attribute in canonical order.
    pub const ALL: [Marker; 9] = [
        Marker::SpFeminine,
        Marker::SpMasculine,
        Marker::IlFeminine,
        Marker::IlMasculine,
        Marker::IlMixed,
        Marker::Singular,
        Marker::Plural,
        Marker::Formal,
        Marker::Informal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Marker::SpFeminine => "<sp:feminine>",
            Marker::SpMasculine => "<sp:masculine>",
            Marker::IlFeminine => "<il:feminine>",
            Marker::IlMasculine => "<il:masculine>",
            Marker::IlMixed => "<il:mixed>",
            Marker::Singular => "<singular>",
            Marker::Plural => "<plural>",
            Marker::Formal => "<formal>",
            Marker::Informal => "<informal>",
        }
    }

    pub fn attribute(self) -> Attribute {
        match self {
            Marker::SpFeminine | Marker::SpMasculine => Attribute::SpGender,
            Marker::IlFeminine | Marker::IlMasculine | Marker::IlMixed => Attribute::IlGender,
            Marker::Singular | Marker::Plural => Attribute::IlNumber,
            Marker::Formal | Marker::Informal => Attribute::Formality,
        }
    }

    /// The opposite value within the same attribute. `opposite` is an involution;
    /// `<il:mixed>` has no gendered counterpart and maps to itself.
    pub fn opposite(self) -> Marker {
        match self {
            Marker::SpFeminine => Marker::SpMasculine,
            Marker::SpMasculine => Marker::SpFeminine,
            Marker::IlFeminine => Marker::IlMasculine,
            Marker::IlMasculine => Marker::IlFeminine,
            Marker::IlMixed => Marker::IlMixed,
            Marker::Singular => Marker::Plural,
            Marker::Plural => Marker::Singular,
            Marker::Formal => Marker::Informal,
            Marker::Informal => Marker::Formal,
        }
    }

    /// The value an agreement check tests against. Same as [`Marker::opposite`],
    /// except that a mixed group is contrasted with a feminine one, since mixed
    /// groups surface with masculine agreement.
    pub fn contrast(self) -> Marker {
        match self {
            Marker::IlMixed => Marker::IlFeminine,
            other => other.opposite(),
        }
    }

    pub fn gender(party: Party, gender: Gender) -> Marker {
        match (party, gender) {
            (Party::Speaker, Gender::Feminine) => Marker::SpFeminine,
            (Party::Speaker, Gender::Masculine) => Marker::SpMasculine,
            (Party::Interlocutor, Gender::Feminine) => Marker::IlFeminine,
            (Party::Interlocutor, Gender::Masculine) => Marker::IlMasculine,
        }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Marker {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match Marker::ALL.iter().find(|m| m.as_str() == s) {
            Some(marker) => Ok(*marker),
            None => {
                log::error!("tried to identify a marker which does not exist: {s:?}");
                Err(Error::UnknownMarker(s.to_string()))
            }
        }
    }
}

/// Whose gender a rule is reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Party {
    Speaker,
    Interlocutor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Feminine,
    Masculine,
}

/// Attribute owning `marker`.
pub fn attribute_of(marker: &str) -> Result<Attribute> {
    Ok(marker.parse::<Marker>()?.attribute())
}

/// String form of [`Marker::opposite`]; the empty marker maps to itself.
pub fn opposite(marker: &str) -> Result<&'static str> {
    if marker.is_empty() {
        return Ok("");
    }
    Ok(marker.parse::<Marker>()?.opposite().as_str())
}

/// Space-joined markers in taxonomy order, whatever order they were given in.
pub fn canonical_order(markers: &[Marker]) -> String {
    Marker::ALL
        .iter()
        .filter(|m| markers.contains(m))
        .map(|m| m.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A value per attribute.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeMap<T> {
    slots: [T; 4],
}

impl<T> AttributeMap<T> {
    pub fn iter(&self) -> impl Iterator<Item = (Attribute, &T)> {
        Attribute::ALL.iter().copied().zip(self.slots.iter())
    }
}

impl<T> Index<Attribute> for AttributeMap<T> {
    type Output = T;

    fn index(&self, attribute: Attribute) -> &T {
        &self.slots[attribute as usize]
    }
}

impl<T> IndexMut<Attribute> for AttributeMap<T> {
    fn index_mut(&mut self, attribute: Attribute) -> &mut T {
        &mut self.slots[attribute as usize]
    }
}

/// The labeling of one sentence. Unset slots mean the phenomenon is unmarked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AttributeSet {
    slots: AttributeMap<Option<Marker>>,
}

impl AttributeSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, attribute: Attribute) -> Option<Marker> {
        self.slots[attribute]
    }

    /// Store `marker` in its own attribute's slot, replacing what was there.
    pub fn set(&mut self, marker: Marker) {
        self.slots[marker.attribute()] = Some(marker);
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(|(_, m)| m.is_none())
    }

    pub fn contains(&self, marker: Marker) -> bool {
        self.get(marker.attribute()) == Some(marker)
    }

    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.slots.iter().filter_map(|(_, m)| *m)
    }
}

impl Display for AttributeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (_, marker)) in self.slots.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            if let Some(marker) = marker {
                f.write_str(marker.as_str())?;
            }
        }
        Ok(())
    }
}

impl FromStr for AttributeSet {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.split(',').collect();
        if fields.len() != Attribute::ALL.len() {
            return Err(Error::MalformedLabel(s.to_string()));
        }
        let mut set = AttributeSet::new();
        for (attribute, field) in Attribute::ALL.iter().zip(fields) {
            let field = field.trim();
            if field.is_empty() {
                continue;
            }
            let marker: Marker = field.parse()?;
            if marker.attribute() != *attribute {
                return Err(Error::MalformedLabel(s.to_string()));
            }
            set.set(marker);
        }
        Ok(set)
    }
}
