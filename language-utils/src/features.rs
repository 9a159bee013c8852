/// Grammatical features and the per-language definitions of their values
use crate::{Language, ModelError};
use schemars::JsonSchema;

/// The kinds of feature a lemma or inflection can carry.
///
/// Names are the canonical library names. A few of them (`stemtype`, `derivtype`, `morph`)
/// come straight from the analysis engines and have no counterpart in traditional grammar.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    serde::Serialize,
    serde::Deserialize,
    JsonSchema,
)]
pub enum FeatureKind {
    #[serde(rename = "part of speech")]
    PartOfSpeech,
    #[serde(rename = "case")]
    Case,
    #[serde(rename = "gender")]
    Gender,
    #[serde(rename = "number")]
    Number,
    #[serde(rename = "declension")]
    Declension,
    #[serde(rename = "conjugation")]
    Conjugation,
    #[serde(rename = "tense")]
    Tense,
    #[serde(rename = "voice")]
    Voice,
    #[serde(rename = "mood")]
    Mood,
    #[serde(rename = "person")]
    Person,
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "frequency")]
    Frequency,
    #[serde(rename = "source")]
    Source,
    #[serde(rename = "area")]
    Area,
    #[serde(rename = "age")]
    Age,
    #[serde(rename = "geo")]
    Geo,
    #[serde(rename = "note")]
    Note,
    #[serde(rename = "pronunciation")]
    Pronunciation,
    #[serde(rename = "dialect")]
    Dialect,
    #[serde(rename = "stemtype")]
    StemType,
    #[serde(rename = "derivtype")]
    DerivType,
    #[serde(rename = "morph")]
    Morph,
}

impl FeatureKind {
    pub fn name(&self) -> &'static str {
        match self {
            FeatureKind::PartOfSpeech => "part of speech",
            FeatureKind::Case => "case",
            FeatureKind::Gender => "gender",
            FeatureKind::Number => "number",
            FeatureKind::Declension => "declension",
            FeatureKind::Conjugation => "conjugation",
            FeatureKind::Tense => "tense",
            FeatureKind::Voice => "voice",
            FeatureKind::Mood => "mood",
            FeatureKind::Person => "person",
            FeatureKind::Type => "type",
            FeatureKind::Frequency => "frequency",
            FeatureKind::Source => "source",
            FeatureKind::Area => "area",
            FeatureKind::Age => "age",
            FeatureKind::Geo => "geo",
            FeatureKind::Note => "note",
            FeatureKind::Pronunciation => "pronunciation",
            FeatureKind::Dialect => "dialect",
            FeatureKind::StemType => "stemtype",
            FeatureKind::DerivType => "derivtype",
            FeatureKind::Morph => "morph",
        }
    }

    /// Kinds that describe a dictionary entry rather than a grammatical category.
    /// Languages accept any value for these.
    pub const METADATA: &'static [FeatureKind] = &[
        FeatureKind::Frequency,
        FeatureKind::Source,
        FeatureKind::Area,
        FeatureKind::Age,
        FeatureKind::Geo,
        FeatureKind::Note,
        FeatureKind::Pronunciation,
        FeatureKind::Dialect,
        FeatureKind::StemType,
        FeatureKind::DerivType,
        FeatureKind::Morph,
    ];
}

impl std::fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

pub const DEFAULT_SORT_ORDER: u32 = 1;

/// A typed grammatical attribute value, e.g. case=nominative.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, JsonSchema)]
pub struct Feature {
    pub value: String,
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    pub language: Language,
    pub sort_order: u32,
}

impl Feature {
    pub fn new(
        value: impl Into<String>,
        kind: FeatureKind,
        language: Language,
    ) -> Result<Self, ModelError> {
        Self::with_sort_order(value, kind, language, DEFAULT_SORT_ORDER)
    }

    pub fn with_sort_order(
        value: impl Into<String>,
        kind: FeatureKind,
        language: Language,
        sort_order: u32,
    ) -> Result<Self, ModelError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ModelError::EmptyFeatureValue);
        }
        Ok(Self {
            value,
            kind,
            language,
            sort_order,
        })
    }

    pub fn has_value(&self, value: &str) -> bool {
        self.value == value
    }
}

/// Definition of one feature kind within a language: which values are canonical and in
/// what order they sort.
///
/// Values are stored in groups. Values inside a group share one order index, so
/// `[[masculine, feminine], neuter]` puts masculine and feminine in the same bin when
/// sorting and grouping. An unrestricted type accepts any value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureType {
    kind: FeatureKind,
    language: Language,
    groups: Vec<Vec<String>>,
    unrestricted: bool,
}

impl FeatureType {
    pub fn new(kind: FeatureKind, language: Language, groups: Vec<Vec<String>>) -> Self {
        Self {
            kind,
            language,
            groups,
            unrestricted: false,
        }
    }

    /// Shorthand for a type whose values each have their own order index.
    pub fn with_values(kind: FeatureKind, language: Language, values: &[&str]) -> Self {
        let groups = values.iter().map(|v| vec![v.to_string()]).collect();
        Self::new(kind, language, groups)
    }

    pub fn unrestricted(kind: FeatureKind, language: Language) -> Self {
        Self {
            kind,
            language,
            groups: Vec::new(),
            unrestricted: true,
        }
    }

    pub fn kind(&self) -> FeatureKind {
        self.kind
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn is_unrestricted(&self) -> bool {
        self.unrestricted
    }

    /// True if `value` is one of the canonical values of this type.
    pub fn has(&self, value: &str) -> bool {
        self.order_index(value).is_some()
    }

    /// Builds a feature of this type. The value is not checked against the canonical
    /// list; callers decide whether a non-canonical value is acceptable.
    pub fn get(&self, value: &str, sort_order: u32) -> Result<Feature, ModelError> {
        Feature::with_sort_order(value, self.kind, self.language, sort_order)
    }

    pub fn order_index(&self, value: &str) -> Option<usize> {
        self.groups
            .iter()
            .position(|group| group.iter().any(|v| v == value))
    }
}
