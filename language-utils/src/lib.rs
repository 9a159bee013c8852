pub mod features;
pub mod language_model;
pub mod morphology;

pub use features::{Feature, FeatureKind, FeatureType};
pub use language_model::LanguageModel;
pub use morphology::{
    Definition, Homonym, Inflection, Lemma, Lexeme, Meaning, ResourceProvider,
};

#[derive(
    Copy,
    Clone,
    Debug,
    serde::Serialize,
    serde::Deserialize,
    Hash,
    PartialEq,
    Eq,
    Ord,
    PartialOrd,
    schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Latin,
    Greek,
    Arabic,
    Persian,
}

impl Language {
    pub fn iso_639_3(&self) -> &'static str {
        match self {
            Language::Latin => "lat",
            Language::Greek => "grc",
            Language::Arabic => "ara",
            Language::Persian => "per",
        }
    }

    /// Resolves a language code as the analysis service reports it.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "lat" | "la" => Some(Language::Latin),
            "grc" => Some(Language::Greek),
            "ara" | "ar" => Some(Language::Arabic),
            "per" | "fas" | "fa" => Some(Language::Persian),
            _ => None,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::Latin => write!(f, "Latin"),
            Language::Greek => write!(f, "Greek"),
            Language::Arabic => write!(f, "Arabic"),
            Language::Persian => write!(f, "Persian"),
        }
    }
}

pub const LANGUAGES: &[Language] = &[
    Language::Latin,
    Language::Greek,
    Language::Arabic,
    Language::Persian,
];

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Feature should have a non-empty value.")]
    EmptyFeatureValue,

    #[error("Word should not be empty.")]
    EmptyWord,

    #[error("Stem should not be empty.")]
    EmptyStem,

    #[error("Feature data cannot be empty.")]
    EmptyFeatureData,

    #[error("Features of types {0} and {1} cannot be set together.")]
    MixedFeatureKinds(FeatureKind, FeatureKind),

    #[error("Language \"{feature}\" of a feature does not match a language \"{target}\".")]
    LanguageMismatch { feature: Language, target: Language },
}
