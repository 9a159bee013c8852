/*
 Hierarchical structure of the result of a morphological analysis:

 Homonym (every reading of one surface form)
    Lexeme 1
        Lemma (the dictionary headword)
        Inflection 1 (stem, suffix, grammatical features)
        Inflection 2
        Meaning (short definitions)
    Lexeme 2
        ...
*/
use std::collections::BTreeMap;

use schemars::JsonSchema;

use crate::features::{Feature, FeatureKind};
use crate::{Language, ModelError};

pub type FeatureMap = BTreeMap<FeatureKind, Vec<Feature>>;

/// Checks that `features` is a non-empty run of one kind in `language` and returns the kind.
fn check_features(features: &[Feature], language: Language) -> Result<FeatureKind, ModelError> {
    let first = features.first().ok_or(ModelError::EmptyFeatureData)?;
    for feature in features {
        if feature.kind != first.kind {
            return Err(ModelError::MixedFeatureKinds(first.kind, feature.kind));
        }
        if feature.language != language {
            return Err(ModelError::LanguageMismatch {
                feature: feature.language,
                target: language,
            });
        }
    }
    Ok(first.kind)
}

/// A canonical dictionary headword.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, JsonSchema)]
pub struct Lemma {
    pub word: String,
    pub language: Language,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub principal_parts: Vec<String>,
    pub features: FeatureMap,
}

impl Lemma {
    pub fn new(word: impl Into<String>, language: Language) -> Result<Self, ModelError> {
        Self::with_principal_parts(word, language, Vec::new())
    }

    pub fn with_principal_parts(
        word: impl Into<String>,
        language: Language,
        principal_parts: Vec<String>,
    ) -> Result<Self, ModelError> {
        let word = word.into();
        if word.is_empty() {
            return Err(ModelError::EmptyWord);
        }
        Ok(Self {
            word,
            language,
            principal_parts,
            features: FeatureMap::new(),
        })
    }

    /// Replaces whatever values the lemma had for the kind of `features`.
    pub fn set_feature(&mut self, features: Vec<Feature>) -> Result<(), ModelError> {
        let kind = check_features(&features, self.language)?;
        self.features.insert(kind, features);
        Ok(())
    }

    pub fn feature(&self, kind: FeatureKind) -> &[Feature] {
        self.features.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_feature(&self, kind: FeatureKind) -> bool {
        self.features.contains_key(&kind)
    }
}

/// One inflected form of a word: stem, optional suffix and its grammatical features.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, JsonSchema)]
pub struct Inflection {
    pub stem: String,
    pub suffix: Option<String>,
    pub language: Language,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub features: FeatureMap,
}

impl Inflection {
    pub fn new(stem: impl Into<String>, language: Language) -> Result<Self, ModelError> {
        let stem = stem.into();
        if stem.is_empty() {
            return Err(ModelError::EmptyStem);
        }
        Ok(Self {
            stem,
            suffix: None,
            language,
            example: None,
            features: FeatureMap::new(),
        })
    }

    pub fn set_feature(&mut self, features: Vec<Feature>) -> Result<(), ModelError> {
        let kind = check_features(&features, self.language)?;
        self.features.insert(kind, features);
        Ok(())
    }

    pub fn feature(&self, kind: FeatureKind) -> &[Feature] {
        self.features.get(&kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The full form, stem plus suffix.
    pub fn form(&self) -> String {
        match &self.suffix {
            Some(suffix) => format!("{}{suffix}", self.stem),
            None => self.stem.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, JsonSchema)]
pub struct Definition {
    pub text: String,
    /// ISO 639-3 code of the definition text, not of the defined word.
    pub language: String,
    pub format: String,
    pub lemma_text: String,
}

impl Definition {
    pub const PLAIN_TEXT: &'static str = "text/plain";

    pub fn new(
        text: impl Into<String>,
        language: impl Into<String>,
        lemma_text: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            format: Self::PLAIN_TEXT.to_string(),
            lemma_text: lemma_text.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, JsonSchema)]
pub struct Meaning {
    pub short_defs: Vec<Definition>,
}

impl Meaning {
    pub fn append_short_defs(&mut self, definitions: impl IntoIterator<Item = Definition>) {
        self.short_defs.extend(definitions);
    }

    pub fn is_empty(&self) -> bool {
        self.short_defs.is_empty()
    }
}

/// Where an analysis came from and under what terms.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, JsonSchema)]
pub struct ResourceProvider {
    pub uri: String,
    pub rights: String,
}

impl ResourceProvider {
    pub fn new(uri: impl Into<String>, rights: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            rights: rights.into(),
        }
    }
}

impl std::fmt::Display for ResourceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.rights)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, JsonSchema)]
pub struct Lexeme {
    pub lemma: Lemma,
    pub inflections: Vec<Inflection>,
    pub meaning: Meaning,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ResourceProvider>,
}

impl Lexeme {
    pub fn new(lemma: Lemma, inflections: Vec<Inflection>) -> Self {
        Self {
            lemma,
            inflections,
            meaning: Meaning::default(),
            provider: None,
        }
    }

    pub fn with_provider(mut self, provider: ResourceProvider) -> Self {
        self.provider = Some(provider);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, JsonSchema)]
pub struct Homonym {
    pub lexemes: Vec<Lexeme>,
    pub target_word: Option<String>,
}

impl Homonym {
    pub fn new(lexemes: Vec<Lexeme>, target_word: Option<String>) -> Self {
        Self {
            lexemes,
            target_word,
        }
    }

    /// All lemmas of a homonym share a language, so the first one speaks for the rest.
    pub fn language(&self) -> Option<Language> {
        self.lexemes.first().map(|lexeme| lexeme.lemma.language)
    }

    pub fn lexemes_for(&self, word: &str) -> impl Iterator<Item = &Lexeme> {
        self.lexemes
            .iter()
            .filter(move |lexeme| lexeme.lemma.word == word)
    }
}
