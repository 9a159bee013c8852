//! Translation of one analysis engine's vocabulary into library feature values.

use language_utils::features::DEFAULT_SORT_ORDER;
use language_utils::{Feature, FeatureKind, Language, LanguageModel, Lemma, ModelError};
use rustc_hash::FxHashMap;

use crate::error::Error;

/// Turns the headword text of a dictionary entry into a lemma.
/// `Ok(None)` means the text holds no usable headword and the entry is dropped.
pub type LemmaParser = fn(&str, Language) -> Result<Option<Lemma>, ModelError>;

pub fn plain_lemma(text: &str, language: Language) -> Result<Option<Lemma>, ModelError> {
    Lemma::new(text, language).map(Some)
}

/// Provider value -> one or more canonical values of a single feature kind.
#[derive(Debug, Clone, Default)]
pub struct FeatureImporter {
    hash: FxHashMap<String, Vec<String>>,
}

impl FeatureImporter {
    /// Maps a provider value to a group of library values. Mapping the same provider value
    /// twice overwrites the earlier mapping.
    pub fn map(&mut self, provider_value: &str, library_values: &[&str]) -> &mut Self {
        self.hash.insert(
            provider_value.to_string(),
            library_values.iter().map(|v| v.to_string()).collect(),
        );
        self
    }

    pub fn has(&self, provider_value: &str) -> bool {
        self.hash.contains_key(provider_value)
    }

    pub fn get(&self, provider_value: &str) -> Option<&[String]> {
        self.hash.get(provider_value).map(Vec::as_slice)
    }
}

/// Everything needed to import the output of one engine: the language it analyzes, the
/// value mappings for each feature kind and how it writes headwords.
#[derive(Debug, Clone)]
pub struct ImportData {
    engine: String,
    model: LanguageModel,
    importers: FxHashMap<FeatureKind, FeatureImporter>,
    lemma_parser: LemmaParser,
}

impl ImportData {
    pub fn new(language: Language, engine: &str) -> Self {
        Self {
            engine: engine.to_string(),
            model: LanguageModel::for_language(language),
            importers: FxHashMap::default(),
            lemma_parser: plain_lemma,
        }
    }

    pub fn engine(&self) -> &str {
        &self.engine
    }

    pub fn language(&self) -> Language {
        self.model.language()
    }

    pub fn model(&self) -> &LanguageModel {
        &self.model
    }

    /// The importer for a feature kind, created empty on first use.
    pub fn add_feature(&mut self, kind: FeatureKind) -> &mut FeatureImporter {
        self.importers.entry(kind).or_default()
    }

    pub fn set_lemma_parser(&mut self, parser: LemmaParser) {
        self.lemma_parser = parser;
    }

    pub fn parse_lemma(&self, text: &str) -> Result<Option<Lemma>, ModelError> {
        (self.lemma_parser)(text, self.language())
    }

    /// Strict lookup: a value that is neither mapped nor canonical is an error.
    pub fn get(
        &self,
        kind: FeatureKind,
        provider_value: &str,
        sort_order: Option<u32>,
    ) -> Result<Vec<Feature>, Error> {
        self.get_with(kind, provider_value, sort_order, false)
    }

    /// Maps a provider value to library features.
    ///
    /// Precedence: an explicit mapping, then the value itself when it is canonical for the
    /// kind (or the kind takes any value), then the value itself when `allow_unknown` is set.
    /// Anything else is an unknown value.
    pub fn get_with(
        &self,
        kind: FeatureKind,
        provider_value: &str,
        sort_order: Option<u32>,
        allow_unknown: bool,
    ) -> Result<Vec<Feature>, Error> {
        let language = self.language();
        let sort_order = sort_order.unwrap_or(DEFAULT_SORT_ORDER);

        if let Some(mapped) = self
            .importers
            .get(&kind)
            .and_then(|importer| importer.get(provider_value))
        {
            return mapped
                .iter()
                .map(|value| {
                    Feature::with_sort_order(value, kind, language, sort_order).map_err(Error::from)
                })
                .collect();
        }

        let known = self
            .model
            .feature_type(kind)
            .is_some_and(|t| t.has(provider_value) || t.is_unrestricted());
        if known || allow_unknown {
            return Ok(vec![Feature::with_sort_order(
                provider_value,
                kind,
                language,
                sort_order,
            )?]);
        }

        Err(Error::UnknownValue {
            value: provider_value.to_string(),
            kind,
            language,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latin() -> ImportData {
        let mut data = ImportData::new(Language::Latin, "test");
        data.add_feature(FeatureKind::Gender)
            .map("common", &["masculine", "feminine"])
            .map("m", &["masculine"]);
        data
    }

    #[test]
    fn test_explicit_mapping_takes_sort_order() {
        let features = latin()
            .get(FeatureKind::Gender, "common", Some(4))
            .unwrap();
        assert_eq!(
            features,
            vec![
                Feature::with_sort_order("masculine", FeatureKind::Gender, Language::Latin, 4)
                    .unwrap(),
                Feature::with_sort_order("feminine", FeatureKind::Gender, Language::Latin, 4)
                    .unwrap(),
            ]
        );
    }

    #[test]
    fn test_explicit_mapping_wins_over_identity() {
        let mut data = latin();
        data.add_feature(FeatureKind::Gender)
            .map("neuter", &["masculine"]);
        let features = data.get(FeatureKind::Gender, "neuter", None).unwrap();
        assert_eq!(features[0].value, "masculine");
    }

    #[test]
    fn test_canonical_value_without_mapping() {
        let features = latin().get(FeatureKind::Gender, "neuter", None).unwrap();
        assert_eq!(
            features,
            vec![Feature::new("neuter", FeatureKind::Gender, Language::Latin).unwrap()]
        );
    }

    #[test]
    fn test_unrestricted_kind_accepts_anything() {
        let features = latin()
            .get(FeatureKind::Source, "Ox.Lat.Dict.", None)
            .unwrap();
        assert_eq!(features[0].value, "Ox.Lat.Dict.");
    }

    #[test]
    fn test_unknown_value() {
        let err = latin()
            .get(FeatureKind::Gender, "animate", None)
            .unwrap_err();
        assert!(matches!(err, Error::UnknownValue { .. }));
        let message = err.to_string();
        assert!(message.to_lowercase().contains("unknown value"));
        assert!(message.contains("'animate'"));
        assert!(message.contains("gender"));
        assert!(message.contains("Latin"));
    }

    #[test]
    fn test_unknown_value_allowed() {
        let features = latin()
            .get_with(FeatureKind::Gender, "animate", Some(2), true)
            .unwrap();
        assert_eq!(
            features,
            vec![
                Feature::with_sort_order("animate", FeatureKind::Gender, Language::Latin, 2)
                    .unwrap()
            ]
        );
    }

    #[test]
    fn test_kind_missing_from_language() {
        let greek = ImportData::new(Language::Greek, "test");
        assert!(greek.get(FeatureKind::Conjugation, "1st", None).is_err());
        assert!(
            greek
                .get_with(FeatureKind::Conjugation, "1st", None, true)
                .is_ok()
        );
    }

    #[test]
    fn test_empty_value_is_a_model_error() {
        let err = latin()
            .get_with(FeatureKind::Gender, "", None, true)
            .unwrap_err();
        assert!(matches!(err, Error::Model(ModelError::EmptyFeatureValue)));
    }

    #[test]
    fn test_plain_lemma_parser() {
        let lemma = latin().parse_lemma("mare").unwrap().unwrap();
        assert_eq!(lemma.word, "mare");
        assert!(lemma.principal_parts.is_empty());
    }
}
