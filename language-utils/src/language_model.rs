use std::collections::BTreeMap;

use unicode_normalization::UnicodeNormalization;

use crate::Language;
use crate::features::{FeatureKind, FeatureType};

const PARTS_OF_SPEECH: &[&str] = &[
    "adjective",
    "adverb",
    "adverbial",
    "article",
    "conjunction",
    "exclamation",
    "interjection",
    "noun",
    "numeral",
    "particle",
    "prefix",
    "preposition",
    "pronoun",
    "suffix",
    "supine",
    "verb",
    "verb participle",
];

const PERSONS: &[&str] = &["1st", "2nd", "3rd"];

/// The feature types a language supports.
#[derive(Debug, Clone)]
pub struct LanguageModel {
    language: Language,
    features: BTreeMap<FeatureKind, FeatureType>,
}

impl LanguageModel {
    pub fn for_language(language: Language) -> Self {
        let mut features = BTreeMap::new();
        let mut add = |feature_type: FeatureType| {
            features.insert(feature_type.kind(), feature_type);
        };
        let values = |kind: FeatureKind, values: &[&str]| {
            FeatureType::with_values(kind, language, values)
        };

        add(values(FeatureKind::PartOfSpeech, PARTS_OF_SPEECH));
        for kind in FeatureKind::METADATA {
            add(FeatureType::unrestricted(*kind, language));
        }

        match language {
            Language::Latin => {
                add(values(FeatureKind::Number, &["singular", "plural"]));
                add(values(
                    FeatureKind::Case,
                    &[
                        "nominative",
                        "genitive",
                        "dative",
                        "accusative",
                        "ablative",
                        "locative",
                        "vocative",
                    ],
                ));
                add(values(
                    FeatureKind::Declension,
                    &["1st", "2nd", "3rd", "4th", "5th"],
                ));
                add(masculine_feminine_neuter(language));
                add(values(FeatureKind::Type, &["regular", "irregular"]));
                add(values(
                    FeatureKind::Tense,
                    &[
                        "present",
                        "imperfect",
                        "future",
                        "perfect",
                        "pluperfect",
                        "future perfect",
                    ],
                ));
                add(values(FeatureKind::Voice, &["passive", "active"]));
                add(values(
                    FeatureKind::Mood,
                    &[
                        "indicative",
                        "subjunctive",
                        "imperative",
                        "infinitive",
                        "participle",
                        "gerundive",
                        "supine",
                    ],
                ));
                add(values(FeatureKind::Person, PERSONS));
                add(values(
                    FeatureKind::Conjugation,
                    &["1st", "2nd", "3rd", "4th"],
                ));
            }
            Language::Greek => {
                add(values(FeatureKind::Number, &["singular", "plural", "dual"]));
                add(values(
                    FeatureKind::Case,
                    &["nominative", "genitive", "dative", "accusative", "vocative"],
                ));
                add(values(FeatureKind::Declension, &["1st", "2nd", "3rd"]));
                add(masculine_feminine_neuter(language));
                add(values(
                    FeatureKind::Tense,
                    &[
                        "present",
                        "imperfect",
                        "future",
                        "aorist",
                        "perfect",
                        "pluperfect",
                        "future perfect",
                    ],
                ));
                add(values(
                    FeatureKind::Voice,
                    &["active", "middle", "passive", "mediopassive"],
                ));
                add(values(
                    FeatureKind::Mood,
                    &[
                        "indicative",
                        "subjunctive",
                        "optative",
                        "imperative",
                        "infinitive",
                        "participle",
                    ],
                ));
                add(values(FeatureKind::Person, PERSONS));
            }
            Language::Arabic => {
                add(values(FeatureKind::Number, &["singular", "dual", "plural"]));
                add(values(
                    FeatureKind::Case,
                    &["nominative", "genitive", "accusative"],
                ));
                add(values(FeatureKind::Gender, &["masculine", "feminine"]));
                add(values(FeatureKind::Tense, &["perfect", "imperfect"]));
                add(values(FeatureKind::Voice, &["active", "passive"]));
                add(values(
                    FeatureKind::Mood,
                    &["indicative", "subjunctive", "jussive", "imperative"],
                ));
                add(values(FeatureKind::Person, PERSONS));
            }
            Language::Persian => {
                add(values(FeatureKind::Number, &["singular", "plural"]));
                add(values(FeatureKind::Person, PERSONS));
            }
        }

        Self { language, features }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn feature_type(&self, kind: FeatureKind) -> Option<&FeatureType> {
        self.features.get(&kind)
    }
}

fn masculine_feminine_neuter(language: Language) -> FeatureType {
    FeatureType::new(
        FeatureKind::Gender,
        language,
        vec![
            vec!["masculine".to_string(), "feminine".to_string()],
            vec!["neuter".to_string()],
        ],
    )
}

impl Language {
    /// Normalizes a word before it is sent to an analyzer.
    /// Greek and Arabic input often arrives with decomposed diacritics.
    pub fn normalize_word(&self, word: &str) -> String {
        word.trim().nfc().collect()
    }

    pub fn model(&self) -> LanguageModel {
        LanguageModel::for_language(*self)
    }
}
