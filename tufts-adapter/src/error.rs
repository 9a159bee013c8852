use language_utils::{FeatureKind, Language, ModelError};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(
        "Skipping an unknown value '{value}' of a grammatical feature '{kind}' of {language} language."
    )]
    UnknownValue {
        value: String,
        kind: FeatureKind,
        language: Language,
    },

    #[error("Unable to prepare parser request url for {0}")]
    NoRequestUrl(String),

    #[error("No mapping data for language code {0:?}")]
    UnsupportedLanguage(String),

    #[error("Analysis entry has neither a headword nor an inflection")]
    MissingHeadword,

    #[error("Word \"{0}\" does not exist in test data")]
    MissingTestData(String),

    #[error("Request to the morphology service failed")]
    Http(#[from] reqwest::Error),

    #[error("Malformed morphology service response")]
    Response(#[from] serde_json::Error),

    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file")]
    Io(#[from] std::io::Error),

    #[error("Invalid adapter config")]
    Parse(#[from] serde_json::Error),
}
