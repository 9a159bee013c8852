use std::collections::BTreeMap;
use std::path::Path;

use crate::error::ConfigError;

pub const DEFAULT_CONFIG: &str = include_str!("../data/default-config.json");

/// Which analysis engine serves each language, and where to ask it.
///
/// `url` is a template; `r_WORD`, `r_ENGINE` and `r_LANG` are substituted per request.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdapterConfig {
    pub engine: BTreeMap<String, Vec<String>>,
    pub url: String,
    #[serde(default)]
    pub allow_unknown_values: bool,
}

impl AdapterConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// The config compiled into the crate, or `None` if it somehow fails to parse.
    pub fn bundled() -> Option<Self> {
        Self::from_json_str(DEFAULT_CONFIG)
            .inspect_err(|e| log::error!("Bundled adapter config is invalid: {e:?}"))
            .ok()
    }

    /// The first engine configured for a language code.
    pub fn engine_for(&self, lang: &str) -> Option<&str> {
        self.engine
            .get(lang)
            .and_then(|engines| engines.first())
            .map(String::as_str)
    }

    /// The word is percent-encoded as a query value.
    pub fn request_url(&self, word: &str, engine: &str, lang: &str) -> String {
        let word: String = url::form_urlencoded::byte_serialize(word.as_bytes()).collect();
        self.url
            .replacen("r_WORD", &word, 1)
            .replacen("r_ENGINE", engine, 1)
            .replacen("r_LANG", lang, 1)
    }
}
