use language_utils::{Homonym, Language};
use rustc_hash::FxHashMap;

use crate::config::AdapterConfig;
use crate::engines;
use crate::error::Error;
use crate::import_data::ImportData;
use crate::test_data::WordTestData;
use crate::transform::transform;

/// A source of morphological analyses for single words.
#[allow(async_fn_in_trait)]
pub trait MorphologyAdapter {
    /// The request URL for a word in the language identified by `lang`, or `None` when the
    /// adapter has nothing configured for it.
    fn prepare_request_url(&self, lang: &str, word: &str) -> Option<String>;

    async fn fetch(&self, lang: &str, word: &str) -> Result<serde_json::Value, Error>;

    fn transform(
        &self,
        json: &serde_json::Value,
        target_word: &str,
    ) -> Result<Option<Homonym>, Error>;

    async fn get_homonym(&self, lang: &str, word: &str) -> Result<Option<Homonym>, Error> {
        let json = self.fetch(lang, word).await?;
        self.transform(&json, word)
    }
}

/// Client for the Tufts Morphology Service.
pub struct TuftsAdapter {
    config: Option<AdapterConfig>,
    engines: FxHashMap<String, ImportData>,
    client: reqwest::Client,
}

impl TuftsAdapter {
    /// `None` selects the bundled config. An adapter whose bundled config is broken stays
    /// unconfigured and refuses every request.
    pub fn new(config: Option<AdapterConfig>) -> Self {
        Self::with_config(config.or_else(AdapterConfig::bundled))
    }

    /// Builds an adapter from a config document, falling back to the bundled config when the
    /// document does not parse.
    pub fn from_json_str(json: &str) -> Self {
        let config = AdapterConfig::from_json_str(json)
            .inspect_err(|e| log::warn!("Invalid adapter config, using the default: {e:?}"))
            .ok();
        Self::new(config)
    }

    fn with_config(config: Option<AdapterConfig>) -> Self {
        let engines = engines::all()
            .into_iter()
            .map(|data| (data.engine().to_string(), data))
            .collect();
        Self {
            config,
            engines,
            client: reqwest::Client::new(),
        }
    }

    pub fn config(&self) -> Option<&AdapterConfig> {
        self.config.as_ref()
    }

    pub fn allow_unknown_values(&self) -> bool {
        self.config
            .as_ref()
            .is_some_and(|config| config.allow_unknown_values)
    }

    /// Mapping data of the first engine configured for `lang`.
    pub fn get_engine_language_map(&self, lang: &str) -> Option<&ImportData> {
        let engine = self.config.as_ref()?.engine_for(lang)?;
        let data = self.engines.get(engine);
        if data.is_none() {
            log::debug!("No mapping data for engine {engine:?} ({lang})");
        }
        data
    }

    /// Canned response for a word in the test data store; makes no request.
    pub fn fetch_test_data(&self, lang: &str, word: &str) -> Result<serde_json::Value, Error> {
        log::debug!("Reading test data for {word:?} ({lang})");
        WordTestData::get(word)
    }
}

impl Default for TuftsAdapter {
    fn default() -> Self {
        Self::new(None)
    }
}

impl MorphologyAdapter for TuftsAdapter {
    fn prepare_request_url(&self, lang: &str, word: &str) -> Option<String> {
        let config = self.config.as_ref()?;
        let engine = config.engine_for(lang)?;
        let word = match Language::from_code(lang) {
            Some(language) => language.normalize_word(word),
            None => word.trim().to_string(),
        };
        Some(config.request_url(&word, engine, lang))
    }

    async fn fetch(&self, lang: &str, word: &str) -> Result<serde_json::Value, Error> {
        let url = self
            .prepare_request_url(lang, word)
            .ok_or_else(|| Error::NoRequestUrl(lang.to_string()))?;
        log::info!("Requesting analysis: {url}");
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }

    fn transform(
        &self,
        json: &serde_json::Value,
        target_word: &str,
    ) -> Result<Option<Homonym>, Error> {
        transform(
            json,
            target_word,
            |lang| self.get_engine_language_map(lang),
            self.allow_unknown_values(),
        )
    }
}
