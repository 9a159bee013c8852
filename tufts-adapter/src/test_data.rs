use crate::error::Error;

/// Canned service responses for a handful of words, compiled into the crate so lookups can be
/// exercised without the network.
pub struct WordTestData;

impl WordTestData {
    const WORDS: &[(&str, &str)] = &[
        ("mare", include_str!("../data/test-words/mare.json")),
        ("cupidinibus", include_str!("../data/test-words/cupidinibus.json")),
        ("cepit", include_str!("../data/test-words/cepit.json")),
        ("φιλόσοφος", include_str!("../data/test-words/philosophos.json")),
    ];

    pub fn words() -> impl Iterator<Item = &'static str> {
        Self::WORDS.iter().map(|(word, _)| *word)
    }

    pub fn get(word: &str) -> Result<serde_json::Value, Error> {
        let (_, json) = Self::WORDS
            .iter()
            .find(|(known, _)| *known == word)
            .ok_or_else(|| Error::MissingTestData(word.to_string()))?;
        Ok(serde_json::from_str(json)?)
    }
}
