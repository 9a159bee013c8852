//! Shape of a Tufts Morphology Service response.
//!
//! The service serializes XML to JSON, so element text lives under `$`, attributes sit next to
//! it, and an element that can repeat is a bare object when it happens to occur once.

use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub struct AnalysisResponse {
    #[serde(rename = "RDF")]
    pub rdf: Rdf,
}

#[derive(Debug, Deserialize)]
pub struct Rdf {
    #[serde(rename = "Annotation")]
    pub annotation: Annotation,
}

#[derive(Debug, Deserialize)]
pub struct Annotation {
    pub creator: Creator,
    pub rights: Option<Text>,
    #[serde(rename = "Body")]
    pub body: Option<OneOrMany<Body>>,
}

#[derive(Debug, Deserialize)]
pub struct Creator {
    #[serde(rename = "Agent")]
    pub agent: Agent,
}

#[derive(Debug, Deserialize)]
pub struct Agent {
    pub about: String,
}

#[derive(Debug, Deserialize)]
pub struct Body {
    pub rest: Rest,
}

#[derive(Debug, Deserialize)]
pub struct Rest {
    pub entry: Entry,
}

#[derive(Debug, Deserialize)]
pub struct Entry {
    pub dict: Option<OneOrMany<Dict>>,
    pub infl: Option<OneOrMany<Infl>>,
    pub mean: Option<OneOrMany<Text>>,
}

/// A dictionary entry: headword plus lemma level features.
#[derive(Debug, Deserialize)]
pub struct Dict {
    pub hdwd: Option<Text>,
    pub pofs: Option<Field>,
    pub case: Option<Field>,
    pub gend: Option<Field>,
    pub decl: Option<Field>,
    pub conj: Option<Field>,
    pub area: Option<Field>,
    pub age: Option<Field>,
    pub geo: Option<Field>,
    pub freq: Option<Field>,
    pub note: Option<Field>,
    pub pron: Option<Field>,
    pub src: Option<Field>,
}

#[derive(Debug, Deserialize)]
pub struct Infl {
    pub term: Term,
    pub xmpl: Option<Text>,
    pub pofs: Option<Field>,
    pub case: Option<Field>,
    pub decl: Option<Field>,
    pub num: Option<Field>,
    pub gend: Option<Field>,
    pub conj: Option<Field>,
    pub tense: Option<Field>,
    pub voice: Option<Field>,
    pub mood: Option<Field>,
    pub pers: Option<Field>,
    pub dialect: Option<Field>,
    pub stemtype: Option<Field>,
    pub derivtype: Option<Field>,
    pub morph: Option<Field>,
}

#[derive(Debug, Deserialize)]
pub struct Term {
    pub lang: Option<String>,
    pub stem: Option<Text>,
    pub suff: Option<Text>,
}

/// Element text with its `order` and `lang` attributes.
#[derive(Debug, Clone, Deserialize)]
pub struct Text {
    #[serde(rename = "$", deserialize_with = "string_or_number")]
    pub value: String,
    pub order: Option<u32>,
    pub lang: Option<String>,
}

/// A feature element that may repeat.
pub type Field = OneOrMany<Text>;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }

    pub fn as_slice(&self) -> &[T] {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => std::slice::from_ref(item),
        }
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Str(String),
        Num(serde_json::Number),
    }

    Ok(match Scalar::deserialize(deserializer)? {
        Scalar::Str(s) => s,
        Scalar::Num(n) => n.to_string(),
    })
}
