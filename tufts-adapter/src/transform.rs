use language_utils::{
    Definition, Feature, FeatureKind, Homonym, Inflection, Language, Lemma, Lexeme,
    ResourceProvider,
};
use serde::Deserialize;

use crate::error::Error;
use crate::import_data::ImportData;
use crate::response::{AnalysisResponse, Dict, Entry, Field, Infl, OneOrMany};

/// Lemma features an inflection can supply when the dictionary entry leaves them out.
const LEMMA_BACKFILL: [FeatureKind; 3] = [
    FeatureKind::PartOfSpeech,
    FeatureKind::Declension,
    FeatureKind::Conjugation,
];

const DEFAULT_DEFINITION_LANGUAGE: &str = "eng";

/// Maps a Tufts service response into a library standard Homonym.
///
/// `mapping_for` resolves the language code of each analysis entry to the import data of the
/// engine configured for it. Returns `Ok(None)` when the service found no analysis at all.
pub fn transform<'a, F>(
    json: &serde_json::Value,
    target_word: &str,
    mapping_for: F,
    allow_unknown: bool,
) -> Result<Option<Homonym>, Error>
where
    F: Fn(&str) -> Option<&'a ImportData>,
{
    let annotation = AnalysisResponse::deserialize(json)?.rdf.annotation;
    let Some(bodies) = annotation.body else {
        log::debug!("No analysis returned for {target_word:?}");
        return Ok(None);
    };

    let rights = annotation.rights.map(|r| r.value).unwrap_or_default();
    let provider = ResourceProvider::new(annotation.creator.agent.about, rights);

    let mut lexemes = Vec::new();
    for body in bodies.into_vec() {
        let entry = body.rest.entry;
        let lang = entry_language(&entry).ok_or(Error::MissingHeadword)?;
        // "la", "fa" and friends resolve to the codes engines are configured under
        let lang = match Language::from_code(&lang) {
            Some(language) => language.iso_639_3().to_string(),
            None => lang,
        };
        let mapping = mapping_for(&lang).ok_or(Error::UnsupportedLanguage(lang))?;
        let reader = EntryReader {
            mapping,
            allow_unknown,
        };
        for lexeme in reader.lexemes(entry)? {
            lexemes.push(lexeme.with_provider(provider.clone()));
        }
    }

    Ok(Some(Homonym::new(lexemes, Some(target_word.to_string()))))
}

fn entry_language(entry: &Entry) -> Option<String> {
    let from_dict = entry.dict.as_ref().and_then(|dicts| {
        dicts
            .as_slice()
            .iter()
            .find_map(|dict| dict.hdwd.as_ref()?.lang.clone())
    });
    from_dict.or_else(|| {
        entry
            .infl
            .as_ref()?
            .as_slice()
            .iter()
            .find_map(|infl| infl.term.lang.clone())
    })
}

struct EntryReader<'a> {
    mapping: &'a ImportData,
    allow_unknown: bool,
}

impl EntryReader<'_> {
    fn lexemes(&self, entry: Entry) -> Result<Vec<Lexeme>, Error> {
        let dicts = entry.dict.map(OneOrMany::into_vec).unwrap_or_default();
        let infls = entry.infl.map(OneOrMany::into_vec).unwrap_or_default();
        let means = entry.mean.map(OneOrMany::into_vec).unwrap_or_default();

        let inflections = infls
            .iter()
            .map(|infl| self.inflection(infl))
            .collect::<Result<Vec<_>, _>>()?;

        // (index of the dict the lemma came from, lemma)
        let mut lemmas: Vec<(Option<usize>, Lemma)> = Vec::new();
        for (index, dict) in dicts.iter().enumerate() {
            let Some(hdwd) = &dict.hdwd else { continue };
            match self.mapping.parse_lemma(&hdwd.value)? {
                Some(mut lemma) => {
                    self.apply_dict(&mut lemma, dict)?;
                    lemmas.push((Some(index), lemma));
                }
                None => log::debug!("Dropping entry with unusable headword {:?}", hdwd.value),
            }
        }
        if dicts.iter().all(|dict| dict.hdwd.is_none()) {
            if let Some(first) = inflections.first() {
                log::debug!("No headword, using inflection {:?} as lemma", first.form());
                if let Some(lemma) = self.mapping.parse_lemma(&first.form())? {
                    lemmas.push((None, lemma));
                }
            }
        }

        for (_, lemma) in &mut lemmas {
            backfill_lemma(lemma, &inflections)?;
        }

        // Definitions pair up with dictionary entries only when both repeat the same number
        // of times; otherwise every lemma of the entry shares all of them.
        let paired = dicts.len() > 1 && means.len() == dicts.len();
        let lexemes = lemmas
            .into_iter()
            .map(|(dict_index, lemma)| {
                let selected = match dict_index {
                    Some(index) if paired => &means[index..=index],
                    _ => &means[..],
                };
                let definitions: Vec<Definition> = selected
                    .iter()
                    .map(|mean| {
                        Definition::new(
                            mean.value.clone(),
                            mean.lang
                                .clone()
                                .unwrap_or_else(|| DEFAULT_DEFINITION_LANGUAGE.to_string()),
                            lemma.word.clone(),
                        )
                    })
                    .collect();
                let mut lexeme = Lexeme::new(lemma, inflections.clone());
                lexeme.meaning.append_short_defs(definitions);
                lexeme
            })
            .collect();
        Ok(lexemes)
    }

    fn apply_dict(&self, lemma: &mut Lemma, dict: &Dict) -> Result<(), Error> {
        let fields = [
            (FeatureKind::PartOfSpeech, &dict.pofs),
            (FeatureKind::Case, &dict.case),
            (FeatureKind::Gender, &dict.gend),
            (FeatureKind::Declension, &dict.decl),
            (FeatureKind::Conjugation, &dict.conj),
            (FeatureKind::Area, &dict.area),
            (FeatureKind::Age, &dict.age),
            (FeatureKind::Geo, &dict.geo),
            (FeatureKind::Frequency, &dict.freq),
            (FeatureKind::Note, &dict.note),
            (FeatureKind::Pronunciation, &dict.pron),
            (FeatureKind::Source, &dict.src),
        ];
        for (kind, field) in fields {
            if let Some(features) = self.features(kind, field.as_ref())? {
                lemma.set_feature(features)?;
            }
        }
        Ok(())
    }

    fn inflection(&self, infl: &Infl) -> Result<Inflection, Error> {
        let stem = infl
            .term
            .stem
            .as_ref()
            .map(|stem| stem.value.as_str())
            .unwrap_or_default();
        let mut inflection = Inflection::new(stem, self.mapping.language())?;
        inflection.suffix = infl.term.suff.as_ref().map(|suff| suff.value.clone());
        inflection.example = infl.xmpl.as_ref().map(|xmpl| xmpl.value.clone());

        let fields = [
            (FeatureKind::PartOfSpeech, &infl.pofs),
            (FeatureKind::Case, &infl.case),
            (FeatureKind::Declension, &infl.decl),
            (FeatureKind::Number, &infl.num),
            (FeatureKind::Gender, &infl.gend),
            (FeatureKind::Conjugation, &infl.conj),
            (FeatureKind::Tense, &infl.tense),
            (FeatureKind::Voice, &infl.voice),
            (FeatureKind::Mood, &infl.mood),
            (FeatureKind::Person, &infl.pers),
            (FeatureKind::Dialect, &infl.dialect),
            (FeatureKind::StemType, &infl.stemtype),
            (FeatureKind::DerivType, &infl.derivtype),
            (FeatureKind::Morph, &infl.morph),
        ];
        for (kind, field) in fields {
            if let Some(features) = self.features(kind, field.as_ref())? {
                inflection.set_feature(features)?;
            }
        }
        Ok(inflection)
    }

    /// All values of a possibly repeated element, mapped in document order. Only part of
    /// speech is trimmed; the service pads it.
    fn features(
        &self,
        kind: FeatureKind,
        field: Option<&Field>,
    ) -> Result<Option<Vec<Feature>>, Error> {
        let Some(field) = field else {
            return Ok(None);
        };
        let mut features = Vec::new();
        for text in field.as_slice() {
            let value = match kind {
                FeatureKind::PartOfSpeech => text.value.trim(),
                _ => text.value.as_str(),
            };
            features.extend(self.mapping.get_with(
                kind,
                value,
                text.order,
                self.allow_unknown,
            )?);
        }
        Ok((!features.is_empty()).then_some(features))
    }
}

/// First inflection to carry a kind wins.
fn backfill_lemma(lemma: &mut Lemma, inflections: &[Inflection]) -> Result<(), Error> {
    for kind in LEMMA_BACKFILL {
        if lemma.has_feature(kind) {
            continue;
        }
        let supplied = inflections
            .iter()
            .map(|inflection| inflection.feature(kind))
            .find(|features| !features.is_empty());
        if let Some(features) = supplied {
            lemma.set_feature(features.to_vec())?;
        }
    }
    Ok(())
}
