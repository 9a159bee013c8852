/*
Value conversion tables for each engine the Tufts service runs.

Only values that differ from the library's canonical values need an entry. Everything else is
passed through by `ImportData::get_with` when it is canonical for the language.
*/
use language_utils::{FeatureKind, Language, Lemma, ModelError};

use crate::import_data::ImportData;

pub const WHITAKER_LATIN: &str = "whitakerLat";
pub const MORPHEUS_GREEK: &str = "morpheusgrc";
pub const ARAMORPH_ARABIC: &str = "aramorph";
pub const HAZM_PERSIAN: &str = "hazm";

pub fn all() -> Vec<ImportData> {
    vec![
        whitaker_latin(),
        morpheus_greek(),
        aramorph_arabic(),
        hazm_persian(),
    ]
}

pub fn whitaker_latin() -> ImportData {
    let mut data = ImportData::new(Language::Latin, WHITAKER_LATIN);
    // Whitaker's Words also emits packon and tackon as parts of speech; those are left to
    // the unknown-value policy.
    data.add_feature(FeatureKind::Gender)
        .map("common", &["masculine", "feminine"])
        .map("all", &["masculine", "feminine", "neuter"]);
    data.add_feature(FeatureKind::Tense)
        .map("future_perfect", &["future perfect"]);
    data.set_lemma_parser(parse_principal_parts);
    data
}

pub fn morpheus_greek() -> ImportData {
    let mut data = ImportData::new(Language::Greek, MORPHEUS_GREEK);
    data.add_feature(FeatureKind::Gender)
        .map("masculine feminine", &["masculine", "feminine"]);
    data.add_feature(FeatureKind::Declension)
        .map("1st & 2nd", &["1st", "2nd"]);
    data
}

pub fn aramorph_arabic() -> ImportData {
    let mut data = ImportData::new(Language::Arabic, ARAMORPH_ARABIC);
    data.add_feature(FeatureKind::PartOfSpeech)
        .map("proper noun", &["noun"]);
    data.add_feature(FeatureKind::Gender)
        .map("masculine feminine", &["masculine", "feminine"]);
    data
}

pub fn hazm_persian() -> ImportData {
    let mut data = ImportData::new(Language::Persian, HAZM_PERSIAN);
    data.add_feature(FeatureKind::PartOfSpeech)
        .map("proper noun", &["noun"]);
    data
}

/// Whitaker's Words writes principal parts as a comma separated list ("capio, capere, cepi,
/// captus") and sometimes separates stem and ending with a space ("cap io"). Only the first
/// whitespace delimited token of each part is kept; blank parts are skipped.
pub fn parse_principal_parts(
    text: &str,
    language: Language,
) -> Result<Option<Lemma>, ModelError> {
    let parts: Vec<String> = text
        .split(',')
        .filter_map(|part| part.split_whitespace().next())
        .map(str::to_string)
        .collect();
    match parts.first() {
        Some(primary) => Lemma::with_principal_parts(primary.clone(), language, parts).map(Some),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_multiple_lemmas() {
        let lemma = parse_principal_parts("sumo, sumere, sumsi, sumtus", Language::Latin)
            .unwrap()
            .unwrap();
        assert_eq!(lemma.word, "sumo");
        assert_eq!(lemma.language, Language::Latin);
        assert_eq!(
            lemma.principal_parts,
            vec!["sumo", "sumere", "sumsi", "sumtus"]
        );
    }

    #[test]
    fn test_parses_space_separated_lemma() {
        let lemma = parse_principal_parts("cap io", Language::Latin)
            .unwrap()
            .unwrap();
        assert_eq!(lemma.word, "cap");
        assert_eq!(lemma.principal_parts, vec!["cap"]);
    }

    #[test]
    fn test_empty_headword_yields_no_lemma() {
        assert_eq!(parse_principal_parts("", Language::Latin), Ok(None));
        assert_eq!(parse_principal_parts(" ", Language::Latin), Ok(None));
        assert_eq!(parse_principal_parts(" , ", Language::Latin), Ok(None));
    }

    #[test]
    fn test_surrounding_whitespace_is_ignored() {
        let que = parse_principal_parts(" que", Language::Latin)
            .unwrap()
            .unwrap();
        assert_eq!(que.word, "que");
        assert_eq!(que.principal_parts, vec!["que"]);

        let sumo = parse_principal_parts("sumo,  sumere,, sumsi", Language::Latin)
            .unwrap()
            .unwrap();
        assert_eq!(sumo.principal_parts, vec!["sumo", "sumere", "sumsi"]);
    }

    #[test]
    fn test_engine_ids_are_unique() {
        let engines = all();
        let mut ids: Vec<_> = engines.iter().map(|e| e.engine()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), engines.len());
    }

    #[test]
    fn test_greek_grouped_values() {
        let greek = morpheus_greek();
        let genders: Vec<_> = greek
            .get(FeatureKind::Gender, "masculine feminine", None)
            .unwrap()
            .into_iter()
            .map(|f| f.value)
            .collect();
        assert_eq!(genders, vec!["masculine", "feminine"]);

        let declensions: Vec<_> = greek
            .get(FeatureKind::Declension, "1st & 2nd", None)
            .unwrap()
            .into_iter()
            .map(|f| f.value)
            .collect();
        assert_eq!(declensions, vec!["1st", "2nd"]);
    }

    #[test]
    fn test_proper_noun_maps_to_noun() {
        for data in [aramorph_arabic(), hazm_persian()] {
            let pofs = data
                .get(FeatureKind::PartOfSpeech, "proper noun", Some(3))
                .unwrap();
            assert_eq!(pofs.len(), 1);
            assert_eq!(pofs[0].value, "noun");
            assert_eq!(pofs[0].sort_order, 3);
        }
    }

    #[test]
    fn test_latin_future_perfect() {
        let tense = whitaker_latin()
            .get(FeatureKind::Tense, "future_perfect", None)
            .unwrap();
        assert_eq!(tense[0].value, "future perfect");
    }
}
