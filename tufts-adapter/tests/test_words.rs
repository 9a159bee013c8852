use language_utils::{Feature, FeatureKind, Homonym, Language, Lexeme};
use tufts_adapter::{MorphologyAdapter, TuftsAdapter};

fn lookup(lang: &str, word: &str) -> Homonym {
    let adapter = TuftsAdapter::default();
    let json = adapter.fetch_test_data(lang, word).unwrap();
    adapter.transform(&json, word).unwrap().unwrap()
}

fn values(features: &[Feature]) -> Vec<&str> {
    features.iter().map(|f| f.value.as_str()).collect()
}

fn lemma_values(lexeme: &Lexeme, kind: FeatureKind) -> Vec<&str> {
    values(lexeme.lemma.feature(kind))
}

#[test]
fn test_mare() {
    let homonym = lookup("lat", "mare");
    assert_eq!(homonym.target_word.as_deref(), Some("mare"));
    assert_eq!(homonym.language(), Some(Language::Latin));
    assert_eq!(homonym.lexemes.len(), 3);

    let words: Vec<_> = homonym
        .lexemes
        .iter()
        .map(|l| l.lemma.word.as_str())
        .collect();
    assert_eq!(words, vec!["mare", "marum", "mas"]);

    let mare = &homonym.lexemes[0];
    assert_eq!(mare.inflections.len(), 4);
    let vocatives = mare
        .inflections
        .iter()
        .filter(|i| {
            i.feature(FeatureKind::Case)
                .iter()
                .any(|case| case.has_value("vocative"))
        })
        .count();
    assert_eq!(vocatives, 1);
    assert_eq!(lemma_values(mare, FeatureKind::Declension), vec!["3rd"]);
    assert_eq!(lemma_values(mare, FeatureKind::PartOfSpeech), vec!["noun"]);
    assert_eq!(mare.lemma.feature(FeatureKind::PartOfSpeech)[0].sort_order, 3);
    assert_eq!(mare.meaning.short_defs[0].text, "the sea");
    assert_eq!(mare.meaning.short_defs[0].lemma_text, "mare");

    let provider = mare.provider.as_ref().unwrap();
    assert_eq!(provider.uri, "org.perseus:tools:morpheus.v1");
    assert!(provider.to_string().starts_with("Morphology provided by Morpheus"));
    assert!(
        homonym
            .lexemes
            .iter()
            .all(|l| l.provider.as_ref() == Some(provider))
    );

    assert_eq!(homonym.lexemes_for("marum").count(), 1);
    assert_eq!(homonym.lexemes_for("maris").count(), 0);

    let mas = homonym.lexemes_for("mas").next().unwrap();
    assert_eq!(mas.inflections.len(), 3);
    assert_eq!(mas.inflections[0].form(), "mare");
    assert_eq!(
        values(mas.inflections[0].feature(FeatureKind::Morph)),
        vec!["indeclform"]
    );
    assert!(mas.meaning.is_empty());
}

#[test]
fn test_cupidinibus() {
    let homonym = lookup("lat", "cupidinibus");
    assert_eq!(homonym.lexemes.len(), 2);

    let cupid = &homonym.lexemes[0];
    assert_eq!(cupid.lemma.word, "Cupido");
    assert_eq!(cupid.lemma.principal_parts, vec!["Cupido", "Cupidinis"]);
    assert_eq!(lemma_values(cupid, FeatureKind::Area), vec!["religion"]);
    assert_eq!(cupid.inflections.len(), 3);
    assert_eq!(cupid.inflections[0].form(), "cupidinibus");

    let cupido = &homonym.lexemes[1];
    let frequency = cupido.lemma.feature(FeatureKind::Frequency);
    assert_eq!(values(frequency), vec!["frequent"]);
    assert_eq!(frequency[0].sort_order, 5);
    assert_eq!(lemma_values(cupido, FeatureKind::Source), vec!["Ox.Lat.Dict."]);
    assert_eq!(
        lemma_values(cupido, FeatureKind::Gender),
        vec!["masculine", "feminine"]
    );
    assert_eq!(
        values(cupido.inflections[1].feature(FeatureKind::Case)),
        vec!["dative"]
    );
    assert!(
        cupido.meaning.short_defs[0]
            .text
            .starts_with("desire/love/wish/longing")
    );

    let provider = cupido.provider.as_ref().unwrap();
    assert_eq!(provider.uri, "net.alpheios:tools:wordsxml.v1");
    assert_eq!(provider.rights, "");
}

#[test]
fn test_cepit() {
    let homonym = lookup("lat", "cepit");
    assert_eq!(homonym.lexemes.len(), 1);

    let capio = &homonym.lexemes[0];
    assert_eq!(capio.lemma.word, "capio");
    assert_eq!(
        capio.lemma.principal_parts,
        vec!["capio", "capere", "cepi", "captus"]
    );
    assert_eq!(lemma_values(capio, FeatureKind::Conjugation), vec!["3rd"]);
    assert_eq!(lemma_values(capio, FeatureKind::Frequency), vec!["very frequent"]);

    let inflection = &capio.inflections[0];
    assert_eq!(inflection.form(), "cepit");
    for (kind, value) in [
        (FeatureKind::Tense, "perfect"),
        (FeatureKind::Voice, "active"),
        (FeatureKind::Mood, "indicative"),
        (FeatureKind::Person, "3rd"),
        (FeatureKind::Number, "singular"),
    ] {
        assert_eq!(values(inflection.feature(kind)), vec![value], "{kind}");
    }
}

#[test]
fn test_greek() {
    let homonym = lookup("grc", "φιλόσοφος");
    assert_eq!(homonym.language(), Some(Language::Greek));

    let lexeme = &homonym.lexemes[0];
    assert_eq!(lexeme.lemma.word, "φιλόσοφος");
    assert_eq!(lemma_values(lexeme, FeatureKind::Declension), vec!["2nd"]);

    let inflection = &lexeme.inflections[0];
    assert_eq!(inflection.language, Language::Greek);
    assert_eq!(inflection.form(), "φιλοσοφος");
    assert_eq!(
        values(inflection.feature(FeatureKind::StemType)),
        vec!["os_ou"]
    );
    assert_eq!(inflection.feature(FeatureKind::Case)[0].sort_order, 7);
}

#[test]
fn test_unknown_test_word() {
    let adapter = TuftsAdapter::default();
    let err = adapter.fetch_test_data("lat", "rosa").unwrap_err();
    assert_eq!(err.to_string(), "Word \"rosa\" does not exist in test data");
}
