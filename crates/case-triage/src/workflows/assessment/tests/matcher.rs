use std::sync::Arc;

use super::common::*;
use crate::workflows::assessment::domain::FlagCategory;
use crate::workflows::assessment::entities::GazetteerEntityExtractor;
use crate::workflows::assessment::lexicon::Lexicon;
use crate::workflows::assessment::matcher::LexiconMatcher;

fn matcher() -> LexiconMatcher {
    LexiconMatcher::standard().expect("standard lexicon compiles")
}

#[test]
fn sample_narrative_flags_each_keyword_category() {
    let intake = sample_intake();
    let flagged = matcher().flag(&intake.narrative());

    assert_eq!(flagged.domestic_violence, vec!["violent"]);
    assert_eq!(flagged.urgent_support, vec!["eviction"]);
    assert_eq!(
        flagged.hidden_assets,
        vec!["crypto", "bitcoin", "secret", "unreported", "consulting"]
    );
    assert!(flagged.jurisdiction_clues.is_empty());
}

#[test]
fn inflected_forms_do_not_match_their_stems() {
    let flagged = matcher().flag("He threatened me, I saw bruises and he controls me");

    assert!(flagged.domestic_violence.is_empty(), "{flagged:?}");
}

#[test]
fn terms_inside_longer_words_do_not_match() {
    let flagged = matcher().flag("The cashier said the artist was safely home");

    assert!(flagged.hidden_assets.is_empty(), "{flagged:?}");
}

#[test]
fn matching_ignores_case_and_punctuation() {
    let flagged = matcher().flag("POLICE were called (911)! He has a GUN.");

    assert_eq!(flagged.domestic_violence, vec!["gun", "police", "911"]);
}

#[test]
fn repeated_terms_are_reported_once_in_lexicon_order() {
    let flagged = matcher().flag("debt, more debt, overdue bills and debt again");

    assert_eq!(flagged.urgent_support, vec!["bills", "debt", "overdue"]);
}

#[test]
fn multi_word_terms_require_the_whole_phrase() {
    let flagged = matcher().flag("She filed for an order of protection; he paid cash under the table");

    assert_eq!(flagged.domestic_violence, vec!["order of protection"]);
    assert_eq!(flagged.hidden_assets, vec!["under the table"]);
}

#[test]
fn empty_text_flags_nothing() {
    let flagged = matcher().flag("");

    assert!(flagged.is_empty());
    for category in FlagCategory::ordered() {
        assert!(flagged.get(category).is_empty());
    }
}

#[test]
fn enrichment_appends_location_mentions() {
    let extractor = GazetteerEntityExtractor::new_york().expect("gazetteer compiles");
    let matcher =
        LexiconMatcher::new(&Lexicon::standard(), Arc::new(extractor)).expect("compiles");

    let flagged = matcher.flag("Moved from Queens to Long Island; kids still in Queens");

    assert_eq!(
        flagged.jurisdiction_clues,
        vec!["Queens (GPE)", "Long Island (LOC)", "Queens (GPE)"]
    );
    assert_eq!(matcher.extractor_name(), "gazetteer");
}

#[test]
fn keyword_results_are_identical_with_or_without_enrichment() {
    let text = sample_intake().narrative();
    let plain = matcher().flag(&text);
    let enriched = enriched_engine().matcher().flag(&text);

    assert_eq!(plain.domestic_violence, enriched.domestic_violence);
    assert_eq!(plain.urgent_support, enriched.urgent_support);
    assert_eq!(plain.hidden_assets, enriched.hidden_assets);
    assert_eq!(enriched.jurisdiction_clues, vec!["Brooklyn (GPE)"]);
}

#[test]
fn lexicon_keeps_context_terms_for_residency() {
    let lexicon = Lexicon::standard();
    let groups: Vec<&str> = lexicon
        .jurisdiction_terms()
        .iter()
        .map(|(group, _)| *group)
        .collect();

    assert_eq!(groups, vec!["lived", "married", "children"]);
    assert!(lexicon.terms(FlagCategory::JurisdictionClues).is_empty());
}
