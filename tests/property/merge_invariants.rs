//! Property-based tests for the merge invariants

use huesync::document::ConfigDocument;
use huesync::merge::merge_documents;
use proptest::collection::btree_map;
use proptest::prelude::*;
use std::collections::BTreeMap;

type DocMap = BTreeMap<String, BTreeMap<String, String>>;

fn section_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9:]{0,9}"
}

fn key_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9]{0,9}"
}

fn value_text() -> impl Strategy<Value = String> {
    "[0-9]{1,3},[0-9]{1,3},[0-9]{1,3}"
}

fn doc_map() -> impl Strategy<Value = DocMap> {
    btree_map(section_name(), btree_map(key_name(), value_text(), 0..5), 0..4)
}

fn document_from(map: &DocMap) -> ConfigDocument {
    let mut doc = ConfigDocument::new();
    for (name, entries) in map {
        let section = doc.ensure_section(name);
        for (key, value) in entries {
            section.set(key, value);
        }
    }
    doc
}

/// Every (section, key) of the source maps to the source's value after merge.
#[test]
fn test_source_wins_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(doc_map(), doc_map()), |(source_map, target_map)| {
            let source = document_from(&source_map);
            let mut target = document_from(&target_map);

            merge_documents(&mut target, &source);

            for (name, entries) in &source_map {
                for (key, value) in entries {
                    prop_assert_eq!(target.get(name, key), Some(value.as_str()));
                }
            }
            Ok(())
        })
        .unwrap();
}

/// Keys present only in the target survive the merge unchanged.
#[test]
fn test_target_only_keys_preserved_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(doc_map(), doc_map()), |(source_map, target_map)| {
            let source = document_from(&source_map);
            let mut target = document_from(&target_map);

            merge_documents(&mut target, &source);

            for (name, entries) in &target_map {
                for (key, value) in entries {
                    let in_source = source_map
                        .get(name)
                        .map(|s| s.contains_key(key))
                        .unwrap_or(false);
                    if !in_source {
                        prop_assert_eq!(target.get(name, key), Some(value.as_str()));
                    }
                }
            }
            Ok(())
        })
        .unwrap();
}

/// Merging the same source twice yields the same serialized document as
/// merging it once.
#[test]
fn test_merge_idempotence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(doc_map(), doc_map()), |(source_map, target_map)| {
            let source = document_from(&source_map);
            let mut target = document_from(&target_map);

            merge_documents(&mut target, &source);
            let once = target.to_string();
            let report = merge_documents(&mut target, &source);

            prop_assert_eq!(target.to_string(), once);
            prop_assert!(report.is_noop());
            Ok(())
        })
        .unwrap();
}

/// A merged document survives a serialize/parse round trip.
#[test]
fn test_merged_document_round_trips_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&(doc_map(), doc_map()), |(source_map, target_map)| {
            let source = document_from(&source_map);
            let mut target = document_from(&target_map);

            merge_documents(&mut target, &source);

            let reparsed = ConfigDocument::parse(&target.to_string()).unwrap();
            prop_assert_eq!(reparsed, target);
            Ok(())
        })
        .unwrap();
}
