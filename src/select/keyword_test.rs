// ABOUTME: Tests for KeywordSelector - matches, fallback, empty registry.
// ABOUTME: Uses the built-in tool set plus ad hoc registries.

use super::*;
use crate::error::SelectionError;
use crate::tool::{FnTool, Registry};
use crate::tools::builtin_registry;

fn named(name: &str) -> FnTool {
    FnTool::builder(name)
        .description(format!("The {} tool.", name))
        .handler(|_| Ok(serde_json::Value::Null))
}

#[test]
fn test_selects_tool_named_in_query() {
    let registry = builtin_registry().unwrap();
    let selection = KeywordSelector.choose("please add 2 and 2", &registry).unwrap();

    assert_eq!(selection.selected_tool, "add");
    assert_eq!(
        selection.description,
        "Adds two numbers together. Usage: add(a, b)."
    );
    assert_eq!(selection.note, MATCH_NOTE);
}

#[test]
fn test_match_ignores_case() {
    let registry = builtin_registry().unwrap();
    let selection = KeywordSelector.choose("GREET my friend", &registry).unwrap();
    assert_eq!(selection.selected_tool, "greet");
}

#[test]
fn test_first_registered_match_wins() {
    let registry = builtin_registry().unwrap();
    let selection = KeywordSelector
        .choose("subtract then add", &registry)
        .unwrap();
    assert_eq!(selection.selected_tool, "add");
}

#[test]
fn test_falls_back_to_first_registered() {
    let registry = builtin_registry().unwrap();
    let selection = KeywordSelector.choose("banana", &registry).unwrap();

    assert_eq!(selection.selected_tool, "add");
    assert!(selection.note.ends_with("fallback response."));
}

#[test]
fn test_fallback_follows_registration_order() {
    let mut registry = Registry::new();
    registry.register(named("zeta")).unwrap();
    registry.register(named("alpha")).unwrap();

    let selection = KeywordSelector.choose("nothing relevant", &registry).unwrap();
    assert_eq!(selection.selected_tool, "zeta");
    assert_eq!(selection.description, "The zeta tool.");
    assert_eq!(selection.note, FALLBACK_NOTE);
}

#[test]
fn test_multi_word_name_matches_as_phrase() {
    let mut registry = Registry::new();
    registry.register(named("misc")).unwrap();
    registry.register(named("Unit Convert")).unwrap();

    let hit = KeywordSelector
        .choose("please unit convert 3 miles", &registry)
        .unwrap();
    assert_eq!(hit.selected_tool, "Unit Convert");

    let miss = KeywordSelector.choose("convert units", &registry).unwrap();
    assert_eq!(miss.selected_tool, "misc");
    assert_eq!(miss.note, FALLBACK_NOTE);
}

#[test]
fn test_empty_registry_has_no_tools() {
    let registry = Registry::new();
    let err = KeywordSelector.choose("add", &registry).unwrap_err();
    assert!(matches!(err, SelectionError::NoToolsAvailable));
    assert_eq!(err.to_string(), "No tools available.");
}

#[tokio::test]
async fn test_strategy_trait_delegates_to_choose() {
    let registry = builtin_registry().unwrap();
    let strategy: &dyn SelectionStrategy = &KeywordSelector;
    let selection = strategy.select("greet Ava", &registry).await.unwrap();
    assert_eq!(selection.selected_tool, "greet");
}
