// ABOUTME: Integration tests for the tool and cuisine relaxation cascade
// ABOUTME: Covers level selection, the small-safe-set passthrough, and monotonic admission
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::{refs, sample_recipes};
use mealplan_core::models::RecipeRecord;
use mealplan_intelligence::relaxation::{relax, SoftPreferences};
use mealplan_intelligence::RelaxationLevel;

fn dish(id: &str, cuisine: &str, tool: Option<&str>) -> RecipeRecord {
    let recipe = RecipeRecord::new(id, id).with_cuisine(cuisine);
    match tool {
        Some(tool) => recipe.with_tool(tool),
        None => recipe,
    }
}

fn tools(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| (*v).to_owned()).collect()
}

#[test]
fn test_strict_level_when_enough_recipes_match_everything() {
    let catalog: Vec<RecipeRecord> = (0..6)
        .map(|i| dish(&format!("vn-{i}"), "Vietnamese", Some("Rice Cooker")))
        .chain((0..4).map(|i| dish(&format!("it-{i}"), "Italian", Some("Oven"))))
        .collect();
    let safe = refs(&catalog);

    let relaxed = relax(&safe, &tools(&["Nồi cơm điện"]), "Vietnamese");

    assert_eq!(relaxed.level, RelaxationLevel::Strict);
    assert_eq!(relaxed.candidates.len(), 6);
    assert!(relaxed.candidates.iter().all(|r| r.cuisine == "Vietnamese"));
}

#[test]
fn test_cuisine_relaxed_before_tools() {
    let catalog = vec![
        dish("a", "Thai", Some("Stove")),
        dish("b", "Thai", Some("Stove")),
        dish("c", "Italian", Some("Stove")),
        dish("d", "Italian", None),
        dish("e", "Mexican", Some("Bếp ga")),
        dish("f", "Mexican", Some("Oven")),
    ];
    let safe = refs(&catalog);

    let relaxed = relax(&safe, &tools(&["Stove"]), "Thai");

    assert_eq!(relaxed.level, RelaxationLevel::CuisineRelaxed);
    let ids: Vec<&str> = relaxed.candidates.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c", "d", "e"]);
}

#[test]
fn test_small_safe_set_is_returned_as_is() {
    let catalog = vec![
        dish("x", "French", Some("Oven")),
        dish("y", "Korean", Some("Air Fryer")),
        dish("z", "Thai", Some("Blender")),
    ];
    let safe = refs(&catalog);

    let relaxed = relax(&safe, &tools(&["Microwave"]), "Vietnamese");

    assert_eq!(relaxed.level, RelaxationLevel::ToolsRelaxed);
    assert_eq!(relaxed.candidates.len(), 3);
}

#[test]
fn test_any_cuisine_and_no_tools_keeps_tool_free_recipes() {
    let catalog = sample_recipes();
    let safe = refs(&catalog);

    let relaxed = relax(&safe, &[], "any");

    // Without owned tools only recipes needing nothing survive the tool filter
    let tool_free = catalog.iter().filter(|r| r.required_tools.is_empty()).count();
    if tool_free >= 5 {
        assert_eq!(relaxed.level, RelaxationLevel::Strict);
        assert_eq!(relaxed.candidates.len(), tool_free);
    } else {
        assert_eq!(relaxed.level, RelaxationLevel::ToolsRelaxed);
        assert_eq!(relaxed.candidates.len(), catalog.len());
    }
}

#[test]
fn test_each_level_admits_a_superset_of_the_previous() {
    let catalog = sample_recipes();
    let safe = refs(&catalog);
    let preferences = SoftPreferences::new(&tools(&["Stove", "Rice Cooker"]), "Asian");

    let strict = preferences.admit(&safe, RelaxationLevel::Strict);
    let cuisine_relaxed = preferences.admit(&safe, RelaxationLevel::CuisineRelaxed);
    let tools_relaxed = preferences.admit(&safe, RelaxationLevel::ToolsRelaxed);

    assert!(strict.iter().all(|r| cuisine_relaxed.contains(r)));
    assert!(cuisine_relaxed.iter().all(|r| tools_relaxed.contains(r)));
    assert_eq!(tools_relaxed.len(), safe.len());
    assert!(strict.len() <= cuisine_relaxed.len());
}

#[test]
fn test_levels_are_ordered() {
    assert!(RelaxationLevel::Strict < RelaxationLevel::CuisineRelaxed);
    assert!(RelaxationLevel::CuisineRelaxed < RelaxationLevel::ToolsRelaxed);
    assert_eq!(RelaxationLevel::CuisineRelaxed.to_string(), "cuisine_relaxed");
}
