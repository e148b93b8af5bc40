// ABOUTME: Integration tests for the ephemeral manifest and planner instruction builder
// ABOUTME: Covers id allocation, compact line encoding, and the composed instruction text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod helpers;

use helpers::{refs, sample_recipes};
use mealplan_core::models::{MealSlot, PlanRequest, RecipeRecord};
use mealplan_intelligence::manifest::{self, sections, FIELD_DELIMITER};
use mealplan_intelligence::PlanLocale;

fn request() -> PlanRequest {
    PlanRequest {
        goal: "Weight Loss".to_owned(),
        dietary_preference: "Pescatarian".to_owned(),
        allergies: vec!["Peanuts".to_owned()],
        disliked_ingredients: "cilantro".to_owned(),
        ..PlanRequest::default()
    }
}

#[test]
fn test_every_line_resolves_back_to_its_recipe() {
    let catalog = sample_recipes();
    let pool = refs(&catalog[..12]);

    let (manifest, payload) = manifest::build(
        &pool,
        &request(),
        &MealSlot::DEFAULT_SCHEDULE,
        PlanLocale::English,
    );

    assert_eq!(manifest.len(), pool.len());
    assert_eq!(payload.manifest_lines.len(), pool.len());
    for line in &payload.manifest_lines {
        let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
        assert_eq!(fields.len(), 4, "unexpected line {line}");
        let id: i64 = fields[0].parse().unwrap();
        let recipe = manifest.resolve(id).unwrap();
        assert_eq!(fields[1], recipe.title);
        assert_eq!(fields[2], recipe.calories().to_string());
        assert_eq!(fields[3], recipe.meal_categories.join(","));
    }
}

#[test]
fn test_ids_are_dense_and_start_at_one() {
    let catalog = sample_recipes();
    let pool = refs(&catalog[..5]);

    let (manifest, _) = manifest::build(&pool, &request(), &[MealSlot::Lunch], PlanLocale::English);

    let ids: Vec<i64> = manifest.iter().map(|(id, _)| id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    assert_eq!(manifest.resolve(1).unwrap().id, catalog[0].id);
    assert!(manifest.resolve(6).is_none());
}

#[test]
fn test_recipe_without_nutrition_reports_zero_calories() {
    let recipe = RecipeRecord::new("plain", "Plain Rice").with_category("Lunch");
    let pool = vec![&recipe];

    let (_, payload) = manifest::build(&pool, &request(), &[MealSlot::Lunch], PlanLocale::English);

    assert_eq!(payload.manifest_lines, vec!["1|Plain Rice|0|Lunch".to_owned()]);
}

#[test]
fn test_instruction_text_carries_profile_schedule_and_language() {
    let catalog = sample_recipes();
    let pool = refs(&catalog[..3]);

    let (_, payload) = manifest::build(
        &pool,
        &request(),
        &[MealSlot::Breakfast, MealSlot::Dinner],
        PlanLocale::Vietnamese,
    );

    assert_eq!(payload.slot_labels, vec!["Bữa Sáng", "Bữa Tối"]);
    for heading in [
        sections::USER_PROFILE,
        sections::RECIPE_MANIFEST,
        sections::MANDATORY_RULES,
        sections::OUTPUT_FORMAT,
    ] {
        assert!(payload.text.contains(heading), "missing {heading}");
    }
    assert!(payload.text.contains("Weight Loss"));
    assert!(payload.text.contains("Pescatarian, Peanuts"));
    assert!(payload.text.contains("[Bữa Sáng, Bữa Tối]"));
    assert!(payload.text.contains("in Vietnamese"));
    assert!(payload.text.contains("\"day\": \"Thứ Hai\""));
    assert!(payload.text.contains("- Budget: not specified"));
    for line in &payload.manifest_lines {
        assert!(payload.text.contains(line.as_str()));
    }
}

#[test]
fn test_build_is_pure() {
    let catalog = sample_recipes();
    let pool = refs(&catalog);

    let (_, first) = manifest::build(&pool, &request(), &MealSlot::DEFAULT_SCHEDULE, PlanLocale::English);
    let (_, second) = manifest::build(&pool, &request(), &MealSlot::DEFAULT_SCHEDULE, PlanLocale::English);

    assert_eq!(first, second);
}
