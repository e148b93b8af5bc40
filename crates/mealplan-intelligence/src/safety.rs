// ABOUTME: Hard safety gate removing recipes that conflict with allergies or dislikes
// ABOUTME: Always applied first and never relaxed by later pipeline stages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Safety Filter
//!
//! A recipe is excluded when:
//!
//! - an ingredient name contains an allergy tag (case-insensitive substring),
//! - its allergen tags equal an allergy tag (case-insensitive), or
//! - an ingredient name contains a token of the comma-separated dislike text.
//!
//! Empty inputs exclude nothing. Filtering twice yields the same set.

use mealplan_core::models::RecipeRecord;

/// Split the free-text dislike field into trimmed, lowercased tokens
#[must_use]
pub fn parse_dislikes(text: &str) -> Vec<String> {
    text.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Lowercase allergy tags, dropping blanks
fn normalize_allergies(allergies: &[String]) -> Vec<String> {
    allergies
        .iter()
        .map(|tag| tag.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Whether a recipe conflicts with any normalized allergy tag
fn conflicts_with_allergies(recipe: &RecipeRecord, allergies: &[String]) -> bool {
    allergies.iter().any(|allergy| {
        recipe
            .ingredients
            .iter()
            .any(|ingredient| ingredient.name.to_lowercase().contains(allergy.as_str()))
            || recipe
                .allergens
                .iter()
                .any(|allergen| allergen.trim().to_lowercase() == *allergy)
    })
}

/// Whether any ingredient contains a disliked token
fn contains_disliked(recipe: &RecipeRecord, dislikes: &[String]) -> bool {
    recipe.ingredients.iter().any(|ingredient| {
        let name = ingredient.name.to_lowercase();
        dislikes.iter().any(|token| name.contains(token.as_str()))
    })
}

/// Whether a single recipe passes the safety gate
#[must_use]
pub fn is_safe(recipe: &RecipeRecord, allergies: &[String], disliked_text: &str) -> bool {
    let allergies = normalize_allergies(allergies);
    let dislikes = parse_dislikes(disliked_text);
    !conflicts_with_allergies(recipe, &allergies) && !contains_disliked(recipe, &dislikes)
}

/// Keep only the recipes that are safe for the user.
///
/// Returns a new candidate set of borrowed records; the catalog is untouched.
#[must_use]
pub fn filter<'a, I>(catalog: I, allergies: &[String], disliked_text: &str) -> Vec<&'a RecipeRecord>
where
    I: IntoIterator<Item = &'a RecipeRecord>,
{
    let allergies = normalize_allergies(allergies);
    let dislikes = parse_dislikes(disliked_text);
    catalog
        .into_iter()
        .filter(|recipe| {
            !conflicts_with_allergies(recipe, &allergies) && !contains_disliked(recipe, &dislikes)
        })
        .collect()
}
