// ABOUTME: Recipe catalog record as read by the meal-plan pipeline
// ABOUTME: Defines RecipeRecord, RecipeIngredient, and RecipeNutrition with catalog JSON names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::MealSlot;
use crate::constants::placeholders;

/// Ingredient line of a catalog recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecipeIngredient {
    /// Ingredient name as typed by the author (free text, any language)
    pub name: String,
    /// Amount, kept as authored ("2", "1/2", "a pinch")
    pub quantity: Option<String>,
    /// Unit of the amount, if any
    pub unit: Option<String>,
}

impl RecipeIngredient {
    /// Create an ingredient with a name and quantity
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: Some(quantity.into()),
            unit: None,
        }
    }
}

/// Per-serving nutrition summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct RecipeNutrition {
    /// Energy in kcal
    pub calories: u32,
    /// Carbohydrates in grams
    pub carb: u32,
    /// Protein in grams
    pub protein: u32,
    /// Fat in grams
    pub fat: u32,
}

/// A recipe from the catalog.
///
/// Owned by the catalog collaborator; the pipeline only ever borrows it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RecipeRecord {
    /// Catalog identity
    pub id: String,
    /// Display title
    pub title: String,
    /// Ingredient lines
    pub ingredients: Vec<RecipeIngredient>,
    /// Allergen tags declared by the author
    pub allergens: Vec<String>,
    /// Tools the recipe requires
    #[serde(rename = "kitchenTools")]
    pub required_tools: Vec<String>,
    /// Cuisine tag ("Vietnamese", "Thai", ...)
    pub cuisine: String,
    /// Meal-category tags ("Breakfast", "Sáng", ...)
    #[serde(rename = "mealCourse")]
    pub meal_categories: Vec<String>,
    /// Nutrition summary, absent for recipes without analysis
    pub nutrition: Option<RecipeNutrition>,
    /// Main image reference
    pub main_image_url: Option<String>,
}

impl RecipeRecord {
    /// Create a bare recipe with an identity and title
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Calories per serving, 0 when the recipe carries no nutrition data
    #[must_use]
    pub fn calories(&self) -> u32 {
        self.nutrition.map_or(0, |n| n.calories)
    }

    /// Main image, or the static placeholder when none is set
    #[must_use]
    pub fn image_or_placeholder(&self) -> &str {
        match self.main_image_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => placeholders::RECIPE_IMAGE_URL,
        }
    }

    /// Whether any meal-category tag normalizes to `slot`
    #[must_use]
    pub fn is_tagged_for(&self, slot: MealSlot) -> bool {
        self.meal_categories
            .iter()
            .filter_map(|tag| MealSlot::from_tag(tag))
            .any(|tagged| tagged == slot)
    }

    /// Builder-style helper for tests and seed data
    #[must_use]
    pub fn with_ingredient(mut self, name: impl Into<String>, quantity: impl Into<String>) -> Self {
        self.ingredients.push(RecipeIngredient::new(name, quantity));
        self
    }

    /// Builder-style helper for allergen tags
    #[must_use]
    pub fn with_allergen(mut self, allergen: impl Into<String>) -> Self {
        self.allergens.push(allergen.into());
        self
    }

    /// Builder-style helper for required tools
    #[must_use]
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.required_tools.push(tool.into());
        self
    }

    /// Builder-style helper for the cuisine tag
    #[must_use]
    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    /// Builder-style helper for meal-category tags
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.meal_categories.push(category.into());
        self
    }

    /// Builder-style helper for calories
    #[must_use]
    pub fn with_calories(mut self, calories: u32) -> Self {
        let mut nutrition = self.nutrition.unwrap_or_default();
        nutrition.calories = calories;
        self.nutrition = Some(nutrition);
        self
    }

    /// Builder-style helper for the main image
    #[must_use]
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.main_image_url = Some(url.into());
        self
    }
}
