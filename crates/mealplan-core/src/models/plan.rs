// ABOUTME: Generated weekly plan returned to API callers
// ABOUTME: Defines GeneratedPlan, DayPlan, and MealEntry with the client-facing JSON shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::RecipeRecord;

/// One meal slot of a day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MealEntry {
    /// Slot label in the display vocabulary ("Breakfast", "Bữa Sáng", ...)
    #[serde(rename = "type", default)]
    pub meal_type: String,
    /// Catalog identity of the chosen recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_id: Option<String>,
    /// Title of the chosen recipe
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recipe_name: Option<String>,
    /// Calories per serving
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    /// Image reference, placeholder when the recipe has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Short natural-language rationale
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Any other keys the planner attached, passed through untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MealEntry {
    /// Entry filled from a real recipe
    #[must_use]
    pub fn for_recipe(
        meal_type: impl Into<String>,
        recipe: &RecipeRecord,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            meal_type: meal_type.into(),
            recipe_id: Some(recipe.id.clone()),
            recipe_name: Some(recipe.title.clone()),
            calories: Some(recipe.calories()),
            image: Some(recipe.image_or_placeholder().to_owned()),
            reason: Some(reason.into()),
            extra: Map::new(),
        }
    }
}

/// One day of the plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DayPlan {
    /// Day label ("Monday", "Thứ Hai", ...)
    #[serde(default)]
    pub day: String,
    /// Meals in schedule order
    #[serde(default)]
    pub meals: Vec<MealEntry>,
}

/// Complete weekly plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct GeneratedPlan {
    /// Nutritionist-style summary or an explanation of how the plan was built
    #[serde(default)]
    pub analysis: String,
    /// Days in order
    #[serde(default)]
    pub days: Vec<DayPlan>,
}

impl GeneratedPlan {
    /// Iterate every meal of every day
    pub fn meals(&self) -> impl Iterator<Item = &MealEntry> {
        self.days.iter().flat_map(|day| day.meals.iter())
    }

    /// Total number of meal slots across the plan
    #[must_use]
    pub fn meal_count(&self) -> usize {
        self.days.iter().map(|day| day.meals.len()).sum()
    }
}
