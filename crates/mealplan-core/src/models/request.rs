// ABOUTME: Meal-plan request payload and the explicit caller context
// ABOUTME: Mirrors the client JSON body; every field is optional on the wire
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::schedule::{parse_schedule, MealSlot};

/// A user's request for a weekly meal plan.
///
/// Immutable for the duration of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct PlanRequest {
    /// Goal, e.g. "Weight Loss" or "High Protein"
    pub goal: String,
    /// Activity level, e.g. "Sedentary"
    pub activity_level: String,
    /// Diet, e.g. "Vegan" or "None"
    pub dietary_preference: String,
    /// Hard allergy tags
    pub allergies: Vec<String>,
    /// Comma-separated free text of disliked ingredients
    pub disliked_ingredients: String,
    /// Budget band, e.g. "Standard"
    pub budget: String,
    /// Cooking-time preference, e.g. "Under 30 mins"
    pub cooking_time: String,
    /// Meals per day as chosen in the client
    pub meals_per_day: u32,
    /// Tools the user owns (free text, any language)
    pub kitchen_tools: Vec<String>,
    /// Preferred cuisine or "any"
    pub preferred_cuisine: String,
    /// Requested slots ("Breakfast", "Lunch", "Dinner", "Snack")
    pub meal_schedule: Vec<String>,
}

impl PlanRequest {
    /// Requested slots, defaulting to breakfast/lunch/dinner
    #[must_use]
    pub fn schedule(&self) -> Vec<MealSlot> {
        parse_schedule(&self.meal_schedule)
    }
}

/// Identity of the caller, resolved by the surrounding auth layer.
///
/// Only used to correlate log lines; the pipeline never reads session state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserContext {
    /// Authenticated user id, if any
    pub user_id: Option<String>,
}

impl UserContext {
    /// Context for an identified user
    #[must_use]
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
        }
    }

    /// Context without an identified user
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { user_id: None }
    }

    /// Id for log fields
    #[must_use]
    pub fn log_id(&self) -> &str {
        self.user_id.as_deref().unwrap_or("anonymous")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_deserializes_client_body() {
        let body = serde_json::json!({
            "goal": "Weight Loss",
            "allergies": ["Peanuts"],
            "dislikedIngredients": "cilantro, liver",
            "mealsPerDay": 3,
            "kitchenTools": ["Rice Cooker"],
            "preferredCuisine": "Vietnamese",
            "mealSchedule": ["Breakfast", "Dinner"]
        });
        let request: PlanRequest = serde_json::from_value(body).unwrap();

        assert_eq!(request.goal, "Weight Loss");
        assert_eq!(request.disliked_ingredients, "cilantro, liver");
        assert_eq!(request.meals_per_day, 3);
        assert_eq!(request.schedule(), vec![MealSlot::Breakfast, MealSlot::Dinner]);
        assert!(request.budget.is_empty());
    }
}
