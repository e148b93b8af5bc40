// ABOUTME: Plan rehydration turning the planner's id-based answer into a client-ready plan
// ABOUTME: Resolves ephemeral ids against the manifest and substitutes placeholders for unknown ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Rehydration
//!
//! The planner answers with `{"analysis": ..., "days": [{"day": ..., "meals":
//! [{"type": ..., "id": 3, "reason": ...}]}]}`. Only the `days[].meals[]`
//! skeleton is validated; anything else the planner adds is passed through.
//! No days or slots are ever invented here.

use mealplan_core::constants::placeholders;
use mealplan_core::errors::PlannerError;
use mealplan_core::models::{DayPlan, GeneratedPlan, MealEntry, RecipeRecord};
use serde_json::{Map, Value};
use tracing::debug;

use crate::manifest::Manifest;
use crate::vocabulary::PlanLocale;

/// Largest float id still read as an integer without precision loss
const MAX_INTEGRAL_ID: f64 = 9_007_199_254_740_992.0;

/// Remove a surrounding markdown code fence, if the planner added one
#[must_use]
pub fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the language tag line ("json") if present
    let body = rest.split_once('\n').map_or(rest, |(first, tail)| {
        if first.trim().chars().all(char::is_alphanumeric) {
            tail
        } else {
            rest
        }
    });
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}

/// Read an ephemeral id given as integer, integral float or numeric string
fn ephemeral_id(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract().abs() < f64::EPSILON && f.abs() <= MAX_INTEGRAL_ID)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Scalar rendered as text; null, arrays and objects are dropped
fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Non-negative calorie count, rounding fractional values
fn calorie_count(value: &Value) -> Option<u32> {
    let Value::Number(n) = value else {
        return None;
    };
    n.as_u64()
        .and_then(|c| u32::try_from(c).ok())
        .or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && *f <= f64::from(u32::MAX))
                .map(|f| f.round() as u32)
        })
}

/// Split a raw meal object into typed fields and pass-through keys.
///
/// The typed keys are always removed from the pass-through map so a meal
/// never serializes the same key twice.
fn meal_from_object(mut object: Map<String, Value>) -> MealEntry {
    let mut take = |key: &str| object.remove(key);

    let meal_type = take("type").and_then(scalar_text).unwrap_or_default();
    let recipe_name = take("recipeName").and_then(scalar_text);
    let image = take("image").and_then(scalar_text);
    let reason = take("reason").and_then(scalar_text);
    let recipe_id = take("recipeId").and_then(scalar_text);
    let calories = take("calories").as_ref().and_then(calorie_count);

    MealEntry {
        meal_type,
        recipe_id,
        recipe_name,
        calories,
        image,
        reason,
        extra: object,
    }
}

fn apply_recipe(meal: &mut MealEntry, recipe: &RecipeRecord) {
    meal.recipe_id = Some(recipe.id.clone());
    meal.recipe_name = Some(recipe.title.clone());
    meal.calories = Some(recipe.calories());
    meal.image = Some(recipe.image_or_placeholder().to_owned());
}

fn apply_unresolved(meal: &mut MealEntry, locale: PlanLocale) {
    meal.recipe_name = Some(locale.unresolved_name().to_owned());
    meal.image = Some(placeholders::RECIPE_IMAGE_URL.to_owned());
    meal.reason = Some(locale.unresolved_reason().to_owned());
}

fn rehydrate_meal(value: Value, manifest: &Manifest<'_>, locale: PlanLocale) -> Result<MealEntry, PlannerError> {
    let Value::Object(object) = value else {
        return Err(PlannerError::malformed("meal entry is not an object"));
    };
    let id = object.get("id").map(ephemeral_id);
    let mut meal = meal_from_object(object);

    match id {
        None => {}
        Some(Some(id)) => match manifest.resolve(id) {
            Some(recipe) => apply_recipe(&mut meal, recipe),
            None => {
                debug!(id, "Planner referenced an unknown recipe id");
                apply_unresolved(&mut meal, locale);
            }
        },
        Some(None) => {
            debug!("Planner returned a non-numeric recipe id");
            apply_unresolved(&mut meal, locale);
        }
    }
    Ok(meal)
}

fn rehydrate_day(value: Value, manifest: &Manifest<'_>, locale: PlanLocale) -> Result<DayPlan, PlannerError> {
    let Value::Object(mut object) = value else {
        return Err(PlannerError::malformed("day entry is not an object"));
    };
    let Some(Value::Array(meals)) = object.remove("meals") else {
        return Err(PlannerError::malformed("day entry has no meals array"));
    };
    let day = match object.remove("day") {
        Some(Value::String(s)) => s,
        Some(other) => other.to_string(),
        None => String::new(),
    };
    let meals = meals
        .into_iter()
        .map(|meal| rehydrate_meal(meal, manifest, locale))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(DayPlan { day, meals })
}

/// Parse the planner's answer and resolve every ephemeral id.
///
/// # Errors
///
/// Returns [`PlannerError::MalformedPlan`] when the text is not JSON, is not an
/// object, or does not carry a `days` array of objects that each hold a
/// `meals` array of objects.
pub fn rehydrate(raw: &str, manifest: &Manifest<'_>, locale: PlanLocale) -> Result<GeneratedPlan, PlannerError> {
    let document: Value = serde_json::from_str(strip_code_fence(raw))
        .map_err(|e| PlannerError::malformed(format!("response is not JSON: {e}")))?;
    let Value::Object(mut root) = document else {
        return Err(PlannerError::malformed("response is not a JSON object"));
    };
    let Some(Value::Array(days)) = root.remove("days") else {
        return Err(PlannerError::malformed("response has no days array"));
    };
    let analysis = match root.remove("analysis") {
        Some(Value::String(s)) => s,
        _ => String::new(),
    };

    let days = days
        .into_iter()
        .map(|day| rehydrate_day(day, manifest, locale))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GeneratedPlan { analysis, days })
}
