// ABOUTME: Deterministic fallback plan used whenever the external planner cannot deliver
// ABOUTME: Rotates through the pool in order across all days and slots of the week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Fallback Plan
//!
//! Slot `k` of the week (counting across days) gets `pool[k % pool.len()]`.
//! The rotation does not look at meal-category tags, so a dinner-only recipe
//! can land on a breakfast slot when the pool is unbalanced.

use mealplan_core::constants::plan::DAYS_PER_PLAN;
use mealplan_core::models::{DayPlan, GeneratedPlan, MealEntry, MealSlot, RecipeRecord};

use crate::vocabulary::PlanLocale;

/// Seven days labelled in `locale`, each with no meals
fn empty_week(locale: PlanLocale) -> Vec<DayPlan> {
    locale
        .week_days()
        .iter()
        .take(DAYS_PER_PLAN)
        .map(|day| DayPlan {
            day: (*day).to_owned(),
            meals: Vec::new(),
        })
        .collect()
}

/// Build the rotating fallback plan.
///
/// Same pool order and schedule always give the same plan.
#[must_use]
pub fn generate(pool: &[&RecipeRecord], slots: &[MealSlot], locale: PlanLocale) -> GeneratedPlan {
    let mut days = empty_week(locale);

    if !pool.is_empty() {
        let mut rotation = pool.iter().cycle();
        for day in &mut days {
            for slot in slots {
                // cycle() over a non-empty slice never ends
                if let Some(recipe) = rotation.next() {
                    day.meals.push(MealEntry::for_recipe(
                        locale.slot_label(*slot),
                        recipe,
                        locale.fallback_reason(),
                    ));
                }
            }
        }
    }

    GeneratedPlan {
        analysis: locale.fallback_analysis().to_owned(),
        days,
    }
}

/// Plan returned when filtering left nothing to plan with
#[must_use]
pub fn empty_plan(locale: PlanLocale) -> GeneratedPlan {
    GeneratedPlan {
        analysis: locale.empty_pool_analysis().to_owned(),
        days: empty_week(locale),
    }
}
