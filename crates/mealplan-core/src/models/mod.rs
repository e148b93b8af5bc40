// ABOUTME: Core data models for the meal-plan pipeline
// ABOUTME: Recipe records, plan requests, meal slots, and generated plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Generated plan returned to callers
pub mod plan;
/// Catalog recipe records
pub mod recipe;
/// Plan request payload and caller context
pub mod request;
/// Meal slot vocabulary
pub mod schedule;

pub use plan::{DayPlan, GeneratedPlan, MealEntry};
pub use recipe::{RecipeIngredient, RecipeNutrition, RecipeRecord};
pub use request::{PlanRequest, UserContext};
pub use schedule::{parse_schedule, MealSlot};
