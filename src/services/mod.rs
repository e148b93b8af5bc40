// ABOUTME: Domain service layer for business logic extracted from route handlers
// ABOUTME: Hosts the meal-plan orchestration service used by the HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Protocol-agnostic business logic. Route handlers only translate HTTP to
//! service calls and back.

/// Meal-plan pipeline orchestration
pub mod meal_plan;

pub use meal_plan::MealPlanService;
