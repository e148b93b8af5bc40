// ABOUTME: Core types and constants for the meal-plan recommendation service
// ABOUTME: Foundation crate with error handling, recipe/plan models, and pipeline constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Core
//!
//! Foundation crate shared by the pipeline algorithms and the HTTP server.
//! It changes rarely, which keeps incremental builds of the workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the planner-specific `PlannerError`
//! - **models**: `RecipeRecord`, `PlanRequest`, `MealSlot`, `GeneratedPlan`
//! - **constants**: pool quotas, relaxation threshold, placeholder assets

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Pipeline constants organized by concern
pub mod constants;

/// Core data models
pub mod models;
