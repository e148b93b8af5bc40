// ABOUTME: Main library entry point for the meal-plan recommendation server
// ABOUTME: Wires catalog access, the LLM plan composer, the pipeline service, and HTTP routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Server
//!
//! Generates personalized seven-day meal plans from a recipe catalog.
//!
//! ## Features
//!
//! - **Safety first**: allergy and dislike exclusions are never relaxed
//! - **Relaxation cascade**: tool and cuisine preferences loosen only when too
//!   few recipes survive
//! - **Bounded prompts**: at most 30 recipes are sent to the planner, encoded as
//!   compact `id|title|calories|tags` lines
//! - **Always answers**: any planner failure yields a deterministic rotating plan
//!
//! ## Architecture
//!
//! - **catalog**: `RecipeCatalog` trait and the in-memory JSON catalog
//! - **llm**: `PlanComposer` trait and the Gemini implementation
//! - **services**: `MealPlanService`, the pipeline orchestrator
//! - **routes**: axum routers for `/api/ai/meal-plan`, `/health` and `/ready`
//! - **config** / **logging**: environment configuration and tracing setup
//!
//! The pure pipeline stages live in the `mealplan-intelligence` crate and the
//! shared models and errors in `mealplan-core`.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use mealplan_core::models::{PlanRequest, UserContext};
//! use mealplan_server::catalog::InMemoryCatalog;
//! use mealplan_server::llm::UnconfiguredPlanner;
//! use mealplan_server::services::MealPlanService;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let catalog = InMemoryCatalog::from_json_file("data/sample_recipes.json").await?;
//!     let service = MealPlanService::new(Arc::new(catalog), Arc::new(UnconfiguredPlanner));
//!
//!     let plan = service
//!         .generate(&UserContext::anonymous(), &PlanRequest::default())
//!         .await?;
//!     println!("{}", plan.analysis);
//!     Ok(())
//! }
//! ```

/// Recipe catalog collaborator
pub mod catalog;

/// Environment configuration
pub mod config;

/// Server constants and environment defaults
pub mod constants;

/// External plan composers
pub mod llm;

/// Tracing subscriber setup and structured application logs
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// HTTP routes
pub mod routes;

/// Domain services
pub mod services;
