// ABOUTME: Shared test helpers for the meal-plan integration tests
// ABOUTME: Recipe fixtures, the sample catalog, and scripted planner and catalog doubles
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub mod axum_test;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use mealplan_core::errors::{AppError, AppResult, ErrorCode, PlannerError};
use mealplan_core::models::RecipeRecord;
use mealplan_intelligence::InstructionPayload;
use mealplan_server::catalog::{InMemoryCatalog, RecipeCatalog};
use mealplan_server::llm::PlanComposer;
use mealplan_server::services::MealPlanService;
use serde_json::json;
use tokio::time::sleep;

const SAMPLE_CATALOG: &str = include_str!("../../data/sample_recipes.json");

/// Recipes shipped in `data/sample_recipes.json`
pub fn sample_recipes() -> Vec<RecipeRecord> {
    serde_json::from_str(SAMPLE_CATALOG).expect("sample catalog must parse")
}

/// Recipe tagged with the given meal categories
pub fn recipe(id: &str, categories: &[&str]) -> RecipeRecord {
    categories
        .iter()
        .fold(RecipeRecord::new(id, format!("Recipe {id}")), |r, c| {
            r.with_category(*c)
        })
        .with_calories(400)
}

/// `count` recipes tagged for `category`, ids `{prefix}-0..`
pub fn recipes_for(prefix: &str, category: &str, count: usize) -> Vec<RecipeRecord> {
    (0..count)
        .map(|i| recipe(&format!("{prefix}-{i}"), &[category]))
        .collect()
}

/// Borrow every record, the way the pipeline stages take their input
pub fn refs(recipes: &[RecipeRecord]) -> Vec<&RecipeRecord> {
    recipes.iter().collect()
}

/// A well-formed planner answer using ids `1..=n` in order
pub fn planner_answer(days: usize, ids: &[i64]) -> String {
    let days: Vec<_> = (0..days)
        .map(|d| {
            json!({
                "day": format!("Day {}", d + 1),
                "meals": ids
                    .iter()
                    .map(|id| json!({ "type": "Breakfast", "id": id, "reason": "Balanced start" }))
                    .collect::<Vec<_>>()
            })
        })
        .collect();
    json!({ "analysis": "High protein week", "days": days }).to_string()
}

/// Planner double returning a scripted answer and recording what it was sent
pub struct ScriptedPlanner {
    answer: Result<String, PlannerError>,
    delay: Option<Duration>,
    calls: AtomicUsize,
    last_payload: Mutex<Option<InstructionPayload>>,
}

impl ScriptedPlanner {
    /// Planner that answers with `raw`
    pub fn answering(raw: impl Into<String>) -> Self {
        Self::with_result(Ok(raw.into()))
    }

    /// Planner that fails with `error`
    pub fn failing(error: PlannerError) -> Self {
        Self::with_result(Err(error))
    }

    fn with_result(answer: Result<String, PlannerError>) -> Self {
        Self {
            answer,
            delay: None,
            calls: AtomicUsize::new(0),
            last_payload: Mutex::new(None),
        }
    }

    /// Sleep before answering
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Number of invocations so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Payload of the most recent invocation
    pub fn last_payload(&self) -> Option<InstructionPayload> {
        self.last_payload.lock().unwrap().clone()
    }
}

#[async_trait]
impl PlanComposer for ScriptedPlanner {
    fn name(&self) -> &'static str {
        "scripted"
    }

    async fn invoke(&self, payload: &InstructionPayload) -> Result<String, PlannerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_payload.lock().unwrap() = Some(payload.clone());
        if let Some(delay) = self.delay {
            sleep(delay).await;
        }
        self.answer.clone()
    }
}

/// Catalog whose backing store is always down
pub struct UnavailableCatalog;

#[async_trait]
impl RecipeCatalog for UnavailableCatalog {
    async fn all_recipes(&self) -> AppResult<Arc<[RecipeRecord]>> {
        Err(AppError::new(
            ErrorCode::ResourceUnavailable,
            "recipe store offline",
        ))
    }
}

/// Seeded service over `recipes` and `planner`
pub fn service_with(
    recipes: Vec<RecipeRecord>,
    planner: Arc<dyn PlanComposer>,
) -> MealPlanService {
    MealPlanService::new(Arc::new(InMemoryCatalog::new(recipes)), planner).with_seed(42)
}
