// ABOUTME: Plan composer abstraction for pluggable LLM-backed meal planning
// ABOUTME: Defines the PlanComposer contract and the Gemini and disabled implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Plan Composer Interface
//!
//! A plan composer receives one [`InstructionPayload`] and answers with the raw
//! text of the model's reply. It does not parse the plan; that is the job of
//! `mealplan_intelligence::rehydrate`. It does not enforce the caller-side
//! timeout either; the meal-plan service wraps every call in
//! `tokio::time::timeout`.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mealplan_server::llm::{GeminiPlanner, PlanComposer};
//! use mealplan_server::config::PlannerConfig;
//! use mealplan_intelligence::InstructionPayload;
//!
//! async fn example(config: &PlannerConfig, payload: &InstructionPayload) {
//!     if let Ok(planner) = GeminiPlanner::from_config(config) {
//!         let raw = planner.invoke(payload).await;
//!     }
//! }
//! ```

mod gemini;

pub use gemini::GeminiPlanner;

use std::sync::Arc;

use async_trait::async_trait;
use mealplan_core::errors::PlannerError;
use mealplan_intelligence::InstructionPayload;
use tracing::info;

use crate::config::PlannerConfig;

/// External service that turns planner instructions into a plan document
#[async_trait]
pub trait PlanComposer: Send + Sync {
    /// Short provider name for logs
    fn name(&self) -> &'static str;

    /// Send the instructions and return the model's raw text answer
    ///
    /// # Errors
    ///
    /// Returns [`PlannerError::ExternalService`] on network failure, non-success
    /// status, an error envelope, or a reply without a text part.
    async fn invoke(&self, payload: &InstructionPayload) -> Result<String, PlannerError>;
}

/// Composer used when no API key is configured; always fails so the
/// service serves the fallback plan
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredPlanner;

#[async_trait]
impl PlanComposer for UnconfiguredPlanner {
    fn name(&self) -> &'static str {
        "unconfigured"
    }

    async fn invoke(&self, _payload: &InstructionPayload) -> Result<String, PlannerError> {
        Err(PlannerError::external("no planner API key configured"))
    }
}

/// Pick the composer matching the configuration
///
/// Falls back to [`UnconfiguredPlanner`] when the key is missing or the HTTP
/// client cannot be built.
#[must_use]
pub fn composer_from_config(config: &PlannerConfig) -> Arc<dyn PlanComposer> {
    match GeminiPlanner::from_config(config) {
        Ok(planner) => {
            info!(model = %config.model, "Gemini planner enabled");
            Arc::new(planner)
        }
        Err(e) => {
            info!(reason = %e, "Gemini planner disabled, serving fallback plans only");
            Arc::new(UnconfiguredPlanner)
        }
    }
}
