// ABOUTME: Error types for the external plan composer and plan rehydration
// ABOUTME: Defines PlannerError with conversions into the unified AppError system
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{AppError, ErrorCode};

/// Failures of the AI-assisted planning path.
///
/// None of these ever reach an API caller: the meal-plan service catches them
/// and switches to the deterministic fallback plan.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlannerError {
    /// Network failure, non-success status, error envelope or missing text part
    #[error("External planner failed: {reason}")]
    ExternalService {
        /// What went wrong talking to the service
        reason: String,
    },

    /// Planner rejected the call because its quota is exhausted
    #[error("External planner rate limited: {reason}")]
    RateLimited {
        /// Quota message, including the retry delay when the service sent one
        reason: String,
    },

    /// Planner answered, but not with a usable `days[].meals[]` document
    #[error("Malformed plan from external planner: {reason}")]
    MalformedPlan {
        /// Which structural check failed
        reason: String,
    },

    /// Caller-side timeout elapsed before the planner answered
    #[error("External planner timed out after {seconds}s")]
    Timeout {
        /// Configured timeout
        seconds: u64,
    },
}

impl PlannerError {
    /// Create an external service error
    #[must_use]
    pub fn external(reason: impl Into<String>) -> Self {
        Self::ExternalService {
            reason: reason.into(),
        }
    }

    /// Create a rate limit error
    #[must_use]
    pub fn rate_limited(reason: impl Into<String>) -> Self {
        Self::RateLimited {
            reason: reason.into(),
        }
    }

    /// Create a malformed plan error
    #[must_use]
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedPlan {
            reason: reason.into(),
        }
    }

    /// Short label used in structured logs
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ExternalService { .. } => "external_service",
            Self::RateLimited { .. } => "rate_limited",
            Self::MalformedPlan { .. } => "malformed_plan",
            Self::Timeout { .. } => "timeout",
        }
    }
}

impl From<PlannerError> for AppError {
    fn from(error: PlannerError) -> Self {
        let code = match &error {
            PlannerError::ExternalService { .. } => ErrorCode::ExternalServiceError,
            PlannerError::RateLimited { .. } => ErrorCode::ExternalRateLimited,
            PlannerError::Timeout { .. } => ErrorCode::ExternalServiceUnavailable,
            PlannerError::MalformedPlan { .. } => ErrorCode::SerializationError,
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}
