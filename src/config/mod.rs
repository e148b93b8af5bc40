// ABOUTME: Configuration module for the meal-plan server
// ABOUTME: Re-exports the environment-driven ServerConfig and planner settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the meal-plan server

/// Environment and server configuration
pub mod environment;

pub use environment::{parse_origins, PlannerConfig, ServerConfig};
