// ABOUTME: Meal-plan pipeline algorithms, free of I/O and async
// ABOUTME: Safety filtering, relaxation, pool sampling, manifest encoding, rehydration, fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Meal Plan Intelligence
//!
//! Every stage of the recommendation pipeline that does not talk to the
//! outside world. Stages borrow recipes from the catalog and never mutate it.
//!
//! ```text
//! catalog ─► safety::filter ─► relaxation::relax ─► sampler::sample ─► manifest::build
//!                                                                         │
//!             fallback::generate ◄── planner failure ── rehydrate::rehydrate ◄┘
//! ```

/// Cuisine preference matching
pub mod cuisine;
/// Deterministic rotating plan
pub mod fallback;
/// Ephemeral manifest and planner instructions
pub mod manifest;
/// Planner answer → client plan
pub mod rehydrate;
/// Soft preference relaxation cascade
pub mod relaxation;
/// Hard allergy/dislike gate
pub mod safety;
/// Bounded, category-balanced pool
pub mod sampler;
/// Kitchen tool normalization
pub mod tools;
/// Localized plan labels and canned texts
pub mod vocabulary;

pub use manifest::{InstructionPayload, Manifest};
pub use relaxation::{RelaxationLevel, Relaxed};
pub use vocabulary::PlanLocale;
