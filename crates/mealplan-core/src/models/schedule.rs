// ABOUTME: Meal slot vocabulary shared by plan requests and recipe category tags
// ABOUTME: Normalizes English and Vietnamese meal names through a static lookup table
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A meal of the day.
///
/// Used both for the slots a user asks for and for the category tags a recipe
/// carries, so the two sides compare directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealSlot {
    /// Morning meal
    Breakfast,
    /// Midday meal
    Lunch,
    /// Evening meal
    Dinner,
    /// Small meal between the others
    Snack,
}

/// Lowercased tag spellings accepted for each slot
const SLOT_TAGS: &[(&str, MealSlot)] = &[
    ("breakfast", MealSlot::Breakfast),
    ("sáng", MealSlot::Breakfast),
    ("bữa sáng", MealSlot::Breakfast),
    ("lunch", MealSlot::Lunch),
    ("trưa", MealSlot::Lunch),
    ("bữa trưa", MealSlot::Lunch),
    ("dinner", MealSlot::Dinner),
    ("tối", MealSlot::Dinner),
    ("bữa tối", MealSlot::Dinner),
    ("snack", MealSlot::Snack),
    ("phụ", MealSlot::Snack),
    ("bữa phụ", MealSlot::Snack),
];

impl MealSlot {
    /// Slots used when a request does not name any
    pub const DEFAULT_SCHEDULE: [Self; 3] = [Self::Breakfast, Self::Lunch, Self::Dinner];

    /// Parse a schedule entry or a recipe category tag, case-insensitively
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        let normalized = tag.trim().to_lowercase();
        SLOT_TAGS
            .iter()
            .find(|(spelling, _)| *spelling == normalized)
            .map(|(_, slot)| *slot)
    }

    /// Canonical English name, as sent by clients
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Snack => "Snack",
        }
    }
}

/// Parse a client schedule, dropping unknown entries.
///
/// Falls back to [`MealSlot::DEFAULT_SCHEDULE`] when nothing usable remains.
#[must_use]
pub fn parse_schedule(entries: &[String]) -> Vec<MealSlot> {
    let slots: Vec<MealSlot> = entries.iter().filter_map(|e| MealSlot::from_tag(e)).collect();
    if slots.is_empty() {
        MealSlot::DEFAULT_SCHEDULE.to_vec()
    } else {
        slots
    }
}
