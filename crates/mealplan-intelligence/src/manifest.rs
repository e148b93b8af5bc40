// ABOUTME: Ephemeral recipe manifest and planner instruction builder
// ABOUTME: Encodes the pool as compact id|title|calories|tags lines and composes the prompt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Ephemeral Manifest
//!
//! The planner references recipes by small integers instead of catalog ids.
//! [`Manifest`] is a dense arena over the pool: id `n` is the recipe at index
//! `n - 1`. It lives for one request and is never persisted.
//!
//! [`build`] is pure: no I/O, no randomness.

use std::fmt::Write as _;

use mealplan_core::models::{MealSlot, PlanRequest, RecipeRecord};

use crate::vocabulary::PlanLocale;

/// Delimiter between manifest line fields
pub const FIELD_DELIMITER: char = '|';

/// Section headings of the instruction text
pub mod sections {
    /// User constraints
    pub const USER_PROFILE: &str = "USER PROFILE:";
    /// Recipe manifest
    pub const RECIPE_MANIFEST: &str = "RECIPE MANIFEST (ID | Name | Calories | Tags):";
    /// Hard rules
    pub const MANDATORY_RULES: &str = "MANDATORY RULES:";
    /// Output schema
    pub const OUTPUT_FORMAT: &str = "OUTPUT FORMAT (strict JSON):";
}

/// Request-scoped id → recipe lookup table
#[derive(Debug, Clone)]
pub struct Manifest<'a> {
    entries: Vec<&'a RecipeRecord>,
}

impl<'a> Manifest<'a> {
    /// Allocate ids `1..=pool.len()` in pool order
    #[must_use]
    pub fn new(pool: &[&'a RecipeRecord]) -> Self {
        Self {
            entries: pool.to_vec(),
        }
    }

    /// Resolve an ephemeral id
    #[must_use]
    pub fn resolve(&self, id: i64) -> Option<&'a RecipeRecord> {
        let index = usize::try_from(id).ok()?.checked_sub(1)?;
        self.entries.get(index).copied()
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(id, recipe)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (i64, &'a RecipeRecord)> + '_ {
        (1_i64..).zip(self.entries.iter().copied())
    }

    /// Compact summary lines, one per recipe
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.iter()
            .map(|(id, recipe)| summary_line(id, recipe))
            .collect()
    }
}

/// `id|title|calories|tag1,tag2` with delimiters stripped from the title
#[must_use]
pub fn summary_line(id: i64, recipe: &RecipeRecord) -> String {
    let title = recipe.title.replace(FIELD_DELIMITER, "-");
    format!(
        "{id}{FIELD_DELIMITER}{title}{FIELD_DELIMITER}{}{FIELD_DELIMITER}{}",
        recipe.calories(),
        recipe.meal_categories.join(",")
    )
}

/// Everything the planner client needs for one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstructionPayload {
    /// Full instruction text sent as the single user message
    pub text: String,
    /// Slot labels the plan must use, in schedule order
    pub slot_labels: Vec<String>,
    /// Manifest lines embedded in the text
    pub manifest_lines: Vec<String>,
}

/// Encode the pool and compose the planner instruction
#[must_use]
pub fn build<'a>(
    pool: &[&'a RecipeRecord],
    request: &PlanRequest,
    slots: &[MealSlot],
    locale: PlanLocale,
) -> (Manifest<'a>, InstructionPayload) {
    let manifest = Manifest::new(pool);
    let manifest_lines = manifest.lines();
    let slot_labels: Vec<String> = slots
        .iter()
        .map(|slot| locale.slot_label(*slot).to_owned())
        .collect();

    let text = compose_text(request, &manifest_lines, &slot_labels, locale);

    (
        manifest,
        InstructionPayload {
            text,
            slot_labels,
            manifest_lines,
        },
    )
}

fn or_unspecified(value: &str) -> &str {
    if value.trim().is_empty() {
        "not specified"
    } else {
        value
    }
}

fn compose_text(
    request: &PlanRequest,
    manifest_lines: &[String],
    slot_labels: &[String],
    locale: PlanLocale,
) -> String {
    let allergies = if request.allergies.is_empty() {
        "none".to_owned()
    } else {
        request.allergies.join(", ")
    };
    let schedule = slot_labels.join(", ");
    let example_slot = slot_labels.first().map_or("Breakfast", String::as_str);
    let example_day = locale.week_days()[0];
    let language = locale.language_name();

    // Writing to a String never fails
    let mut text = String::new();
    let _ = writeln!(
        text,
        "You are an AI nutrition expert. Plan 7 days of meals for the user."
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "{}", sections::USER_PROFILE);
    let _ = writeln!(text, "- Goal: {}", or_unspecified(&request.goal));
    let _ = writeln!(
        text,
        "- Diet / allergies: {}, {allergies}",
        or_unspecified(&request.dietary_preference)
    );
    let _ = writeln!(
        text,
        "- Disliked ingredients: {}",
        or_unspecified(&request.disliked_ingredients)
    );
    let _ = writeln!(
        text,
        "- Activity level: {}",
        or_unspecified(&request.activity_level)
    );
    let _ = writeln!(text, "- Budget: {}", or_unspecified(&request.budget));
    let _ = writeln!(
        text,
        "- Cooking time: {}",
        or_unspecified(&request.cooking_time)
    );
    let _ = writeln!(text);
    let _ = writeln!(text, "{}", sections::RECIPE_MANIFEST);
    for line in manifest_lines {
        let _ = writeln!(text, "{line}");
    }
    let _ = writeln!(text);
    let _ = writeln!(text, "{}", sections::MANDATORY_RULES);
    let _ = writeln!(text, "1. Only choose dishes from the ID list above.");
    let _ = writeln!(
        text,
        "2. Each day contains exactly these meals: [{schedule}]. Do not add other meals."
    );
    let _ = writeln!(
        text,
        "3. Write the day names, meal types, analysis and reasons in {language}."
    );
    let _ = writeln!(text, "4. Return exactly 7 days in the JSON format below.");
    let _ = writeln!(text);
    let _ = writeln!(text, "{}", sections::OUTPUT_FORMAT);
    let _ = writeln!(text, "{{");
    let _ = writeln!(text, "  \"analysis\": \"...\",");
    let _ = writeln!(text, "  \"days\": [");
    let _ = writeln!(text, "    {{");
    let _ = writeln!(text, "      \"day\": \"{example_day}\",");
    let _ = writeln!(text, "      \"meals\": [");
    let _ = writeln!(
        text,
        "        {{ \"type\": \"{example_slot}\", \"id\": 1, \"reason\": \"...\" }}"
    );
    let _ = writeln!(text, "      ]");
    let _ = writeln!(text, "    }}");
    let _ = writeln!(text, "  ]");
    let _ = writeln!(text, "}}");
    let _ = write!(text, "Return raw JSON only. No markdown.");
    text
}
