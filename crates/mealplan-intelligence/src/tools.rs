// ABOUTME: Kitchen tool normalization through a static synonym table
// ABOUTME: Maps free-text and Vietnamese tool names onto a small canonical vocabulary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Kitchen Tools
//!
//! Users and recipe authors describe equipment in free text, often in
//! Vietnamese. Both sides are normalized through [`TOOL_SYNONYMS`] before they
//! are compared, so "Nồi cơm điện" on a recipe matches "rice cooker" owned by
//! the user.

/// Canonical tool names
pub mod canonical {
    /// Oven
    pub const OVEN: &str = "oven";
    /// Microwave
    pub const MICROWAVE: &str = "microwave";
    /// Rice cooker
    pub const RICE_COOKER: &str = "rice cooker";
    /// Air fryer
    pub const AIR_FRYER: &str = "air fryer";
    /// Blender
    pub const BLENDER: &str = "blender";
    /// Stove or hob
    pub const STOVE: &str = "stove";
}

/// Lowercased synonym → canonical tool.
///
/// Longer phrases come before the shorter phrases they contain so that
/// containment lookup picks the most specific entry ("lò vi sóng" before "lò").
pub const TOOL_SYNONYMS: &[(&str, &str)] = &[
    ("nồi chiên không dầu", canonical::AIR_FRYER),
    ("nồi chiên", canonical::AIR_FRYER),
    ("air fryer", canonical::AIR_FRYER),
    ("airfryer", canonical::AIR_FRYER),
    ("nồi cơm điện", canonical::RICE_COOKER),
    ("nồi cơm", canonical::RICE_COOKER),
    ("rice cooker", canonical::RICE_COOKER),
    ("lò vi sóng", canonical::MICROWAVE),
    ("microwave", canonical::MICROWAVE),
    ("lò nướng", canonical::OVEN),
    ("oven", canonical::OVEN),
    ("máy xay sinh tố", canonical::BLENDER),
    ("máy xay", canonical::BLENDER),
    ("blender", canonical::BLENDER),
    ("food processor", canonical::BLENDER),
    ("bếp ga", canonical::STOVE),
    ("bếp gas", canonical::STOVE),
    ("bếp từ", canonical::STOVE),
    ("bếp điện", canonical::STOVE),
    ("bếp", canonical::STOVE),
    ("stovetop", canonical::STOVE),
    ("cooktop", canonical::STOVE),
    ("hob", canonical::STOVE),
    ("stove", canonical::STOVE),
];

/// Normalize a tool name.
///
/// Exact synonyms map directly; otherwise the first synonym contained in the
/// name wins; otherwise the trimmed lowercase name is returned unchanged.
#[must_use]
pub fn normalize_tool(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    TOOL_SYNONYMS
        .iter()
        .find(|(synonym, _)| *synonym == lowered)
        .or_else(|| {
            TOOL_SYNONYMS
                .iter()
                .find(|(synonym, _)| lowered.contains(synonym))
        })
        .map_or(lowered, |(_, tool)| (*tool).to_owned())
}

/// Whether two already-normalized tool names refer to the same equipment
#[must_use]
pub fn tools_match(owned: &str, required: &str) -> bool {
    if owned.is_empty() || required.is_empty() {
        return false;
    }
    owned.contains(required) || required.contains(owned)
}

/// Normalized set of tools a user owns
#[derive(Debug, Clone, Default)]
pub struct OwnedTools {
    normalized: Vec<String>,
}

impl OwnedTools {
    /// Normalize the user's free-text tool list
    #[must_use]
    pub fn new(tools: &[String]) -> Self {
        Self {
            normalized: tools
                .iter()
                .map(|tool| normalize_tool(tool))
                .filter(|tool| !tool.is_empty())
                .collect(),
        }
    }

    /// Whether the user owns something matching `required`
    #[must_use]
    pub fn covers(&self, required: &str) -> bool {
        let required = normalize_tool(required);
        self.normalized
            .iter()
            .any(|owned| tools_match(owned, &required))
    }

    /// Whether every tool in `required` is owned; an empty list is always satisfied
    #[must_use]
    pub fn covers_all(&self, required: &[String]) -> bool {
        required
            .iter()
            .filter(|tool| !tool.trim().is_empty())
            .all(|tool| self.covers(tool))
    }
}
