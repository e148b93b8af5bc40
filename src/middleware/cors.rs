// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the meal-plan web clients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::{parse_origins, ServerConfig};
use crate::constants::routes::USER_ID_HEADER;

/// Configure CORS settings for the meal-plan server
///
/// Origins come from `CORS_ALLOWED_ORIGINS`. `*` (or a list with no parseable
/// origin) allows any origin. Credentials are only allowed for an explicit
/// origin list, since browsers reject them alongside a wildcard.
///
/// ```bash
/// # Allow specific origins (default: the local web clients)
/// export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://localhost:5173"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let origins = parse_origins(&config.cors_allowed_origins);

    let parsed: Vec<HeaderValue> = if origins.iter().any(|o| o == "*") {
        Vec::new()
    } else {
        origins
            .iter()
            .filter_map(|origin| HeaderValue::from_str(origin).ok())
            .collect()
    };
    let allow_credentials = !parsed.is_empty();
    let allow_origin = if parsed.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(parsed)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_credentials(allow_credentials)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static(USER_ID_HEADER),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}
