// ABOUTME: HTTP middleware for request tracing, CORS, and context propagation
// ABOUTME: Provides request ID generation, span creation, and cross-origin configuration

/// CORS configuration
pub mod cors;
/// Request id generation and per-request spans
pub mod tracing;

pub use cors::setup_cors;
pub use self::tracing::{create_request_span, MakeRequestIdentifier, REQUEST_ID_HEADER};
