//! Custom middleware implementations for the API.
//!
//! This module contains middleware for CORS response headers, request IDs,
//! and other cross-cutting concerns.

pub mod cors;
pub mod request_id;

pub use cors::*;
pub use request_id::*;
