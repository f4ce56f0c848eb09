//! Forecast API - A demonstration weather forecast web API
//!
//! This is a sample API built with Actix Web and Paperclip that demonstrates:
//! - RESTful endpoint design
//! - Declarative per-field request validation
//! - Randomly generated in-memory forecast data
//! - Structured request logging with request IDs
//! - CORS response headers
//! - OpenAPI documentation
//!
//! ## Architecture
//!
//! The codebase is organized into focused modules:
//! - `models/` - Data structures, request/response models, and the error taxonomy
//! - `handlers/` - HTTP request handlers for each endpoint
//! - `middleware/` - Custom middleware for cross-cutting concerns
//! - `services/` - Forecast generation, validation, and orchestration
//! - `config/` - Configuration structures and environment loading
//!
//! ## Quick Start
//!
//! ```no_run
//! use forecast_api::create_base_app;
//!
//! #[actix_web::main]
//! async fn main() -> std::io::Result<()> {
//!     let app = create_base_app();
//!     // Configure and run the server
//!     Ok(())
//! }
//! ```

// Core modules
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;

// Re-export commonly used types and functions for convenience
pub use config::{CorsConfig, ServerConfig};
pub use handlers::{
    create_base_app, create_forecast, create_openapi_spec, get_forecast_by_date, health, index,
    list_forecasts, version,
};
pub use middleware::{CorsHeaders, RequestIdMiddleware};
pub use models::{
    ApiError, CreateForecastRequest, ErrorResponse, FieldError, Forecast, ForecastQuery,
    HealthResponse, ValidationErrorResponse, VersionResponse,
};
pub use services::{
    ForecastGenerator, ForecastService, MAX_FORECAST_DAYS, MIN_FORECAST_DAYS, RandomSource,
    SUMMARIES, SeededRandom, ThreadRandom, validate,
};
