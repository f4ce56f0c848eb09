//! Business logic and service layer modules.
//!
//! This module contains the core business logic of the application:
//! forecast generation, request validation, and the orchestration service
//! the handlers call into.

pub mod forecast;
pub mod generator;
pub mod random;
pub mod validation;

pub use forecast::*;
pub use generator::*;
pub use random::*;
pub use validation::*;
