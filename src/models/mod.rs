//! Data models and schemas for the Forecast API.
//!
//! This module contains all the data structures used throughout the
//! application, including request/response models and the error taxonomy.

pub mod api;
pub mod error;
pub mod forecast;

pub use api::*;
pub use error::*;
pub use forecast::*;
