//! # Stagetrack Common Library
//!
//! Shared code for the stagetrack service:
//! - Data model for the remote concert catalog API
//! - Error types
//! - Configuration loading
//! - Date-string and venue-name text helpers

pub mod config;
pub mod dates;
pub mod error;
pub mod models;
pub mod text;

pub use error::{Error, Result};
