//! Common utilities shared by the user client crates.
//!
//! This crate provides:
//! - Unified error handling for validation, HTTP and transport failures
//! - Configuration structures

pub mod config;
pub mod error;

pub use config::*;
pub use error::{AppError, AppResult, TransportError};
