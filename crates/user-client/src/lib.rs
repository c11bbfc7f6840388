//! User Client Library
//!
//! This crate provides a typed client for the users REST collection and the
//! configuration needed to build one from the environment.

pub mod clients;
pub mod config;

pub use clients::{HttpResponse, HttpTransport, ReqwestTransport, UserClient};
pub use config::UserClientConfig;
