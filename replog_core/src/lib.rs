#![forbid(unsafe_code)]

//! Core domain model and persistence for the Replog exercise tracker.
//!
//! This crate provides:
//! - Domain types (users, exercise log entries)
//! - The user document store (JSON documents with file locking)
//! - Configuration loading
//! - Logging setup

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod store;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use store::{JsonDocStore, UserStore};
