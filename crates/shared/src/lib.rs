//! Shared types, errors, and configuration for Hajira.
//!
//! This crate provides common types used across all other crates:
//! - The day/night `Shift` enum
//! - Application-wide error types
//! - Configuration management

pub mod config;
pub mod error;
pub mod types;

pub use self::config::{AppConfig, FormConfig, WingConfig};
pub use self::error::{AppError, AppResult};
