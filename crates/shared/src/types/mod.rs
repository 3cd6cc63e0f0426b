//! Common types used across the application.

pub mod shift;

pub use shift::Shift;
