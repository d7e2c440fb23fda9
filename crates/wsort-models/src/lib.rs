//! Shared data models for the WasteSort client.
//!
//! This crate provides Serde-serializable types for:
//! - Classification predictions
//! - The `/classify` response shape
//! - Display formatting of the top result

pub mod prediction;

// Re-export common types
pub use prediction::{ClassifyResponse, Prediction};
