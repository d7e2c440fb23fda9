//! WasteSort classification screen.
//!
//! This crate provides:
//! - The image-source capability seam (gallery pick / camera capture)
//! - The screen state machine driving a single classify call
//! - The alert surface shown to the user

pub mod alert;
pub mod image_source;
pub mod screen;

pub use alert::Alert;
pub use image_source::{FsImageSource, ImageHandle, ImageSource, PickOutcome};
pub use screen::ClassifierScreen;
