//! Client for the remote waste-classification service.
//!
//! The service accepts an image upload on `POST /classify` and returns
//! predictions ranked by confidence. This crate owns the one outbound call:
//! building the multipart body, decoding the response, and mapping every
//! failure mode onto [`ClassifyError`].

pub mod client;
pub mod error;

pub use client::{ClassifyClient, ClassifyConfig};
pub use error::{ClassifyError, ClassifyResult};
