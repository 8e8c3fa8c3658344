//! Common utilities module
//!
//! Error type and editor configuration shared across the image pipeline.

pub mod config;
pub mod error;

pub use config::{EditorConfig, EditorConfigBuilder};
pub use error::{EditorError, Result};
