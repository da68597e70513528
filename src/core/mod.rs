//! Core domain types for codec metadata
//!
//! This module contains the plain value types the toolkit traffics in:
//! the error taxonomy, dotted component versions, and container format
//! identifiers.

pub mod error;
pub mod format;
pub mod version;

pub use error::{CodecInfoError, CodecResult};
pub use format::ContainerFormat;
pub use version::CodecVersion;
