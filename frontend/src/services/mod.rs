//! Browser-side services.
//!
//! # Services
//!
//! - [`sequence`] - Timer driver for the processing animation
//! - [`files`] - Reading selected files from input and drop events

pub mod files;
pub mod sequence;

pub use files::*;
pub use sequence::*;
