//! Application configuration.
//!
//! Timing and upload limits come from the core crate so the browser and
//! the CLI simulation stay in sync. Display-only strings live here.

pub use medipredict::config::{
    accept_attribute, APP_NAME, AUTH_DELAY, MAX_UPLOAD_BYTES, SETTLE_DELAY, TICK_INTERVAL,
    UPLOAD_DELAY,
};

/// Subtitle under the logo.
pub const APP_TAGLINE: &str = "Multi-Disease Platform";

/// Short tip in the dashboard sidebar.
pub const SIDEBAR_TIP: &str = "Regular health checkups can help detect diseases early.";

/// Maximum upload size as shown to the user.
pub const MAX_UPLOAD_LABEL: &str = "Maximum file size: 25MB";
