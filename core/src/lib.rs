//! # MediPredict - health screening prototype core
//!
//! Platform-independent pieces of the MediPredict app: the data model, the
//! mock data standing in for a real inference backend, the route table,
//! history search, upload selection and the processing sequencer.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Upload    │────▶│ Processing  │────▶│   Results   │────▶│  Detailed   │
//! │ (select+    │     │ (sequencer, │     │ (mock       │     │  report     │
//! │  validate)  │     │  4 stages)  │     │  prediction)│     │             │
//! └─────────────┘     └─────────────┘     └─────────────┘     └─────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use medipredict::{Schedule, SequenceHandle};
//!
//! #[tokio::main]
//! async fn main() {
//!     let (_handle, mut events) = SequenceHandle::spawn(Schedule::processing());
//!     while let Some(event) = events.recv().await {
//!         println!("{:?}", event);
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`config`] - Constants and dev-server settings
//! - [`models`] - Domain models (Stage, PredictionResult, HistoryEntry)
//! - [`mock`] - Hard-coded data
//! - [`routes`] - Client-side route table and navigation
//! - [`history`] - History search and stats
//! - [`upload`] - File selection and validation
//! - [`sequencer`] - Staged progress simulation
//! - `server` - Static dev server (`native` feature)

// Core modules
pub mod config;
pub mod error;
pub mod models;

// Data
pub mod mock;

// Views
pub mod history;
pub mod routes;
pub mod upload;

// Processing
pub mod sequencer;

// Dev server
#[cfg(feature = "native")]
pub mod server;

// =============================================================================
// Re-exports - Errors
// =============================================================================

pub use error::{ConfigError, ScheduleError, ServerError, UploadError};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    ExtractedParameter, HistoryEntry, IndicatorStatus, KeyIndicator, PredictionResult,
    Recommendation, RiskLevel, Stage,
};

// =============================================================================
// Re-exports - Views
// =============================================================================

pub use history::{filter_history, HistoryStats};
pub use routes::{Layout, NavItem, Route, BOTTOM_NAV, PRIMARY_NAV};
pub use upload::{SelectedFile, UploadState};

// =============================================================================
// Re-exports - Sequencer
// =============================================================================

pub use sequencer::{Schedule, SequenceEvent, Sequencer, StageStatus};

#[cfg(feature = "native")]
pub use sequencer::SequenceHandle;
