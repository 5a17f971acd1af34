//! Processing sequencer.
//!
//! Simulates a multi-step analysis with a fixed schedule:
//!
//! ```text
//! ┌──────────────┐  advance_to(elapsed)  ┌─────────────┐  events  ┌────────────┐
//! │ driver clock │──────────────────────▶│  Sequencer  │─────────▶│    view    │
//! │ (tick+timer) │                       │  (schedule) │          │ (progress) │
//! └──────────────┘                       └─────────────┘          └────────────┘
//! ```
//!
//! - [`schedule`] - Validated stage list and duration-weighted boundaries
//! - [`machine`] - Clock-agnostic state machine emitting [`SequenceEvent`]s
//! - `runner` - Tokio driver with a cancel-on-drop handle (`native` feature)
//!
//! The browser driver lives in the frontend crate and feeds the same
//! state machine from gloo timers.

pub mod machine;
pub mod schedule;

#[cfg(feature = "native")]
pub mod runner;

pub use machine::{SequenceEvent, Sequencer, StageStatus};
pub use schedule::Schedule;

#[cfg(feature = "native")]
pub use runner::SequenceHandle;
