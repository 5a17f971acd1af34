//! UI Components for the MediPredict application.
//!
//! # Layout Components
//! - [`Header`] - Top bar, actions depend on the current layout
//! - [`Footer`] - Page footer on marketing pages
//! - [`AuthLayout`] - Login and signup shell
//! - [`DashboardLayout`] - Sidebar shell for signed-in views
//!
//! # Widgets
//! - [`RiskBadge`], [`StatusBadge`] - Colored status pills
//! - [`ProgressBar`], [`StageList`] - Processing progress

mod auth_layout;
mod badges;
mod dashboard_layout;
mod footer;
mod header;
mod progress;

pub use auth_layout::*;
pub use badges::*;
pub use dashboard_layout::*;
pub use footer::*;
pub use header::*;
pub use progress::*;
