//! MediPredict - Frontend Rust/Leptos Application
//!
//! A WebAssembly prototype of a health screening app: marketing pages,
//! sign-in forms, a dashboard, report upload, a simulated analysis and
//! the resulting prediction views. All data is mock data from the core
//! crate; nothing leaves the browser.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App (Router)                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Marketing   /            Header, Landing, Footer            │
//! │  Auth        /login       AuthLayout + form                  │
//! │              /signup                                         │
//! │  Dashboard   /dashboard   DashboardLayout                    │
//! │              /upload      ├── Sidebar (primary + bottom nav) │
//! │              /processing  ├── Page content                   │
//! │              /results     └── Mobile bottom nav              │
//! │              /detailed-report, /history, /settings, /help    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Greeting and error types
//! - [`components`] - Layouts and shared widgets
//! - [`pages`] - One component per route
//! - [`services`] - Processing timer driver, file helpers

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use medipredict::Route as Page;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod pages;
pub mod services;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{AppError, AppResult, Greeting};

// Components
pub use components::*;

// Pages
pub use pages::*;

// Services
pub use services::*;

// =============================================================================
// Application
// =============================================================================

/// Root component, mounted by `main.rs`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Routes>
                <Route path=Page::Landing.path() view=LandingPage/>
                <Route path=Page::Login.path() view=LoginPage/>
                <Route path=Page::Signup.path() view=SignupPage/>
                <Route path=Page::Dashboard.path() view=DashboardPage/>
                <Route path=Page::Upload.path() view=UploadPage/>
                <Route path=Page::Processing.path() view=ProcessingPage/>
                <Route path=Page::Results.path() view=ResultsPage/>
                <Route path=Page::DetailedReport.path() view=DetailedReportPage/>
                <Route path=Page::History.path() view=HistoryPage/>
                <Route path=Page::Settings.path() view=SettingsPage/>
                <Route path=Page::Help.path() view=HelpPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Router>
    }
}
