//! One component per route.

mod auth;
mod dashboard;
mod history;
mod landing;
mod placeholder;
mod processing;
mod results;
mod upload;

pub use auth::*;
pub use dashboard::*;
pub use history::*;
pub use landing::*;
pub use placeholder::*;
pub use processing::*;
pub use results::*;
pub use upload::*;
