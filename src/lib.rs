//! Role-based project tracking.
//!
//! A [`Board`] holds users and the Project → Milestone → Task tree. The
//! functions in [`model::metrics`] derive progress and status figures from
//! it, and [`Session`] routes developer, manager and executive intents to
//! copy-on-write board updates.

pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod settings;

pub use error::{DashboardError, Result};
pub use model::{Board, Dashboard, Role, Session};
pub use settings::AppSettings;
