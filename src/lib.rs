//! Core modules for the portfolio desktop application.
//!
//! This library exposes internal modules for testing purposes.
//! It is not intended for external use as a library.

pub mod clock;
pub mod gui;
pub mod i18n;
pub mod profile;
pub mod state;

// Re-export types for test modules
pub use clock::{Clock, FixedClock, SystemClock};
pub use i18n::{ContentCatalog, ContentRecord, Language};
pub use profile::Profile;
pub use state::Selection;
