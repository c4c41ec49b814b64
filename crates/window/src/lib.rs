//! Calendar-day training windows.
//!
//! For a `(month, day)` pair this crate locates every occurrence of the pair
//! in the eligible years of a daily record and carves a fixed-length window
//! around each one from the raw series and its canonical events.
//!
//! # Window geometry
//!
//! ```text
//!  start                occurrence (target)
//!    |<- buffer/2 ->|<- analysis ->|<------- forecast ------->|<- rest of buffer ->|
//!    |<-------------------------- ndays ---------------------------------------->|
//! ```
//!
//! Windows that would run off either end of the record slide back inside it
//! instead of shrinking, so every window has exactly `ndays` samples. Near the
//! record edges the target then no longer coincides with the occurrence.

mod bounds;
mod build;
mod config;
mod error;

pub use bounds::window_bounds;
pub use build::{CalendarWindows, Occurrence, SeriesView, build_windows, find_occurrences};
pub use config::WindowConfig;
pub use error::WindowError;
