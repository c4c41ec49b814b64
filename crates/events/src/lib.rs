//! # kairos-events
//!
//! Turns a daily series into a matrix of rolling lead-time aggregates
//! ("canonical events").
//!
//! For lead `j` with span `(begin, end)`, the event at day `t` is the mean of
//! the series over `[t, t + end - begin]`, clipped at the last day of the
//! record. Single-day spans reproduce the series unchanged.
//!
//! ```ignore
//! use kairos_events::{LeadSpans, aggregate};
//!
//! let spans = LeadSpans::single_day(7)?;
//! let events = aggregate(&streamflow, &spans);
//! let lead3 = events.lead(2);
//! ```

mod aggregate;
mod error;
mod lead;

pub use aggregate::{EventMatrix, aggregate};
pub use error::EventError;
pub use lead::{LeadSpan, LeadSpans};
