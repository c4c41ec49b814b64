//! Error types for the kairos-events crate.

/// Error type for lead-span construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EventError {
    /// Returned when no lead spans are supplied.
    #[error("at least one lead span is required")]
    NoLeads,

    /// Returned when a span's offsets are out of order or zero.
    #[error("invalid span for lead {lead}: begin={begin}, end={end} (need 1 <= begin <= end)")]
    InvalidSpan {
        /// 1-based lead index.
        lead: usize,
        /// Begin offset that was provided.
        begin: usize,
        /// End offset that was provided.
        end: usize,
    },
}
