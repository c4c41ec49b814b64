//! Lead-time aggregation spans.

use crate::error::EventError;

/// Day span aggregated by one lead time.
///
/// `begin` and `end` are 1-based day offsets; the span covers
/// `end - begin + 1` days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadSpan {
    begin: usize,
    end: usize,
}

impl LeadSpan {
    /// First day offset (1-based).
    pub fn begin(&self) -> usize {
        self.begin
    }

    /// Last day offset (1-based).
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of days looked ahead beyond the first day (`end - begin`).
    pub fn width(&self) -> usize {
        self.end - self.begin
    }
}

/// Validated, ordered list of lead spans. Lead `j` (0-based) is `spans[j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadSpans {
    spans: Vec<LeadSpan>,
}

impl LeadSpans {
    /// Builds spans from `(begin, end)` pairs, one per lead in order.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::NoLeads`] if `pairs` is empty and
    /// [`EventError::InvalidSpan`] if any pair violates `1 <= begin <= end`.
    pub fn new(pairs: &[(usize, usize)]) -> Result<Self, EventError> {
        if pairs.is_empty() {
            return Err(EventError::NoLeads);
        }
        let spans = pairs
            .iter()
            .enumerate()
            .map(|(j, &(begin, end))| {
                if begin == 0 || begin > end {
                    Err(EventError::InvalidSpan {
                        lead: j + 1,
                        begin,
                        end,
                    })
                } else {
                    Ok(LeadSpan { begin, end })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { spans })
    }

    /// `n_leads` single-day spans: lead `j` (1-based) covers day `j` only.
    pub fn single_day(n_leads: usize) -> Result<Self, EventError> {
        let pairs: Vec<(usize, usize)> = (1..=n_leads).map(|j| (j, j)).collect();
        Self::new(&pairs)
    }

    /// Number of leads.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Always `false`: construction rejects empty span lists.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Span of lead `j` (0-based).
    pub fn get(&self, lead: usize) -> Option<&LeadSpan> {
        self.spans.get(lead)
    }

    /// The final lead's span.
    pub fn last(&self) -> &LeadSpan {
        // Non-empty by construction.
        &self.spans[self.spans.len() - 1]
    }

    /// Iterates over spans in lead order.
    pub fn iter(&self) -> impl Iterator<Item = &LeadSpan> {
        self.spans.iter()
    }
}
