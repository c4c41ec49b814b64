//! Occurrence lookup and window extraction.

use kairos_calendar::{CalendarDate, MonthDay, YearRange};
use kairos_events::{EventMatrix, LeadSpans};
use tracing::debug;

use crate::bounds::window_bounds;
use crate::config::WindowConfig;
use crate::error::WindowError;

/// Borrowed view of one observed/simulated pair of daily series and their
/// canonical events, all over the same record.
#[derive(Debug, Clone, Copy)]
pub struct SeriesView<'a> {
    dates: &'a [CalendarDate],
    observed: &'a [f64],
    simulated: &'a [f64],
    observed_events: &'a EventMatrix,
    simulated_events: &'a EventMatrix,
    spans: &'a LeadSpans,
}

impl<'a> SeriesView<'a> {
    /// Creates a view after checking that every input covers the record.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError::LengthMismatch`] if any series or event matrix
    /// differs in length from `dates`, or an event matrix has a different
    /// number of leads than `spans`.
    pub fn new(
        dates: &'a [CalendarDate],
        observed: &'a [f64],
        simulated: &'a [f64],
        observed_events: &'a EventMatrix,
        simulated_events: &'a EventMatrix,
        spans: &'a LeadSpans,
    ) -> Result<Self, WindowError> {
        let n = dates.len();
        let checks = [
            ("observed", observed.len()),
            ("simulated", simulated.len()),
            ("observed events", observed_events.len()),
            ("simulated events", simulated_events.len()),
        ];
        for (field, got) in checks {
            if got != n {
                return Err(WindowError::LengthMismatch {
                    field,
                    expected: n,
                    got,
                });
            }
        }
        for (field, events) in [
            ("observed event leads", observed_events),
            ("simulated event leads", simulated_events),
        ] {
            if events.n_leads() != spans.len() {
                return Err(WindowError::LengthMismatch {
                    field,
                    expected: spans.len(),
                    got: events.n_leads(),
                });
            }
        }
        Ok(Self {
            dates,
            observed,
            simulated,
            observed_events,
            simulated_events,
            spans,
        })
    }

    /// Record length.
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns `true` for an empty record.
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    /// Dates of the record.
    pub fn dates(&self) -> &'a [CalendarDate] {
        self.dates
    }

    /// Lead spans used for the event matrices.
    pub fn spans(&self) -> &'a LeadSpans {
        self.spans
    }
}

/// One occurrence of a calendar pair and the window drawn around it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occurrence {
    /// Record index where the calendar pair occurs.
    pub index: usize,
    /// First record index of the window (after clamping).
    pub start: usize,
    /// Record index of the forecast target day, `start + target_offset`.
    ///
    /// Equal to `index` unless the window was clamped at a record edge.
    pub target: usize,
}

/// Training windows for one calendar pair.
///
/// Row 0 holds the raw daily values; row `j + 1` holds lead `j`'s canonical
/// event. Storage is `[row][occurrence][offset]` in one flat buffer per
/// series.
#[derive(Debug, Clone)]
pub struct CalendarWindows {
    month_day: MonthDay,
    config: WindowConfig,
    n_leads: usize,
    occurrences: Vec<Occurrence>,
    observed: Vec<f64>,
    simulated: Vec<f64>,
}

impl CalendarWindows {
    /// Calendar pair these windows were built for.
    pub fn month_day(&self) -> MonthDay {
        self.month_day
    }

    /// Window geometry.
    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    /// Number of leads (rows minus the raw row).
    pub fn n_leads(&self) -> usize {
        self.n_leads
    }

    /// Number of rows, `n_leads + 1`.
    pub fn n_rows(&self) -> usize {
        self.n_leads + 1
    }

    /// Samples per window.
    pub fn ndays(&self) -> usize {
        self.config.ndays()
    }

    /// Offset of the forecast target day within each window.
    pub fn target_offset(&self) -> usize {
        self.config.target_offset()
    }

    /// Number of occurrences (windows).
    pub fn n_occurrences(&self) -> usize {
        self.occurrences.len()
    }

    /// Occurrences in chronological order.
    pub fn occurrences(&self) -> &[Occurrence] {
        &self.occurrences
    }

    /// Observed window of `row` for occurrence `occ`.
    pub fn observed_row(&self, row: usize, occ: usize) -> &[f64] {
        &self.observed[self.offset(row, occ)..self.offset(row, occ) + self.ndays()]
    }

    /// Simulated window of `row` for occurrence `occ`.
    pub fn simulated_row(&self, row: usize, occ: usize) -> &[f64] {
        &self.simulated[self.offset(row, occ)..self.offset(row, occ) + self.ndays()]
    }

    /// Observed canonical events of lead `j` (0-based) for occurrence `occ`.
    pub fn observed_lead(&self, lead: usize, occ: usize) -> &[f64] {
        self.observed_row(lead + 1, occ)
    }

    /// Simulated canonical events of lead `j` (0-based) for occurrence `occ`.
    pub fn simulated_lead(&self, lead: usize, occ: usize) -> &[f64] {
        self.simulated_row(lead + 1, occ)
    }

    fn offset(&self, row: usize, occ: usize) -> usize {
        assert!(row < self.n_rows(), "row {row} out of range");
        assert!(occ < self.occurrences.len(), "occurrence {occ} out of range");
        (row * self.occurrences.len() + occ) * self.ndays()
    }
}

/// Returns the record indices where `month_day` falls in an eligible year.
pub fn find_occurrences(
    dates: &[CalendarDate],
    month_day: MonthDay,
    eligible: &YearRange,
) -> Vec<usize> {
    dates
        .iter()
        .enumerate()
        .filter(|(_, d)| {
            d.month() == month_day.month()
                && d.day() == month_day.day()
                && eligible.contains(d.year())
        })
        .map(|(i, _)| i)
        .collect()
}

/// Builds the training windows for one calendar pair.
///
/// Returns `Ok(None)` when the pair never occurs in the eligible years; the
/// caller skips such pairs.
///
/// # Errors
///
/// Returns [`WindowError::InvalidConfig`] if the configuration cannot hold
/// the leads, and [`WindowError::RecordTooShort`] if the record cannot hold
/// one full window.
pub fn build_windows(
    month_day: MonthDay,
    eligible: &YearRange,
    view: &SeriesView<'_>,
    config: &WindowConfig,
) -> Result<Option<CalendarWindows>, WindowError> {
    let spans = view.spans();
    config.validate(spans.len())?;

    let indices = find_occurrences(view.dates(), month_day, eligible);
    if indices.is_empty() {
        debug!(%month_day, "no occurrences in eligible years");
        return Ok(None);
    }

    let n = view.len();
    let ndays = config.ndays();
    let lookahead = spans.last().width();
    let n_rows = spans.len() + 1;
    let n_occ = indices.len();

    let mut occurrences = Vec::with_capacity(n_occ);
    for &idx in &indices {
        let (k1, _) = window_bounds(idx, n, lookahead, config)?;
        occurrences.push(Occurrence {
            index: idx,
            start: k1,
            target: k1 + config.target_offset(),
        });
    }

    let mut observed = vec![0.0; n_rows * n_occ * ndays];
    let mut simulated = vec![0.0; n_rows * n_occ * ndays];

    for (i, occ) in occurrences.iter().enumerate() {
        let raw = (i * ndays)..((i + 1) * ndays);
        observed[raw.clone()].copy_from_slice(&view.observed[occ.start..occ.start + ndays]);
        simulated[raw].copy_from_slice(&view.simulated[occ.start..occ.start + ndays]);

        for (j, span) in spans.iter().enumerate() {
            // Realign lead j so its event is anchored on the right future day.
            let shift = span.begin() as isize - (j as isize + 1);
            let base = ((j + 1) * n_occ + i) * ndays;
            for o in 0..ndays {
                let k = (occ.start + o) as isize + shift;
                observed[base + o] = view.observed_events.at_clamped(j, k);
                simulated[base + o] = view.simulated_events.at_clamped(j, k);
            }
        }
    }

    debug!(%month_day, n_occurrences = n_occ, ndays, "built calendar windows");

    Ok(Some(CalendarWindows {
        month_day,
        config: *config,
        n_leads: spans.len(),
        occurrences,
        observed,
        simulated,
    }))
}
