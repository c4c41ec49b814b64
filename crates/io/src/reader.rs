//! Whitespace-delimited daily record reader.
//!
//! Columns: `year month day precipitation observed sim_1 .. sim_k`, one row
//! per day. Blank lines and lines starting with `#` are ignored. If the first
//! remaining line starts with a non-numeric token it is a header and columns
//! six onwards name the models; otherwise models are `model_1 .. model_k`.

use std::path::Path;

use kairos_calendar::CalendarDate;
use tracing::{debug, info};

use crate::error::IoError;
use crate::record::{DailyRecord, SimulatedSeries};
use crate::validate::ValidationCollector;

const FIXED_COLUMNS: usize = 5;

/// Reads and validates a daily record from `path`.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] for a missing file, [`IoError::Io`] if
/// the file cannot be read and [`IoError::Validation`] counting every
/// malformed row.
pub fn read_record(path: &Path) -> Result<DailyRecord, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path)?;
    let record = parse_record(&text)?;
    let (first, last) = record.span();
    info!(
        path = %path.display(),
        n_days = record.len(),
        n_models = record.simulated().len(),
        %first,
        %last,
        "read daily record"
    );
    Ok(record)
}

/// Parses a daily record from text.
///
/// # Errors
///
/// Returns [`IoError::Validation`] counting every malformed row, then any
/// record-level problem found by [`DailyRecord::new`].
pub fn parse_record(text: &str) -> Result<DailyRecord, IoError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .peekable();

    let header: Option<Vec<String>> = match lines.peek() {
        Some((_, first)) if is_header(first) => {
            let tokens: Vec<String> = first.split_whitespace().map(str::to_string).collect();
            lines.next();
            Some(tokens)
        }
        _ => None,
    };

    let n_columns = match (&header, lines.peek()) {
        (Some(h), _) => h.len(),
        (None, Some((_, first))) => first.split_whitespace().count(),
        (None, None) => 0,
    };
    if n_columns <= FIXED_COLUMNS {
        return Err(IoError::Validation {
            count: 1,
            details: format!(
                "expected at least {} columns, found {n_columns}",
                FIXED_COLUMNS + 1
            ),
        });
    }
    let n_models = n_columns - FIXED_COLUMNS;
    let ids: Vec<String> = match header {
        Some(h) => h[FIXED_COLUMNS..].to_vec(),
        None => (1..=n_models).map(|k| format!("model_{k}")).collect(),
    };
    debug!(n_models, ?ids, "record layout");

    let mut c = ValidationCollector::new();
    let mut dates = Vec::new();
    let mut precipitation = Vec::new();
    let mut observed = Vec::new();
    let mut simulated: Vec<Vec<f64>> = vec![Vec::new(); n_models];

    for (line_no, line) in lines {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != n_columns {
            c.push(format!(
                "line {line_no}: expected {n_columns} columns, got {}",
                tokens.len()
            ));
            continue;
        }

        let date = match parse_date(&tokens[..3]) {
            Ok(d) => d,
            Err(msg) => {
                c.push(format!("line {line_no}: {msg}"));
                continue;
            }
        };

        let mut values = Vec::with_capacity(n_columns - 3);
        for (col, tok) in tokens[3..].iter().enumerate() {
            match tok.parse::<f64>() {
                Ok(v) if v.is_finite() => values.push(v),
                Ok(v) => c.push(format!("line {line_no}, column {}: non-finite value {v}", col + 4)),
                Err(_) => c.push(format!(
                    "line {line_no}, column {}: cannot parse '{tok}'",
                    col + 4
                )),
            }
        }
        if values.len() != n_columns - 3 {
            continue;
        }

        dates.push(date);
        precipitation.push(values[0]);
        observed.push(values[1]);
        for (series, &v) in simulated.iter_mut().zip(&values[2..]) {
            series.push(v);
        }
    }

    if dates.is_empty() && c.is_empty() {
        c.push("no data rows");
    }
    c.finish()?;

    let simulated = ids
        .into_iter()
        .zip(simulated)
        .map(|(id, values)| SimulatedSeries::new(id, values))
        .collect();
    DailyRecord::new(dates, precipitation, observed, simulated)
}

fn is_header(line: &str) -> bool {
    line.split_whitespace()
        .next()
        .is_some_and(|tok| tok.parse::<f64>().is_err())
}

fn parse_date(tokens: &[&str]) -> Result<CalendarDate, String> {
    let year = tokens[0]
        .parse::<i32>()
        .map_err(|_| format!("invalid year '{}'", tokens[0]))?;
    let month = tokens[1]
        .parse::<u8>()
        .map_err(|_| format!("invalid month '{}'", tokens[1]))?;
    let day = tokens[2]
        .parse::<u8>()
        .map_err(|_| format!("invalid day '{}'", tokens[2]))?;
    CalendarDate::new(year, month, day).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_detection() {
        assert!(is_header("year month day precip obs hbv"));
        assert!(!is_header("2001 1 1 0.0 3.2 3.1"));
    }

    #[test]
    fn parse_date_errors() {
        assert!(parse_date(&["2001", "2", "29"]).is_err());
        assert!(parse_date(&["2001", "x", "1"]).unwrap_err().contains("invalid month"));
        assert_eq!(
            parse_date(&["2000", "2", "29"]).unwrap(),
            CalendarDate::new(2000, 2, 29).unwrap()
        );
    }

    #[test]
    fn default_model_ids() {
        let text = "2001 1 1 0.0 1.0 2.0 3.0\n2001 1 2 0.5 1.1 2.1 3.1\n";
        let r = parse_record(text).unwrap();
        let ids: Vec<&str> = r.simulated().iter().map(|s| s.id()).collect();
        assert_eq!(ids, ["model_1", "model_2"]);
    }

    #[test]
    fn too_few_columns() {
        let err = parse_record("2001 1 1 0.0 1.0\n").unwrap_err();
        assert!(err.to_string().contains("at least 6 columns"));
    }

    #[test]
    fn empty_input() {
        let err = parse_record("# only a comment\n\n").unwrap_err();
        assert!(matches!(err, IoError::Validation { .. }));
    }
}
