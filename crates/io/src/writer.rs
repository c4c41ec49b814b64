//! Result table, skill table and coefficient file writers.
//!
//! Each format has a writer generic over [`std::io::Write`] and a `_file`
//! variant that creates the file and buffers it.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use kairos_calendar::{CalendarDate, MonthDay};
use tracing::debug;

use crate::error::IoError;

/// One `(issue date, lead)` row of the result table.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultRow {
    pub date: CalendarDate,
    /// Lead time, 1-based.
    pub lead: usize,
    pub observed: f64,
    pub simulated: f64,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub members: Vec<f64>,
}

/// One row of the skill table. `None` is written as `NA`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkillRow {
    pub lead_time: usize,
    pub correlation: Option<f64>,
    pub efficiency: Option<f64>,
    pub bias: Option<f64>,
    pub rmse: Option<f64>,
}

/// Per-lead coefficients of one calendar pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientBlock {
    pub month_day: MonthDay,
    pub values: Vec<f64>,
}

/// Writes the result table as CSV with two decimals.
///
/// # Errors
///
/// Returns [`IoError::ColumnMismatch`] if a row does not carry `n_members`
/// members, [`IoError::Csv`] or [`IoError::Io`] on write failure.
pub fn write_results<W: Write>(
    out: W,
    n_members: usize,
    rows: &[ResultRow],
) -> Result<(), IoError> {
    let mut wtr = csv::Writer::from_writer(out);
    let mut header: Vec<String> = [
        "YearMonthDay",
        "LeadTime",
        "Obs",
        "Sim",
        "EnsembleMean",
        "EnsembleMax",
        "EnsembleMin",
    ]
    .iter()
    .map(|h| h.to_string())
    .collect();
    header.extend((1..=n_members).map(|m| format!("Ens{m}")));
    wtr.write_record(&header)?;

    let mut record = Vec::with_capacity(header.len());
    for row in rows {
        if row.members.len() != n_members {
            return Err(IoError::ColumnMismatch {
                what: "result row members",
                expected: n_members,
                got: row.members.len(),
            });
        }
        record.clear();
        record.push(row.date.yyyymmdd().to_string());
        record.push(row.lead.to_string());
        let summary = [row.observed, row.simulated, row.mean, row.max, row.min];
        record.extend(summary.iter().chain(&row.members).map(|v| format!("{v:.2}")));
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes the skill table as CSV with four decimals.
///
/// # Errors
///
/// Returns [`IoError::Csv`] or [`IoError::Io`] on write failure.
pub fn write_skill<W: Write>(out: W, rows: &[SkillRow]) -> Result<(), IoError> {
    let mut wtr = csv::Writer::from_writer(out);
    wtr.write_record(["LeadTime", "R", "EfficiencyScore", "Bias", "RMSE"])?;
    for row in rows {
        wtr.write_record([
            row.lead_time.to_string(),
            fmt_metric(row.correlation),
            fmt_metric(row.efficiency),
            fmt_metric(row.bias),
            fmt_metric(row.rmse),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

fn fmt_metric(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.4}"),
        None => "NA".to_string(),
    }
}

/// Writes coefficient blocks.
///
/// Each block is a `month<TAB>day` line followed by `n_leads` lines of
/// `n_leads` tab-separated values; lead `i`'s coefficient sits on the
/// diagonal and every other cell is `0.0000`.
///
/// # Errors
///
/// Returns [`IoError::ColumnMismatch`] if a block does not hold `n_leads`
/// values, or [`IoError::Io`] on write failure.
pub fn write_coefficients<W: Write>(
    mut out: W,
    n_leads: usize,
    blocks: &[CoefficientBlock],
) -> Result<(), IoError> {
    for block in blocks {
        if block.values.len() != n_leads {
            return Err(IoError::ColumnMismatch {
                what: "coefficient block",
                expected: n_leads,
                got: block.values.len(),
            });
        }
        writeln!(out, "{}\t{}", block.month_day.month(), block.month_day.day())?;
        for i in 0..n_leads {
            let line: Vec<String> = (0..n_leads)
                .map(|j| {
                    let v = if i == j { block.values[i] } else { 0.0 };
                    format!("{v:.4}")
                })
                .collect();
            writeln!(out, "{}", line.join("\t"))?;
        }
    }
    out.flush()?;
    Ok(())
}

fn create(path: &Path) -> Result<BufWriter<File>, IoError> {
    Ok(BufWriter::new(File::create(path)?))
}

/// [`write_results`] into a new file at `path`.
pub fn write_results_file(path: &Path, n_members: usize, rows: &[ResultRow]) -> Result<(), IoError> {
    write_results(create(path)?, n_members, rows)?;
    debug!(path = %path.display(), n_rows = rows.len(), "wrote result table");
    Ok(())
}

/// [`write_skill`] into a new file at `path`.
pub fn write_skill_file(path: &Path, rows: &[SkillRow]) -> Result<(), IoError> {
    write_skill(create(path)?, rows)?;
    debug!(path = %path.display(), "wrote skill table");
    Ok(())
}

/// [`write_coefficients`] into a new file at `path`.
pub fn write_coefficients_file(
    path: &Path,
    n_leads: usize,
    blocks: &[CoefficientBlock],
) -> Result<(), IoError> {
    write_coefficients(create(path)?, n_leads, blocks)?;
    debug!(path = %path.display(), n_blocks = blocks.len(), "wrote coefficients");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skill_na_formatting() {
        let mut buf = Vec::new();
        write_skill(
            &mut buf,
            &[SkillRow {
                lead_time: 3,
                correlation: Some(0.912345),
                efficiency: None,
                bias: Some(1.0),
                rmse: Some(0.25),
            }],
        )
        .unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "LeadTime,R,EfficiencyScore,Bias,RMSE\n3,0.9123,NA,1.0000,0.2500\n"
        );
    }

    #[test]
    fn result_rows_two_decimals() {
        let row = ResultRow {
            date: CalendarDate::new(2005, 3, 9).unwrap(),
            lead: 2,
            observed: 1.0,
            simulated: 2.346,
            mean: 3.5,
            max: 4.0,
            min: 3.0,
            members: vec![3.0, 4.0],
        };
        let mut buf = Vec::new();
        write_results(&mut buf, 2, &[row]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "YearMonthDay,LeadTime,Obs,Sim,EnsembleMean,EnsembleMax,EnsembleMin,Ens1,Ens2\n\
             20050309,2,1.00,2.35,3.50,4.00,3.00,3.00,4.00\n"
        );
    }

    #[test]
    fn coefficient_block_diagonal() {
        let mut buf = Vec::new();
        let block = CoefficientBlock {
            month_day: MonthDay::new(2, 29).unwrap(),
            values: vec![1.5, -0.25],
        };
        write_coefficients(&mut buf, 2, &[block]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "2\t29\n1.5000\t0.0000\n0.0000\t-0.2500\n");
    }

    #[test]
    fn result_member_count_checked() {
        let row = ResultRow {
            date: CalendarDate::new(2001, 1, 1).unwrap(),
            lead: 1,
            observed: 0.0,
            simulated: 0.0,
            mean: 0.0,
            max: 0.0,
            min: 0.0,
            members: vec![0.0; 2],
        };
        let err = write_results(Vec::new(), 3, &[row]).unwrap_err();
        assert!(matches!(
            err,
            IoError::ColumnMismatch {
                expected: 3,
                got: 2,
                ..
            }
        ));
    }
}
