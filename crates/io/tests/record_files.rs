//! Integration tests: read records from disk and write output tables.

use std::fs;

use kairos_calendar::{CalendarDate, MonthDay};
use kairos_io::{
    CoefficientBlock, IoError, ResultRow, SkillRow, read_record, write_coefficients_file,
    write_results_file, write_skill_file,
};

const RECORD: &str = "\
# station 42, daily
year month day precip obs hbv gr4j

2000 2 28 1.2 10.5 9.8 11.0
2000 2 29 0.0 10.1 9.9 10.7
2000 3 1 3.4 12.0 11.2 12.5
";

#[test]
fn read_record_with_header_and_comments() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("record.txt");
    fs::write(&path, RECORD).expect("write record");

    let record = read_record(&path).expect("read succeeds");
    assert_eq!(record.len(), 3);
    assert_eq!(record.dates()[1], CalendarDate::new(2000, 2, 29).unwrap());
    assert_eq!(record.precipitation(), &[1.2, 0.0, 3.4]);
    assert_eq!(record.observed(), &[10.5, 10.1, 12.0]);
    let ids: Vec<&str> = record.simulated().iter().map(|s| s.id()).collect();
    assert_eq!(ids, ["hbv", "gr4j"]);
    assert_eq!(record.model("gr4j").unwrap().values(), &[11.0, 10.7, 12.5]);
}

#[test]
fn missing_file() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = read_record(&dir.path().join("nope.txt")).unwrap_err();
    assert!(matches!(err, IoError::FileNotFound { .. }));
}

#[test]
fn malformed_rows_are_all_reported() {
    let text = "\
2001 1 1 0.0 1.0 2.0
2001 1 2 0.0 abc 2.0
2001 2 29 0.0 1.0 2.0
2001 1 4 0.0 1.0
2001 1 5 0.0 NaN 2.0
";
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("bad.txt");
    fs::write(&path, text).expect("write record");

    match read_record(&path).unwrap_err() {
        IoError::Validation { count, details } => {
            assert_eq!(count, 4);
            assert!(details.contains("line 2, column 5: cannot parse 'abc'"));
            assert!(details.contains("line 3: invalid date"));
            assert!(details.contains("line 4: expected 6 columns, got 5"));
            assert!(details.contains("line 5, column 5: non-finite value"));
        }
        other => panic!("expected IoError::Validation, got {other:?}"),
    }
}

#[test]
fn gaps_are_fatal() {
    let text = "2001 1 1 0.0 1.0 2.0\n2001 1 3 0.0 1.0 2.0\n";
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("gap.txt");
    fs::write(&path, text).expect("write record");
    let err = read_record(&path).unwrap_err();
    assert!(err.to_string().contains("gap at index 1"));
}

#[test]
fn write_all_tables() {
    let dir = tempfile::tempdir().expect("create temp dir");

    let results = dir.path().join("results.csv");
    let rows = vec![ResultRow {
        date: CalendarDate::new(2003, 7, 9).unwrap(),
        lead: 2,
        observed: 1.0,
        simulated: 2.346,
        mean: 1.5,
        max: 2.0,
        min: 1.0,
        members: vec![1.0, 2.0],
    }];
    write_results_file(&results, 2, &rows).expect("write results");
    let text = fs::read_to_string(&results).expect("read results");
    assert_eq!(
        text,
        "YearMonthDay,LeadTime,Obs,Sim,EnsembleMean,EnsembleMax,EnsembleMin,Ens1,Ens2\n\
         20030709,2,1.00,2.35,1.50,2.00,1.00,1.00,2.00\n"
    );

    let skill = dir.path().join("skill.csv");
    write_skill_file(
        &skill,
        &[SkillRow {
            lead_time: 1,
            correlation: None,
            efficiency: None,
            bias: None,
            rmse: Some(0.0),
        }],
    )
    .expect("write skill");
    let text = fs::read_to_string(&skill).expect("read skill");
    assert_eq!(text.lines().nth(1), Some("1,NA,NA,NA,0.0000"));

    let coef = dir.path().join("a.txt");
    let blocks = [
        CoefficientBlock {
            month_day: MonthDay::new(1, 1).unwrap(),
            values: vec![0.5, 0.25, 0.125],
        },
        CoefficientBlock {
            month_day: MonthDay::new(1, 2).unwrap(),
            values: vec![1.0, 1.0, 1.0],
        },
    ];
    write_coefficients_file(&coef, 3, &blocks).expect("write coefficients");
    let text = fs::read_to_string(&coef).expect("read coefficients");
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "1\t1");
    assert_eq!(lines[2], "0.0000\t0.2500\t0.0000");
    assert_eq!(lines[4], "1\t2");
}
