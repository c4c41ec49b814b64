use approx::assert_relative_eq;
use kairos_events::{LeadSpans, aggregate};

fn wavy_series(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| 10.0 + 5.0 * (i as f64 * 0.37).sin() + (i % 7) as f64)
        .collect()
}

#[test]
fn output_length_matches_input_for_every_lead() {
    let series = wavy_series(400);
    let spans = LeadSpans::new(&[(1, 1), (1, 3), (2, 9), (5, 30)]).unwrap();
    let m = aggregate(&series, &spans);
    assert_eq!(m.n_leads(), 4);
    for j in 0..m.n_leads() {
        assert_eq!(m.lead(j).len(), series.len());
    }
}

#[test]
fn last_index_of_single_day_lead_equals_last_value() {
    let series = wavy_series(123);
    let spans = LeadSpans::single_day(7).unwrap();
    let m = aggregate(&series, &spans);
    for j in 0..7 {
        assert_eq!(m.at(j, series.len() - 1), series[series.len() - 1]);
    }
}

#[test]
fn last_index_reduces_to_single_value_for_wide_spans() {
    let series = wavy_series(50);
    let spans = LeadSpans::new(&[(1, 10)]).unwrap();
    let m = aggregate(&series, &spans);
    assert_relative_eq!(m.at(0, 49), series[49], epsilon = 1e-9);
}

#[test]
fn matches_naive_windowed_mean() {
    let series = wavy_series(90);
    let spans = LeadSpans::new(&[(3, 7), (1, 15)]).unwrap();
    let m = aggregate(&series, &spans);
    for (j, span) in spans.iter().enumerate() {
        for t in 0..series.len() {
            let k = (t + span.width()).min(series.len() - 1);
            let naive = series[t..=k].iter().sum::<f64>() / (k - t + 1) as f64;
            assert_relative_eq!(m.at(j, t), naive, epsilon = 1e-9);
        }
    }
}

#[test]
fn series_shorter_than_span() {
    let series = [2.0, 4.0];
    let spans = LeadSpans::new(&[(1, 30)]).unwrap();
    let m = aggregate(&series, &spans);
    assert_relative_eq!(m.at(0, 0), 3.0);
    assert_relative_eq!(m.at(0, 1), 4.0);
}
