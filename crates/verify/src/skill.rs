//! Deterministic skill metrics over paired observed/predicted samples.
//!
//! Every metric returns `None` when it is undefined for the sample.

/// Root mean squared error. `None` for empty or unequal-length input.
pub fn rmse(observed: &[f64], predicted: &[f64]) -> Option<f64> {
    kairos_stats::mean_squared_error(observed, predicted).map(f64::sqrt)
}

/// Nash–Sutcliffe efficiency `1 - MSE / var(obs)` with population variance.
///
/// `None` when the observations are constant, including a constant series
/// whose variance is only rounding noise.
pub fn nash_sutcliffe(observed: &[f64], predicted: &[f64]) -> Option<f64> {
    let mse = kairos_stats::mean_squared_error(observed, predicted)?;
    if kairos_stats::is_constant(observed) {
        return None;
    }
    Some(1.0 - mse / kairos_stats::population_variance(observed))
}

/// `sum(numerator) / sum(denominator)`; `None` when the denominator sums to
/// zero or the slices are empty.
pub fn ratio_of_sums(numerator: &[f64], denominator: &[f64]) -> Option<f64> {
    if numerator.is_empty() || numerator.len() != denominator.len() {
        return None;
    }
    let den: f64 = denominator.iter().sum();
    if den == 0.0 {
        return None;
    }
    Some(numerator.iter().sum::<f64>() / den)
}

/// Pearson correlation; `None` for fewer than 3 pairs or constant input.
pub fn correlation(observed: &[f64], predicted: &[f64]) -> Option<f64> {
    kairos_stats::pearson_correlation(observed, predicted)
}
