//! Summary statistics shared by the calibration and verification crates.
//!
//! Undefined results are `None` where callers must tell them apart (skill
//! scores, regression); the moment helpers fall back to `0.0` on too-short
//! input.

/// Arithmetic mean; `0.0` for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    match data.len() {
        0 => 0.0,
        n => data.iter().sum::<f64>() / n as f64,
    }
}

fn sum_sq_dev(data: &[f64]) -> f64 {
    let m = mean(data);
    data.iter().map(|&x| (x - m).powi(2)).sum()
}

/// Sample variance (`n - 1` denominator); `0.0` below two values.
pub fn variance(data: &[f64]) -> f64 {
    match data.len() {
        0 | 1 => 0.0,
        n => sum_sq_dev(data) / (n - 1) as f64,
    }
}

/// Population variance (`n` denominator); `0.0` for an empty slice.
pub fn population_variance(data: &[f64]) -> f64 {
    match data.len() {
        0 => 0.0,
        n => sum_sq_dev(data) / n as f64,
    }
}

/// Whether `data` carries no spread: every value equals the first, or the
/// population variance is within rounding of zero relative to the mean.
///
/// An empty slice is constant.
pub fn is_constant(data: &[f64]) -> bool {
    let Some(&first) = data.first() else {
        return true;
    };
    if data.iter().all(|&v| v == first) {
        return true;
    }
    let m = mean(data);
    population_variance(data) <= f64::EPSILON * m * m
}

/// Sample standard deviation.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Mean squared difference of paired values.
///
/// `None` if the slices are empty or of different length.
pub fn mean_squared_error(observed: &[f64], predicted: &[f64]) -> Option<f64> {
    if observed.is_empty() || observed.len() != predicted.len() {
        return None;
    }
    let sq: Vec<f64> = observed
        .iter()
        .zip(predicted)
        .map(|(o, p)| (o - p).powi(2))
        .collect();
    Some(mean(&sq))
}

/// Centered second moments of a paired sample.
struct CrossMoments {
    mean_x: f64,
    mean_y: f64,
    sxx: f64,
    syy: f64,
    sxy: f64,
}

impl CrossMoments {
    fn of(pairs: &[(f64, f64)]) -> Self {
        let n = pairs.len();
        let denom = n.max(1) as f64;
        let mean_x = pairs.iter().map(|p| p.0).sum::<f64>() / denom;
        let mean_y = pairs.iter().map(|p| p.1).sum::<f64>() / denom;
        let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
        for &(x, y) in pairs {
            let (dx, dy) = (x - mean_x, y - mean_y);
            sxx += dx * dx;
            syy += dy * dy;
            sxy += dx * dy;
        }
        Self {
            mean_x,
            mean_y,
            sxx,
            syy,
            sxy,
        }
    }
}

/// Pearson correlation over the pairs where both values are finite.
///
/// `None` below three such pairs or when either side is constant.
pub fn pearson_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .iter()
        .zip(y)
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(&a, &b)| (a, b))
        .collect();
    if pairs.len() < 3 {
        return None;
    }
    let xs: Vec<f64> = pairs.iter().map(|p| p.0).collect();
    let ys: Vec<f64> = pairs.iter().map(|p| p.1).collect();
    if is_constant(&xs) || is_constant(&ys) {
        return None;
    }
    let m = CrossMoments::of(&pairs);
    let denom = (m.sxx * m.syy).sqrt();
    (denom > 0.0).then(|| m.sxy / denom)
}

/// Ordinary least squares fit of `y = intercept + slope * x`.
///
/// Returns `(intercept, slope)`, or `None` for fewer than two pairs,
/// slices of different length, or a constant `x`.
pub fn linear_fit(x: &[f64], y: &[f64]) -> Option<(f64, f64)> {
    if x.len() < 2 || x.len() != y.len() {
        return None;
    }
    let pairs: Vec<(f64, f64)> = x.iter().copied().zip(y.iter().copied()).collect();
    let m = CrossMoments::of(&pairs);
    if m.sxx <= 1e-12 {
        return None;
    }
    let slope = m.sxy / m.sxx;
    Some((m.mean_y - slope * m.mean_x, slope))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FLOWS: [f64; 6] = [12.0, 15.0, 9.0, 20.0, 14.0, 14.0];

    #[test]
    fn mean_of_flows() {
        assert_relative_eq!(mean(&FLOWS), 14.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn variances_differ_by_denominator() {
        // squared deviations: 4 + 1 + 25 + 36 + 0 + 0 = 66
        assert_relative_eq!(variance(&FLOWS), 66.0 / 5.0, epsilon = 1e-12);
        assert_relative_eq!(population_variance(&FLOWS), 11.0, epsilon = 1e-12);
        assert_relative_eq!(sd(&FLOWS), (66.0_f64 / 5.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn short_input_has_zero_spread() {
        assert_eq!(variance(&[3.0]), 0.0);
        assert_eq!(sd(&[]), 0.0);
        assert_eq!(population_variance(&[]), 0.0);
        assert_eq!(population_variance(&[3.0]), 0.0);
    }

    #[test]
    fn constant_detection_tolerates_rounding() {
        assert!(is_constant(&[0.1; 1000]));
        assert!(is_constant(&[]));
        // rolling means of a constant drift in the last bit
        assert!(is_constant(&[0.1, 0.10000000000000002, 0.1]));
        assert!(!is_constant(&[1e-20, 2e-20]));
        assert!(!is_constant(&FLOWS));
    }

    #[test]
    fn mse_of_offset_prediction() {
        let pred: Vec<f64> = FLOWS.iter().map(|v| v + 2.0).collect();
        assert_relative_eq!(mean_squared_error(&FLOWS, &pred).unwrap(), 4.0);
        assert!(mean_squared_error(&FLOWS, &pred[..3]).is_none());
        assert!(mean_squared_error(&[], &[]).is_none());
    }

    #[test]
    fn correlation_of_scaled_series() {
        let y: Vec<f64> = FLOWS.iter().map(|v| 3.0 - 0.5 * v).collect();
        assert_relative_eq!(pearson_correlation(&FLOWS, &y).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn correlation_skips_non_finite_pairs() {
        let x = [1.0, f64::NAN, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, f64::INFINITY, 8.0, 10.0];
        // Finite pairs: (1,2), (4,8), (5,10): 3 pairs, perfect linear
        assert_relative_eq!(pearson_correlation(&x, &y).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn correlation_undefined() {
        assert!(pearson_correlation(&[1.0, 2.0], &[2.0, 1.0]).is_none());
        assert!(pearson_correlation(&[4.0; 5], &FLOWS[..5]).is_none());
        let ramp: Vec<f64> = (0..1000).map(f64::from).collect();
        assert!(pearson_correlation(&[0.1; 1000], &ramp).is_none());
        assert!(pearson_correlation(&ramp, &[0.1; 1000]).is_none());
    }

    #[test]
    fn linear_fit_recovers_line() {
        let y: Vec<f64> = FLOWS.iter().map(|v| 1.5 + 0.8 * v).collect();
        let (a, b) = linear_fit(&FLOWS, &y).unwrap();
        assert_relative_eq!(a, 1.5, epsilon = 1e-10);
        assert_relative_eq!(b, 0.8, epsilon = 1e-10);
    }

    #[test]
    fn linear_fit_degenerate() {
        assert!(linear_fit(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]).is_none());
        assert!(linear_fit(&[1.0], &[1.0]).is_none());
        assert!(linear_fit(&[1.0, 2.0], &[1.0]).is_none());
    }
}
