//! Window placement with the slide-back clamp.

use crate::config::WindowConfig;
use crate::error::WindowError;

/// Computes the inclusive bounds `(k1, k2)` of the window anchored on record
/// index `idx`.
///
/// The window nominally starts `half_buffer + analysis_len` days before
/// `idx`. A start before the record is moved to index 0; an end past the last
/// usable index (`len - 1 - lookahead`) is moved back onto it and the start
/// recomputed. The window length is always `config.ndays()`.
///
/// # Errors
///
/// Returns [`WindowError::RecordTooShort`] if the usable record is shorter
/// than one window.
pub fn window_bounds(
    idx: usize,
    len: usize,
    lookahead: usize,
    config: &WindowConfig,
) -> Result<(usize, usize), WindowError> {
    let ndays = config.ndays();
    if ndays == 0 || len < ndays + lookahead {
        return Err(WindowError::RecordTooShort {
            len,
            ndays,
            lookahead,
        });
    }
    let upper = len - 1 - lookahead;

    let mut k1 = idx.saturating_sub(config.target_offset());
    let mut k2 = k1 + ndays - 1;
    if k2 > upper {
        k2 = upper;
        k1 = k2 + 1 - ndays;
    }
    Ok((k1, k2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> WindowConfig {
        // ndays = 3 + 7 + 15 = 25, target offset = 7 + 3 = 10
        WindowConfig::new()
    }

    #[test]
    fn interior_window_is_centered_on_target() {
        let (k1, k2) = window_bounds(100, 1000, 0, &cfg()).unwrap();
        assert_eq!(k1, 90);
        assert_eq!(k2, 114);
        assert_eq!(k1 + cfg().target_offset(), 100);
    }

    #[test]
    fn start_clamped_to_zero() {
        let (k1, k2) = window_bounds(4, 1000, 0, &cfg()).unwrap();
        assert_eq!((k1, k2), (0, 24));
    }

    #[test]
    fn end_slides_back() {
        let (k1, k2) = window_bounds(995, 1000, 0, &cfg()).unwrap();
        assert_eq!(k2, 999);
        assert_eq!(k1, 975);
    }

    #[test]
    fn lookahead_shrinks_upper_bound() {
        let (k1, k2) = window_bounds(995, 1000, 3, &cfg()).unwrap();
        assert_eq!(k2, 996);
        assert_eq!(k2 - k1 + 1, 25);
    }

    #[test]
    fn record_exactly_one_window() {
        let (k1, k2) = window_bounds(12, 25, 0, &cfg()).unwrap();
        assert_eq!((k1, k2), (0, 24));
    }

    #[test]
    fn record_too_short() {
        assert_eq!(
            window_bounds(0, 24, 0, &cfg()).unwrap_err(),
            WindowError::RecordTooShort {
                len: 24,
                ndays: 25,
                lookahead: 0,
            }
        );
        assert!(window_bounds(0, 25, 1, &cfg()).is_err());
    }
}
