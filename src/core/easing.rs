//! Easing and interpolation helpers shared by the intro animation.

/// Quintic ease-in-out: accelerates until the midpoint, then decelerates.
pub fn ease_in_out_quint(x: f64) -> f64 {
    if x < 0.5 {
        16.0 * x.powi(5)
    } else {
        1.0 - (-2.0 * x + 2.0).powi(5) / 2.0
    }
}

/// Linear interpolation between `start` and `end`.
pub fn lerp(start: f64, end: f64, t: f64) -> f64 {
    start * (1.0 - t) + end * t
}

/// Normalized progress of `elapsed_ms` over `duration_ms`, clamped to `[0, 1]`.
///
/// A non-positive duration is treated as already finished.
pub fn clamped_progress(elapsed_ms: f64, duration_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    (elapsed_ms / duration_ms).clamp(0.0, 1.0)
}

/// Re-normalizes `progress` over the sub-range `[start, 1]`.
///
/// Returns `None` while `progress` has not reached `start`.
pub fn renormalize(progress: f64, start: f64) -> Option<f64> {
    if progress < start {
        return None;
    }
    let span = 1.0 - start;
    if span <= 0.0 {
        return Some(1.0);
    }
    Some(((progress - start) / span).clamp(0.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_ease_boundaries() {
        assert_eq!(ease_in_out_quint(0.0), 0.0);
        assert_eq!(ease_in_out_quint(1.0), 1.0);
        assert!((ease_in_out_quint(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_ease_is_symmetric() {
        for i in 0..=20 {
            let x = i as f64 / 20.0;
            let mirrored = 1.0 - ease_in_out_quint(1.0 - x);
            assert!((ease_in_out_quint(x) - mirrored).abs() < 1e-9, "x = {x}");
        }
    }

    #[test]
    fn test_ease_is_monotonic() {
        let mut previous = ease_in_out_quint(0.0);
        for i in 1..=100 {
            let current = ease_in_out_quint(i as f64 / 100.0);
            assert!(current >= previous);
            previous = current;
        }
    }

    #[test]
    fn test_ease_starts_slow() {
        // 16 * 0.1^5
        assert!((ease_in_out_quint(0.1) - 0.00016).abs() < EPS);
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.3, 1.0, 0.0), 0.3);
        assert_eq!(lerp(0.3, 1.0, 1.0), 1.0);
        assert!((lerp(0.0, 10.0, 0.25) - 2.5).abs() < EPS);
    }

    #[test]
    fn test_clamped_progress() {
        assert_eq!(clamped_progress(0.0, 7000.0), 0.0);
        assert_eq!(clamped_progress(3500.0, 7000.0), 0.5);
        assert_eq!(clamped_progress(7000.0, 7000.0), 1.0);
        assert_eq!(clamped_progress(90_000.0, 7000.0), 1.0);
        assert_eq!(clamped_progress(-50.0, 7000.0), 0.0);
        assert_eq!(clamped_progress(10.0, 0.0), 1.0);
    }

    #[test]
    fn test_renormalize() {
        assert_eq!(renormalize(0.4, 0.5), None);
        assert_eq!(renormalize(0.5, 0.5), Some(0.0));
        assert_eq!(renormalize(0.75, 0.5), Some(0.5));
        assert_eq!(renormalize(1.0, 0.6), Some(1.0));
    }
}
