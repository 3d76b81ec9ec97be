/// Compute X (seconds) and Y (WPM) bounds for the results chart
pub fn compute_chart_params(wpm_coords: &[(f64, f64)], fallback_duration: f64) -> (f64, f64) {
    let highest_wpm = wpm_coords
        .iter()
        .map(|&(_, wpm)| wpm)
        .fold(0.0_f64, f64::max);

    let overall_duration = wpm_coords
        .last()
        .map_or(fallback_duration, |&(t, _)| t)
        .max(1.0);

    // keep a flat zero line visible
    (overall_duration, highest_wpm.round().max(1.0))
}

/// Format a simple numeric label consistently
pub fn format_label(val: f64) -> String {
    if (val - val.round()).abs() < f64::EPSILON {
        format!("{}", val.round())
    } else {
        format!("{val:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compute_chart_params_empty() {
        let (x, y) = compute_chart_params(&[], 5.0);
        assert_eq!(x, 5.0);
        assert_eq!(y, 1.0);
    }

    #[test]
    fn test_compute_chart_params_from_samples() {
        let (x, y) = compute_chart_params(&[(1.0, 20.0), (2.0, 48.6), (3.0, 31.0)], 60.0);
        assert_eq!(x, 3.0);
        assert_eq!(y, 49.0);
    }

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(1.0), "1");
        assert_eq!(format_label(1.2345), "1.23");
    }
}
