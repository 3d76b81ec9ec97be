use serde::Serialize;

/// Live WPM sampled once per countdown second
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimeSeriesPoint {
    /// Seconds since the session started
    pub t: f64,
    pub wpm: f64,
}

impl TimeSeriesPoint {
    pub fn new(t: f64, wpm: f64) -> Self {
        Self { t, wpm }
    }
}

impl From<TimeSeriesPoint> for (f64, f64) {
    fn from(p: TimeSeriesPoint) -> Self {
        (p.t, p.wpm)
    }
}

/// Chart-ready `(x, y)` pairs
pub fn to_coords(points: &[TimeSeriesPoint]) -> Vec<(f64, f64)> {
    points.iter().copied().map(Into::into).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_coords() {
        let points = [TimeSeriesPoint::new(1.0, 40.0), TimeSeriesPoint::new(2.0, 55.0)];
        assert_eq!(to_coords(&points), vec![(1.0, 40.0), (2.0, 55.0)]);
        assert!(to_coords(&[]).is_empty());
    }
}
