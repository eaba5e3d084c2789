//! Citation acceleration: smoothed CAGR, windowed linear trend, period ratio.
//!
//! All three read a yearly histogram relative to a reference year `t`, the
//! last complete year (`current_year - 1`).

use serde::Serialize;

use crate::config::scoring::{
    CAGR_MAX_WINDOW, CAGR_SMOOTHING, PERIOD_WINDOW, TREND_MIN_CAREER, TREND_MIN_POINTS, TREND_WINDOW,
};
use crate::models::YearlyCitations;

/// Acceleration metrics for one author.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Acceleration {
    /// Smoothed CAGR (`None` when the career is under two years).
    pub cagr: Option<f64>,
    /// Change in slope between the last two windows.
    pub linear_trend: f64,
    /// CAGR when defined, else the linear trend.
    pub composite: f64,
    /// Recent-over-previous period ratio (may be `+∞`).
    pub period_ratio: Option<f64>,
}

impl Acceleration {
    /// Metrics when no histogram is available.
    pub const UNAVAILABLE: Self = Self { cagr: None, linear_trend: 0.0, composite: 0.0, period_ratio: None };
}

/// `((h[t] + 1) / (h[t-n] + 1))^(1/n) - 1` with `n = min(3, career - 1)`.
///
/// ```
/// use researcher_impact::models::YearlyCitations;
/// use researcher_impact::scoring::acceleration::cagr;
///
/// let h: YearlyCitations = [(2021, 2), (2022, 3), (2023, 5), (2024, 8)].into_iter().collect();
/// let g = cagr(&h, 5, 2024).unwrap();
/// assert!((g - 0.4422).abs() < 1e-4);
/// ```
#[must_use]
pub fn cagr(hist: &YearlyCitations, career_length: i32, reference_year: i32) -> Option<f64> {
    let n = CAGR_MAX_WINDOW.min(career_length - 1);
    if n < 1 {
        return None;
    }
    let end = f64::from(hist.get(reference_year)) + CAGR_SMOOTHING;
    let start = f64::from(hist.get(reference_year - n)) + CAGR_SMOOTHING;
    Some((end / start).powf(1.0 / f64::from(n)) - 1.0)
}

/// Ordinary least squares slope; 0.0 with fewer than the minimum points.
fn ols_slope(points: &[(i32, u32)]) -> f64 {
    if points.len() < TREND_MIN_POINTS {
        return 0.0;
    }
    let n = points.len() as f64;
    let mean_x = points.iter().map(|&(x, _)| f64::from(x)).sum::<f64>() / n;
    let mean_y = points.iter().map(|&(_, y)| f64::from(y)).sum::<f64>() / n;

    let (num, den) = points.iter().fold((0.0, 0.0), |(num, den), &(x, y)| {
        let dx = f64::from(x) - mean_x;
        (num + dx * (f64::from(y) - mean_y), den + dx * dx)
    });
    if den == 0.0 { 0.0 } else { num / den }
}

/// `(slope over (t-2, t] - slope over (t-4, t-2]) / 2`, using the years
/// present in the histogram. 0.0 for careers under six years or when either
/// window has fewer than two years.
#[must_use]
pub fn linear_trend(hist: &YearlyCitations, career_length: i32, reference_year: i32) -> f64 {
    if career_length < TREND_MIN_CAREER {
        return 0.0;
    }
    let window = |end: i32| -> Vec<(i32, u32)> { hist.range(end - TREND_WINDOW + 1..=end).collect() };
    let current = window(reference_year);
    let previous = window(reference_year - TREND_WINDOW);
    if current.len() < TREND_MIN_POINTS || previous.len() < TREND_MIN_POINTS {
        return 0.0;
    }
    (ols_slope(&current) - ols_slope(&previous)) / 2.0
}

/// Citations in `[t-1, t]` over citations in `[t-3, t-2]`.
///
/// `None` unless the histogram has at least two years and reaches back to
/// `t-3`. A zero previous period gives `+∞` (or 0.0 when the current period
/// is zero too).
#[must_use]
pub fn period_ratio(hist: &YearlyCitations, reference_year: i32) -> Option<f64> {
    let previous_end = reference_year - PERIOD_WINDOW;
    let previous_start = previous_end - PERIOD_WINDOW + 1;
    if hist.len() < 2 || hist.earliest_year()? > previous_start {
        return None;
    }

    let current = hist.sum_range(previous_end + 1..=reference_year) as f64;
    let previous = hist.sum_range(previous_start..=previous_end) as f64;
    Some(if previous > 0.0 {
        current / previous
    } else if current > 0.0 {
        f64::INFINITY
    } else {
        0.0
    })
}

/// All acceleration metrics for one histogram.
#[must_use]
pub fn acceleration(hist: &YearlyCitations, career_length: i32, reference_year: i32) -> Acceleration {
    let cagr = cagr(hist, career_length, reference_year);
    let linear_trend = linear_trend(hist, career_length, reference_year);
    Acceleration {
        cagr,
        linear_trend,
        composite: cagr.unwrap_or(linear_trend),
        period_ratio: period_ratio(hist, reference_year),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hist(pairs: &[(i32, u32)]) -> YearlyCitations {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_cagr_example() {
        let h = hist(&[(2021, 2), (2022, 3), (2023, 5), (2024, 8)]);
        let g = cagr(&h, 5, 2024).unwrap();
        assert!((g - (3f64.cbrt() - 1.0)).abs() < 1e-12);
        assert_eq!(linear_trend(&h, 5, 2024), 0.0);
    }

    #[test]
    fn test_cagr_window_shrinks_with_career() {
        // career 2 -> n = 1
        let h = hist(&[(2023, 1), (2024, 3)]);
        assert!((cagr(&h, 2, 2024).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(cagr(&h, 1, 2024), None);
        assert_eq!(cagr(&h, 0, 2024), None);
    }

    #[test]
    fn test_constant_histogram_has_zero_cagr() {
        let h = hist(&[(2020, 4), (2021, 4), (2022, 4), (2023, 4), (2024, 4)]);
        assert!(cagr(&h, 10, 2024).unwrap().abs() < 1e-12);
    }

    #[test]
    fn test_empty_histogram_cagr_is_zero() {
        assert_eq!(cagr(&YearlyCitations::new(), 5, 2024), Some(0.0));
    }

    #[test]
    fn test_linear_trend() {
        // previous window 2021..=2022 slope 1, current window 2023..=2024 slope 5
        let h = hist(&[(2021, 1), (2022, 2), (2023, 5), (2024, 10)]);
        assert!((linear_trend(&h, 6, 2024) - 2.0).abs() < 1e-12);
        assert_eq!(linear_trend(&h, 5, 2024), 0.0);
    }

    #[test]
    fn test_linear_trend_needs_two_points_per_window() {
        let h = hist(&[(2021, 1), (2023, 5), (2024, 10)]);
        assert_eq!(linear_trend(&h, 8, 2024), 0.0);
    }

    #[test]
    fn test_composite_falls_back_to_trend() {
        let h = hist(&[(2021, 1), (2022, 2)]);
        let acc = acceleration(&h, 1, 2024);
        assert_eq!(acc.cagr, None);
        assert_eq!(acc.composite, acc.linear_trend);
        assert_eq!(acc.composite, 0.0);
    }

    #[test]
    fn test_period_ratio() {
        let h = hist(&[(2021, 2), (2022, 2), (2023, 3), (2024, 5)]);
        assert_eq!(period_ratio(&h, 2024), Some(2.0));
    }

    #[test]
    fn test_period_ratio_degenerate_cases() {
        // nothing before: +inf
        let h = hist(&[(2021, 0), (2023, 3), (2024, 5)]);
        assert_eq!(period_ratio(&h, 2024), Some(f64::INFINITY));

        // both periods empty
        let h = hist(&[(2019, 4), (2020, 1)]);
        assert_eq!(period_ratio(&h, 2024), Some(0.0));

        // history too short
        let h = hist(&[(2023, 3), (2024, 5)]);
        assert_eq!(period_ratio(&h, 2024), None);
        let h = hist(&[(2021, 3)]);
        assert_eq!(period_ratio(&h, 2024), None);
    }

    #[test]
    fn test_unavailable() {
        let acc = Acceleration::UNAVAILABLE;
        assert_eq!(acc.cagr, None);
        assert_eq!(acc.composite, 0.0);
    }
}
