use crate::domain::model::{RiskSet, StatisticsSummary};
use crate::utils::error::{Result, SimError};

/// Compute mean, median, p5 and p95 over a risk distribution.
pub fn summarize(risks: &RiskSet) -> Result<StatisticsSummary> {
    if risks.is_empty() {
        return Err(SimError::EmptyInput {
            what: "risk distribution has no samples".to_string(),
        });
    }

    let values = risks.values();
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    Ok(StatisticsSummary {
        mean,
        median: percentile_sorted(&sorted, 50.0),
        p5: percentile_sorted(&sorted, 5.0),
        p95: percentile_sorted(&sorted, 95.0),
    })
}

/// Percentile with linear interpolation between order statistics:
/// rank = p/100 * (n-1), interpolated between the neighbouring values.
fn percentile_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty());
    debug_assert!((0.0..=100.0).contains(&p));

    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let fraction = rank - lower as f64;

    sorted[lower] + (sorted[upper] - sorted[lower]) * fraction
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_summarize_rejects_empty_input() {
        let risks = RiskSet::new(vec![]);
        assert!(summarize(&risks).is_err());
    }

    #[test]
    fn test_summarize_single_value() {
        let risks = RiskSet::new(vec![4.0]);
        let summary = summarize(&risks).unwrap();

        assert_close(summary.mean, 4.0);
        assert_close(summary.median, 4.0);
        assert_close(summary.p5, 4.0);
        assert_close(summary.p95, 4.0);
    }

    #[test]
    fn test_median_interpolates_on_even_length() {
        let risks = RiskSet::new(vec![4.0, 1.0, 3.0, 2.0]);
        let summary = summarize(&risks).unwrap();

        assert_close(summary.mean, 2.5);
        assert_close(summary.median, 2.5);
    }

    #[test]
    fn test_percentiles_interpolate_between_order_statistics() {
        // Sorted: [10, 20, 30, 40]. p5 rank = 0.15 -> 11.5; p95 rank = 2.85 -> 38.5.
        let risks = RiskSet::new(vec![40.0, 10.0, 30.0, 20.0]);
        let summary = summarize(&risks).unwrap();

        assert_close(summary.p5, 11.5);
        assert_close(summary.p95, 38.5);
    }

    #[test]
    fn test_percentiles_exact_on_integer_ranks() {
        // 0..=100 has rank exactly p at each percentile.
        let risks = RiskSet::new((0..=100).map(f64::from).collect());
        let summary = summarize(&risks).unwrap();

        assert_close(summary.p5, 5.0);
        assert_close(summary.median, 50.0);
        assert_close(summary.p95, 95.0);
    }

    #[test]
    fn test_percentiles_are_ordered() {
        let risks = RiskSet::new(vec![9.3, 1.2, 7.7, 4.4, 5.0, 2.8, 6.1, 8.2, 3.9, 0.5]);
        let summary = summarize(&risks).unwrap();

        assert!(summary.p5 <= summary.median);
        assert!(summary.median <= summary.p95);
    }
}
