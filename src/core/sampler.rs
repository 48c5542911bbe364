use crate::domain::model::{SampleRange, SampleSet};
use crate::utils::error::{Result, SimError};
use rand::Rng;

/// Draw `count` independent uniform values over `[min, max)`.
///
/// The generator is injected so fixed-seed runs reproduce bit-identical
/// sample sets. A degenerate range (min == max) yields a constant set
/// instead of hitting the empty-range panic in `random_range`.
pub fn draw<R: Rng + ?Sized>(rng: &mut R, range: &SampleRange, count: usize) -> Result<SampleSet> {
    if count == 0 {
        return Err(SimError::InvalidRange {
            field: "iterations".to_string(),
            reason: "iteration count must be positive".to_string(),
        });
    }

    if range.is_degenerate() {
        return Ok(SampleSet::new(vec![range.min(); count]));
    }

    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(rng.random_range(range.min()..range.max()));
    }

    Ok(SampleSet::new(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_draw_produces_exact_count_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = SampleRange::new("likelihood", 2.0, 5.0).unwrap();

        let samples = draw(&mut rng, &range, 1000).unwrap();

        assert_eq!(samples.len(), 1000);
        assert!(samples.values().iter().all(|&v| (2.0..5.0).contains(&v)));
    }

    #[test]
    fn test_draw_degenerate_range_is_constant() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = SampleRange::new("impact", 3.0, 3.0).unwrap();

        let samples = draw(&mut rng, &range, 10).unwrap();

        assert!(samples.values().iter().all(|&v| v == 3.0));
    }

    #[test]
    fn test_draw_rejects_zero_iterations() {
        let mut rng = StdRng::seed_from_u64(7);
        let range = SampleRange::new("likelihood", 2.0, 5.0).unwrap();

        assert!(draw(&mut rng, &range, 0).is_err());
    }

    #[test]
    fn test_draw_is_deterministic_for_a_fixed_seed() {
        let range = SampleRange::new("likelihood", 2.0, 5.0).unwrap();

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = draw(&mut rng_a, &range, 256).unwrap();
        let b = draw(&mut rng_b, &range, 256).unwrap();

        assert_eq!(a, b);
    }
}
