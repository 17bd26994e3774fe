//! Small helpers over the injected RNG.

use std::ops::{Range, RangeInclusive};

use rand::Rng;
use rand::seq::SliceRandom;

/// Uniform draw in `[range.start, range.end)`.
pub(crate) fn uniform<R: Rng>(rng: &mut R, range: Range<f64>) -> f64 {
    rng.gen_range(range)
}

/// Shuffle a copy of `catalog` and keep the first `count` entries, `count`
/// itself drawn from `counts`.
pub(crate) fn pick_distinct<'a, T, R: Rng>(
    rng: &mut R,
    catalog: &'a [T],
    counts: RangeInclusive<usize>,
) -> Vec<&'a T> {
    let count = rng.gen_range(counts).min(catalog.len());
    let mut picks: Vec<&T> = catalog.iter().collect();
    picks.shuffle(rng);
    picks.truncate(count);
    picks
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn picks_are_distinct_and_bounded() {
        let catalog: Vec<u32> = (0..10).collect();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let picks = pick_distinct(&mut rng, &catalog, 3..=5);
            assert!((3..=5).contains(&picks.len()));
            let unique: HashSet<_> = picks.iter().collect();
            assert_eq!(unique.len(), picks.len());
        }
    }

    #[test]
    fn count_is_capped_by_catalog() {
        let catalog = [1, 2];
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_distinct(&mut rng, &catalog, 4..=5).len(), 2);
    }

    #[test]
    fn uniform_stays_in_half_open_range() {
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..1000 {
            let v = uniform(&mut rng, 20.0..50.0);
            assert!((20.0..50.0).contains(&v));
        }
    }
}
