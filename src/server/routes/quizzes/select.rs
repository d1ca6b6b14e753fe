use rand::Rng;
use rand::seq::IndexedRandom;

/// Uniform pick from the eligible pool; `None` once the pool is exhausted.
pub fn pick_random<'a, T, R>(pool: &'a [T], rng: &mut R) -> Option<&'a T>
where
    R: Rng + ?Sized,
{
    pool.choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashSet;

    #[test]
    fn empty_pool_yields_none() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(pick_random::<i64, _>(&[], &mut rng), None);
    }

    #[test]
    fn single_candidate_is_always_picked() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            assert_eq!(pick_random(&[3], &mut rng), Some(&3));
        }
    }

    #[test]
    fn repeated_picks_cover_the_pool() {
        let mut rng = StdRng::seed_from_u64(42);
        let pool = [1, 2, 3, 4];
        let seen: HashSet<i64> = (0..200)
            .filter_map(|_| pick_random(&pool, &mut rng).copied())
            .collect();
        assert_eq!(seen, pool.into_iter().collect());
    }
}
