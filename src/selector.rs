//! Weighted choice of the next idle animation.

use crate::animation::{AnimationId, Catalog, CatalogEntry};
use crate::random::RandomSource;

/// Pick an animation with probability proportional to its weight, never
/// choosing `exclude` unless nothing else is eligible.
///
/// When the eligible weights add up to zero (a catalog of one, or a
/// misconfigured one) the lowest id comes back instead, excluded or not.
pub fn select<R: RandomSource + ?Sized>(
    catalog: &Catalog,
    exclude: Option<AnimationId>,
    random: &mut R,
) -> AnimationId {
    let eligible = || {
        catalog
            .entries()
            .iter()
            .filter(move |entry| Some(entry.id) != exclude)
    };
    let total = eligible().fold(0u32, |sum, entry| sum.saturating_add(entry.weight));
    if total == 0 {
        return lowest(catalog);
    }
    let pick = random.uniform_int(total);
    let mut cumulative = 0u32;
    for CatalogEntry { id, weight, .. } in eligible() {
        cumulative = cumulative.saturating_add(*weight);
        if cumulative > pick {
            return *id;
        }
    }
    lowest(catalog)
}

fn lowest(catalog: &Catalog) -> AnimationId {
    catalog
        .entries()
        .first()
        .map(|entry| entry.id)
        .unwrap_or(AnimationId(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actuation::Actuation;
    use crate::clock::Clock;
    use crate::random::SeededRandom;
    use crate::testing::ScriptedRandom;

    fn still(_: &mut dyn Actuation, _: &dyn Clock) {}

    fn weighted(weights: &[u32]) -> Catalog {
        weights
            .iter()
            .enumerate()
            .fold(Catalog::builder(), |builder, (index, weight)| {
                builder.entry(format!("still-{}", index), *weight, still)
            })
            .build()
    }

    #[test]
    fn test_never_returns_excluded() {
        let catalog = Catalog::reference();
        let mut random = SeededRandom::from_seed(1);
        for excluded in 0..catalog.len() {
            for _ in 0..500 {
                let chosen = select(&catalog, Some(AnimationId(excluded)), &mut random);
                assert_ne!(chosen, AnimationId(excluded));
                assert!(chosen.0 < catalog.len());
            }
        }
    }

    #[test]
    fn test_pair_always_picks_the_other() {
        let catalog = weighted(&[1, 1]);
        let mut random = SeededRandom::from_seed(8);
        for _ in 0..1000 {
            assert_eq!(select(&catalog, Some(AnimationId(0)), &mut random), AnimationId(1));
            assert_eq!(select(&catalog, Some(AnimationId(1)), &mut random), AnimationId(0));
        }
    }

    #[test]
    fn test_single_entry_falls_back_to_itself() {
        let catalog = weighted(&[4]);
        let mut random = SeededRandom::from_seed(2);
        assert_eq!(select(&catalog, Some(AnimationId(0)), &mut random), AnimationId(0));
        assert_eq!(select(&catalog, None, &mut random), AnimationId(0));
    }

    #[test]
    fn test_zero_weights_fall_back_to_lowest() {
        let catalog = weighted(&[0, 0, 0]);
        let mut random = ScriptedRandom::new();
        assert_eq!(select(&catalog, Some(AnimationId(0)), &mut random), AnimationId(0));
        assert_eq!(select(&catalog, None, &mut random), AnimationId(0));
        assert!(random.bounds().is_empty());

        let only_excluded = weighted(&[0, 7]);
        assert_eq!(select(&only_excluded, Some(AnimationId(1)), &mut random), AnimationId(0));
    }

    #[test]
    fn test_empty_catalog() {
        let mut random = ScriptedRandom::new();
        assert_eq!(select(&Catalog::default(), None, &mut random), AnimationId(0));
    }

    #[test]
    fn test_cumulative_walk() {
        // weights 5, 0, 3 without #0: total 3, every pick lands on #2
        let catalog = weighted(&[5, 0, 3]);
        let mut random = ScriptedRandom::new().with_ints([0, 2]);
        assert_eq!(select(&catalog, Some(AnimationId(0)), &mut random), AnimationId(2));
        assert_eq!(select(&catalog, Some(AnimationId(0)), &mut random), AnimationId(2));
        assert_eq!(random.bounds(), &[3, 3]);

        let mut random = ScriptedRandom::new().with_ints([4, 5, 7]);
        assert_eq!(select(&catalog, None, &mut random), AnimationId(0));
        assert_eq!(select(&catalog, None, &mut random), AnimationId(2));
        assert_eq!(select(&catalog, None, &mut random), AnimationId(2));
        assert_eq!(random.bounds(), &[8, 8, 8]);
    }

    #[test]
    fn test_three_to_one() {
        let catalog = weighted(&[3, 1]);
        let mut random = SeededRandom::from_seed(2024);
        let draws = 100_000;
        let heavy = (0..draws)
            .filter(|_| select(&catalog, None, &mut random) == AnimationId(0))
            .count();
        let ratio = heavy as f64 / (draws - heavy) as f64;
        assert!((ratio - 3.0).abs() < 0.15, "ratio {}", ratio);
    }
}
