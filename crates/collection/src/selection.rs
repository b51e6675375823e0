use std::collections::HashSet;

use dinnerwheel_shared::{Error, Item, Result};
use rand::Rng;
use rand::seq::SliceRandom;

/// Build the exclusion set for duplicate-avoiding draws. Names are held
/// lowercased; `draw` compares against the same normalization.
pub fn exclusion_set<'a>(items: impl IntoIterator<Item = &'a Item>) -> HashSet<String> {
    items
        .into_iter()
        .map(|item| item.name.to_lowercase())
        .collect()
}

/// Draw up to `count` items from `pool`.
///
/// When duplicates are disallowed, items whose names appear in
/// `exclude_names` are not candidates. An empty pool fails with
/// [`Error::EmptyPool`]; a non-empty pool whose every candidate is excluded
/// fails with [`Error::PoolExhausted`] so callers can tell "add dinners
/// first" apart from "nothing unique left".
///
/// The shuffle is Fisher–Yates via [`SliceRandom::shuffle`]. Never more
/// than `available.len()` items are returned; `count` is expected to be
/// clamped by the caller.
pub fn draw<'a>(
    pool: &'a [Item],
    count: usize,
    allow_duplicates: bool,
    exclude_names: &HashSet<String>,
    rng: &mut impl Rng,
) -> Result<Vec<&'a Item>> {
    if pool.is_empty() {
        return Err(Error::EmptyPool);
    }

    let mut available: Vec<&Item> = if allow_duplicates {
        pool.iter().collect()
    } else {
        pool.iter()
            .filter(|item| !exclude_names.contains(&item.name.to_lowercase()))
            .collect()
    };

    if available.is_empty() {
        return Err(Error::PoolExhausted);
    }

    available.shuffle(rng);
    available.truncate(count);

    tracing::debug!(requested = count, drawn = available.len(), "drew from pool");

    Ok(available)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn pool(names: &[&str]) -> Vec<Item> {
        names.iter().map(|name| Item::new(*name)).collect()
    }

    #[test]
    fn test_draw_from_empty_pool_fails() {
        let mut rng = StdRng::seed_from_u64(1);
        let err = draw(&[], 3, false, &HashSet::new(), &mut rng).unwrap_err();
        assert!(matches!(err, Error::EmptyPool));
    }

    #[test]
    fn test_draw_never_returns_more_than_available() {
        let pool = pool(&["Pizza", "Tacos", "Ramen"]);
        let mut rng = StdRng::seed_from_u64(1);

        let drawn = draw(&pool, 5, false, &HashSet::new(), &mut rng).unwrap();
        assert_eq!(drawn.len(), 3);
    }

    #[test]
    fn test_exclusion_is_case_insensitive() {
        let pool = pool(&["Pizza", "Tacos"]);
        let exclude = HashSet::from(["pizza".to_string()]);
        let mut rng = StdRng::seed_from_u64(1);

        let drawn = draw(&pool, 5, false, &exclude, &mut rng).unwrap();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].name, "Tacos");
    }

    #[test]
    fn test_full_exclusion_is_distinguishable_from_empty_pool() {
        let pool = pool(&["Pizza"]);
        let exclude = exclusion_set(&pool);
        let mut rng = StdRng::seed_from_u64(1);

        let err = draw(&pool, 1, false, &exclude, &mut rng).unwrap_err();
        assert!(matches!(err, Error::PoolExhausted));
    }

    #[test]
    fn test_allowing_duplicates_ignores_exclusions() {
        let pool = pool(&["Pizza"]);
        let exclude = exclusion_set(&pool);
        let mut rng = StdRng::seed_from_u64(1);

        let drawn = draw(&pool, 1, true, &exclude, &mut rng).unwrap();
        assert_eq!(drawn[0].name, "Pizza");
    }
}
