/// Pair selection for the next head-to-head comparison.
///
/// Items are split at the median comparison count; one item comes from each
/// side so under-compared items keep surfacing. When the split leaves a side
/// empty (e.g. every item tied), selection falls back to uniform random.
use rand::Rng;

use crate::types::{Comparison, Item};

/// Pick two distinct items to compare next, using the thread RNG.
///
/// Returns `None` when fewer than two items exist.
pub fn select_pair(items: &[Item]) -> Option<Comparison> {
    let mut rng = rand::rng();
    select_pair_with_rng(items, &mut rng)
}

/// Same as [`select_pair`] with a caller-provided RNG.
pub fn select_pair_with_rng(items: &[Item], rng: &mut impl Rng) -> Option<Comparison> {
    if items.len() < 2 {
        return None;
    }

    let median = median_comparisons(items);

    let (more_compared, less_compared): (Vec<usize>, Vec<usize>) =
        (0..items.len()).partition(|&i| items[i].comparisons >= median);

    let (a, b) = if more_compared.is_empty() || less_compared.is_empty() {
        uniform_distinct(items.len(), rng)
    } else {
        let a = more_compared[rng.random_range(0..more_compared.len())];
        let b = less_compared[rng.random_range(0..less_compared.len())];
        if a == b {
            uniform_distinct(items.len(), rng)
        } else {
            (a, b)
        }
    };

    // Randomize which side each item is shown on.
    let comparison = if rng.random::<f64>() < 0.5 {
        Comparison { first: a, second: b }
    } else {
        Comparison { first: b, second: a }
    };
    Some(comparison)
}

/// Lower median: the count at position `len / 2` after sorting ascending.
pub fn median_comparisons(items: &[Item]) -> u32 {
    let mut counts: Vec<u32> = items.iter().map(|item| item.comparisons).collect();
    counts.sort_unstable();
    counts[counts.len() / 2]
}

fn uniform_distinct(num_items: usize, rng: &mut impl Rng) -> (usize, usize) {
    let a = rng.random_range(0..num_items);
    let mut b = rng.random_range(0..num_items);
    while b == a {
        b = rng.random_range(0..num_items);
    }
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn items_with_counts(counts: &[u32]) -> Vec<Item> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &c)| Item::with_state(format!("item-{i}"), 1500, c))
            .collect()
    }

    #[test]
    fn test_median_is_lower_median() {
        assert_eq!(median_comparisons(&items_with_counts(&[5, 1, 3])), 3);
        // Even length picks index len/2 of the sorted counts, not an average.
        assert_eq!(median_comparisons(&items_with_counts(&[0, 2, 4, 6])), 4);
        assert_eq!(median_comparisons(&items_with_counts(&[7, 7])), 7);
    }

    #[test]
    fn test_too_few_items() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(select_pair_with_rng(&[], &mut rng).is_none());
        assert!(select_pair_with_rng(&items_with_counts(&[0]), &mut rng).is_none());
    }

    #[test]
    fn test_never_same_index() {
        let mut rng = StdRng::seed_from_u64(7);
        let layouts: [&[u32]; 5] = [&[0, 0], &[0, 0, 0, 0, 0], &[3, 3, 3, 9], &[0, 10], &[1, 2, 3, 4, 5, 6]];
        for counts in layouts {
            let items = items_with_counts(counts);
            for _ in 0..500 {
                let c = select_pair_with_rng(&items, &mut rng).unwrap();
                assert_ne!(c.first, c.second, "counts {counts:?}");
                assert!(c.first < items.len() && c.second < items.len());
            }
        }
    }

    #[test]
    fn test_one_from_each_partition() {
        // median = 5 -> less = {0, 1}, more = {2, 3, 4}
        let items = items_with_counts(&[1, 2, 5, 6, 7]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..500 {
            let c = select_pair_with_rng(&items, &mut rng).unwrap();
            let less = [c.first, c.second].iter().filter(|&&i| i < 2).count();
            assert_eq!(less, 1, "expected exactly one under-compared item in {c:?}");
        }
    }

    #[test]
    fn test_all_tied_falls_back_to_uniform() {
        let items = items_with_counts(&[4, 4, 4, 4]);
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = [0usize; 4];
        for _ in 0..2000 {
            let c = select_pair_with_rng(&items, &mut rng).unwrap();
            seen[c.first] += 1;
            seen[c.second] += 1;
        }
        // Each item should show up in roughly half of all pairs.
        for count in seen {
            assert!(count > 700 && count < 1300, "uneven uniform fallback: {seen:?}");
        }
    }

    #[test]
    fn test_under_compared_item_is_favoured() {
        let mut counts = vec![10u32; 20];
        counts[0] = 0;
        let items = items_with_counts(&counts);
        let mut rng = StdRng::seed_from_u64(99);

        let trials = 1000;
        let hits = (0..trials)
            .filter(|_| {
                let c = select_pair_with_rng(&items, &mut rng).unwrap();
                c.first == 0 || c.second == 0
            })
            .count();

        // Uniform selection would include item 0 about 10% of the time.
        assert!(hits as f64 / trials as f64 > 0.5, "item 0 picked {hits}/{trials}");
    }

    #[test]
    fn test_slot_order_is_randomized() {
        let items = items_with_counts(&[0, 10]);
        let mut rng = StdRng::seed_from_u64(5);
        let first_is_zero = (0..1000)
            .filter(|_| select_pair_with_rng(&items, &mut rng).unwrap().first == 0)
            .count();
        assert!(first_is_zero > 350 && first_is_zero < 650);
    }

    #[test]
    fn test_thread_rng_entry_point() {
        let items = items_with_counts(&[0, 1, 2]);
        let c = select_pair(&items).unwrap();
        assert_ne!(c.first, c.second);
    }
}
