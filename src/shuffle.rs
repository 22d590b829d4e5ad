//! Shuffle
//!
//! In-place Fisher-Yates over display identifiers. The random source is
//! injectable so the algorithm stays testable off-browser.

/// Shuffle with an explicit random source. `pick(n)` must return a
/// uniformly distributed value in `0..n`.
pub fn shuffle_with<T>(items: &mut [T], mut pick: impl FnMut(usize) -> usize) {
    for i in (1..items.len()).rev() {
        let j = pick(i + 1).min(i);
        items.swap(i, j);
    }
}

/// Shuffle with the browser's random source.
pub fn shuffle<T>(items: &mut [T]) {
    shuffle_with(items, |n| (js_sys::Math::random() * n as f64) as usize);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shuffle_is_a_permutation() {
        let original = vec![0usize, 3, 5, 7, 9, 11];
        let mut shuffled = original.clone();
        // arbitrary but deterministic picks
        let picks = [1usize, 0, 3, 2, 1];
        let mut cursor = 0;
        shuffle_with(&mut shuffled, |n| {
            let j = picks[cursor % picks.len()] % n;
            cursor += 1;
            j
        });

        let mut sorted = shuffled.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, original);
    }

    #[test]
    fn test_shuffle_with_fixed_picks_is_deterministic() {
        let mut items = vec![0, 1, 2, 3];
        shuffle_with(&mut items, |_| 0);
        assert_eq!(items, vec![1, 2, 3, 0]);
    }

    #[test]
    fn test_identity_picks_leave_order_unchanged() {
        let mut items = vec!["a", "b", "c"];
        shuffle_with(&mut items, |n| n - 1);
        assert_eq!(items, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_short_inputs_are_untouched() {
        let mut empty: Vec<u32> = Vec::new();
        shuffle_with(&mut empty, |_| unreachable!());
        let mut single = vec![42];
        shuffle_with(&mut single, |_| unreachable!());
        assert_eq!(single, vec![42]);
    }
}
