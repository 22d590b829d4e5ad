//! Display Order
//!
//! The live on-screen sequence of item identifiers. Reorder events mutate
//! this vector and the DOM follows it, never the other way around.

/// Move `dragged` immediately before (upper half) or after (lower half)
/// `target` within `order`. No-op when the identifiers are equal or the
/// dragged one is missing.
pub fn reposition(order: &mut Vec<usize>, dragged: usize, target: usize, before: bool) {
    if dragged == target {
        return;
    }
    let Some(from) = order.iter().position(|&v| v == dragged) else {
        return;
    };
    order.remove(from);
    let Some(at) = order.iter().position(|&v| v == target) else {
        // unknown target, put the dragged item back
        order.insert(from, dragged);
        return;
    };
    let at = if before { at } else { at + 1 };
    order.insert(at, dragged);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reposition_before_target() {
        let mut order = vec![0, 1, 2, 3];
        reposition(&mut order, 3, 1, true);
        assert_eq!(order, vec![0, 3, 1, 2]);
    }

    #[test]
    fn test_reposition_after_target() {
        let mut order = vec![0, 1, 2, 3];
        reposition(&mut order, 0, 2, false);
        assert_eq!(order, vec![1, 2, 0, 3]);
    }

    #[test]
    fn test_reposition_to_list_ends() {
        let mut order = vec![0, 1, 2];
        reposition(&mut order, 2, 0, true);
        assert_eq!(order, vec![2, 0, 1]);

        let mut order = vec![0, 1, 2];
        reposition(&mut order, 0, 2, false);
        assert_eq!(order, vec![1, 2, 0]);
    }

    #[test]
    fn test_reposition_onto_self_is_a_noop() {
        let mut order = vec![0, 1, 2];
        reposition(&mut order, 1, 1, true);
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_reposition_with_unknown_identifiers_is_a_noop() {
        let mut order = vec![0, 1, 2];
        reposition(&mut order, 9, 1, true);
        assert_eq!(order, vec![0, 1, 2]);

        reposition(&mut order, 1, 9, true);
        assert_eq!(order, vec![0, 1, 2]);
    }

    #[test]
    fn test_reposition_preserves_the_identifier_set() {
        let mut order = vec![4, 2, 7, 1];
        reposition(&mut order, 7, 4, true);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, vec![1, 2, 4, 7]);
    }
}
