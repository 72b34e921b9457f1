/// Moves `index` by `delta` slots around a ring of `size` slots.
///
/// Deltas larger than the ring are first folded down with a modulo; the sum
/// is then brought back into `[0, size)` by adding or subtracting `size`
/// once. A ring of size zero has nowhere to move to, so `index` comes back
/// untouched.
pub fn advance(index: usize, delta: isize, size: usize) -> usize {
    if size == 0 {
        return index;
    }

    let size = size as isize;
    let delta = if delta.unsigned_abs() > size as usize {
        delta % size
    } else {
        delta
    };

    let moved = index as isize + delta;
    if moved >= size {
        (moved - size) as usize
    } else if moved < 0 {
        (moved + size) as usize
    } else {
        moved as usize
    }
}

pub fn forward(index: usize, size: usize) -> usize {
    advance(index, 1, size)
}

pub fn back(index: usize, size: usize) -> usize {
    advance(index, -1, size)
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn steps_within_ring() {
        assert_eq!(advance(0, 1, 5), 1);
        assert_eq!(advance(3, -2, 5), 1);
        assert_eq!(advance(2, 0, 5), 2);
    }

    #[test]
    fn wraps_at_both_ends() {
        assert_eq!(forward(4, 5), 0);
        assert_eq!(back(0, 5), 4);
        assert_eq!(advance(3, 4, 5), 2);
        assert_eq!(advance(1, -3, 5), 3);
    }

    #[test]
    fn folds_oversized_deltas() {
        assert_eq!(advance(1, 12, 5), 3);
        assert_eq!(advance(1, -12, 5), 4);
        assert_eq!(advance(0, 5, 5), 0);
        assert_eq!(advance(0, -5, 5), 0);
    }

    #[test]
    fn single_slot_ring() {
        assert_eq!(forward(0, 1), 0);
        assert_eq!(back(0, 1), 0);
        assert_eq!(advance(0, 7, 1), 0);
    }

    #[test]
    fn empty_ring_leaves_index_alone() {
        assert_eq!(advance(0, 1, 0), 0);
        assert_eq!(advance(3, -9, 0), 3);
    }

    proptest! {
        #[test]
        fn matches_euclidean_modulo(size in 1usize..64, index_seed in 0usize..64, delta in -200isize..200) {
            let index = index_seed % size;
            let expected = (index as isize + delta).rem_euclid(size as isize) as usize;
            prop_assert_eq!(advance(index, delta, size), expected);
        }

        #[test]
        fn stays_in_bounds(size in 1usize..64, index_seed in 0usize..64, delta in any::<i16>()) {
            let index = index_seed % size;
            prop_assert!(advance(index, delta as isize, size) < size);
        }

        #[test]
        fn forward_then_back_is_identity(size in 1usize..64, index_seed in 0usize..64) {
            let index = index_seed % size;
            prop_assert_eq!(back(forward(index, size), size), index);
        }
    }
}
