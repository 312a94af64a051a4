/// Returns true if `output` is the sorted rearrangement of `input`.
pub(crate) fn test_sorted_permutation<T>(input: &[T], output: &[T]) -> bool
where
    T: Ord + Clone,
{
    let mut expected = input.to_vec();
    expected.sort();
    expected == output
}

/// Records are `(key, tag)` where tags were assigned in ascending input order.
/// Returns false if the keys are out of order or two equal keys swapped their tags.
pub(crate) fn test_stability<K: Ord>(v: &[(K, usize)]) -> bool {
    v.windows(2).all(|w| {
        let (a, b) = (&w[0], &w[1]);
        a.0 < b.0 || (a.0 == b.0 && a.1 < b.1)
    })
}

#[cfg(test)]
mod tests {
    use super::{test_sorted_permutation, test_stability};

    #[test]
    fn sorted_permutation() {
        assert!(test_sorted_permutation(&[3, 1, 2], &[1, 2, 3]));
        assert!(test_sorted_permutation::<i32>(&[], &[]));
        // sorted, but lost a duplicate
        assert!(!test_sorted_permutation(&[2, 2, 1], &[1, 2, 3]));
        assert!(!test_sorted_permutation(&[3, 1, 2], &[3, 1, 2]));
    }

    #[test]
    fn stability() {
        assert!(test_stability(&[(1, 3), (3, 0), (3, 1)]));
        assert!(!test_stability(&[(1, 3), (3, 1), (3, 0)]));
        assert!(!test_stability(&[(3, 0), (1, 1)]));
    }
}
