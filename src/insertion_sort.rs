use crate::Less;

/// Sorts a slice using insertion sort, which is *O*(*n*^2) worst-case and *O*(*n*) on sorted input.
///
/// Each element is taken as the key and shifted left past every strictly greater element of the
/// sorted prefix. The scan stops at the first element that is not greater, so equal elements never
/// pass each other and the sort is stable.
pub(crate) fn insertion_sort<T, F>(v: &mut [T], is_less: &F)
where
    T: Copy,
    F: Less<T>,
{
    for i in 1..v.len() {
        let key = v[i];
        if is_less(&key, &v[0]) {
            // new minimum, copy the whole prefix to the right by 1
            v.copy_within(0..i, 1);
            v[0] = key;
        } else {
            // v[0] <= key, so the scan cannot run past the front
            let mut hole = i;
            while is_less(&key, &v[hole - 1]) {
                v[hole] = v[hole - 1];
                hole -= 1;
            }
            v[hole] = key;
        }
    }
    debug_assert!(v.is_sorted_by(|a, b| !is_less(b, a)));
}
