#[macro_use]
mod util;

pub mod demo;

mod constants;
mod insertion_sort;

pub(crate) trait Less<T>: Fn(&T, &T) -> bool {}
impl<T, F: Fn(&T, &T) -> bool> Less<T> for F {}

/// Sorts the slice in place into non-decreasing order using insertion sort.
///
/// The sort is stable, allocates nothing and is a no-op on empty and single-element slices.
///
/// # Examples
///
/// ```
/// let mut v = [5, 2, 4, 6, 1, 3];
/// insertion_sort_rs::sort(&mut v);
/// assert_eq!(v, [1, 2, 3, 4, 5, 6]);
/// ```
#[inline]
pub fn sort(v: &mut [i32]) {
    insertion_sort::insertion_sort(v, &i32::lt);
}
