//! Frequency counting and selection of the most frequent elements.

use crate::{Error, TopKExt};
use core::hash::Hash;
use ndarray::aview_mut1;
use std::collections::HashMap;
use tracing::debug;

/// Counts the occurrences of each distinct element of `sequence`.
///
/// Elements absent from `sequence` have no entry. This function is *O*(*n*) in time and *O*(*u*)
/// in space, where *u* is the count of distinct elements.
///
/// # Examples
///
/// ```
/// use ndarray_topk::count;
///
/// let frequencies = count([1, 1, 1, 2, 2, 3]);
///
/// assert_eq!(frequencies.len(), 3);
/// assert_eq!(frequencies[&1], 3);
/// assert_eq!(frequencies[&2], 2);
/// assert_eq!(frequencies[&3], 1);
/// ```
pub fn count<I>(sequence: I) -> HashMap<I::Item, usize>
where
	I: IntoIterator,
	I::Item: Hash + Eq,
{
	let mut frequencies = HashMap::new();
	for element in sequence {
		*frequencies.entry(element).or_insert(0) += 1;
	}
	frequencies
}

/// Selects the `k` most frequent elements of `sequence`.
///
/// The order of the returned elements is unspecified. Among elements of equal frequency, which
/// ones are selected is unspecified as well.
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] unless `k` is within `1..=u`, where *u* is the count of distinct
/// elements, meaning it always fails on empty sequences.
///
/// # Examples
///
/// ```
/// use ndarray_topk::most_frequent_k;
///
/// let mut top = most_frequent_k([1, 1, 1, 2, 2, 3], 2)?;
/// top.sort_unstable();
///
/// assert_eq!(top, [1, 2]);
/// # Ok::<(), ndarray_topk::Error>(())
/// ```
pub fn most_frequent_k<I>(sequence: I, k: usize) -> Result<Vec<I::Item>, Error>
where
	I: IntoIterator,
	I::Item: Hash + Eq,
{
	most_frequent_k_with_counts(sequence, k)
		.map(|top| top.into_iter().map(|(element, _)| element).collect())
}

/// Selects the `k` most frequent elements of `sequence` together with their counts.
///
/// See [`most_frequent_k`].
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] unless `k` is within `1..=u`, where *u* is the count of distinct
/// elements.
///
/// # Examples
///
/// ```
/// use ndarray_topk::most_frequent_k_with_counts;
///
/// let top = most_frequent_k_with_counts("mississippi".chars(), 1)?;
///
/// assert_eq!(top.len(), 1);
/// assert_eq!(top[0].1, 4);
/// assert!(top[0].0 == 'i' || top[0].0 == 's');
/// # Ok::<(), ndarray_topk::Error>(())
/// ```
pub fn most_frequent_k_with_counts<I>(
	sequence: I,
	k: usize,
) -> Result<Vec<(I::Item, usize)>, Error>
where
	I: IntoIterator,
	I::Item: Hash + Eq,
{
	let mut len = 0;
	let frequencies = count(sequence.into_iter().inspect(|_| len += 1));
	debug!(len, unique = frequencies.len(), k, "counted frequencies");
	select_most_frequent(frequencies, k)
}

/// Moves the entries of `frequencies` into a working array and selects the `k` highest counts.
pub(crate) fn select_most_frequent<T>(
	frequencies: HashMap<T, usize>,
	k: usize,
) -> Result<Vec<(T, usize)>, Error> {
	let mut uniques = frequencies.into_iter().collect::<Vec<_>>();
	aview_mut1(&mut uniques).select_top_k_by_key(k, |&(_, count)| count)?;
	uniques.truncate(k);
	Ok(uniques)
}
