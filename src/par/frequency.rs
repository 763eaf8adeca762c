//! Parallel frequency counting.

use crate::{Error, frequency::select_most_frequent};
use core::hash::Hash;
use rayon::iter::{IntoParallelIterator, ParallelIterator};
use std::collections::HashMap;
use tracing::debug;

/// Counts the occurrences of each distinct element of `sequence` in parallel.
///
/// Each worker counts its share of `sequence` into a map of its own and the maps are merged by
/// summing the counts. Equivalent to [`count`](crate::count).
///
/// # Examples
///
/// ```
/// use ndarray_topk::{count, par_count};
///
/// let xs = (0..10_000u32).map(|x| x % 7).collect::<Vec<_>>();
///
/// assert_eq!(par_count(xs.clone()), count(xs));
/// ```
pub fn par_count<I>(sequence: I) -> HashMap<I::Item, usize>
where
	I: IntoParallelIterator,
	I::Item: Hash + Eq,
{
	sequence
		.into_par_iter()
		.fold(HashMap::new, |mut frequencies, element| {
			*frequencies.entry(element).or_insert(0) += 1;
			frequencies
		})
		.reduce(HashMap::new, merge)
}

/// Merges the smaller of both maps into the larger one.
fn merge<T>(a: HashMap<T, usize>, b: HashMap<T, usize>) -> HashMap<T, usize>
where
	T: Hash + Eq,
{
	let (mut larger, smaller) = if a.len() < b.len() { (b, a) } else { (a, b) };
	for (element, count) in smaller {
		*larger.entry(element).or_insert(0) += count;
	}
	larger
}

/// Selects the `k` most frequent elements of `sequence`, counting in parallel.
///
/// Only the counting is parallel, the selection is the same as in
/// [`most_frequent_k`](crate::most_frequent_k).
///
/// # Errors
///
/// Returns [`Error::OutOfRange`] unless `k` is within `1..=u`, where *u* is the count of distinct
/// elements.
///
/// # Examples
///
/// ```
/// use ndarray_topk::par_most_frequent_k;
///
/// let mut top = par_most_frequent_k(vec![1, 1, 1, 2, 2, 3], 2)?;
/// top.sort_unstable();
///
/// assert_eq!(top, [1, 2]);
/// # Ok::<(), ndarray_topk::Error>(())
/// ```
pub fn par_most_frequent_k<I>(sequence: I, k: usize) -> Result<Vec<I::Item>, Error>
where
	I: IntoParallelIterator,
	I::Item: Hash + Eq,
{
	let frequencies = par_count(sequence);
	debug!(unique = frequencies.len(), k, "counted frequencies in parallel");
	select_most_frequent(frequencies, k)
		.map(|top| top.into_iter().map(|(element, _)| element).collect())
}

#[cfg(test)]
mod test {
	use super::{par_count, par_most_frequent_k};
	use crate::{Error, count};
	use quickcheck::TestResult;
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn counted(xs: Vec<u8>) -> bool {
		par_count(xs.clone()) == count(xs)
	}

	#[quickcheck]
	fn most_frequent(xs: Vec<u8>, k: usize) -> TestResult {
		let frequencies = count(xs.iter().copied());
		if frequencies.is_empty() {
			return TestResult::discard();
		}
		let k = k % frequencies.len() + 1;
		let mut expected = frequencies.values().copied().collect::<Vec<_>>();
		expected.sort_unstable_by(|a, b| b.cmp(a));
		expected.truncate(k);
		let top = par_most_frequent_k(xs, k).unwrap();
		let mut counts = top.iter().map(|x| frequencies[x]).collect::<Vec<_>>();
		counts.sort_unstable_by(|a, b| b.cmp(a));
		TestResult::from_bool(counts == expected)
	}

	#[test]
	fn empty() {
		assert_eq!(
			par_most_frequent_k(Vec::<u8>::new(), 1).unwrap_err(),
			Error::OutOfRange { k: 1, len: 0 }
		);
	}
}
