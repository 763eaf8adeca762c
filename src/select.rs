//! Iterative single-sided quickselect moving the `k` highest ranking elements to the front.

use crate::Error;
use core::cmp::Ordering::{self, Equal, Greater, Less};
use ndarray::{ArrayView1, ArrayViewMut1, Axis, s};
use tracing::trace;

/// Reorders `v` such that `v[..k]` holds the `k` elements ranking highest according to `compare`.
///
/// Returns the subview of these `k` elements and the subview of the remaining elements. Neither
/// subview is ordered. This function is *O*(*n*) on average and *O*(*n*^2) worst-case.
pub fn select_top_k<'a, T, F>(
	mut v: ArrayViewMut1<'a, T>,
	k: usize,
	compare: &mut F,
) -> Result<(ArrayViewMut1<'a, T>, ArrayViewMut1<'a, T>), Error>
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	let len = v.len();
	if k == 0 || k > len {
		return Err(Error::OutOfRange { k, len });
	}

	// The pivot landing at `k - 1` is the `k`-th highest element.
	let target = k - 1;
	let mut start = 0;
	let mut end = len;
	let mut passes = 0usize;

	if end - start > 1 {
		loop {
			passes += 1;
			let mid = start + partition(v.slice_mut(s![start..end]), compare)?;
			match mid.cmp(&target) {
				Equal => break,
				// Pivot and everything before it is in, keep looking to the right.
				Less => start = mid + 1,
				// Pivot and everything after it is out, keep looking to the left.
				Greater => end = mid,
			}
		}
	}

	trace!(len, k, passes, "selected top k");
	Ok(v.split_at(Axis(0), k))
}

/// Partitions `v` around its last element as pivot.
///
/// Moves the elements ranking strictly higher than the pivot to the front, followed by the pivot.
/// Returns the final position of the pivot.
fn partition<T, F>(mut v: ArrayViewMut1<'_, T>, compare: &mut F) -> Result<usize, Error>
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	let pivot = v.len() - 1;
	let mut left_end = 0;

	for i in 0..pivot {
		match compare(&v[i], &v[pivot]) {
			Some(Greater) => {
				v.swap(left_end, i);
				left_end += 1;
			}
			Some(Less | Equal) => {}
			None => return Err(Error::Incomparable),
		}
	}

	v.swap(left_end, pivot);
	Ok(left_end)
}

/// Checks whether every element of `v[..k]` ranks at least as high as every element of `v[k..]`.
///
/// Returns `false` if `k > len()` or if any two relevant elements are incomparable.
pub fn is_top_k<T, F>(v: ArrayView1<'_, T>, k: usize, mut compare: F) -> bool
where
	F: FnMut(&T, &T) -> Option<Ordering>,
{
	let len = v.len();
	if k > len {
		return false;
	}
	if k == 0 || k == len {
		return true;
	}

	let (top, rest) = v.split_at(Axis(0), k);
	let mut least = &top[0];
	for a in top.iter().skip(1) {
		match compare(a, least) {
			Some(Less) => least = a,
			Some(Equal | Greater) => {}
			None => return false,
		}
	}
	rest.iter()
		.all(|b| matches!(compare(least, b), Some(Greater | Equal)))
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{is_top_k, select_top_k};
	use crate::Error;
	use ndarray::{Array1, arr1};
	use quickcheck::TestResult;
	use quickcheck_macros::quickcheck;

	fn descending(mut xs: Vec<u8>) -> Vec<u8> {
		xs.sort_unstable_by(|a, b| b.cmp(a));
		xs
	}

	#[quickcheck]
	fn selected(xs: Vec<u8>, k: usize) -> TestResult {
		if xs.is_empty() {
			return TestResult::discard();
		}
		let k = k % xs.len() + 1;
		let mut expected = descending(xs.clone());
		expected.truncate(k);
		let len = xs.len();
		let mut array = Array1::from_vec(xs);
		let (top, rest) = select_top_k(array.view_mut(), k, &mut u8::partial_cmp).unwrap();
		assert_eq!(rest.len(), len - k);
		TestResult::from_bool(descending(top.to_vec()) == expected)
	}

	#[quickcheck]
	fn partitioned(xs: Vec<u32>, k: usize) -> TestResult {
		if xs.is_empty() {
			return TestResult::discard();
		}
		let k = k % xs.len() + 1;
		let mut array = Array1::from_vec(xs);
		let _ = select_top_k(array.view_mut(), k, &mut u32::partial_cmp).unwrap();
		TestResult::from_bool(is_top_k(array.view(), k, u32::partial_cmp))
	}

	#[quickcheck]
	fn reselected(xs: Vec<u8>, k: usize) -> TestResult {
		if xs.is_empty() {
			return TestResult::discard();
		}
		let k = k % xs.len() + 1;
		let mut array = Array1::from_vec(xs);
		let (top, _) = select_top_k(array.view_mut(), k, &mut u8::partial_cmp).unwrap();
		let first = descending(top.to_vec());
		let (top, _) = select_top_k(array.view_mut(), k, &mut u8::partial_cmp).unwrap();
		TestResult::from_bool(descending(top.to_vec()) == first)
	}

	#[quickcheck]
	fn permuted(xs: Vec<u16>, k: usize) -> TestResult {
		if xs.is_empty() {
			return TestResult::discard();
		}
		let k = k % xs.len() + 1;
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		let _ = select_top_k(array.view_mut(), k, &mut u16::partial_cmp).unwrap();
		let mut after = array.to_vec();
		after.sort_unstable();
		TestResult::from_bool(after == sorted)
	}

	#[test]
	fn out_of_range() {
		let mut empty = Array1::<u32>::zeros(0);
		assert_eq!(
			select_top_k(empty.view_mut(), 1, &mut u32::partial_cmp).unwrap_err(),
			Error::OutOfRange { k: 1, len: 0 }
		);
		let mut array = arr1(&[3, 1, 2]);
		assert_eq!(
			select_top_k(array.view_mut(), 0, &mut i32::partial_cmp).unwrap_err(),
			Error::OutOfRange { k: 0, len: 3 }
		);
		assert_eq!(
			select_top_k(array.view_mut(), 4, &mut i32::partial_cmp).unwrap_err(),
			Error::OutOfRange { k: 4, len: 3 }
		);
		assert_eq!(array, arr1(&[3, 1, 2]));
	}

	#[test]
	fn incomparable() {
		let mut array = arr1(&[1.0, f64::NAN, 3.0, 2.0]);
		assert_eq!(
			select_top_k(array.view_mut(), 2, &mut f64::partial_cmp).unwrap_err(),
			Error::Incomparable
		);
	}

	#[test]
	fn single() {
		let mut array = arr1(&[7]);
		let (top, rest) = select_top_k(array.view_mut(), 1, &mut i32::partial_cmp).unwrap();
		assert_eq!(top, arr1(&[7]));
		assert!(rest.is_empty());
	}

	#[test]
	fn whole() {
		let mut array = arr1(&[4, 9, 1, 9, 0]);
		let (top, rest) = select_top_k(array.view_mut(), 5, &mut i32::partial_cmp).unwrap();
		assert_eq!(top.len(), 5);
		assert!(rest.is_empty());
		let mut top = top.to_vec();
		top.sort_unstable();
		assert_eq!(top, [0, 1, 4, 9, 9]);
	}

	#[test]
	fn non_contiguous() {
		let mut matrix = ndarray::arr2(&[[5, 0], [1, 0], [8, 0], [3, 0]]);
		let column = matrix.column_mut(0);
		let (top, _) = select_top_k(column, 2, &mut i32::partial_cmp).unwrap();
		let mut top = top.to_vec();
		top.sort_unstable();
		assert_eq!(top, [5, 8]);
		assert!(matrix.column(1).iter().all(|&x| x == 0));
	}

	#[test]
	fn checked() {
		assert!(is_top_k(arr1(&[5, 4, 1, 2]).view(), 2, i32::partial_cmp));
		assert!(!is_top_k(arr1(&[5, 1, 4, 2]).view(), 2, i32::partial_cmp));
		assert!(is_top_k(arr1(&[1, 2]).view(), 0, i32::partial_cmp));
		assert!(is_top_k(arr1(&[1, 2]).view(), 2, i32::partial_cmp));
		assert!(!is_top_k(arr1(&[1, 2]).view(), 3, i32::partial_cmp));
		assert!(!is_top_k(arr1(&[2.0, f64::NAN, 1.0]).view(), 1, f64::partial_cmp));
	}
}
