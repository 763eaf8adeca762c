//! Linear-time in-place [selection] of the *k* highest ranking elements (e.g., the *k* most
//! frequent elements of a sequence) for non-contiguous (sub)views into 1-dimensional [`ndarray`]
//! arrays.
//!
//! # Example
//!
//! ```
//! use ndarray_topk::{ndarray::arr2, TopKExt};
//!
//! // 2-dimensional array of 4 rows and 3 columns.
//! let mut v = arr2(&[[-5, 4, 1],   // row 0, axis 0
//!                    [ 8, 3, 2],   // row 1, axis 0
//!                    [38, 9, 3],   // row 2, axis 0
//!                    [ 4, 9, 0]]); // row 3, axis 0
//!
//! // Mutable subview into the middle column.
//! let mut column = v.column_mut(1);
//!
//! // Due to row-major memory layout, columns are non-contiguous.
//! assert_eq!(column.as_slice_mut(), None);
//!
//! // Move the two greatest elements of the column to its front.
//! let (top, _rest) = column.select_top_k(2)?;
//! assert_eq!(top.to_vec(), [9, 9]);
//!
//! assert!(v == arr2(&[[-5, 9, 1],
//!                     [ 8, 9, 2],
//!                     [38, 4, 3],
//!                     [ 4, 3, 0]]));
//! # Ok::<(), ndarray_topk::Error>(())
//! ```
//!
//! The *k* most frequent elements of any sequence of hashable elements are selected by counting
//! the occurrences of each distinct element and selecting the *k* highest counts in place:
//!
//! ```
//! # #[cfg(feature = "std")]
//! # {
//! use ndarray_topk::most_frequent_k;
//!
//! let mut top = most_frequent_k([1, 1, 1, 2, 2, 3], 2)?;
//! top.sort_unstable();
//!
//! assert_eq!(top, [1, 2]);
//! # }
//! # Ok::<(), ndarray_topk::Error>(())
//! ```
//!
//! # Current Implementation
//!
//! Complexities where *n* is the length of the (sub)view and *u* the count of distinct elements.
//!
//! | Resource | Complexity | Selection (unstable) | Most frequent *k* |
//! |----------|------------|----------------------|-------------------|
//! | Time     | Best       | *O*(*n*)             | *O*(*n*)          |
//! | Time     | Average    | *O*(*n*)             | *O*(*n*)          |
//! | Time     | Worst      | *O*(*n*^2)           | *O*(*n* + *u*^2)  |
//! | Space    | All        | *O*(1)               | *O*(*u*)          |
//!
//! [selection]: https://en.wikipedia.org/wiki/Selection_algorithm
//!
//! # Features
//!
//!   * `std` for `count`/`most_frequent_k`/`most_frequent_k_with_counts`. Enabled by `default` or
//!     `rayon`. Without it, the crate is `no_std` and provides [`TopKExt`] only.
//!   * `rayon` for parallel `par_count`/`par_most_frequent_k`.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod error;
mod select;

#[cfg(feature = "std")]
mod frequency;

#[cfg(feature = "rayon")]
mod par;

pub use crate::error::Error;
#[cfg(feature = "std")]
pub use crate::frequency::{count, most_frequent_k, most_frequent_k_with_counts};
#[cfg(feature = "rayon")]
pub use crate::par::frequency::{par_count, par_most_frequent_k};

use crate::select::{is_top_k, select_top_k};
use core::cmp::Ordering;
use ndarray::{ArrayBase, ArrayViewMut1, Data, DataMut, Ix1};

pub use ndarray;

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing in-place top-*k* [selection].
///
/// Every selecting method reorders the array such that its first `k` elements are the `k` highest
/// ranking ones and returns the subview of these `k` elements followed by the subview of the
/// remaining elements. Neither subview is ordered, and which of several equally ranking elements
/// end up in the first subview is unspecified.
///
/// # Current Implementation
///
/// The current algorithm is an iterative single-sided quickselect. It partitions the active range
/// around its last element as pivot by moving the elements ranking strictly higher than the pivot
/// to the front of the range, followed by the pivot. If the pivot lands at index `k - 1`, the
/// selection is complete. Otherwise, the active range is narrowed to the side of the pivot
/// containing index `k - 1` and the partitioning is repeated. It runs in *O*(*n*) time on average
/// and *O*(*n*^2) time worst-case, and it does not allocate.
///
/// [selection]: https://en.wikipedia.org/wiki/Quickselect
pub trait TopKExt<A, S>
where
	S: Data<Elem = A>,
{
	/// Reorders the array such that its first `k` elements are the `k` greatest ones.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] unless `k` is within `1..=len()`, meaning it always fails on
	/// empty arrays. The array is left untouched in that case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_topk::{ndarray::arr1, TopKExt};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// // Select the two greatest elements.
	/// let (top, rest) = v.select_top_k(2)?;
	///
	/// // We are only guaranteed the subviews will contain the following elements in some order.
	/// assert!(top == arr1(&[4, 2]) || top == arr1(&[2, 4]));
	/// assert_eq!(rest.len(), 3);
	/// assert!(rest.iter().all(|x| [-5, 1, -3].contains(x)));
	/// # Ok::<(), ndarray_topk::Error>(())
	/// ```
	fn select_top_k(
		&mut self,
		k: usize,
	) -> Result<(ArrayViewMut1<'_, A>, ArrayViewMut1<'_, A>), Error>
	where
		A: Ord,
		S: DataMut;
	/// Reorders the array with a comparator function such that its first `k` elements are the `k`
	/// greatest ones.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, which elements are selected is unspecified.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] unless `k` is within `1..=len()`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_topk::{ndarray::arr1, TopKExt};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// // Select the two least elements by reversing the comparator.
	/// let (top, _rest) = v.select_top_k_by(2, |a, b| b.cmp(a))?;
	///
	/// assert!(top == arr1(&[-5, -3]) || top == arr1(&[-3, -5]));
	/// # Ok::<(), ndarray_topk::Error>(())
	/// ```
	fn select_top_k_by<F>(
		&mut self,
		k: usize,
		compare: F,
	) -> Result<(ArrayViewMut1<'_, A>, ArrayViewMut1<'_, A>), Error>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Reorders the array with a key extraction function such that its first `k` elements are the
	/// `k` ones with the greatest keys.
	///
	/// The key function is called *O*(*n*) times on average. For the *k* most frequent elements,
	/// the key is a count looked up or stored next to each element.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] unless `k` is within `1..=len()`.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_topk::{ndarray::arr1, TopKExt};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// // Select the two elements of greatest absolute value.
	/// let (top, _rest) = v.select_top_k_by_key(2, |a| a.abs())?;
	///
	/// assert!(top == arr1(&[-5, 4]) || top == arr1(&[4, -5]));
	/// # Ok::<(), ndarray_topk::Error>(())
	/// ```
	fn select_top_k_by_key<K, F>(
		&mut self,
		k: usize,
		f: F,
	) -> Result<(ArrayViewMut1<'_, A>, ArrayViewMut1<'_, A>), Error>
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Reorders the array with a partially ordered key extraction function such that its first `k`
	/// elements are the `k` ones with the greatest keys.
	///
	/// # Errors
	///
	/// Returns [`Error::OutOfRange`] unless `k` is within `1..=len()`. Returns
	/// [`Error::Incomparable`] as soon as two keys compare as neither less, equal, nor greater
	/// (e.g., `NaN`), leaving the array in an unspecified order.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_topk::{ndarray::arr1, Error, TopKExt};
	///
	/// let mut v = arr1(&[0.5f64, 2.0, -1.0, 3.5]);
	///
	/// let (top, _rest) = v.select_top_k_by_partial_key(1, |&x| x)?;
	/// assert_eq!(top, arr1(&[3.5]));
	///
	/// let mut v = arr1(&[1.0f64, f64::NAN]);
	///
	/// assert_eq!(
	///     v.select_top_k_by_partial_key(1, |&x| x).unwrap_err(),
	///     Error::Incomparable,
	/// );
	/// # Ok::<(), ndarray_topk::Error>(())
	/// ```
	fn select_top_k_by_partial_key<K, F>(
		&mut self,
		k: usize,
		f: F,
	) -> Result<(ArrayViewMut1<'_, A>, ArrayViewMut1<'_, A>), Error>
	where
		K: PartialOrd,
		F: FnMut(&A) -> K,
		S: DataMut;

	/// Checks if the first `k` elements of this array are the `k` greatest ones.
	///
	/// That is, for each element `a` of the first `k` elements and each element `b` of the
	/// remaining elements, `a >= b` must hold. If `k` is zero or equals the length of the array,
	/// `true` is returned. If `k` exceeds the length of the array, `false` is returned.
	///
	/// Note that if `Self::Item` is only `PartialOrd`, but not `Ord`, the above definition
	/// implies that this function returns `false` if any two relevant items are not comparable.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_topk::{ndarray::arr1, TopKExt};
	///
	/// assert!(arr1(&[5, 4, 1, 2]).is_top_k(2));
	/// assert!(!arr1(&[5, 1, 4, 2]).is_top_k(2));
	/// assert!(arr1(&[0]).is_top_k(1));
	/// assert!(!arr1(&[1.0, f32::NAN, 0.0]).is_top_k(1));
	/// ```
	#[must_use]
	fn is_top_k(&self, k: usize) -> bool
	where
		A: PartialOrd;
	/// Checks if the first `k` elements of this array are the `k` greatest ones using the given
	/// comparator function.
	///
	/// Apart from that, it's equivalent to [`is_top_k`]; see its documentation for more
	/// information.
	///
	/// [`is_top_k`]: TopKExt::is_top_k
	#[must_use]
	fn is_top_k_by<F>(&self, k: usize, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>;
	/// Checks if the first `k` elements of this array are the `k` ones with the greatest keys
	/// using the given key extraction function.
	///
	/// Apart from that, it's equivalent to [`is_top_k`]; see its documentation for more
	/// information.
	///
	/// [`is_top_k`]: TopKExt::is_top_k
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_topk::{ndarray::arr1, TopKExt};
	///
	/// assert!(arr1(&["ccc", "a", "bb"]).is_top_k_by_key(1, |s| s.len()));
	/// assert!(!arr1(&[-2i32, 3, -4]).is_top_k_by_key(2, |n| n.abs()));
	/// ```
	#[must_use]
	fn is_top_k_by_key<F, K>(&self, k: usize, f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd;
}

impl<A, S> TopKExt<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[inline]
	fn select_top_k(
		&mut self,
		k: usize,
	) -> Result<(ArrayViewMut1<'_, A>, ArrayViewMut1<'_, A>), Error>
	where
		A: Ord,
		S: DataMut,
	{
		select_top_k(self.view_mut(), k, &mut |a: &A, b: &A| Some(a.cmp(b)))
	}
	#[inline]
	fn select_top_k_by<F>(
		&mut self,
		k: usize,
		mut compare: F,
	) -> Result<(ArrayViewMut1<'_, A>, ArrayViewMut1<'_, A>), Error>
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		select_top_k(self.view_mut(), k, &mut |a: &A, b: &A| Some(compare(a, b)))
	}
	#[inline]
	fn select_top_k_by_key<K, F>(
		&mut self,
		k: usize,
		mut f: F,
	) -> Result<(ArrayViewMut1<'_, A>, ArrayViewMut1<'_, A>), Error>
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		select_top_k(self.view_mut(), k, &mut |a: &A, b: &A| Some(f(a).cmp(&f(b))))
	}
	#[inline]
	fn select_top_k_by_partial_key<K, F>(
		&mut self,
		k: usize,
		mut f: F,
	) -> Result<(ArrayViewMut1<'_, A>, ArrayViewMut1<'_, A>), Error>
	where
		K: PartialOrd,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		select_top_k(self.view_mut(), k, &mut |a: &A, b: &A| f(a).partial_cmp(&f(b)))
	}

	#[inline]
	fn is_top_k(&self, k: usize) -> bool
	where
		A: PartialOrd,
	{
		is_top_k(self.view(), k, |a, b| a.partial_cmp(b))
	}
	#[inline]
	fn is_top_k_by<F>(&self, k: usize, compare: F) -> bool
	where
		F: FnMut(&A, &A) -> Option<Ordering>,
	{
		is_top_k(self.view(), k, compare)
	}
	#[inline]
	fn is_top_k_by_key<F, K>(&self, k: usize, mut f: F) -> bool
	where
		F: FnMut(&A) -> K,
		K: PartialOrd,
	{
		is_top_k(self.view(), k, |a, b| f(a).partial_cmp(&f(b)))
	}
}
