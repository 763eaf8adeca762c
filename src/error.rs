use thiserror::Error;

/// Errors of top-k selection.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
	/// `k` is not within `1..=len`, where `len` is the length of the array or the count of unique
	/// elements.
	#[error("k = {k} is out of range 1..={len}")]
	OutOfRange {
		/// Requested count of elements.
		k: usize,
		/// Count of elements available for selection.
		len: usize,
	},
	/// Two keys could not be compared (e.g., `NaN`).
	#[error("incomparable keys")]
	Incomparable,
}
