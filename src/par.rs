//! Parallel counterparts backed by [`rayon`].

pub mod frequency;
