//! Pairwise similarity decision.
//!
//! Three checks run in a fixed priority and the first that holds decides the
//! verdict: identical pixels, identical average hashes, identical histogram
//! ridge positions.

use image::{DynamicImage, GenericImageView};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::processing::{average_hash, hamming_distance, peak_signature};

/// Outcome of comparing two images, in check priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// No check matched
    None,

    /// Same colour type, dimensions and sample values
    Exact,

    /// Average hashes at Hamming distance 0
    Hash,

    /// Histogram ridge positions are equal
    Shape,
}

impl Verdict {
    /// Whether the pair should be reported
    pub fn is_match(&self) -> bool {
        *self != Verdict::None
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Verdict::None => "none",
            Verdict::Exact => "exact",
            Verdict::Hash => "hash",
            Verdict::Shape => "shape",
        };
        f.write_str(name)
    }
}

/// Whether two decoded images hold the same pixel buffer
pub fn pixels_equal(a: &DynamicImage, b: &DynamicImage) -> bool {
    a.color() == b.color() && a.dimensions() == b.dimensions() && a.as_bytes() == b.as_bytes()
}

/// Whether the two images' average hashes are identical
pub fn hashes_equal(a: &DynamicImage, b: &DynamicImage) -> bool {
    hamming_distance(&average_hash(a), &average_hash(b)) == 0
}

/// Whether the two images' histogram ridges sit at the same positions
pub fn shapes_equal(a: &DynamicImage, b: &DynamicImage) -> bool {
    peak_signature(a) == peak_signature(b)
}

/// Classify a pair of images, stopping at the first check that holds
pub fn classify_pair(a: &DynamicImage, b: &DynamicImage) -> Verdict {
    if pixels_equal(a, b) {
        Verdict::Exact
    } else if hashes_equal(a, b) {
        Verdict::Hash
    } else if shapes_equal(a, b) {
        Verdict::Shape
    } else {
        Verdict::None
    }
}
