//! Feature extraction: average hashes, histograms and their ridge signatures.

pub mod histogram;
pub mod peaks;
pub mod perceptual;

pub use histogram::{histogram_signature, peak_signature, Histogram, HISTOGRAM_BINS};
pub use peaks::find_peaks;
pub use perceptual::{average_hash, hamming_distance, AverageHash, HASH_BITS, HASH_SIZE};
