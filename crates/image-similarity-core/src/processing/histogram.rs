//! Intensity histograms and their peak signatures.
//!
//! Every sample of every channel is binned into 16 uniform bins spanning the
//! observed value range. The positions of the histogram's ridges then serve as
//! a coarse, order-sensitive description of the image's tonal shape.

use image::DynamicImage;

use super::peaks::find_peaks;

/// Number of histogram bins
pub const HISTOGRAM_BINS: usize = 16;

/// Bin counts of an image's flattened samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Histogram(pub [u64; HISTOGRAM_BINS]);

impl Histogram {
    /// Bin counts in order
    pub fn bins(&self) -> &[u64; HISTOGRAM_BINS] {
        &self.0
    }

    /// Total number of binned samples
    pub fn total(&self) -> u64 {
        self.0.iter().sum()
    }

    /// Ridge positions of the bin counts
    pub fn peaks(&self) -> Vec<usize> {
        find_peaks(&self.0)
    }
}

/// `n` evenly spaced values from `start` to `stop`, both inclusive
fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    let step = (stop - start) / (n - 1) as f64;
    let mut values: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
    values[n - 1] = stop;
    values
}

/// Bin `values` into `HISTOGRAM_BINS` uniform bins over their min..max range
///
/// The last bin is closed on the right. A degenerate range (all values equal)
/// is widened by half a unit on each side. Non-finite values are not counted.
///
/// `values` is walked twice (range, then counts) and never collected.
pub fn bin_values<I>(values: I) -> Histogram
where
    I: IntoIterator<Item = f64>,
    I::IntoIter: Clone,
{
    let mut counts = [0u64; HISTOGRAM_BINS];

    let finite = values.into_iter().filter(|v| v.is_finite());
    let (mut first_edge, mut last_edge) = finite.clone().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(lo, hi), v| (lo.min(v), hi.max(v)),
    );

    if first_edge > last_edge {
        return Histogram(counts);
    }

    if first_edge == last_edge {
        first_edge -= 0.5;
        last_edge += 0.5;
    }

    let edges = linspace(first_edge, last_edge, HISTOGRAM_BINS + 1);
    let norm = HISTOGRAM_BINS as f64 / (last_edge - first_edge);
    let last_bin = HISTOGRAM_BINS - 1;

    for v in finite {
        let mut index = (((v - first_edge) * norm) as usize).min(last_bin);

        // Floating point can land one bin off near an edge
        if index > 0 && v < edges[index] {
            index -= 1;
        } else if index < last_bin && v >= edges[index + 1] {
            index += 1;
        }

        counts[index] += 1;
    }

    Histogram(counts)
}

fn bin_samples<T: Copy + Into<f64>>(raw: &[T]) -> Histogram {
    bin_values(raw.iter().map(|&v| v.into()))
}

/// 16-bin histogram of every sample in the image
///
/// Samples are read at native depth straight from the pixel buffer, all
/// channels interleaved.
pub fn histogram_signature(img: &DynamicImage) -> Histogram {
    match img {
        DynamicImage::ImageLuma8(buf) => bin_samples(buf.as_raw()),
        DynamicImage::ImageLumaA8(buf) => bin_samples(buf.as_raw()),
        DynamicImage::ImageRgb8(buf) => bin_samples(buf.as_raw()),
        DynamicImage::ImageRgba8(buf) => bin_samples(buf.as_raw()),
        DynamicImage::ImageLuma16(buf) => bin_samples(buf.as_raw()),
        DynamicImage::ImageLumaA16(buf) => bin_samples(buf.as_raw()),
        DynamicImage::ImageRgb16(buf) => bin_samples(buf.as_raw()),
        DynamicImage::ImageRgba16(buf) => bin_samples(buf.as_raw()),
        DynamicImage::ImageRgb32F(buf) => bin_samples(buf.as_raw()),
        DynamicImage::ImageRgba32F(buf) => bin_samples(buf.as_raw()),
        other => bin_samples(other.to_rgba8().as_raw()),
    }
}

/// Ridge positions of the image's histogram
pub fn peak_signature(img: &DynamicImage) -> Vec<usize> {
    histogram_signature(img).peaks()
}
