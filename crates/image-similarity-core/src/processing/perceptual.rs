//! # Average Hash Module
//!
//! Produces a 64-bit perceptual fingerprint of an image.
//!
//! ## Overview
//!
//! The image is converted to grayscale, shrunk to an 8×8 thumbnail with an
//! anti-aliasing filter, and each of the 64 thumbnail samples becomes one bit:
//! set when the sample is brighter than the thumbnail mean.
//!
//! Because the bits only record which cells are above the mean, the hash
//! survives re-encoding, rescaling and small global brightness shifts.
//!
//! ## Hamming Distance Interpretation
//!
//! Similarity is the Hamming distance between two hashes (count of differing bits).
//! Only a distance of 0 counts as a match here; the thumbnails are then
//! indistinguishable at the 8×8 level even if the source pixels differ.
//!
//! ## Implementation Details
//!
//! - Grayscale uses the ITU-R 601 luma weights, alpha is ignored
//! - Resampling uses Lanczos3 (anti-aliased), never nearest-neighbour
//! - Bit `i` corresponds to thumbnail sample `i` in row-major order

use image::imageops::{self, FilterType};
use image::{DynamicImage, GrayImage, Luma};
use std::fmt;

/// Side length of the hash thumbnail
pub const HASH_SIZE: u32 = 8;

/// Number of bits in an average hash
pub const HASH_BITS: usize = (HASH_SIZE * HASH_SIZE) as usize;

/// An average hash represented as a 64-bit value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AverageHash(pub u64);

impl AverageHash {
    /// Calculate the Hamming distance between two hashes
    pub fn distance(&self, other: &AverageHash) -> u32 {
        (self.0 ^ other.0).count_ones()
    }

    /// Value of bit `index` (row-major thumbnail position)
    pub fn bit(&self, index: usize) -> bool {
        index < HASH_BITS && (self.0 >> index) & 1 == 1
    }

    /// The hash as 64 ordered booleans
    pub fn bits(&self) -> [bool; HASH_BITS] {
        let mut bits = [false; HASH_BITS];
        for (i, bit) in bits.iter_mut().enumerate() {
            *bit = self.bit(i);
        }
        bits
    }
}

impl fmt::Display for AverageHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:016x}", self.0)
    }
}

/// Count of differing bit positions between two hashes
pub fn hamming_distance(a: &AverageHash, b: &AverageHash) -> u32 {
    a.distance(b)
}

/// Convert an image to 8-bit grayscale using the ITU-R 601 luma weights
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    let rgb = img.to_rgb8();

    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let pixel = rgb.get_pixel(x, y);
        let gray = 0.299 * pixel[0] as f32 + 0.587 * pixel[1] as f32 + 0.114 * pixel[2] as f32;
        Luma([gray.round().clamp(0.0, 255.0) as u8])
    })
}

/// Calculate the 64-bit average hash of an image
pub fn average_hash(img: &DynamicImage) -> AverageHash {
    let gray = to_grayscale(img);
    let small = imageops::resize(&gray, HASH_SIZE, HASH_SIZE, FilterType::Lanczos3);

    let mut pixels = [0.0f64; HASH_BITS];
    for (slot, pixel) in pixels.iter_mut().zip(small.pixels()) {
        *slot = pixel[0] as f64;
    }

    let mean = pixels.iter().sum::<f64>() / HASH_BITS as f64;

    let mut hash: u64 = 0;
    for (bit_pos, &p) in pixels.iter().enumerate() {
        if p > mean {
            hash |= 1u64 << bit_pos;
        }
    }

    AverageHash(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage, RgbaImage};

    /// 64×64 image of 8×8 blocks alternating between `low` and `high`
    fn checkerboard(low: u8, high: u8) -> DynamicImage {
        let img = RgbImage::from_fn(64, 64, |x, y| {
            let v = if (x / 8 + y / 8) % 2 == 0 { low } else { high };
            Rgb([v, v, v])
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn test_hash_of_same_image_is_identical() {
        let img = checkerboard(40, 200);
        assert_eq!(average_hash(&img), average_hash(&img));
        assert_eq!(hamming_distance(&average_hash(&img), &average_hash(&img)), 0);
    }

    #[test]
    fn test_checkerboard_hash_pattern() {
        let hash = average_hash(&checkerboard(40, 200));

        for y in 0..8 {
            for x in 0..8 {
                let expected = (x + y) % 2 == 1;
                assert_eq!(hash.bit(y * 8 + x), expected, "bit ({}, {})", x, y);
            }
        }
        assert_eq!(hash.0.count_ones(), 32);
    }

    #[test]
    fn test_inverted_image_has_complementary_hash() {
        let a = average_hash(&checkerboard(40, 200));
        let b = average_hash(&checkerboard(200, 40));
        assert_eq!(a.distance(&b), 64);
    }

    #[test]
    fn test_brightness_shift_keeps_hash() {
        let a = average_hash(&checkerboard(40, 200));
        let b = average_hash(&checkerboard(50, 210));
        assert_eq!(a, b);
    }

    #[test]
    fn test_rescaled_image_keeps_hash() {
        let img = checkerboard(30, 220);
        let larger = img.resize_exact(128, 128, FilterType::Nearest);
        assert_eq!(average_hash(&img), average_hash(&larger));
    }

    #[test]
    fn test_uniform_image_has_empty_hash() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(20, 20, Rgb([90, 90, 90])));
        assert_eq!(average_hash(&img), AverageHash(0));
    }

    #[test]
    fn test_alpha_is_ignored() {
        let opaque = RgbaImage::from_fn(16, 16, |x, _| image::Rgba([(x * 16) as u8, 0, 0, 255]));
        let translucent =
            RgbaImage::from_fn(16, 16, |x, _| image::Rgba([(x * 16) as u8, 0, 0, 10]));

        assert_eq!(
            average_hash(&DynamicImage::ImageRgba8(opaque)),
            average_hash(&DynamicImage::ImageRgba8(translucent))
        );
    }

    #[test]
    fn test_distance_is_symmetric() {
        let hashes = [
            AverageHash(0),
            AverageHash(u64::MAX),
            AverageHash(0xdead_beef_0123_4567),
            AverageHash(0x0f0f_0f0f_f0f0_f0f0),
        ];

        for a in &hashes {
            assert_eq!(hamming_distance(a, a), 0);
            for b in &hashes {
                assert_eq!(hamming_distance(a, b), hamming_distance(b, a));
                assert!(hamming_distance(a, b) <= 64);
            }
        }
        assert_eq!(hamming_distance(&hashes[0], &hashes[1]), 64);
    }

    #[test]
    fn test_bits_round_trip_through_bit() {
        let hash = AverageHash(0x8000_0000_0000_0001);
        let bits = hash.bits();

        assert!(bits[0]);
        assert!(bits[63]);
        assert_eq!(bits.iter().filter(|&&b| b).count(), 2);
        assert!(!hash.bit(64));
    }

    #[test]
    fn test_grayscale_weights() {
        let img = DynamicImage::ImageRgb8(RgbImage::from_pixel(1, 1, Rgb([255, 0, 0])));
        assert_eq!(to_grayscale(&img).get_pixel(0, 0)[0], 76);

        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 1, Luma([123])));
        assert_eq!(to_grayscale(&gray).get_pixel(0, 0)[0], 123);
    }
}
