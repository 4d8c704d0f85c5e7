use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};
use std::fs;
use std::path::{Path, PathBuf};

/// 64×64 image of 8×8 blocks alternating between `low` and `high`
pub fn checkerboard(low: u8, high: u8) -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::from_fn(64, 64, |x, y| {
        let v = if (x / 8 + y / 8) % 2 == 0 { low } else { high };
        Rgb([v, v, v])
    }))
}

/// Opaque RGBA variant of [`checkerboard`], encodable as ICO
pub fn rgba_checkerboard(low: u8, high: u8) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(64, 64, |x, y| {
        let v = if (x / 8 + y / 8) % 2 == 0 { low } else { high };
        Rgba([v, v, v, 255])
    }))
}

/// Horizontal ramp with an even spread of values
pub fn gradient() -> DynamicImage {
    DynamicImage::ImageLuma8(GrayImage::from_fn(64, 64, |x, _| Luma([(x * 4) as u8])))
}

/// Save an image under `dir`, encoded per the extension of `name`
pub fn write_image(dir: &Path, name: &str, img: &DynamicImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Copy a file byte for byte
pub fn copy_file(from: &Path, dir: &Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::copy(from, &path).unwrap();
    path
}
