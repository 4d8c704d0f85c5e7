use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::classification::Verdict;

/// Supported image formats
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    Jpeg,
    Png,
    Gif,
    Bmp,
    Tiff,
    Webp,
    Other(String),
}

impl ImageFormat {
    /// Determine format from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            "gif" => Self::Gif,
            "bmp" => Self::Bmp,
            "tif" | "tiff" => Self::Tiff,
            "webp" => Self::Webp,
            other => Self::Other(other.to_string()),
        }
    }

    /// Check if format is supported
    ///
    /// Extensions outside the named variants count when the decoder can read them
    pub fn is_supported(&self) -> bool {
        match self {
            Self::Other(ext) => image::ImageFormat::from_extension(ext)
                .map_or(false, |format| format.reading_enabled()),
            _ => true,
        }
    }
}

/// Representation of an image file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageFile {
    /// Full path to the image file
    pub path: PathBuf,

    /// Path relative to the scanned directory, used in reports
    pub name: String,

    /// File size in bytes
    pub size: u64,

    /// Last modified timestamp
    pub last_modified: SystemTime,

    /// Image format
    pub format: ImageFormat,
}

/// A pair of files that met at least one similarity criterion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// The file that was the outer image when the match was found
    pub first: String,

    /// The file it was compared against
    pub second: String,

    /// Which check fired
    pub verdict: Verdict,
}

impl MatchRecord {
    /// Render the report line, optionally with the verdict kind appended
    pub fn report_line(&self, with_verdict: bool) -> String {
        if with_verdict {
            format!("{} {}", self, self.verdict)
        } else {
            self.to_string()
        }
    }
}

impl fmt::Display for MatchRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.second)
    }
}
