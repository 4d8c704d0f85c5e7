//! Pairwise comparison over a snapshot of discovered files.
//!
//! Files are visited in discovery order. Each file is compared with every file
//! after it, so each unordered pair is tested once and the earlier file is
//! always named first in the report.

use image::io::Reader;
use image::{DynamicImage, ImageError};
use indicatif::ProgressBar;
use log::{debug, info};

use crate::classification::classify_pair;
use crate::error::{Error, Result};
use crate::logging::{log_decode_error, log_match};
use crate::types::{ImageFile, MatchRecord};

/// Supplies decoded images for discovered files
pub trait ImageSource {
    fn load(&self, file: &ImageFile) -> Result<DynamicImage>;
}

/// Decodes images from disk, choosing the decoder from the file contents
///
/// The extension is only a fallback when the leading bytes are not recognised.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemSource;

impl ImageSource for FileSystemSource {
    fn load(&self, file: &ImageFile) -> Result<DynamicImage> {
        let reader = Reader::open(&file.path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| Error::decode(&file.path, ImageError::IoError(e)))?;

        reader.decode().map_err(|e| Error::decode(&file.path, e))
    }
}

/// Outcome of a comparison run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    /// Matches in the order they were found
    pub matches: Vec<MatchRecord>,

    /// Number of pairs compared
    pub comparisons: usize,
}

/// Number of pairs compared for `n` files
pub fn comparison_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

fn load_logged<S: ImageSource + ?Sized>(source: &S, file: &ImageFile) -> Result<DynamicImage> {
    source.load(file).map_err(|e| {
        log_decode_error(&file.path, &e);
        e
    })
}

/// Compare every file against each file after it and collect the matches
///
/// `on_match` sees each record as soon as it is found. The first file that
/// fails to load aborts the run.
pub fn find_matches<S, F>(
    source: &S,
    files: &[ImageFile],
    progress: &ProgressBar,
    mut on_match: F,
) -> Result<MatchReport>
where
    S: ImageSource + ?Sized,
    F: FnMut(&MatchRecord),
{
    let mut report = MatchReport::default();

    if files.len() < 2 {
        info!("{} image(s) found, nothing to compare", files.len());
        return Ok(report);
    }

    info!(
        "Comparing {} images ({} pairs)",
        files.len(),
        comparison_count(files.len())
    );

    for (i, outer) in files.iter().enumerate() {
        if i + 1 == files.len() {
            break;
        }

        let current = load_logged(source, outer)?;

        for inner in &files[i + 1..] {
            let other = load_logged(source, inner)?;
            let verdict = classify_pair(&current, &other);
            report.comparisons += 1;
            progress.inc(1);

            debug!("{} vs {}: {}", outer.name, inner.name, verdict);

            if verdict.is_match() {
                let record = MatchRecord {
                    first: outer.name.clone(),
                    second: inner.name.clone(),
                    verdict,
                };
                log_match(&record);
                on_match(&record);
                report.matches.push(record);
            }
        }
    }

    info!(
        "Found {} matching pairs in {} comparisons",
        report.matches.len(),
        report.comparisons
    );

    Ok(report)
}
