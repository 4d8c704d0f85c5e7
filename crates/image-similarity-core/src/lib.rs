//! Core functionality for finding visually similar images.
//!
//! This library provides the components for pairwise image similarity:
//! - File discovery
//! - Feature extraction (average hash, histogram ridge signature)
//! - Pair classification (exact, hash, shape)
//! - The comparison loop that reports matching pairs

// -- External Dependencies --

use indicatif::{ProgressBar, ProgressStyle};
use log::info;

// -- Standard Library --
use std::path::Path;

// -- Internal Modules --
mod error;

// -- Public Re-exports --
pub use classification::{classify_pair, Verdict};
pub use comparison::{find_matches, FileSystemSource, ImageSource, MatchReport};
pub use config::*;
pub use error::{Error, Result};
pub use types::*;

// -- Public Modules --
pub mod classification;
pub mod comparison;
pub mod config;
pub mod discovery;
pub mod logging;
pub mod processing;
pub mod types;

/// Main entry point for a similarity scan
pub struct SimilarityFinder {
    config: Config,
}

impl SimilarityFinder {
    /// Create a new SimilarityFinder with the provided configuration
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this finder runs with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Discover all images in the provided directory
    pub fn discover_images(&self, directory: &Path) -> Result<Vec<ImageFile>> {
        discovery::discover_images(directory, &self.config)
    }

    /// Run the full scan: discover, then compare every pair once
    ///
    /// `on_match` is called for each matching pair as it is found.
    pub fn run<F>(&self, directory: &Path, on_match: F) -> Result<MatchReport>
    where
        F: FnMut(&MatchRecord),
    {
        self.run_with_source(&FileSystemSource, directory, on_match)
    }

    /// Run the scan with a custom image source
    pub fn run_with_source<S, F>(
        &self,
        source: &S,
        directory: &Path,
        on_match: F,
    ) -> Result<MatchReport>
    where
        S: ImageSource + ?Sized,
        F: FnMut(&MatchRecord),
    {
        info!("Discovering images in {}...", directory.display());
        let images = self.discover_images(directory)?;
        info!("Found {} images", images.len());

        let progress_bar = self.progress_bar(comparison::comparison_count(images.len()));
        let report = find_matches(source, &images, &progress_bar, on_match)?;
        progress_bar.finish_with_message(format!("{} matches", report.matches.len()));

        Ok(report)
    }

    fn progress_bar(&self, total: usize) -> ProgressBar {
        if !self.config.show_progress {
            return ProgressBar::hidden();
        }

        let progress_bar = ProgressBar::new(total as u64);
        match ProgressStyle::default_bar()
            .template("[{eta}] {bar:40.cyan/blue} {pos}/{len} ({percent}%) {msg}")
        {
            Ok(style) => progress_bar.set_style(style.progress_chars("##-")),
            Err(e) => log::warn!("Invalid progress bar template: {}", e),
        }
        progress_bar.set_message("Comparing images...");
        progress_bar
    }
}
