use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::{ImageFile, ImageFormat};

/// Discover images in a directory, in file-name order
///
/// Reported names are relative to `directory`.
pub fn discover_images(directory: &Path, config: &Config) -> Result<Vec<ImageFile>> {
    // Check if directory exists
    if !directory.is_dir() {
        return Err(Error::FileNotFound(directory.to_path_buf()));
    }

    let max_depth = config.max_depth.unwrap_or(usize::MAX);

    let mut image_files = Vec::new();

    for entry in WalkDir::new(directory)
        .min_depth(1)
        .max_depth(max_depth)
        .follow_links(config.follow_links)
        .sort_by_file_name()
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let format = get_image_format(path);

        // Skip unsupported formats unless explicitly enabled
        if !format.is_supported() && !config.process_unsupported_formats {
            debug!("Skipping non-image file: {}", path.display());
            continue;
        }

        image_files.push(image_file_at(directory, path, format)?);
    }

    debug!(
        "Discovered {} images in {}",
        image_files.len(),
        directory.display()
    );

    Ok(image_files)
}

/// Get image format from file extension
fn get_image_format(path: &Path) -> ImageFormat {
    let ext = path.extension().and_then(|ext| ext.to_str()).unwrap_or("");
    ImageFormat::from_extension(ext)
}

/// Build the record for one discovered file; unreadable metadata is an error
fn image_file_at(directory: &Path, path: &Path, format: ImageFormat) -> Result<ImageFile> {
    let (size, last_modified) = get_file_metadata(path)?;
    let name = path
        .strip_prefix(directory)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned();

    Ok(ImageFile {
        path: path.to_path_buf(),
        name,
        size,
        last_modified,
        format,
    })
}

/// Get file size and modification time
fn get_file_metadata(path: &Path) -> io::Result<(u64, std::time::SystemTime)> {
    let metadata = fs::metadata(path)?;
    Ok((metadata.len(), metadata.modified()?))
}

/// Returns if the given path has an image extension
pub fn is_image_path(path: &Path) -> bool {
    get_image_format(path).is_supported()
}

// -- Tests --
