// py-resizer/src/processors/loader.rs
use crate::core::{ResizerError, Result};
use image::{DynamicImage, ImageFormat, ImageReader};
use std::path::Path;

pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    pub fn load(&self, path: &Path) -> Result<(DynamicImage, ImageFormat)> {
        log::debug!("Loading image from: {}", path.display());

        let reader = ImageReader::open(path)?.with_guessed_format()?;

        let format = reader.format().ok_or_else(|| {
            ResizerError::UnsupportedFormat(path.display().to_string())
        })?;

        let image = reader.decode()?;

        Ok((image, format))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}
