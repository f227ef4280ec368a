// py-resizer/src/processors/metadata.rs
use crate::core::{Dimensions, ResizerError, Result};
use crate::utils::image_format_to_string;
use image::{DynamicImage, GenericImageView, ImageFormat};
use std::path::Path;

// Derived once per opened image, dropped with it. Never persisted.
#[derive(Debug, Clone)]
pub struct ImageMetadata {
    pub name: String,
    pub extension: String,
    pub size_in_bytes: u64,
    pub dimensions: Dimensions,
    pub format: String,
}

impl ImageMetadata {
    pub fn derive(image: &DynamicImage, format: ImageFormat, path: &Path) -> Result<Self> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .ok_or_else(|| ResizerError::InvalidFileName(path.to_path_buf()))?
            .to_string();

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| format!(".{}", ext))
            .unwrap_or_default();

        let size_in_bytes = std::fs::metadata(path)?.len();

        let (width, height) = image.dimensions();

        Ok(Self {
            name,
            extension,
            size_in_bytes,
            dimensions: Dimensions::new(width, height),
            format: image_format_to_string(format),
        })
    }
}
