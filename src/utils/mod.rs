// py-resizer/src/utils/mod.rs
use crate::processors::ImageMetadata;
use std::path::PathBuf;

/// Expands a leading `~/` to the user's home directory. Anything else is
/// taken literally, absolute or relative to the current working directory.
pub fn expand_home(raw: &str) -> PathBuf {
    match raw.strip_prefix("~/") {
        Some(rest) => match dirs::home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(raw),
        },
        None => PathBuf::from(raw),
    }
}

/// Output naming convention: `<stem>_resized<extension>`.
pub fn resized_file_name(metadata: &ImageMetadata) -> String {
    format!("{}_resized{}", metadata.name, metadata.extension)
}

pub fn image_format_to_string(format: image::ImageFormat) -> String {
    match format {
        image::ImageFormat::Jpeg => "JPEG",
        image::ImageFormat::Png => "PNG",
        image::ImageFormat::Gif => "GIF",
        image::ImageFormat::WebP => "WebP",
        image::ImageFormat::Tiff => "TIFF",
        image::ImageFormat::Bmp => "BMP",
        _ => "Unknown",
    }
    .to_string()
}
