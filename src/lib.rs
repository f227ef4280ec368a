mod cli;
mod core;
mod processors;
mod utils;

pub use cli::Cli;
pub use crate::core::{Config, Dimensions, Executor, ResizerError, Result};
pub use processors::{ImageMetadata, Loader};
pub use utils::{expand_home, image_format_to_string, resized_file_name};

// Re-export commonly used types
pub use image::DynamicImage;
