// py-resizer/src/core/executor.rs
use super::Result;
use crate::processors::{ImageMetadata, Loader};
use crate::utils::resized_file_name;
use image::imageops::FilterType;
use std::fs;
use std::path::{Path, PathBuf};

pub struct Executor {
    scale: i32,
    out_directory: PathBuf,
    loader: Loader,
}

impl Executor {
    pub fn new(scale: i32, out_directory: PathBuf) -> Self {
        Self {
            scale,
            out_directory,
            loader: Loader::new(),
        }
    }

    /// The program's only recovery boundary: a failure is reported on
    /// stdout and swallowed so the remaining inputs still get their turn.
    pub fn process(&self, input_path: &Path) {
        if let Err(error) = self.try_process(input_path) {
            println!("ERROR: {}", error);
        }
    }

    fn try_process(&self, input_path: &Path) -> Result<()> {
        let (image, format) = self.loader.load(input_path)?;
        let metadata = ImageMetadata::derive(&image, format, input_path)?;

        log::debug!(
            "{}: {} bytes, {}, {}",
            input_path.display(),
            metadata.size_in_bytes,
            metadata.dimensions,
            metadata.format
        );

        if !self.out_directory.exists() {
            fs::create_dir_all(&self.out_directory)?;
        }

        let out_path = self.out_directory.join(resized_file_name(&metadata));

        // Establish the output path up front; a failure below may leave
        // the placeholder behind.
        if !out_path.exists() {
            fs::File::create(&out_path)?;
        }

        let out_dimensions = metadata.dimensions.resize(self.scale);
        let (width, height) = out_dimensions.as_pair();

        image
            .resize_exact(width, height, FilterType::CatmullRom)
            .save(&out_path)?;

        log::info!("Saved {} ({})", out_path.display(), out_dimensions);

        Ok(())
    }
}
