// py-resizer/src/core/mod.rs
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

mod executor;

pub use executor::Executor;

#[derive(Error, Debug)]
pub enum ResizerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid file name: {}", .0.display())]
    InvalidFileName(PathBuf),
}

pub type Result<T> = std::result::Result<T, ResizerError>;

#[derive(Debug, Clone)]
pub struct Config {
    pub input_paths: Vec<PathBuf>,
    pub scale: i32,
    pub destination: PathBuf,
}

impl Config {
    pub fn is_scale_valid(&self) -> bool {
        0 < self.scale && self.scale < 100
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scales both sides by `percent / 100`, truncating toward zero.
    /// An out-of-range percent yields an unchanged copy; the caller is
    /// expected to have validated the value already.
    pub fn resize(&self, percent: i32) -> Dimensions {
        if 0 < percent && percent < 100 {
            Dimensions {
                width: (self.width as u64 * percent as u64 / 100) as u32,
                height: (self.height as u64 * percent as u64 / 100) as u32,
            }
        } else {
            *self
        }
    }

    pub fn as_pair(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
