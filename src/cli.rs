// py-resizer/src/cli.rs
use crate::core::Config;
use crate::utils::expand_home;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "py-resizer", about = "A simple image resizer.")]
pub struct Cli {
    /// A list of paths to images
    #[arg(value_name = "FILEPATH", required = true)]
    pub filepaths: Vec<PathBuf>,

    /// Proportional change in image size in percentage
    #[arg(short, long, allow_negative_numbers = true)]
    pub percent: i32,

    /// A path to the directory with resized images
    #[arg(short, long, default_value = "~/Desktop/Resized Images/")]
    pub destination: String,
}

impl Cli {
    pub fn into_config(self) -> Config {
        Config {
            input_paths: self.filepaths,
            scale: self.percent,
            destination: expand_home(&self.destination),
        }
    }
}
