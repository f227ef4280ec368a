use clap::Parser;
use py_resizer::{Cli, Executor};

fn main() {
    let cli = Cli::parse();

    // Initialize logger
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = cli.into_config();

    if !config.is_scale_valid() {
        println!("Invalid scale. Value should be between 1 and 99");
        std::process::exit(1);
    }

    let executor = Executor::new(config.scale, config.destination.clone());

    for input_path in &config.input_paths {
        executor.process(input_path);
    }
}
