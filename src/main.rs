#![warn(non_snake_case)]
//! # sectored_maze driver
//!
//! Generates one maze and prints it, as ASCII or (with `--layout`) as a JSON
//! list of wall placements. Settings come from the `GeneratorConfig`
//! defaults, then an optional JSON config file, then the command-line flags.
//! Set `RUST_LOG=info` (or `debug`) to see timing and per-section logs.

use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::{error, info};
use sectored_maze::generator::{GeneratorConfig, MazeGenerator};
use sectored_maze::layout::wall_segments;
use sectored_maze::maze::analysis::is_fully_connected;

/// Sectioned concurrent maze generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON generator config; flags below override its values
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Maze width in cells
    #[arg(long, value_name = "COLUMNS")]
    width: Option<usize>,

    /// Maze height in cells
    #[arg(long, value_name = "ROWS")]
    height: Option<usize>,

    /// Side length of the square sections carved in parallel
    #[arg(long, value_name = "CELLS")]
    section_size: Option<usize>,

    /// Sleep inside every section task to make the concurrency visible
    #[arg(long)]
    delay: bool,

    /// Length of the per-section sleep
    #[arg(long, value_name = "MILLIS")]
    delay_ms: Option<u64>,

    /// Seed for a reproducible maze
    #[arg(long)]
    seed: Option<u64>,

    /// Size of a dedicated worker pool
    #[arg(long, value_name = "THREADS")]
    workers: Option<usize>,

    /// Print wall placements as JSON, with cells of this size
    #[arg(long, value_name = "CELL_SIZE")]
    layout: Option<f64>,
}

impl Args {
    /// Layers the flags that were given over `config`.
    fn apply_to(&self, mut config: GeneratorConfig) -> GeneratorConfig {
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(section_size) = self.section_size {
            config.section_size = section_size;
        }
        if self.delay {
            config.artificial_delay = true;
        }
        if let Some(delay_ms) = self.delay_ms {
            config.delay_ms = delay_ms;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(workers) = self.workers {
            config.worker_threads = Some(workers);
        }
        config
    }

    fn load_config(&self) -> Result<GeneratorConfig, Box<dyn Error>> {
        let base = match &self.config {
            Some(path) => GeneratorConfig::from_json_file(path)?,
            None => GeneratorConfig::default(),
        };
        Ok(self.apply_to(base))
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // Initialize logging.
    env_logger::init();
    info!("sectored_maze starting...");

    let config = args.load_config()?;

    let mut generator = MazeGenerator::new(config.clone())?;
    let grid = match generator.generate(&config) {
        Ok(grid) => grid,
        Err(e) => {
            error!("Maze generation failed: {}", e);
            return Err(e.into());
        }
    };

    if !is_fully_connected(grid) {
        error!("Generated maze is not fully connected");
    }

    match args.layout {
        Some(cell_size) => {
            let segments = wall_segments(grid, cell_size);
            println!("{}", serde_json::to_string_pretty(&segments)?);
        }
        None => print!("{}", grid),
    }

    if let Some(stats) = generator.stats() {
        info!("Generation stats: {}", serde_json::to_string(stats)?);
    }
    info!("sectored_maze exiting.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let args = Args::try_parse_from([
            "sectored_maze",
            "--width",
            "3",
            "--height",
            "7",
            "--section-size",
            "2",
            "--delay",
            "--delay-ms",
            "10",
            "--seed",
            "42",
            "--workers",
            "2",
        ])
        .unwrap();
        let config = args.load_config().unwrap();

        assert_eq!(config.width, 3);
        assert_eq!(config.height, 7);
        assert_eq!(config.section_size, 2);
        assert!(config.artificial_delay);
        assert_eq!(config.delay_ms, 10);
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.worker_threads, Some(2));
    }

    #[test]
    fn test_no_flags_keeps_defaults() {
        let args = Args::try_parse_from(["sectored_maze"]).unwrap();
        assert!(args.config.is_none());
        assert!(args.layout.is_none());
        assert_eq!(args.load_config().unwrap(), GeneratorConfig::default());
    }

    #[test]
    fn test_flags_override_file_values() {
        let file = GeneratorConfig::new(30, 30, 6).with_seed(1);
        let args = Args::try_parse_from(["sectored_maze", "--width", "8", "--layout", "2.5"]).unwrap();
        let config = args.apply_to(file);

        assert_eq!(config.width, 8);
        assert_eq!(config.height, 30);
        assert_eq!(config.section_size, 6);
        assert_eq!(config.seed, Some(1));
        assert_eq!(args.layout, Some(2.5));
    }

    #[test]
    fn test_config_path_is_positional() {
        let args = Args::try_parse_from(["sectored_maze", "maze.json", "--height", "4"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("maze.json")));
        assert_eq!(args.height, Some(4));
    }

    #[test]
    fn test_help_and_unknown_flags_are_not_config_paths() {
        let help = Args::try_parse_from(["sectored_maze", "--help"]).unwrap_err();
        assert_eq!(help.kind(), clap::error::ErrorKind::DisplayHelp);

        let unknown = Args::try_parse_from(["sectored_maze", "--bogus"]).unwrap_err();
        assert_eq!(unknown.kind(), clap::error::ErrorKind::UnknownArgument);
    }

    #[test]
    fn test_invalid_number_rejected() {
        assert!(Args::try_parse_from(["sectored_maze", "--width", "-3"]).is_err());
    }
}
