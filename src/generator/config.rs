// src/generator/config.rs

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::generator::MazeError;

/// Parameters for one maze generation run.
///
/// Every field has a default, so a JSON config only needs the keys it
/// changes: `{"width": 64, "height": 48, "seed": 7}` is a complete config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    pub width: usize,
    pub height: usize,
    pub section_size: usize,
    /// Sleep inside every section task after carving. Only makes the
    /// concurrency observable; the maze is unaffected.
    pub artificial_delay: bool,
    pub delay_ms: u64,
    /// Size of a dedicated rayon pool. `None` uses the global pool.
    pub worker_threads: Option<usize>,
    /// Fixed seed for a reproducible maze. `None` draws a fresh one.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            width: 20,
            height: 20,
            section_size: 5,
            artificial_delay: false,
            delay_ms: 500,
            worker_threads: None,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn new(width: usize, height: usize, section_size: usize) -> Self {
        GeneratorConfig {
            width,
            height,
            section_size,
            ..Self::default()
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_artificial_delay(mut self, enabled: bool) -> Self {
        self.artificial_delay = enabled;
        self
    }

    pub fn with_worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    /// Rejects zero width, height or section size.
    pub fn validate(&self) -> Result<(), MazeError> {
        if self.width == 0 || self.height == 0 {
            return Err(MazeError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.section_size == 0 {
            return Err(MazeError::InvalidSectionSize);
        }
        Ok(())
    }

    /// The per-section sleep, if enabled.
    pub fn delay(&self) -> Option<Duration> {
        self.artificial_delay
            .then(|| Duration::from_millis(self.delay_ms))
    }

    pub fn from_json_str(json: &str) -> Result<Self, MazeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, MazeError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }
}
