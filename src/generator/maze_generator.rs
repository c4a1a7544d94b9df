// src/generator/maze_generator.rs

use std::thread;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::{ThreadPool, ThreadPoolBuilder};
use serde::Serialize;

use crate::generator::{GeneratorConfig, MazeError};
use crate::maze::{carve_section, merge_section_borders, MazeGrid, SectionLayout};
use crate::utils::util::derive_seed;

/// RNG stream reserved for the border merge; section streams use their index.
const MERGE_STREAM: u64 = u64::MAX;

/// Figures from the last successful run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationStats {
    pub generation_time: Duration,
    pub sections_x: usize,
    pub sections_y: usize,
    pub section_count: usize,
    /// Passages opened inside sections by the depth-first carve.
    pub carved_passages: usize,
    /// Walls opened between sections by the border merge.
    pub merge_passages: usize,
    /// Distinct pool threads that ran at least one section task.
    pub workers_used: usize,
    pub seed: u64,
}

/// Generates sectioned mazes.
///
/// Each section is carved by its own rayon task; the tasks only ever see a
/// [`SectionView`](crate::maze::SectionView) of their own cells, so the grid
/// needs no lock. Once every task has finished the borders are merged on the
/// calling thread and the finished grid is kept until the next run.
#[derive(Debug)]
pub struct MazeGenerator {
    config: GeneratorConfig,
    pool: Option<ThreadPool>,
    grid: Option<MazeGrid>,
    stats: Option<GenerationStats>,
}

impl Default for MazeGenerator {
    fn default() -> Self {
        MazeGenerator {
            config: GeneratorConfig::default(),
            pool: None,
            grid: None,
            stats: None,
        }
    }
}

impl MazeGenerator {
    /// Creates a generator. A dedicated worker pool is built when
    /// `config.worker_threads` is set; otherwise the global rayon pool is used.
    pub fn new(config: GeneratorConfig) -> Result<Self, MazeError> {
        let pool = match config.worker_threads {
            Some(threads) => Some(
                ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("maze-section-{}", i))
                    .build()?,
            ),
            None => None,
        };
        Ok(MazeGenerator {
            config,
            pool,
            grid: None,
            stats: None,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The most recently generated maze, if any.
    pub fn grid(&self) -> Option<&MazeGrid> {
        self.grid.as_ref()
    }

    pub fn into_grid(self) -> Option<MazeGrid> {
        self.grid
    }

    pub fn stats(&self) -> Option<&GenerationStats> {
        self.stats.as_ref()
    }

    /// Generates a `width x height` maze from sections of `section_size`,
    /// using the rest of the generator's config (seed, delay length, pool).
    ///
    /// Blocks until every section is carved and the borders are merged.
    pub fn generate_maze(
        &mut self,
        width: usize,
        height: usize,
        section_size: usize,
        artificial_delay: bool,
    ) -> Result<&MazeGrid, MazeError> {
        let config = GeneratorConfig {
            width,
            height,
            section_size,
            artificial_delay,
            ..self.config.clone()
        };
        self.generate(&config)
    }

    /// Generates a maze described by `config`. `config.worker_threads` is
    /// ignored here; the pool is fixed when the generator is created.
    ///
    /// Invalid dimensions are rejected before anything is allocated or
    /// scheduled, leaving the previous grid and stats in place.
    pub fn generate(&mut self, config: &GeneratorConfig) -> Result<&MazeGrid, MazeError> {
        config.validate()?;

        let layout = SectionLayout::new(config.width, config.height, config.section_size);
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(
            "Generating {}x{} maze: {}x{} sections of up to {} cells square (seed {})",
            config.width,
            config.height,
            layout.sections_x(),
            layout.sections_y(),
            layout.section_size(),
            seed
        );

        let started = Instant::now();
        let mut grid = MazeGrid::new(config.width, config.height);

        let (carved_passages, workers_used) =
            self.carve_sections(&mut grid, &layout, seed, config.delay());

        let mut merge_rng = StdRng::seed_from_u64(derive_seed(seed, MERGE_STREAM));
        let merge_passages = merge_section_borders(&mut grid, layout.section_size(), &mut merge_rng);

        let generation_time = started.elapsed();
        info!("Maze generated in {:.6} s", generation_time.as_secs_f64());

        self.stats = Some(GenerationStats {
            generation_time,
            sections_x: layout.sections_x(),
            sections_y: layout.sections_y(),
            section_count: layout.section_count(),
            carved_passages,
            merge_passages,
            workers_used,
            seed,
        });
        Ok(&*self.grid.insert(grid))
    }

    /// Runs one task per section and waits for all of them. The end of the
    /// rayon scope is the barrier the border merge depends on.
    ///
    /// Returns the passages carved and the number of distinct workers that
    /// ran a section.
    fn carve_sections(
        &self,
        grid: &mut MazeGrid,
        layout: &SectionLayout,
        seed: u64,
        delay: Option<Duration>,
    ) -> (usize, usize) {
        let views = grid.section_views(layout);
        // (passages carved, worker index) per section
        let mut carved: Vec<(usize, Option<usize>)> = vec![(0, None); views.len()];

        let run = || {
            rayon::scope(|scope| {
                for (mut view, slot) in views.into_iter().zip(carved.iter_mut()) {
                    scope.spawn(move |_| {
                        let bounds = view.bounds();
                        let stream = layout.index_of(&bounds) as u64;
                        let mut rng = StdRng::seed_from_u64(derive_seed(seed, stream));
                        let passages = carve_section(&mut view, &mut rng);
                        if let Some(delay) = delay {
                            thread::sleep(delay);
                        }
                        let worker = rayon::current_thread_index();
                        debug!(
                            "Section {} carved {} passages on worker {:?}",
                            stream, passages, worker
                        );
                        *slot = (passages, worker);
                    });
                }
            });
        };

        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }

        let passages = carved.iter().map(|(passages, _)| passages).sum();
        let mut workers: Vec<usize> = carved.iter().filter_map(|(_, worker)| *worker).collect();
        workers.sort_unstable();
        workers.dedup();
        (passages, workers.len())
    }
}
