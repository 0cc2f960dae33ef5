//! Generation state machine
//!
//! A run seeds one `Empty` cell and then repeats
//! Propagating → Selecting → Resolving until no unresolved cell is left:
//!
//! - **Propagating** re-evaluates every tainted `Unknown` cell.
//! - **Selecting** scans the interior row-major and picks the cell with the
//!   lowest defined entropy, first one wins ties. A stored evaluation with
//!   zero total weight is a contradiction and ends the run.
//! - **Resolving** assigns a weighted random tile and taints the cell's
//!   `Unknown` neighbours.

use std::time::{Duration, Instant};

use ndarray::Array2;
use tracing::{debug, info, warn};

use crate::algorithm::cache::CacheStats;
use crate::algorithm::catalog::PatternCatalog;
use crate::algorithm::evaluator::{CellEvaluator, CellState};
use crate::algorithm::frontier::Frontier;
use crate::algorithm::resolver::{RandomSelector, resolve};
use crate::io::configuration::DEFAULT_SEED;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::grid::{BorderMatching, Grid, TileGrid, validate_dimensions};
use crate::spatial::tiles::{TileType, kernel_to_string};

/// Limits that stop a run which would otherwise take too long
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepBudget {
    /// Maximum number of cells resolved after the seed
    pub max_steps: Option<usize>,
    /// Maximum wall-clock time measured from generator creation
    pub deadline: Option<Duration>,
}

impl StepBudget {
    /// Budget without limits
    pub const fn unlimited() -> Self {
        Self {
            max_steps: None,
            deadline: None,
        }
    }
}

/// Runtime parameters for one generation request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Interior cell forced to `Empty`; defaults to the grid centre
    pub seed_position: Option<[usize; 2]>,
    /// Seed for the pseudorandom source
    pub rng_seed: u64,
    /// How border neighbours are observed during matching
    pub border: BorderMatching,
    /// Step and time limits
    pub budget: StepBudget,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed_position: None,
            rng_seed: DEFAULT_SEED,
            border: BorderMatching::Wall,
            budget: StepBudget::unlimited(),
        }
    }
}

/// State of the generation state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GenerationPhase {
    /// Re-evaluating tainted cells
    Propagating,
    /// Looking for the lowest-entropy cell
    Selecting,
    /// Assigning a tile to the selected cell
    Resolving,
    /// Every interior cell is resolved
    Done,
}

/// Record of one resolved cell
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    /// `[x, y]` of the cell
    pub position: [usize; 2],
    /// Tile written
    pub tile: TileType,
    /// Step on which it was written; the seed is step 0
    pub step: usize,
    /// Entropy of the cell when it was selected; `None` for the seed
    pub entropy: Option<f64>,
}

/// Entropy-ordered generator over a single grid
pub struct Generator<'a> {
    grid: TileGrid,
    evaluator: CellEvaluator<'a>,
    frontier: Frontier,
    states: Array2<Option<CellState>>,
    selector: RandomSelector,
    phase: GenerationPhase,
    selected: Option<[usize; 2]>,
    seed_position: [usize; 2],
    placements: Vec<Placement>,
    budget: StepBudget,
    started: Instant,
}

impl<'a> Generator<'a> {
    /// Allocate the grid, force the seed cell to `Empty` and taint its
    /// neighbours
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are out of range or the seed
    /// position is not an interior cell
    pub fn new(
        width: usize,
        height: usize,
        catalog: &'a PatternCatalog,
        config: GeneratorConfig,
    ) -> Result<Self> {
        let mut grid = TileGrid::new(width, height)?;

        let seed_position = config.seed_position.unwrap_or([width / 2, height / 2]);
        let [seed_x, seed_y] = seed_position;
        if !grid.is_interior(seed_x, seed_y) {
            return Err(AlgorithmError::InvalidPosition {
                position: seed_position,
                dimensions: (width, height),
                reason: "seed must be an interior cell",
            });
        }
        grid.set_tile(seed_x, seed_y, TileType::Empty)?;

        let mut frontier = Frontier::new();
        frontier.taint_all(
            grid.unknown_neighbors(seed_position)
                .into_iter()
                .map(|position| grid.encode(position)),
        );

        debug!(
            width,
            height,
            seed_x,
            seed_y,
            rng_seed = config.rng_seed,
            patterns = catalog.len(),
            "generator seeded"
        );

        Ok(Self {
            grid,
            evaluator: CellEvaluator::new(catalog, config.border),
            frontier,
            states: Array2::from_elem((height, width), None),
            selector: RandomSelector::new(config.rng_seed),
            phase: GenerationPhase::Propagating,
            selected: None,
            seed_position,
            placements: vec![Placement {
                position: seed_position,
                tile: TileType::Empty,
                step: 0,
                entropy: None,
            }],
            budget: config.budget,
            started: Instant::now(),
        })
    }

    /// Current state machine phase
    pub const fn phase(&self) -> GenerationPhase {
        self.phase
    }

    /// Grid under construction
    pub const fn grid(&self) -> &TileGrid {
        &self.grid
    }

    /// Cells awaiting re-evaluation
    pub const fn frontier(&self) -> &Frontier {
        &self.frontier
    }

    /// Stored evaluation of an unresolved cell, if it has one
    pub fn cell_state(&self, position: [usize; 2]) -> Option<&CellState> {
        self.states
            .get([position[1], position[0]])
            .and_then(Option::as_ref)
    }

    /// Cell forced to `Empty` at the start
    pub const fn seed_position(&self) -> [usize; 2] {
        self.seed_position
    }

    /// Cells in the order they were resolved, starting with the seed
    pub const fn placements(&self) -> &[Placement] {
        self.placements.as_slice()
    }

    /// Cells resolved after the seed
    pub const fn steps(&self) -> usize {
        self.placements.len().saturating_sub(1)
    }

    /// Interior cells resolved so far, seed included
    pub const fn resolved_count(&self) -> usize {
        self.placements.len()
    }

    /// Interior cells still `Unknown`
    pub fn remaining_count(&self) -> usize {
        self.grid.unknown_count()
    }

    /// Kernel cache statistics
    pub const fn cache_stats(&self) -> CacheStats {
        self.evaluator.cache().stats
    }

    /// Perform a single state machine transition
    ///
    /// # Errors
    ///
    /// Returns an error on contradiction or when the budget is exhausted
    pub fn advance(&mut self) -> Result<GenerationPhase> {
        if self.phase == GenerationPhase::Done {
            return Ok(GenerationPhase::Done);
        }
        self.check_budget()?;

        self.phase = match self.phase {
            GenerationPhase::Propagating => self.propagate()?,
            GenerationPhase::Selecting => self.select()?,
            GenerationPhase::Resolving => self.resolve_selected()?,
            GenerationPhase::Done => GenerationPhase::Done,
        };
        Ok(self.phase)
    }

    /// Run transitions until one cell has been resolved or the grid is done
    ///
    /// Returns `false` once generation is complete.
    ///
    /// # Errors
    ///
    /// Returns an error on contradiction or when the budget is exhausted
    pub fn step(&mut self) -> Result<bool> {
        let resolved = self.placements.len();
        while self.phase != GenerationPhase::Done && self.placements.len() == resolved {
            self.advance()?;
        }
        Ok(self.phase != GenerationPhase::Done)
    }

    /// Drive the state machine to completion and return the finished grid
    ///
    /// # Errors
    ///
    /// Returns an error on contradiction or when the budget is exhausted
    pub fn run(mut self) -> Result<Grid> {
        while self.step()? {}
        self.finish()
    }

    /// Hand out the finished grid
    ///
    /// # Errors
    ///
    /// Returns an error if generation has not reached the done phase
    pub fn finish(self) -> Result<Grid> {
        if self.phase != GenerationPhase::Done {
            return Err(AlgorithmError::InvalidParameter {
                parameter: "phase",
                value: format!("{:?}", self.phase),
                reason: "generation has not completed".to_string(),
            });
        }
        Ok(self.grid.freeze())
    }

    fn propagate(&mut self) -> Result<GenerationPhase> {
        let tainted = self.frontier.drain();
        let mut evaluated = 0usize;

        for key in tainted {
            let position = self.grid.decode(key);
            let [x, y] = position;
            if self.grid.tile_at(x, y).is_resolved() {
                continue;
            }
            let state = self.evaluator.evaluate(&self.grid, position)?;
            if let Some(slot) = self.states.get_mut([y, x]) {
                *slot = Some(state);
            }
            evaluated += 1;
        }

        debug!(step = self.steps(), evaluated, "propagated tainted cells");
        Ok(GenerationPhase::Selecting)
    }

    fn select(&mut self) -> Result<GenerationPhase> {
        let mut best: Option<([usize; 2], f64)> = None;

        for [x, y] in self.grid.interior_positions() {
            if self.grid.tile_at(x, y).is_resolved() {
                continue;
            }
            let Some(state) = self.states.get([y, x]).and_then(Option::as_ref) else {
                continue;
            };
            let Some(entropy) = state.entropy else {
                warn!(x, y, step = self.steps(), "no pattern matches cell");
                return Err(AlgorithmError::Contradiction {
                    position: state.position,
                    step: self.steps() + 1,
                    kernel: kernel_to_string(&state.kernel),
                });
            };
            if best.is_none_or(|(_, lowest)| entropy < lowest) {
                best = Some((state.position, entropy));
            }
        }

        if let Some((position, _)) = best {
            self.selected = Some(position);
            return Ok(GenerationPhase::Resolving);
        }

        // Unresolved cells that were never reached cannot be decided
        if let Some(position) = self
            .grid
            .interior_positions()
            .find(|&[x, y]| !self.grid.tile_at(x, y).is_resolved())
        {
            warn!(
                x = position[0],
                y = position[1],
                "unresolved cell was never evaluated"
            );
            return Err(AlgorithmError::Contradiction {
                position,
                step: self.steps() + 1,
                kernel: kernel_to_string(&self.grid.kernel_at(position, self.evaluator.border())),
            });
        }

        info!(
            steps = self.steps(),
            cache_hits = self.evaluator.cache().stats.hits,
            cache_misses = self.evaluator.cache().stats.misses,
            "generation complete"
        );
        Ok(GenerationPhase::Done)
    }

    fn resolve_selected(&mut self) -> Result<GenerationPhase> {
        let Some(position) = self.selected.take() else {
            return Ok(GenerationPhase::Selecting);
        };
        let [x, y] = position;
        let Some(state) = self.states.get_mut([y, x]).and_then(Option::take) else {
            return Ok(GenerationPhase::Propagating);
        };

        let step = self.steps() + 1;
        let tile = resolve(&mut self.grid, &state, &mut self.selector, step)?;
        debug!(x, y, %tile, entropy = state.entropy, step, "resolved cell");

        self.placements.push(Placement {
            position,
            tile,
            step,
            entropy: state.entropy,
        });

        let neighbors = self.grid.unknown_neighbors(position);
        for neighbor in neighbors {
            self.frontier.taint(self.grid.encode(neighbor));
        }

        Ok(GenerationPhase::Propagating)
    }

    fn check_budget(&self) -> Result<()> {
        if let Some(deadline) = self.budget.deadline {
            let elapsed = self.started.elapsed();
            if elapsed > deadline {
                warn!(steps = self.steps(), "generation deadline exceeded");
                return Err(AlgorithmError::DeadlineExceeded {
                    steps: self.steps(),
                    elapsed,
                });
            }
        }
        if let Some(limit) = self.budget.max_steps
            && self.phase == GenerationPhase::Resolving
            && self.steps() >= limit
        {
            warn!(steps = self.steps(), limit, "generation step budget exhausted");
            return Err(AlgorithmError::BudgetExhausted {
                steps: self.steps(),
                limit,
            });
        }
        Ok(())
    }
}

/// Generate a grid with the stock dungeon catalog
///
/// `seed_position` defaults to the grid centre and `rng_seed` to the
/// crate-wide default seed.
///
/// # Errors
///
/// Returns an error for invalid dimensions or seed position, or when
/// generation hits a contradiction
pub fn generate(
    width: usize,
    height: usize,
    seed_position: Option<[usize; 2]>,
    rng_seed: Option<u64>,
) -> Result<Grid> {
    validate_dimensions(width, height)?;
    let catalog = PatternCatalog::dungeon()?;
    let config = GeneratorConfig {
        seed_position,
        rng_seed: rng_seed.unwrap_or(DEFAULT_SEED),
        ..GeneratorConfig::default()
    };
    generate_with(width, height, &catalog, config)
}

/// Generate a grid with a custom catalog and configuration
///
/// # Errors
///
/// Returns an error for invalid dimensions or seed position, on
/// contradiction, or when the budget runs out
pub fn generate_with(
    width: usize,
    height: usize,
    catalog: &PatternCatalog,
    config: GeneratorConfig,
) -> Result<Grid> {
    Generator::new(width, height, catalog, config)?.run()
}
