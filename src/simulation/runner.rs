//! Generation loop: fixed-count stepping or run-to-convergence.

use rand::Rng;

use crate::core::config::RUN_UNTIL_CONVERGED;
use crate::grid::Grid;
use crate::simulation::happiness::unhappy_count;
use crate::simulation::relocation::step_into;

/// Double-buffered simulation state: the current snapshot plus a scratch grid
/// reused for every step, swapped instead of reallocated.
pub struct Simulation<R: Rng> {
    world: Grid,
    scratch: Grid,
    threshold: u8,
    rng: R,
    generation: u64,
}

impl<R: Rng> Simulation<R> {
    pub fn new(world: Grid, threshold: u8, rng: R) -> Self {
        let scratch = Grid::new(world.width(), world.height());
        Self {
            world,
            scratch,
            threshold,
            rng,
            generation: 0,
        }
    }

    pub fn world(&self) -> &Grid {
        &self.world
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn unhappy_count(&self) -> usize {
        unhappy_count(&self.world, self.threshold)
    }

    /// Advance one generation. Every read uses the pre-step snapshot; the new
    /// state becomes visible only at the swap.
    pub fn step(&mut self) {
        step_into(&self.world, &mut self.scratch, self.threshold, &mut self.rng);
        std::mem::swap(&mut self.world, &mut self.scratch);
        self.generation += 1;
    }

    pub fn into_world(self) -> Grid {
        self.world
    }
}

/// Result of a full simulation run
#[derive(Debug)]
pub struct RunOutcome {
    pub world: Grid,
    pub generations: u64,
    pub converged: bool,
}

/// Run the simulation to completion.
///
/// `simulation_count` zero means step until no agent is unhappy, bounded by
/// `max_generations` when given (the original model loops unboundedly; the cap
/// reports a non-converged outcome instead). A positive count runs exactly
/// that many generations regardless of convergence.
pub fn run_simulation<R: Rng>(
    world: Grid,
    simulation_count: u32,
    threshold: u8,
    rng: R,
    max_generations: Option<u64>,
) -> RunOutcome {
    let mut sim = Simulation::new(world, threshold, rng);

    if simulation_count == RUN_UNTIL_CONVERGED {
        loop {
            let unhappy = sim.unhappy_count();
            if unhappy == 0 {
                break;
            }
            if let Some(cap) = max_generations {
                if sim.generation() >= cap {
                    tracing::warn!(
                        generations = sim.generation(),
                        unhappy,
                        "generation cap reached before convergence"
                    );
                    break;
                }
            }
            tracing::debug!(generation = sim.generation(), unhappy, "stepping");
            sim.step();
        }
    } else {
        for _ in 0..simulation_count {
            sim.step();
        }
    }

    let converged = sim.unhappy_count() == 0;
    tracing::info!(
        generations = sim.generation(),
        converged,
        "simulation finished"
    );

    RunOutcome {
        generations: sim.generation(),
        converged,
        world: sim.into_world(),
    }
}
