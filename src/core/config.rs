//! Simulation configuration with documented defaults

use crate::core::error::{Result, SimError};

/// Sentinel simulation count: keep stepping until no agent is unhappy.
pub const RUN_UNTIL_CONVERGED: u32 = 0;

/// Default minimum percentage of acceptable neighbors for an agent to stay put.
///
/// 30% is the classic Schelling value: mild individual preference that still
/// produces strong segregation at the grid level.
pub const DEFAULT_HAPPINESS_THRESHOLD: u8 = 30;

/// Configuration for one simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    /// Minimum percentage (0-100) of acceptable neighbors required for an
    /// occupied cell to be happy. A neighbor is acceptable when it is empty
    /// or the same color.
    pub happiness_threshold: u8,

    /// Number of generations to run. [`RUN_UNTIL_CONVERGED`] (zero) means
    /// step until the unhappy count reaches zero.
    pub simulation_count: u32,

    /// Upper bound on generations in convergence mode. Some threshold/density
    /// combinations never converge; the cap turns that into a reported
    /// non-converged outcome instead of an unbounded loop. `None` preserves
    /// the original unbounded behavior.
    pub max_generations: Option<u64>,

    /// Seed for the relocation shuffle. Two runs with the same seed, map and
    /// threshold produce identical grids.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            happiness_threshold: DEFAULT_HAPPINESS_THRESHOLD,
            simulation_count: RUN_UNTIL_CONVERGED,
            max_generations: None,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.happiness_threshold > 100 {
            return Err(SimError::InvalidConfig(format!(
                "happiness_threshold ({}) must be a percentage in 0..=100",
                self.happiness_threshold
            )));
        }

        if self.max_generations == Some(0) {
            return Err(SimError::InvalidConfig(
                "max_generations cap must be at least 1".into(),
            ));
        }

        Ok(())
    }
}
