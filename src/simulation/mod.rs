//! Simulation core: happiness evaluation, relocation, and the generation loop.

pub mod happiness;
pub mod relocation;
pub mod runner;

pub use happiness::{calculate_happiness, is_happy, jumpable_coordinates, unhappy_count};
pub use relocation::run_one_generation;
pub use runner::{run_simulation, RunOutcome, Simulation};
