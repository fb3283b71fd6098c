//! One synchronous relocation round.
//!
//! Every unhappy agent leaves its cell and lands on a slot drawn from the
//! shuffled set of jumpable coordinates (unhappy origins plus empty cells).
//! Because that set contains exactly one slot per unhappy agent plus the
//! empties, every mover gets a destination and no cell is written twice.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{CellState, Grid};
use crate::simulation::happiness::{is_happy, jumpable_coordinates};

/// Fill `next` with the post-relocation state of `world`. All happiness and
/// mobility reads go against `world`, so the whole generation observes a
/// single pre-step snapshot.
pub(crate) fn step_into<R: Rng>(world: &Grid, next: &mut Grid, threshold: u8, rng: &mut R) {
    debug_assert_eq!(world.width(), next.width());
    debug_assert_eq!(world.height(), next.height());

    let mut slots = jumpable_coordinates(world, threshold);
    slots.shuffle(rng);

    next.fill(CellState::Empty);

    let mut index = 0;
    for coord in world.coords() {
        let cell = world.get(coord);
        if !cell.is_occupied() {
            continue;
        }
        if is_happy(world, coord, threshold) {
            next.set(coord, cell);
        } else {
            next.set(slots[index], cell);
            index += 1;
        }
    }
}

/// Apply one generation and return the new snapshot
pub fn run_one_generation<R: Rng>(world: &Grid, threshold: u8, rng: &mut R) -> Grid {
    let mut next = Grid::new(world.width(), world.height());
    step_into(world, &mut next, threshold, rng);
    next
}
