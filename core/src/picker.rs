use rand::prelude::*;
use smallvec::SmallVec;

use crate::*;

/// Strategy for choosing the machine opponent's next cell.
pub trait MovePicker {
    /// Picks an empty cell, or `None` when the board is full.
    fn pick(&mut self, board: &Board) -> Option<CellIndex>;
}

/// Uniformly random choice among the empty cells.
///
/// Intentionally the weakest policy there is: no lookahead, no blocking,
/// no preference for the center. The opponent is meant to be beatable.
#[derive(Clone, Debug)]
pub struct RandomPicker {
    rng: SmallRng,
}

impl RandomPicker {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl MovePicker for RandomPicker {
    fn pick(&mut self, board: &Board) -> Option<CellIndex> {
        let open: SmallVec<[CellIndex; CELL_COUNT]> = board.iter_empty().collect();
        open.choose(&mut self.rng).copied()
    }
}
