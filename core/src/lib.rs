#![no_std]

extern crate alloc;

use core::ops::Index;
use serde::{Deserialize, Serialize};

pub use analysis::*;
pub use engine::*;
pub use error::*;
pub use leaderboard::*;
pub use mark::*;
pub use pager::*;
pub use picker::*;
pub use types::*;

mod analysis;
mod engine;
mod error;
mod leaderboard;
mod mark;
mod pager;
mod picker;
mod types;

/// The 3x3 playing field, addressed by flat row-major [`CellIndex`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn validate_index(&self, index: CellIndex) -> Result<CellIndex> {
        if (index as usize) < CELL_COUNT {
            Ok(index)
        } else {
            Err(GameError::InvalidCell)
        }
    }

    /// Empty cell indices, in ascending order.
    pub fn iter_empty(&self) -> impl Iterator<Item = CellIndex> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index as CellIndex)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub(crate) fn place(&mut self, index: CellIndex, mark: Mark) {
        self.cells[index as usize] = Cell::Marked(mark);
    }
}

impl Index<CellIndex> for Board {
    type Output = Cell;

    fn index(&self, index: CellIndex) -> &Self::Output {
        &self.cells[index as usize]
    }
}

/// Outcome of offering a single move to the engine.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    NoChange,
    Placed,
    Won,
    Drawn,
}

impl MoveOutcome {
    /// Whether this outcome could have caused an update to the game
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            NoChange => false,
            Placed => true,
            Won => true,
            Drawn => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_board_is_all_empty() {
        let board = Board::default();

        assert!(!board.is_full());
        assert_eq!(board.iter_empty().count(), CELL_COUNT);
        assert!((0..CELL_COUNT as CellIndex).all(|index| board[index].is_empty()));
    }

    #[test]
    fn iter_empty_skips_placed_cells() {
        let mut board = Board::default();
        board.place(0, Mark::X);
        board.place(4, Mark::O);

        let empty: alloc::vec::Vec<_> = board.iter_empty().collect();

        assert_eq!(empty, [1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn validate_index_rejects_out_of_range() {
        let board = Board::default();

        assert_eq!(board.validate_index(8), Ok(8));
        assert_eq!(board.validate_index(9), Err(GameError::InvalidCell));
    }

    #[test]
    fn board_full_once_every_cell_is_marked() {
        let mut board = Board::default();
        for index in 0..CELL_COUNT as CellIndex {
            board.place(index, if index % 2 == 0 { Mark::X } else { Mark::O });
        }

        assert!(board.is_full());
        assert_eq!(board.iter_empty().count(), 0);
    }
}
