use serde::{Deserialize, Serialize};

use crate::*;

/// The 8 index triples that decide a game: rows top to bottom, columns left
/// to right, then the two diagonals. Detection scans in exactly this order.
pub const WIN_LINES: [[CellIndex; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A completed line and the mark that owns it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    pub mark: Mark,
    pub cells: [CellIndex; 3],
}

impl WinLine {
    pub fn contains(&self, index: CellIndex) -> bool {
        self.cells.contains(&index)
    }
}

/// Returns the first completed line in [`WIN_LINES`] order, if any.
///
/// A full board with no completed line also returns `None`; draw detection
/// is the engine's job.
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WIN_LINES.iter().find_map(|&cells| {
        let [a, b, c] = cells;
        let mark = board[a].mark()?;
        (board[b] == Cell::Marked(mark) && board[c] == Cell::Marked(mark))
            .then_some(WinLine { mark, cells })
    })
}
