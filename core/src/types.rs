/// Flat index into the board, row-major: `0..9`, top-left to bottom-right.
pub type CellIndex = u8;

/// Cumulative win counter type used by the leaderboard.
pub type WinCount = u32;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;
