use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Drawn
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchState {
    InProgress,
    Won,
    Drawn,
}

impl MatchState {
    /// Indicates the game has ended and no moves can be made anymore
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Drawn)
    }
}

impl Default for MatchState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// A single game from the first move to a win or a draw.
///
/// Restart is a fresh engine; a finished engine never accepts another move,
/// which is what makes the terminal transition fire at most once per game.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchEngine {
    board: Board,
    next_mark: Mark,
    state: MatchState,
    winning_line: Option<WinLine>,
}

impl MatchEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The mark that moves next. Meaningless once the game is finished.
    pub fn next_mark(&self) -> Mark {
        self.next_mark
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    pub fn winner(&self) -> Option<Mark> {
        self.winning_line.map(|line| line.mark)
    }

    /// Writes the next mark into `cell` and flips the turn.
    ///
    /// An occupied cell is a quiet no-op; a finished game rejects the move.
    /// Returns `Won` or `Drawn` exactly once, on the move that ends the game.
    pub fn play(&mut self, cell: CellIndex) -> Result<MoveOutcome> {
        let cell = self.board.validate_index(cell)?;
        self.check_in_progress()?;

        if !self.board[cell].is_empty() {
            return Ok(MoveOutcome::NoChange);
        }

        let mark = self.next_mark;
        self.board.place(cell, mark);
        self.next_mark = mark.opponent();

        if let Some(line) = winning_line(&self.board) {
            self.winning_line = Some(line);
            self.state = MatchState::Won;
            log::debug!("{} wins on {:?}", line.mark.as_str(), line.cells);
            return Ok(MoveOutcome::Won);
        }

        if self.board.is_full() {
            self.state = MatchState::Drawn;
            log::debug!("board full with no line, draw");
            return Ok(MoveOutcome::Drawn);
        }

        Ok(MoveOutcome::Placed)
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(engine: &mut MatchEngine, cells: &[CellIndex]) -> MoveOutcome {
        let mut last = MoveOutcome::NoChange;
        for &cell in cells {
            last = engine.play(cell).unwrap();
        }
        last
    }

    #[test]
    fn turns_alternate_starting_with_x() {
        let mut engine = MatchEngine::new();
        assert_eq!(engine.next_mark(), Mark::X);

        assert_eq!(engine.play(4).unwrap(), MoveOutcome::Placed);
        assert_eq!(engine.next_mark(), Mark::O);

        assert_eq!(engine.play(0).unwrap(), MoveOutcome::Placed);
        assert_eq!(engine.next_mark(), Mark::X);

        assert_eq!(engine.board()[4], Cell::Marked(Mark::X));
        assert_eq!(engine.board()[0], Cell::Marked(Mark::O));
    }

    #[test]
    fn occupied_cell_is_a_quiet_no_op() {
        let mut engine = MatchEngine::new();
        engine.play(4).unwrap();

        let outcome = engine.play(4).unwrap();

        assert_eq!(outcome, MoveOutcome::NoChange);
        assert!(!outcome.has_update());
        // the rejected move must not burn O's turn
        assert_eq!(engine.next_mark(), Mark::O);
        assert_eq!(engine.board()[4], Cell::Marked(Mark::X));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut engine = MatchEngine::new();

        assert_eq!(engine.play(9), Err(GameError::InvalidCell));
        assert_eq!(engine.next_mark(), Mark::X);
    }

    #[test]
    fn left_column_win_reports_line_and_finishes() {
        let mut engine = MatchEngine::new();

        // X@0 O@1 X@3 O@2 X@6
        let last = play_all(&mut engine, &[0, 1, 3, 2, 6]);

        assert_eq!(last, MoveOutcome::Won);
        assert_eq!(engine.state(), MatchState::Won);
        assert_eq!(engine.winner(), Some(Mark::X));
        assert_eq!(
            engine.winning_line(),
            Some(WinLine {
                mark: Mark::X,
                cells: [0, 3, 6],
            })
        );
    }

    #[test]
    fn finished_game_rejects_further_moves() {
        let mut engine = MatchEngine::new();
        play_all(&mut engine, &[0, 1, 3, 2, 6]);

        assert_eq!(engine.play(8), Err(GameError::AlreadyEnded));
        assert_eq!(engine.board()[8], Cell::Empty);
        assert_eq!(engine.state(), MatchState::Won);
    }

    #[test]
    fn filling_the_board_without_a_line_is_a_draw() {
        let mut engine = MatchEngine::new();

        // X O X / X O O / O X X, by alternating turns
        let last = play_all(&mut engine, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

        assert_eq!(last, MoveOutcome::Drawn);
        assert_eq!(engine.state(), MatchState::Drawn);
        assert!(engine.is_finished());
        assert_eq!(engine.winner(), None);
    }

    #[test]
    fn won_on_last_cell_beats_draw() {
        let mut engine = MatchEngine::new();

        // X O X / O X O / O X X: X completes the diagonal on the final cell
        let last = play_all(&mut engine, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);

        assert_eq!(last, MoveOutcome::Won);
        assert_eq!(engine.winner(), Some(Mark::X));
    }
}
