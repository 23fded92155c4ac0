use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// Cumulative win counters, keyed by mark in the stored document.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTotals {
    #[serde(rename = "X")]
    pub x: WinCount,
    #[serde(rename = "O")]
    pub o: WinCount,
}

impl ScoreTotals {
    pub const fn wins_of(&self, mark: Mark) -> WinCount {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
        }
    }

    fn increment(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x += 1,
            Mark::O => self.o += 1,
        }
    }
}

/// One row of history: the cumulative totals right after a completed game.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    /// 1-based game sequence number.
    pub game: WinCount,
    pub player_x: WinCount,
    pub player_o: WinCount,
    pub winner: Mark,
}

/// The whole persisted leaderboard document: totals plus append-only history.
///
/// This struct serializes to exactly the document shape the score store
/// keeps, so persisting is a wholesale write of the value itself.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Leaderboard {
    pub scores: ScoreTotals,
    pub score_history: Vec<GameRecord>,
}

impl Leaderboard {
    /// Folds one finished game into the totals and appends its history row.
    ///
    /// Calling this at most once per game is the engine's job; the fold
    /// itself is unconditional.
    pub fn record_win(&mut self, winner: Mark) -> GameRecord {
        self.scores.increment(winner);
        let record = GameRecord {
            game: self.score_history.len() as WinCount + 1,
            player_x: self.scores.x,
            player_o: self.scores.o,
            winner,
        };
        self.score_history.push(record);
        log::info!("recorded game {}, winner {}", record.game, winner.as_str());
        record
    }

    /// Drops all totals and history. The next win starts over at game 1.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
