//! The persisted statistics record and the game-side mutations on it.

use serde::Serialize;
use tracing::info;

use crate::{day::DayIndex, feedback::TileScorer};

/// Per-player statistics carried across sessions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsRecord {
    /// One entry per finished game. Losses are stored as `max_guesses + 1`.
    pub guess_counts: Vec<u32>,
    /// Raw guesses of today's game, oldest first.
    pub board_state: Vec<String>,
    pub streak: u32,
    pub max_streak: u32,
    pub games_played: u32,
    pub last_played: DayIndex,
    pub last_won: DayIndex,
}

impl StatsRecord {
    /// Record a guess for today's game.
    pub fn push_guess(&mut self, today: DayIndex, guess: impl Into<String>) {
        if self.last_played != today {
            self.board_state.clear();
        }
        self.board_state.push(guess.into());
        self.last_played = today;
    }

    /// Record a finished game.
    pub fn record_result(&mut self, today: DayIndex, guesses_used: u32, won: bool, max_guesses: u32) {
        if won {
            // A win the day after the previous one extends the streak.
            self.streak = if self.last_won == today - 1 {
                self.streak.saturating_add(1)
            } else if self.last_won == today && self.streak > 0 {
                self.streak
            } else {
                1
            };
            self.max_streak = self.max_streak.max(self.streak);
            self.last_won = today;
            self.guess_counts.push(guesses_used);
        } else {
            self.streak = 0;
            self.guess_counts.push(max_guesses.saturating_add(1));
        }

        self.games_played = self.games_played.saturating_add(1);
        self.last_played = today;

        info!(
            "Game recorded: won={} guesses={} streak={} games_played={}",
            won, guesses_used, self.streak, self.games_played
        );
    }

    /// Whether the most recent finished game was a win.
    pub fn last_game_won(&self, max_guesses: u32) -> bool {
        self.guess_counts
            .last()
            .is_some_and(|&count| count <= max_guesses)
    }

    /// Today's board is finished: solved, or every allowed guess used.
    pub fn is_game_over(&self, scorer: &dyn TileScorer, max_guesses: u32) -> bool {
        match self.board_state.last() {
            None => false,
            Some(last) => self.board_state.len() >= max_guesses as usize || scorer.is_solved(last),
        }
    }

    /// The board was finished with a correct final guess.
    pub fn is_solved(&self, scorer: &dyn TileScorer) -> bool {
        self.board_state
            .last()
            .is_some_and(|last| scorer.is_solved(last))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::TargetWord;

    #[test]
    fn test_default_record_is_empty() {
        let record = StatsRecord::default();
        assert!(record.guess_counts.is_empty());
        assert!(record.board_state.is_empty());
        assert_eq!(record.streak, 0);
        assert_eq!(record.max_streak, 0);
        assert_eq!(record.games_played, 0);
        assert_eq!(record.last_played, 0);
        assert_eq!(record.last_won, 0);
    }

    #[test]
    fn test_push_guess_sets_last_played() {
        let mut record = StatsRecord::default();
        record.push_guess(100, "crane");
        record.push_guess(100, "slate");
        assert_eq!(record.board_state, vec!["crane", "slate"]);
        assert_eq!(record.last_played, 100);
    }

    #[test]
    fn test_push_guess_on_new_day_discards_old_board() {
        let mut record = StatsRecord::default();
        record.push_guess(100, "crane");
        record.push_guess(101, "slate");
        assert_eq!(record.board_state, vec!["slate"]);
    }

    #[test]
    fn test_consecutive_wins_extend_streak() {
        let mut record = StatsRecord::default();
        record.record_result(100, 3, true, 6);
        record.record_result(101, 4, true, 6);
        record.record_result(102, 2, true, 6);
        assert_eq!(record.streak, 3);
        assert_eq!(record.max_streak, 3);
        assert_eq!(record.games_played, 3);
        assert_eq!(record.guess_counts, vec![3, 4, 2]);
        assert_eq!(record.last_won, 102);
    }

    #[test]
    fn test_gap_restarts_streak() {
        let mut record = StatsRecord::default();
        record.record_result(100, 3, true, 6);
        record.record_result(101, 3, true, 6);
        record.record_result(105, 3, true, 6);
        assert_eq!(record.streak, 1);
        assert_eq!(record.max_streak, 2);
    }

    #[test]
    fn test_loss_resets_streak_and_stores_overflow_count() {
        let mut record = StatsRecord::default();
        record.record_result(100, 3, true, 6);
        record.record_result(101, 6, false, 6);
        assert_eq!(record.streak, 0);
        assert_eq!(record.max_streak, 1);
        assert_eq!(record.guess_counts, vec![3, 7]);
        assert_eq!(record.last_won, 100);
        assert_eq!(record.last_played, 101);
        assert!(!record.last_game_won(6));
    }

    #[test]
    fn test_is_game_over() {
        let target = TargetWord::new("crane");
        let mut record = StatsRecord::default();
        assert!(!record.is_game_over(&target, 6));

        record.push_guess(100, "slate");
        assert!(!record.is_game_over(&target, 6));

        record.push_guess(100, "crane");
        assert!(record.is_game_over(&target, 6));
        assert!(record.is_solved(&target));
    }

    #[test]
    fn test_is_game_over_when_out_of_guesses() {
        let target = TargetWord::new("crane");
        let mut record = StatsRecord::default();
        for word in ["slate", "pious", "dumpy", "wight", "flock", "jumbo"] {
            record.push_guess(100, word);
        }
        assert!(record.is_game_over(&target, 6));
        assert!(!record.is_solved(&target));
    }

    #[test]
    fn test_counters_saturate_instead_of_overflowing() {
        let mut record = StatsRecord {
            streak: u32::MAX,
            max_streak: u32::MAX,
            games_played: u32::MAX,
            last_played: 99,
            last_won: 99,
            ..StatsRecord::default()
        };
        record.record_result(100, 3, true, 6);
        assert_eq!(record.streak, u32::MAX);
        assert_eq!(record.max_streak, u32::MAX);
        assert_eq!(record.games_played, u32::MAX);

        record.record_result(101, 4, false, u32::MAX);
        assert_eq!(record.guess_counts, vec![3, u32::MAX]);
        assert_eq!(record.streak, 0);
    }
}
