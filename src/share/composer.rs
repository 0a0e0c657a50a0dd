//! Builds the shareable text for a finished game.

use tracing::{debug, warn};

use crate::{config::GameConfig, feedback::TileScorer, stats::StatsRecord};

/// Composes `"<name> <day> <result>/<max><*>"`, a blank line, then one glyph
/// row per guess.
pub struct ShareComposer<'a> {
    config: &'a GameConfig,
}

impl<'a> ShareComposer<'a> {
    pub fn new(config: &'a GameConfig) -> Self {
        Self { config }
    }

    /// The share message for today's board, or `None` if the game is not over
    /// or the board does not fit the configured limits.
    pub fn compose(&self, record: &StatsRecord, scorer: &dyn TileScorer) -> Option<String> {
        let max_guesses = self.config.max_guesses;

        if !record.is_game_over(scorer, max_guesses) {
            debug!("Share refused: game not finished");
            return None;
        }
        if record.board_state.len() > max_guesses as usize {
            warn!(
                "Share refused: board has {} rows, limit is {}",
                record.board_state.len(),
                max_guesses
            );
            return None;
        }

        let header = self.header(record, scorer);
        let capacity = self.capacity(header.len(), scorer.word_len());
        let mut message = String::with_capacity(capacity);
        message.push_str(&header);

        for guess in &record.board_state {
            let tiles = scorer.score(guess);
            if tiles.len() > scorer.word_len() {
                warn!("Share refused: guess {:?} is longer than the answer", guess);
                return None;
            }
            for tile in tiles {
                message.push_str(self.config.glyphs.glyph(tile));
            }
            message.push('\n');
        }

        debug_assert!(message.len() <= capacity);
        Some(message)
    }

    fn header(&self, record: &StatsRecord, scorer: &dyn TileScorer) -> String {
        let result = if record.is_solved(scorer) {
            record.board_state.len().to_string()
        } else {
            "X".to_string()
        };

        format!(
            "{} {} {}/{}{}\n\n",
            self.config.share_name,
            record.last_played - self.config.first_day,
            result,
            self.config.max_guesses,
            if self.config.hard_mode { "*" } else { "" }
        )
    }

    /// Upper bound on the message size for a full board.
    fn capacity(&self, header_len: usize, word_len: usize) -> usize {
        let row = word_len * self.config.glyphs.max_glyph_len() + 1;
        header_len + row * self.config.max_guesses as usize
    }
}
