use serde::{Deserialize, Serialize};

use crate::feedback::Feedback;

/// Text drawn for each tile state in a shared grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphTable {
    pub correct: String,
    pub present: String,
    pub absent: String,
}

impl Default for GlyphTable {
    fn default() -> Self {
        Self {
            correct: "🟩".to_string(),
            present: "🟨".to_string(),
            absent: "⬛".to_string(),
        }
    }
}

impl GlyphTable {
    pub fn glyph(&self, feedback: Feedback) -> &str {
        match feedback {
            Feedback::Green => &self.correct,
            Feedback::Yellow => &self.present,
            Feedback::Gray => &self.absent,
        }
    }

    /// Longest glyph in bytes.
    pub fn max_glyph_len(&self) -> usize {
        self.correct
            .len()
            .max(self.present.len())
            .max(self.absent.len())
    }
}
