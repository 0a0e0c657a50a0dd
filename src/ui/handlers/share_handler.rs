//! Share screen state management.

use tracing::warn;

use crate::{
    matrix::{MatrixRenderer, PixelBuffer, QrEncoder, RenderOutcome},
    share::ShareComposer,
};

use super::super::{
    app::App,
    types::{MenuView, SCREEN_BACKGROUND, SHARE_COLORS, SHARE_STATUS_ROWS},
};

/// Helper struct for opening and closing the share code.
pub struct ShareHandler<'a> {
    app: &'a mut App,
}

impl<'a> ShareHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Compose today's result and draw it as a code sized to the terminal.
    /// Leaves the stats view in place, with a status note, if that fails.
    pub fn open_share(&mut self) {
        let Some(target) = self.app.target.as_ref() else {
            self.app.status = Some("Pass --target to share today's game".to_string());
            return;
        };

        let Some(message) = ShareComposer::new(&self.app.config).compose(&self.app.record, target)
        else {
            self.app.status = Some("Finish today's game to share it".to_string());
            return;
        };

        // Two pixels per cell, stacked with half-block glyphs.
        let (cols, rows) = self.app.viewport;
        let height = usize::from(rows.saturating_sub(SHARE_STATUS_ROWS)) * 2;
        let mut pixels = PixelBuffer::new(usize::from(cols), height, SCREEN_BACKGROUND);

        let renderer = MatrixRenderer::new(&QrEncoder).with_colors(SHARE_COLORS);
        match renderer.render(&message, &mut pixels) {
            Ok(RenderOutcome::Drawn(_)) => {
                self.app.share_pixels = Some(pixels);
                self.app.view = MenuView::Share;
                self.app.status = Some("Scan to share | Enter, Esc, q or click to close".to_string());
            }
            Ok(RenderOutcome::Refused) => {
                self.app.status = Some("Terminal too small for the share code".to_string());
            }
            Err(e) => {
                warn!("Share code failed: {:#}", e);
                self.app.status = Some(format!("Could not build share code: {}", e));
            }
        }
    }

    pub fn close_share(&mut self) {
        self.app.view = MenuView::Stats;
        self.app.share_pixels = None;
        self.app.status = None;
    }
}
