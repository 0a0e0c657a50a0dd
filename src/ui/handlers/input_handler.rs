//! Keyboard and pointer input for the stats menu.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};

use super::super::{app::App, types::MenuView};
use super::ShareHandler;

/// Cells from either top corner that count as the share / close buttons.
const CORNER_HIT: u16 = 3;

/// Helper struct for dispatching menu input.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Returns `true` when the menu should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind != KeyEventKind::Press {
            return false;
        }

        let dismiss = matches!(
            key.code,
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q' | 'Q')
        );

        if self.app.view == MenuView::Share {
            if dismiss {
                ShareHandler::new(self.app).close_share();
            }
            return false;
        }

        if dismiss {
            return true;
        }
        if let KeyCode::Char('s' | 'S') = key.code {
            ShareHandler::new(self.app).open_share();
        }
        false
    }

    /// Returns `true` when the menu should close.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }

        if self.app.view == MenuView::Share {
            ShareHandler::new(self.app).close_share();
            return false;
        }

        // Only the title row has buttons.
        if mouse.row >= 2 {
            return false;
        }

        let width = self.app.viewport.0;
        if mouse.column < CORNER_HIT {
            ShareHandler::new(self.app).open_share();
        } else if mouse.column >= width.saturating_sub(CORNER_HIT) {
            return true;
        }
        false
    }
}
