//! UI module tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::{
    app::App,
    handlers::{InputHandler, ShareHandler},
    types::{MenuView, SCREEN_BACKGROUND, SHARE_COLORS},
};
use crate::{config::GameConfig, feedback::TargetWord, matrix::Rgb, stats::StatsRecord};

const TODAY: i64 = 20_000;

/// Helper function to create a test app whose game today was won in three.
fn create_finished_app() -> App {
    let mut record = StatsRecord::default();
    for word in ["slate", "trace", "crane"] {
        record.push_guess(TODAY, word);
    }
    record.record_result(TODAY, 3, true, 6);

    let mut app = App::new(record, GameConfig::default(), Some(TargetWord::new("crane")));
    app.viewport = (120, 40);
    app
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[test]
    fn test_app_initialization() {
        let app = create_finished_app();

        assert_eq!(app.view, MenuView::Stats);
        assert!(app.status.is_none());
        assert!(app.share_pixels.is_none());
        assert_eq!(app.record.games_played, 1);
    }
}

#[cfg(test)]
mod input_handler_tests {
    use super::*;

    #[test]
    fn test_dismiss_keys_close_menu() {
        for code in [KeyCode::Enter, KeyCode::Esc, KeyCode::Char('q')] {
            let mut app = create_finished_app();
            assert!(InputHandler::new(&mut app).handle_key(key(code)));
        }
    }

    #[test]
    fn test_other_keys_keep_menu_open() {
        let mut app = create_finished_app();
        assert!(!InputHandler::new(&mut app).handle_key(key(KeyCode::Char('z'))));
        assert_eq!(app.view, MenuView::Stats);
    }

    #[test]
    fn test_share_key_opens_share_view() {
        let mut app = create_finished_app();
        assert!(!InputHandler::new(&mut app).handle_key(key(KeyCode::Char('s'))));

        assert_eq!(app.view, MenuView::Share);
        let pixels = app.share_pixels.as_ref().unwrap();
        assert_eq!(pixels.width(), 120);
        assert_eq!(pixels.height(), 78);
    }

    #[test]
    fn test_dismiss_key_closes_share_view() {
        let mut app = create_finished_app();
        ShareHandler::new(&mut app).open_share();
        assert_eq!(app.view, MenuView::Share);

        assert!(!InputHandler::new(&mut app).handle_key(key(KeyCode::Enter)));
        assert_eq!(app.view, MenuView::Stats);
        assert!(app.share_pixels.is_none());
    }

    #[test]
    fn test_other_keys_keep_share_view_open() {
        let mut app = create_finished_app();
        ShareHandler::new(&mut app).open_share();

        for code in [KeyCode::Char('s'), KeyCode::Char('z'), KeyCode::Up] {
            assert!(!InputHandler::new(&mut app).handle_key(key(code)));
            assert_eq!(app.view, MenuView::Share);
        }
        assert!(app.share_pixels.is_some());

        assert!(!InputHandler::new(&mut app).handle_key(key(KeyCode::Char('q'))));
        assert_eq!(app.view, MenuView::Stats);
    }

    #[test]
    fn test_top_left_click_opens_share() {
        let mut app = create_finished_app();
        assert!(!InputHandler::new(&mut app).handle_mouse(click(1, 0)));
        assert_eq!(app.view, MenuView::Share);

        // Any click dismisses it again.
        assert!(!InputHandler::new(&mut app).handle_mouse(click(60, 20)));
        assert_eq!(app.view, MenuView::Stats);
    }

    #[test]
    fn test_top_right_click_closes_menu() {
        let mut app = create_finished_app();
        assert!(InputHandler::new(&mut app).handle_mouse(click(119, 0)));
    }

    #[test]
    fn test_clicks_elsewhere_do_nothing() {
        let mut app = create_finished_app();
        assert!(!InputHandler::new(&mut app).handle_mouse(click(60, 0)));
        assert!(!InputHandler::new(&mut app).handle_mouse(click(1, 10)));
        assert_eq!(app.view, MenuView::Stats);
    }
}

#[cfg(test)]
mod share_handler_tests {
    use super::*;

    #[test]
    fn test_unfinished_game_is_not_shared() {
        let mut record = StatsRecord::default();
        record.push_guess(TODAY, "slate");
        let mut app = App::new(record, GameConfig::default(), Some(TargetWord::new("crane")));

        ShareHandler::new(&mut app).open_share();
        assert_eq!(app.view, MenuView::Stats);
        assert!(app.share_pixels.is_none());
        assert!(app.status.is_some());
    }

    #[test]
    fn test_missing_target_is_not_shared() {
        let mut app = create_finished_app();
        app.target = None;

        ShareHandler::new(&mut app).open_share();
        assert_eq!(app.view, MenuView::Stats);
        assert!(app.status.is_some());
    }

    #[test]
    fn test_share_code_uses_menu_palette() {
        let mut app = create_finished_app();
        ShareHandler::new(&mut app).open_share();

        let pixels = app.share_pixels.as_ref().unwrap();
        let all: Vec<Rgb> = (0..pixels.height())
            .flat_map(|y| (0..pixels.width()).filter_map(move |x| pixels.get(x, y)))
            .collect();
        assert!(all.contains(&SHARE_COLORS.background));
        assert!(all.contains(&SHARE_COLORS.foreground));
        assert!(!all.contains(&Rgb::WHITE));
        assert!(!all.contains(&Rgb::BLACK));

        // Corners sit outside the quiet zone on a wide terminal.
        assert_eq!(pixels.get(0, 0), Some(SCREEN_BACKGROUND));
    }

    #[test]
    fn test_tiny_terminal_refuses_share() {
        let mut app = create_finished_app();
        app.viewport = (20, 8);

        ShareHandler::new(&mut app).open_share();
        assert_eq!(app.view, MenuView::Stats);
        assert!(app.share_pixels.is_none());
        assert_eq!(
            app.status.as_deref(),
            Some("Terminal too small for the share code")
        );
    }
}
