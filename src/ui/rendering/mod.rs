mod share_view;
mod stats_view;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::ui::{app::App, types::MenuView};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(f.area());

        match self.view {
            MenuView::Stats => self.draw_stats_view(f, layout[0]),
            MenuView::Share => self.draw_share_view(f, layout[0]),
        }

        self.draw_status(f, layout[1]);
    }

    fn draw_status(&self, f: &mut Frame, area: Rect) {
        let (text, color) = match &self.status {
            Some(status) => (status.as_str(), Color::Yellow),
            None => ("S: Share | Enter/Esc/Q: Close", Color::DarkGray),
        };

        f.render_widget(Paragraph::new(text).style(Style::default().fg(color)), area);
    }
}
