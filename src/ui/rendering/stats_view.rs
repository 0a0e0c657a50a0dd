//! Statistics dashboard rendering.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    stats::{distribution, win_rate},
    ui::{App, types::MIN_BAR_WIDTH},
};

/// Cells taken by the guess label and the count beside each bar.
const BAR_LABEL_WIDTH: u16 = 12;

impl App {
    pub(in crate::ui) fn draw_stats_view(&self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Overall stats
                Constraint::Min(3),    // Guess distribution
            ])
            .split(area);

        self.draw_overall_stats(f, chunks[0]);
        self.draw_guess_distribution(f, chunks[1]);
    }

    fn draw_overall_stats(&self, f: &mut Frame, area: Rect) {
        let record = &self.record;
        let win_rate_str = win_rate(record, self.config.max_guesses)
            .map_or_else(|| "--".to_string(), |rate| format!("{}%", rate));

        let value = |text: String, color: Color| {
            Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        };

        let lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::raw("  Played: "),
                value(record.games_played.to_string(), Color::Cyan),
                Span::raw("  |  Win %: "),
                value(win_rate_str, Color::Green),
                Span::raw("  |  Current Streak: "),
                value(
                    record.streak.to_string(),
                    if record.streak > 0 { Color::Green } else { Color::Gray },
                ),
                Span::raw("  |  Max Streak: "),
                value(record.max_streak.to_string(), Color::Yellow),
            ]),
            Line::from(""),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title("[S] Share")
            .title_top(Line::from("[X]").right_aligned());

        f.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_guess_distribution(&self, f: &mut Frame, area: Rect) {
        let max_width = area
            .width
            .saturating_sub(BAR_LABEL_WIDTH)
            .max(MIN_BAR_WIDTH);
        let bars = distribution(
            &self.record,
            self.config.max_guesses,
            MIN_BAR_WIDTH,
            max_width,
        );

        let mut lines = vec![Line::from("")];

        for bar in bars {
            let color = if bar.highlighted {
                Color::Green
            } else {
                Color::DarkGray
            };

            lines.push(Line::from(vec![
                Span::raw(format!("  {} ", bar.guesses)),
                Span::styled(
                    "█".repeat(usize::from(bar.width)),
                    Style::default().fg(color),
                ),
                Span::raw(format!(" {}", bar.count)),
            ]));
        }

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title("Guess Distribution"),
        );

        f.render_widget(paragraph, area);
    }
}
