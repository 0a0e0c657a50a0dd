use std::io::Stdout;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::{
    config::GameConfig,
    feedback::TargetWord,
    matrix::PixelBuffer,
    stats::StatsRecord,
};

use super::types::MenuView;

/// Stats menu state.
pub struct App {
    pub(in crate::ui) record: StatsRecord,
    pub(in crate::ui) config: GameConfig,
    pub(in crate::ui) target: Option<TargetWord>,
    pub(in crate::ui) view: MenuView,
    pub(in crate::ui) status: Option<String>,
    pub(in crate::ui) share_pixels: Option<PixelBuffer>,
    /// Terminal size in cells, refreshed every frame.
    pub(in crate::ui) viewport: (u16, u16),
}

impl App {
    pub fn new(record: StatsRecord, config: GameConfig, target: Option<TargetWord>) -> Self {
        Self {
            record,
            config,
            target,
            view: MenuView::Stats,
            status: None,
            share_pixels: None,
            viewport: (80, 24),
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("Stats menu opened");

        loop {
            let size = terminal.size()?;
            self.viewport = (size.width, size.height);

            terminal.draw(|f| self.draw(f))?;

            let exit = match event::read()? {
                Event::Key(key) => super::handlers::InputHandler::new(self).handle_key(key),
                Event::Mouse(mouse) => super::handlers::InputHandler::new(self).handle_mouse(mouse),
                _ => false,
            };
            if exit {
                info!("Stats menu closed");
                return Ok(());
            }
        }
    }
}
