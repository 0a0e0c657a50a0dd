//! Share code rendering.

use ratatui::{Frame, buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

use crate::{
    matrix::{PixelBuffer, Rgb},
    ui::app::App,
};

impl App {
    pub(in crate::ui) fn draw_share_view(&self, f: &mut Frame, area: Rect) {
        if let Some(pixels) = &self.share_pixels {
            f.render_widget(HalfBlockImage { pixels }, area);
        }
    }
}

/// Shows a pixel buffer two rows per cell: the upper half block takes the top
/// pixel as foreground and the bottom pixel as background.
struct HalfBlockImage<'a> {
    pixels: &'a PixelBuffer,
}

impl Widget for HalfBlockImage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for row in 0..area.height {
            for col in 0..area.width {
                let x = usize::from(col);
                let y = usize::from(row) * 2;
                let (Some(top), Some(bottom)) = (self.pixels.get(x, y), self.pixels.get(x, y + 1))
                else {
                    continue;
                };

                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_char('▀').set_fg(color(top)).set_bg(color(bottom));
                }
            }
        }
    }
}

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
