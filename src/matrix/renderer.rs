//! Draws a matrix code into a [`PixelBuffer`].

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::{
    buffer::{PixelBuffer, Rgb},
    encoder::{ErrorCorrection, MatrixEncoder, ModuleGrid},
};

/// Background pixels kept clear on every side of the symbol.
pub const QUIET_ZONE: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatrixColors {
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Default for MatrixColors {
    fn default() -> Self {
        Self {
            background: Rgb::WHITE,
            foreground: Rgb::BLACK,
        }
    }
}

/// Where the symbol landed in the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Pixels per module edge.
    pub scale: usize,
    pub left: usize,
    pub top: usize,
    /// Symbol edge length in pixels.
    pub side: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn(Placement),
    /// The symbol cannot fit even at one pixel per module; the buffer is untouched.
    Refused,
}

pub struct MatrixRenderer<'a> {
    encoder: &'a dyn MatrixEncoder,
    colors: MatrixColors,
}

impl<'a> MatrixRenderer<'a> {
    pub fn new(encoder: &'a dyn MatrixEncoder) -> Self {
        Self {
            encoder,
            colors: MatrixColors::default(),
        }
    }

    pub fn with_colors(mut self, colors: MatrixColors) -> Self {
        self.colors = colors;
        self
    }

    /// Encode `payload` at the lowest correction level and draw it centered in
    /// `buffer`.
    pub fn render(&self, payload: &str, buffer: &mut PixelBuffer) -> Result<RenderOutcome> {
        let grid = self
            .encoder
            .encode(payload, ErrorCorrection::Low)
            .context("Failed to encode share message")?;

        Ok(blit(&grid, buffer, self.colors))
    }
}

/// Draw `grid` scaled by a whole number and centered, with a quiet zone.
///
/// Each module row is first painted as a full background band, then its set
/// modules are painted over in the foreground color.
pub fn blit(grid: &ModuleGrid, buffer: &mut PixelBuffer, colors: MatrixColors) -> RenderOutcome {
    let modules = grid.side();
    if modules == 0 {
        return RenderOutcome::Refused;
    }

    let scale = buffer.height().min(buffer.width()) / modules;
    if scale == 0 {
        warn!(
            "Matrix code of {} modules does not fit a {}x{} buffer",
            modules,
            buffer.width(),
            buffer.height()
        );
        return RenderOutcome::Refused;
    }

    let side = modules * scale;
    let left = (buffer.width() - side) / 2;
    let top = (buffer.height() - side) / 2;
    debug!(
        "Drawing {} modules at scale {} from ({}, {})",
        modules, scale, left, top
    );

    let band_x = left as isize - QUIET_ZONE as isize;
    let band_len = side + 2 * QUIET_ZONE;

    for y in 0..modules {
        let row_top = (top + y * scale) as isize;

        for i in 0..scale as isize {
            buffer.fill_span(band_x, row_top + i, band_len, colors.background);
        }

        for x in (0..modules).filter(|&x| grid.is_set(x, y)) {
            let px = (left + x * scale) as isize;
            for i in 0..scale as isize {
                buffer.fill_span(px, row_top + i, scale, colors.foreground);
            }
        }
    }

    for i in 0..QUIET_ZONE as isize {
        buffer.fill_span(band_x, top as isize - 1 - i, band_len, colors.background);
        buffer.fill_span(band_x, (top + side) as isize + i, band_len, colors.background);
    }

    RenderOutcome::Drawn(Placement {
        scale,
        left,
        top,
        side,
    })
}
