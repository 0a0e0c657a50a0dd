use crate::matrix::{MatrixColors, Rgb};

/// Which screen the stats menu is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuView {
    Stats,
    Share,
}

/// Terminal rows reserved below the share code for the status line.
pub const SHARE_STATUS_ROWS: u16 = 1;

/// Bars never shrink below this many cells, so empty buckets stay visible.
pub const MIN_BAR_WIDTH: u16 = 1;

/// Terminal background behind the code's quiet zone.
pub const SCREEN_BACKGROUND: Rgb = Rgb::new(18, 18, 19);

/// Dark modules on an off-white field, matching the dashboard palette.
pub const SHARE_COLORS: MatrixColors = MatrixColors {
    background: Rgb::new(248, 248, 248),
    foreground: SCREEN_BACKGROUND,
};
