pub mod buffer;
pub mod encoder;
pub mod renderer;

pub use buffer::{PixelBuffer, Rgb};
pub use encoder::{ErrorCorrection, MatrixEncoder, ModuleGrid, QrEncoder};
pub use renderer::{MatrixColors, MatrixRenderer, Placement, QUIET_ZONE, RenderOutcome, blit};
