mod composer;
mod glyphs;

pub use composer::ShareComposer;
pub use glyphs::GlyphTable;
