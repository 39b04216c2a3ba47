//! Fixed game content: traceable glyphs and picture/word pairs.

mod glyphs;
pub use glyphs::*;

mod animals;
pub use animals::*;
