//! The picture-to-word matching game.

mod board;
pub use board::*;

mod layout;
pub use layout::*;
