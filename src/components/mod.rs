pub mod fallback;

mod game_card;
pub use game_card::*;

mod tracing_canvas;
pub use tracing_canvas::*;

mod glyph_selector;
pub use glyph_selector::*;

mod tracing_game;
pub use tracing_game::*;

mod match_board;
pub use match_board::*;
