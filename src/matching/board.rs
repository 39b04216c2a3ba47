use crate::content::MatchItem;
use csscolorparser::Color;
use glam::Vec2;

/// A line drawn from a picture to a word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Connection {
	pub image_id: &'static str,
	pub text_id: &'static str,
}

impl Connection {
	pub fn is_correct(&self) -> bool {
		self.image_id == self.text_id
	}
}

/// A connection being dragged out of a picture's anchor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Drag {
	pub image_id: &'static str,
	pub from: Vec2,
	pub cursor: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display)]
#[display("{correct}/{total}")]
pub struct MatchScore {
	pub correct: usize,
	pub total: usize,
}

impl MatchScore {
	pub fn is_perfect(&self) -> bool {
		self.correct == self.total
	}

	pub fn message(&self) -> String {
		if self.is_perfect() {
			"🎉 Sempurna! Kamu berhasil mencocokkan semua gambar dengan benar!".to_owned()
		} else {
			format!(
				"Kamu benar {} dari {}. Ayo coba lagi!",
				self.correct, self.total
			)
		}
	}
}

const PALETTE: [[u8; 3]; 4] = [
	[0xef, 0x44, 0x44],
	[0xf5, 0x9e, 0x0b],
	[0x8b, 0x5c, 0xf6],
	[0x06, 0xb6, 0xd4],
];
const FALLBACK_COLOR: [u8; 3] = [0x60, 0xa5, 0xfa];

/// State of the picture-to-word matching game.
///
/// Each picture and each word takes part in at most one connection.
#[derive(Clone, Debug, PartialEq)]
pub struct MatchBoard {
	items: &'static [MatchItem],
	text_order: Vec<usize>,
	connections: Vec<Connection>,
	drag: Option<Drag>,
}

impl MatchBoard {
	/// A board with the words shuffled.
	pub fn new(items: &'static [MatchItem]) -> Self {
		let mut order: Vec<usize> = (0..items.len()).collect();
		fastrand::shuffle(&mut order);
		Self::with_text_order(items, order)
	}

	pub fn with_text_order(items: &'static [MatchItem], text_order: Vec<usize>) -> Self {
		debug_assert_eq!(text_order.len(), items.len());
		Self {
			items,
			text_order,
			connections: Vec::new(),
			drag: None,
		}
	}

	/// Pictures, in their fixed order.
	pub fn images(&self) -> impl Iterator<Item = &'static MatchItem> {
		self.items.iter()
	}

	/// Words, in shuffled order.
	pub fn texts(&self) -> impl Iterator<Item = &'static MatchItem> + '_ {
		let items = self.items;
		self.text_order.iter().map(move |&i| &items[i])
	}

	pub fn image_index(&self, image_id: &str) -> Option<usize> {
		self.items.iter().position(|item| item.id == image_id)
	}

	pub fn text_index(&self, text_id: &str) -> Option<usize> {
		self.texts().position(|item| item.id == text_id)
	}

	pub fn connections(&self) -> &[Connection] {
		&self.connections
	}

	pub fn drag(&self) -> Option<&Drag> {
		self.drag.as_ref()
	}

	pub fn image_color(&self, image_id: &str) -> Color {
		let [r, g, b] = self
			.image_index(image_id)
			.and_then(|i| PALETTE.get(i))
			.copied()
			.unwrap_or(FALLBACK_COLOR);
		Color::from_rgba8(r, g, b, 0xff)
	}

	/// Starts dragging from a picture, dropping any connection it already had.
	pub fn begin_drag(mut self, image_id: &str, anchor: Vec2) -> Self {
		let Some(item) = self.items.iter().find(|item| item.id == image_id) else {
			tracing::warn!(image_id, "drag from unknown picture");
			return self;
		};
		self.connections.retain(|c| c.image_id != item.id);
		tracing::trace!(image_id, ?anchor, "begin drag");
		self.drag = Some(Drag {
			image_id: item.id,
			from: anchor,
			cursor: anchor,
		});
		self
	}

	pub fn drag_to(mut self, cursor: Vec2) -> Self {
		if let Some(drag) = &mut self.drag {
			drag.cursor = cursor;
		}
		self
	}

	/// Finishes the drag. Dropping on a word replaces whatever that word was connected to;
	/// dropping anywhere else just ends the drag.
	pub fn end_drag(mut self, text_id: Option<&str>) -> Self {
		let Some(drag) = self.drag.take() else {
			return self;
		};
		let target = text_id.and_then(|id| self.items.iter().find(|item| item.id == id));
		if let Some(target) = target {
			self.connections.retain(|c| c.text_id != target.id);
			tracing::debug!(image_id = drag.image_id, text_id = target.id, "connect");
			self.connections.push(Connection {
				image_id: drag.image_id,
				text_id: target.id,
			});
		}
		self
	}

	/// Tapping a word removes its connection.
	pub fn tap_text(mut self, text_id: &str) -> Self {
		self.connections.retain(|c| c.text_id != text_id);
		self
	}

	pub fn check(&self) -> MatchScore {
		MatchScore {
			correct: self.connections.iter().filter(|c| c.is_correct()).count(),
			total: self.items.len(),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::content::ANIMALS;
	use crate::engine::css_hex;
	use glam::vec2;

	fn board() -> MatchBoard {
		MatchBoard::with_text_order(ANIMALS, vec![2, 0, 3, 1])
	}

	fn connect(board: MatchBoard, image_id: &str, text_id: &str) -> MatchBoard {
		board
			.begin_drag(image_id, Vec2::ZERO)
			.drag_to(vec2(10.0, 10.0))
			.end_drag(Some(text_id))
	}

	#[test]
	fn test_three_of_four() {
		let board = connect(board(), "1", "1");
		let board = connect(board, "2", "2");
		let board = connect(board, "3", "3");
		let score = board.check();
		assert_eq!(score.to_string(), "3/4");
		assert!(!score.is_perfect());
		assert_eq!(score.message(), "Kamu benar 3 dari 4. Ayo coba lagi!");
	}

	#[test]
	fn test_perfect() {
		let board = ["1", "2", "3", "4"]
			.into_iter()
			.fold(board(), |b, id| connect(b, id, id));
		assert!(board.check().is_perfect());
		assert!(board.check().message().starts_with("🎉"));
	}

	#[test]
	fn test_redrag_replaces_picture_connection() {
		let board = connect(board(), "1", "2");
		let board = connect(board, "1", "1");
		assert_eq!(
			board.connections(),
			&[Connection {
				image_id: "1",
				text_id: "1"
			}]
		);
	}

	#[test]
	fn test_drop_on_taken_word_steals_it() {
		let board = connect(board(), "1", "3");
		let board = connect(board, "3", "3");
		assert_eq!(board.connections().len(), 1);
		assert_eq!(board.connections()[0].image_id, "3");
	}

	#[test]
	fn test_drop_elsewhere_leaves_picture_unconnected() {
		let board = connect(board(), "1", "1");
		let board = board.begin_drag("1", Vec2::ZERO).end_drag(None);
		assert!(board.connections().is_empty());
		assert!(board.drag().is_none());
	}

	#[test]
	fn test_tap_text_removes_connection() {
		let board = connect(board(), "2", "2").tap_text("2");
		assert!(board.connections().is_empty());
		assert_eq!(board.check().to_string(), "0/4");
	}

	#[test]
	fn test_unknown_ids_are_ignored() {
		let board = board().begin_drag("99", Vec2::ZERO);
		assert!(board.drag().is_none());
		let board = board.begin_drag("1", Vec2::ZERO).end_drag(Some("99"));
		assert!(board.connections().is_empty());
		let board = board.drag_to(vec2(5.0, 5.0)).end_drag(Some("1"));
		assert!(board.connections().is_empty());
	}

	#[test]
	fn test_drag_tracks_cursor() {
		let board = board().begin_drag("4", vec2(1.0, 2.0)).drag_to(vec2(3.0, 4.0));
		let drag = board.drag().unwrap();
		assert_eq!(drag.from, vec2(1.0, 2.0));
		assert_eq!(drag.cursor, vec2(3.0, 4.0));
	}

	#[test]
	fn test_text_order() {
		let board = board();
		let texts: Vec<_> = board.texts().map(|t| t.text).collect();
		assert_eq!(texts, ["Gajah", "Anjing", "Singa", "Kucing"]);
		assert_eq!(board.text_index("3"), Some(0));
		assert_eq!(board.image_index("3"), Some(2));
	}

	#[test]
	fn test_shuffle_is_a_permutation() {
		fastrand::seed(0x13371337);
		let board = MatchBoard::new(ANIMALS);
		let mut ids: Vec<_> = board.texts().map(|t| t.id).collect();
		ids.sort();
		assert_eq!(ids, ["1", "2", "3", "4"]);
	}

	#[test]
	fn test_colors() {
		let board = board();
		assert_eq!(css_hex(&board.image_color("1")), "#ef4444");
		assert_eq!(css_hex(&board.image_color("4")), "#06b6d4");
		assert_eq!(css_hex(&board.image_color("missing")), "#60a5fa");
	}
}
