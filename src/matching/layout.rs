use super::{Connection, MatchBoard};
use glam::{vec2, Vec2};

/// How the two columns of the board are arranged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
	/// Pictures on the left, words on the right.
	#[default]
	Horizontal,
	/// Pictures on top, words below. Used on narrow screens.
	Vertical,
}

/// Positions of the connectable anchors, in the board's own coordinate space.
///
/// Rows run along the cross axis, `spacing` apart; the picture anchors sit `margin` in from the
/// edge and the word anchors another `gap` further along the main axis.
#[derive(Clone, Copy, Debug, PartialEq, bon::Builder)]
pub struct BoardLayout {
	#[builder(start_fn)]
	pub orientation: Orientation,
	#[builder(start_fn)]
	pub rows: usize,
	#[builder(default = 100.0)]
	pub spacing: f32,
	#[builder(default = 150.0)]
	pub margin: f32,
	#[builder(default = 300.0)]
	pub gap: f32,
	/// How close a drop must land to a word anchor to connect to it.
	#[builder(default = 40.0)]
	pub hit_radius: f32,
}

impl BoardLayout {
	pub fn new(orientation: Orientation, rows: usize) -> Self {
		Self::builder(orientation, rows).build()
	}

	/// Unit vector from the picture column towards the word column.
	pub fn main_axis(&self) -> Vec2 {
		match self.orientation {
			Orientation::Horizontal => Vec2::X,
			Orientation::Vertical => Vec2::Y,
		}
	}

	fn cross_axis(&self) -> Vec2 {
		self.main_axis().perp().abs()
	}

	fn anchor(&self, row: usize, depth: f32) -> Vec2 {
		self.cross_axis() * self.spacing * (row as f32 + 0.5) + self.main_axis() * depth
	}

	pub fn image_anchor(&self, row: usize) -> Vec2 {
		self.anchor(row, self.margin)
	}

	pub fn text_anchor(&self, row: usize) -> Vec2 {
		self.anchor(row, self.margin + self.gap)
	}

	/// Total extent of the board, suitable for an SVG `viewBox`.
	pub fn size(&self) -> Vec2 {
		self.cross_axis() * self.spacing * self.rows as f32
			+ self.main_axis() * (2.0 * self.margin + self.gap)
	}

	pub fn view_box(&self) -> String {
		let size = self.size();
		format!("0 0 {} {}", size.x, size.y)
	}

	fn hit<'a>(
		&self,
		ids: impl IntoIterator<Item = &'a str>,
		point: Vec2,
		anchor: impl Fn(usize) -> Vec2,
	) -> Option<&'a str> {
		ids
			.into_iter()
			.enumerate()
			.find(|(row, _)| anchor(*row).distance(point) <= self.hit_radius)
			.map(|(_, id)| id)
	}

	/// The picture whose anchor lies within reach of `point`, if any.
	pub fn hit_image<'a>(
		&self,
		image_ids: impl IntoIterator<Item = &'a str>,
		point: Vec2,
	) -> Option<&'a str> {
		self.hit(image_ids, point, |row| self.image_anchor(row))
	}

	/// The word whose anchor lies within reach of `point`, if any.
	pub fn hit_text<'a>(
		&self,
		text_ids: impl IntoIterator<Item = &'a str>,
		point: Vec2,
	) -> Option<&'a str> {
		self.hit(text_ids, point, |row| self.text_anchor(row))
	}

	/// Anchor points for both ends of an established connection.
	pub fn endpoints(&self, board: &MatchBoard, connection: &Connection) -> Option<(Vec2, Vec2)> {
		let from = self.image_anchor(board.image_index(connection.image_id)?);
		let to = self.text_anchor(board.text_index(connection.text_id)?);
		Some((from, to))
	}
}

/// A smooth S-shaped connector between two anchors, as SVG path data.
pub fn connection_path(from: Vec2, to: Vec2, orientation: Orientation) -> String {
	let mid = (from + to) / 2.0;
	let control = match orientation {
		Orientation::Horizontal => vec2(mid.x, from.y),
		Orientation::Vertical => vec2(from.x, mid.y),
	};
	format!(
		"M {} {} Q {} {}, {} {} T {} {}",
		from.x, from.y, control.x, control.y, mid.x, mid.y, to.x, to.y
	)
}

impl MatchBoard {
	/// Ends the drag at `point`, connecting to whichever word anchor it landed on.
	pub fn drop_at(self, point: Vec2, layout: &BoardLayout) -> Self {
		let target = layout.hit_text(self.texts().map(|t| t.id), point);
		self.end_drag(target)
	}
}
