use glam::Vec2;

/// One continuous pointer-down-to-pointer-up gesture.
///
/// Correctness only ever degrades: once a point falls outside the tolerance, the stroke stays
/// incorrect for the rest of its life.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
	points: Vec<Vec2>,
	is_correct: bool,
}

impl Stroke {
	pub(crate) fn start(point: Vec2, valid: bool) -> Self {
		Self {
			points: vec![point],
			is_correct: valid,
		}
	}

	pub(crate) fn add_point(&mut self, point: Vec2, valid: bool) {
		self.points.push(point);
		self.is_correct &= valid;
	}

	pub fn points(&self) -> &[Vec2] {
		&self.points
	}

	pub fn is_correct(&self) -> bool {
		self.is_correct
	}

	/// Strokes with a single sample have nothing to draw.
	pub fn is_drawable(&self) -> bool {
		self.points.len() >= 2
	}
}
