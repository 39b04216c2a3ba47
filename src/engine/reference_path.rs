use crate::geom::Polyline;
use glam::Vec2;

/// The target a child traces over: one or more disjoint polylines in virtual canvas space.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ReferencePath {
	polylines: Vec<Polyline>,
}

impl ReferencePath {
	pub fn new(polylines: impl IntoIterator<Item = Polyline>) -> Self {
		Self {
			polylines: polylines.into_iter().collect(),
		}
	}

	pub fn polylines(&self) -> &[Polyline] {
		&self.polylines
	}

	/// Every segment of every polyline, polyline by polyline.
	pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
		self.polylines.iter().flat_map(Polyline::segments)
	}
}

impl From<Vec<Polyline>> for ReferencePath {
	fn from(polylines: Vec<Polyline>) -> Self {
		Self { polylines }
	}
}
