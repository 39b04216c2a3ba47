use super::{ReferencePath, Stroke};
use crate::geom::distance_point_to_segment;
use glam::Vec2;

/// Whether `point` lies strictly within `tolerance` of any segment of `path`.
pub fn is_point_valid(point: Vec2, path: &ReferencePath, tolerance: f32) -> bool {
	path
		.segments()
		.any(|(v, w)| distance_point_to_segment(point, v, w) < tolerance)
}

/// Classifies pointer samples against a reference path.
#[derive(Clone, Copy, Debug)]
pub struct TraceValidator<'a> {
	path: &'a ReferencePath,
	tolerance: f32,
}

impl<'a> TraceValidator<'a> {
	pub fn new(path: &'a ReferencePath, tolerance: f32) -> Self {
		Self { path, tolerance }
	}

	pub fn is_point_valid(&self, point: Vec2) -> bool {
		is_point_valid(point, self.path, self.tolerance)
	}

	pub fn begin_stroke(&self, point: Vec2) -> Stroke {
		Stroke::start(point, self.is_point_valid(point))
	}

	pub fn extend_stroke(&self, mut stroke: Stroke, point: Vec2) -> Stroke {
		let valid = self.is_point_valid(point);
		stroke.add_point(point, valid);
		stroke
	}
}
