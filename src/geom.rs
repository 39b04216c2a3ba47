use glam::Vec2;
use itertools::Itertools;

/// Euclidean distance from `p` to the closed segment `[v, w]`.
///
/// A degenerate segment (`v == w`) is treated as the single point `v`.
pub fn distance_point_to_segment(p: Vec2, v: Vec2, w: Vec2) -> f32 {
	let l2 = v.distance_squared(w);
	if l2 == 0.0 {
		return p.distance(v);
	}
	let t = ((p - v).dot(w - v) / l2).clamp(0.0, 1.0);
	p.distance(v + t * (w - v))
}

/// Maps an offset in displayed (device) pixels onto the fixed virtual canvas.
///
/// Returns `None` when the displayed area is empty, since there is no meaningful scale.
pub fn to_virtual(offset: Vec2, displayed_size: Vec2, virtual_size: Vec2) -> Option<Vec2> {
	if displayed_size.cmple(Vec2::ZERO).any() {
		return None;
	}
	Some(offset * (virtual_size / displayed_size))
}

/// An open chain of points. Consecutive pairs form its segments.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline(Vec<Vec2>);

impl Polyline {
	pub fn new(points: impl IntoIterator<Item = Vec2>) -> Self {
		Self(points.into_iter().collect())
	}

	pub fn points(&self) -> &[Vec2] {
		&self.0
	}

	pub fn segments(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
		self.0.iter().copied().tuple_windows()
	}

	/// Distance to the nearest segment, or `None` if there are no segments.
	pub fn distance_to(&self, p: Vec2) -> Option<f32> {
		self
			.segments()
			.map(|(v, w)| distance_point_to_segment(p, v, w))
			.reduce(f32::min)
	}
}

impl FromIterator<Vec2> for Polyline {
	fn from_iter<I: IntoIterator<Item = Vec2>>(iter: I) -> Self {
		Self::new(iter)
	}
}

/// SVG path data (`M x,y L x,y ...`) through `points`.
pub fn svg_path_data(points: &[Vec2]) -> String {
	let body = points.iter().map(|p| format!("{},{}", p.x, p.y)).join(" L ");
	format!("M {body}")
}

#[cfg(test)]
mod tests {
	use super::*;
	use approx::assert_abs_diff_eq;
	use glam::vec2;

	const EPSILON: f32 = 1e-3;

	fn random_point() -> Vec2 {
		500.0 * vec2(fastrand::f32(), fastrand::f32())
	}

	#[test]
	fn test_degenerate_segment() {
		fastrand::seed(0x13371337);
		for _ in 0..100 {
			let p = random_point();
			let v = random_point();
			assert_eq!(distance_point_to_segment(p, v, v), p.distance(v));
		}
	}

	#[test]
	fn test_interpolated_points_lie_on_segment() {
		fastrand::seed(0x13371337);
		for _ in 0..100 {
			let v = random_point();
			let w = random_point();
			let t = fastrand::f32();
			let p = v + t * (w - v);
			assert_abs_diff_eq!(distance_point_to_segment(p, v, w), 0.0, epsilon = EPSILON);
		}
	}

	#[test]
	fn test_symmetric_in_endpoints() {
		fastrand::seed(0x13371337);
		for _ in 0..100 {
			let p = random_point();
			let v = random_point();
			let w = random_point();
			assert_abs_diff_eq!(
				distance_point_to_segment(p, v, w),
				distance_point_to_segment(p, w, v),
				epsilon = EPSILON
			);
		}
	}

	#[test]
	fn test_clamps_beyond_endpoints() {
		let v = vec2(0.0, 0.0);
		let w = vec2(100.0, 0.0);
		assert_eq!(distance_point_to_segment(vec2(50.0, 5.0), v, w), 5.0);
		assert_eq!(distance_point_to_segment(vec2(-30.0, 40.0), v, w), 50.0);
		assert_eq!(distance_point_to_segment(vec2(130.0, -40.0), v, w), 50.0);
	}

	#[test]
	fn test_near_degenerate_segment() {
		let v = vec2(10.0, 10.0);
		let w = vec2(10.0, 10.0 + 1e-4);
		assert_abs_diff_eq!(distance_point_to_segment(vec2(13.0, 14.0), v, w), 5.0, epsilon = EPSILON);
	}

	#[test]
	fn test_to_virtual() {
		let size = Vec2::splat(500.0);
		assert_eq!(to_virtual(vec2(125.0, 50.0), vec2(250.0, 100.0), size), Some(vec2(250.0, 250.0)));
		assert_eq!(to_virtual(vec2(1.0, 1.0), vec2(0.0, 100.0), size), None);
	}

	#[test]
	fn test_polyline_segments() {
		let line = Polyline::new([vec2(0.0, 0.0), vec2(10.0, 0.0), vec2(10.0, 10.0)]);
		assert_eq!(line.segments().count(), 2);
		assert_eq!(line.distance_to(vec2(12.0, 5.0)), Some(2.0));
		assert_eq!(Polyline::new([vec2(1.0, 1.0)]).distance_to(Vec2::ZERO), None);
	}

	#[test]
	fn test_svg_path_data() {
		let d = svg_path_data(&[vec2(220.0, 100.0), vec2(250.0, 70.5)]);
		assert_eq!(d, "M 220,100 L 250,70.5");
	}
}
