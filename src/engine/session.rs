use super::{ReferencePath, Stroke, TraceConfig, TraceValidator};
use crate::content::{Glyph, GlyphCatalog, GlyphNotFound};
use glam::Vec2;

/// Input to [`Session::apply`], one per user gesture boundary.
#[derive(Clone, Debug, PartialEq)]
pub enum TraceEvent {
	PointerDown(Vec2),
	PointerMove(Vec2),
	/// Pointer released or left the canvas.
	PointerUp,
	Reset,
	Select { id: String, path: ReferencePath },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
	Idle,
	Drawing,
}

/// Count of correct strokes among the completed ones.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, derive_more::Display)]
#[display("{correct}/{total}")]
pub struct StrokeTally {
	pub correct: usize,
	pub total: usize,
}

/// The selected glyph and everything drawn over it since the last reset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
	glyph_id: String,
	path: ReferencePath,
	config: TraceConfig,
	strokes: Vec<Stroke>,
	active: Option<Stroke>,
}

impl Session {
	pub fn new(glyph_id: impl Into<String>, path: ReferencePath, config: TraceConfig) -> Self {
		Self {
			glyph_id: glyph_id.into(),
			path,
			config,
			strokes: Vec::new(),
			active: None,
		}
	}

	pub fn for_glyph(glyph: &Glyph, config: TraceConfig) -> Self {
		Self::new(glyph.id, glyph.reference_path(), config)
	}

	pub fn glyph_id(&self) -> &str {
		&self.glyph_id
	}

	pub fn reference_path(&self) -> &ReferencePath {
		&self.path
	}

	pub fn config(&self) -> &TraceConfig {
		&self.config
	}

	pub fn strokes(&self) -> &[Stroke] {
		&self.strokes
	}

	pub fn active_stroke(&self) -> Option<&Stroke> {
		self.active.as_ref()
	}

	/// Completed strokes followed by the one in progress, in drawing order.
	pub fn all_strokes(&self) -> impl Iterator<Item = &Stroke> {
		self.strokes.iter().chain(self.active.as_ref())
	}

	pub fn phase(&self) -> Phase {
		match self.active {
			Some(_) => Phase::Drawing,
			None => Phase::Idle,
		}
	}

	pub fn validator(&self) -> TraceValidator<'_> {
		TraceValidator::new(&self.path, self.config.tolerance)
	}

	pub fn tally(&self) -> StrokeTally {
		StrokeTally {
			correct: self.strokes.iter().filter(|s| s.is_correct()).count(),
			total: self.strokes.len(),
		}
	}

	/// Starts a new stroke. A stroke still in progress is discarded, as a second press can only
	/// follow a release that never reached us.
	pub fn begin_stroke(mut self, point: Vec2) -> Self {
		if self.active.is_some() {
			tracing::debug!(glyph = %self.glyph_id, "discarding unfinished stroke");
		}
		let stroke = self.validator().begin_stroke(point);
		tracing::trace!(?point, correct = stroke.is_correct(), "begin stroke");
		self.active = Some(stroke);
		self
	}

	pub fn extend_stroke(mut self, point: Vec2) -> Self {
		let Some(stroke) = self.active.take() else {
			tracing::trace!(?point, "move without an active stroke");
			return self;
		};
		let stroke = self.validator().extend_stroke(stroke, point);
		tracing::trace!(?point, correct = stroke.is_correct(), "extend stroke");
		self.active = Some(stroke);
		self
	}

	pub fn end_stroke(mut self) -> Self {
		let Some(stroke) = self.active.take() else {
			return self;
		};
		tracing::debug!(
			glyph = %self.glyph_id,
			points = stroke.points().len(),
			correct = stroke.is_correct(),
			"end stroke"
		);
		self.strokes.push(stroke);
		self
	}

	pub fn reset(mut self) -> Self {
		tracing::debug!(glyph = %self.glyph_id, "reset");
		self.strokes.clear();
		self.active = None;
		self
	}

	/// Switches to another glyph, which always clears the canvas.
	pub fn select(self, glyph_id: impl Into<String>, path: ReferencePath) -> Self {
		let glyph_id = glyph_id.into();
		tracing::debug!(from = %self.glyph_id, to = %glyph_id, "select glyph");
		Self::new(glyph_id, path, self.config)
	}

	pub fn select_reference_path(
		self,
		catalog: &GlyphCatalog,
		id: &str,
	) -> Result<Self, GlyphNotFound> {
		let glyph = catalog.lookup(id)?;
		Ok(self.select(glyph.id, glyph.reference_path()))
	}

	pub fn apply(self, event: TraceEvent) -> Self {
		match event {
			TraceEvent::PointerDown(point) => self.begin_stroke(point),
			TraceEvent::PointerMove(point) => self.extend_stroke(point),
			TraceEvent::PointerUp => self.end_stroke(),
			TraceEvent::Reset => self.reset(),
			TraceEvent::Select { id, path } => self.select(id, path),
		}
	}

	/// In-place form of [`Session::apply`] for use inside signal updates.
	pub fn dispatch(&mut self, event: TraceEvent) {
		*self = std::mem::take(self).apply(event);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::geom::Polyline;
	use glam::vec2;

	fn session() -> Session {
		let path = ReferencePath::new([Polyline::new([vec2(0.0, 0.0), vec2(100.0, 0.0)])]);
		Session::new("line", path, TraceConfig::builder().tolerance(10.0).build())
	}

	fn draw(session: Session, points: &[Vec2]) -> Session {
		let (first, rest) = points.split_first().unwrap();
		let session = session.apply(TraceEvent::PointerDown(*first));
		rest
			.iter()
			.fold(session, |s, p| s.apply(TraceEvent::PointerMove(*p)))
			.apply(TraceEvent::PointerUp)
	}

	#[test]
	fn test_phases() {
		let session = session();
		assert_eq!(session.phase(), Phase::Idle);
		let session = session.apply(TraceEvent::PointerDown(vec2(50.0, 5.0)));
		assert_eq!(session.phase(), Phase::Drawing);
		let session = session.apply(TraceEvent::PointerUp);
		assert_eq!(session.phase(), Phase::Idle);
		assert_eq!(session.strokes().len(), 1);
	}

	#[test]
	fn test_off_path_stroke_stays_incorrect() {
		let session = draw(
			session(),
			&[vec2(50.0, 5.0), vec2(50.0, 15.0), vec2(50.0, 5.0)],
		);
		assert!(!session.strokes()[0].is_correct());
	}

	#[test]
	fn test_move_and_up_while_idle_are_ignored() {
		let before = session();
		let after = before
			.clone()
			.apply(TraceEvent::PointerMove(vec2(1.0, 1.0)))
			.apply(TraceEvent::PointerUp);
		assert_eq!(before, after);
	}

	#[test]
	fn test_second_press_discards_unfinished_stroke() {
		let session = session()
			.apply(TraceEvent::PointerDown(vec2(10.0, 0.0)))
			.apply(TraceEvent::PointerMove(vec2(20.0, 0.0)))
			.apply(TraceEvent::PointerDown(vec2(80.0, 50.0)));
		assert!(session.strokes().is_empty());
		assert_eq!(session.active_stroke().unwrap().points(), &[vec2(80.0, 50.0)]);
	}

	#[test]
	fn test_reset_clears_history() {
		let session = draw(session(), &[vec2(10.0, 0.0), vec2(20.0, 0.0)]);
		let session = draw(session, &[vec2(10.0, 50.0), vec2(20.0, 50.0)]);
		assert_eq!(session.tally(), StrokeTally { correct: 1, total: 2 });

		let session = session.apply(TraceEvent::Reset);
		assert!(session.strokes().is_empty());
		assert_eq!(session.glyph_id(), "line");

		let session = draw(session, &[vec2(30.0, 0.0), vec2(40.0, 0.0)]);
		assert_eq!(session.strokes().len(), 1);
		assert_eq!(session.tally().to_string(), "1/1");
	}

	#[test]
	fn test_reset_drops_active_stroke() {
		let session = session()
			.apply(TraceEvent::PointerDown(vec2(10.0, 0.0)))
			.apply(TraceEvent::Reset);
		assert_eq!(session.phase(), Phase::Idle);
		assert_eq!(session.all_strokes().count(), 0);
	}

	#[test]
	fn test_select_clears_strokes_and_keeps_config() {
		let session = draw(session(), &[vec2(10.0, 0.0), vec2(20.0, 0.0)]);
		let other = ReferencePath::new([Polyline::new([vec2(0.0, 0.0), vec2(0.0, 100.0)])]);
		let session = session.apply(TraceEvent::Select {
			id: "vertical".into(),
			path: other.clone(),
		});
		assert_eq!(session.glyph_id(), "vertical");
		assert_eq!(session.reference_path(), &other);
		assert!(session.strokes().is_empty());
		assert_eq!(session.config().tolerance, 10.0);
	}

	#[test]
	fn test_select_from_catalog() {
		let catalog = GlyphCatalog::default();
		let session = Session::default().select_reference_path(&catalog, "9").unwrap();
		assert_eq!(session.glyph_id(), "9");
		assert_eq!(session.reference_path().polylines().len(), 2);

		let error = session.select_reference_path(&catalog, "Z").unwrap_err();
		assert_eq!(error, GlyphNotFound("Z".into()));
	}

	#[test]
	fn test_dispatch() {
		let mut session = session();
		session.dispatch(TraceEvent::PointerDown(vec2(50.0, 5.0)));
		session.dispatch(TraceEvent::PointerMove(vec2(60.0, 5.0)));
		session.dispatch(TraceEvent::PointerUp);
		assert!(session.strokes()[0].is_correct());
	}

	#[test]
	fn test_all_strokes_includes_active_last() {
		let session = draw(session(), &[vec2(10.0, 0.0), vec2(20.0, 0.0)])
			.apply(TraceEvent::PointerDown(vec2(90.0, 90.0)));
		let last = session.all_strokes().last().unwrap();
		assert!(!last.is_correct());
		assert_eq!(session.all_strokes().count(), 2);
	}
}
