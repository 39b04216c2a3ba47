use crate::engine::ReferencePath;
use crate::geom::Polyline;
use glam::{vec2, Vec2};

/// A traceable letter or digit.
#[derive(Debug, PartialEq)]
pub struct Glyph {
	pub id: &'static str,
	pub polylines: &'static [&'static [Vec2]],
	pub instructions: &'static str,
}

impl Glyph {
	pub fn reference_path(&self) -> ReferencePath {
		ReferencePath::new(
			self
				.polylines
				.iter()
				.map(|points| Polyline::new(points.iter().copied())),
		)
	}

	pub fn is_digit(&self) -> bool {
		self.id.chars().all(|c| c.is_ascii_digit())
	}
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("glyph {0:?} not found")]
pub struct GlyphNotFound(pub String);

static_assertions::assert_impl_all!(GlyphNotFound: std::error::Error, Send, Sync);

pub const DEFAULT_GLYPH: &str = "1";

#[derive(Clone, Copy, Debug)]
pub struct GlyphCatalog {
	glyphs: &'static [Glyph],
}

impl Default for GlyphCatalog {
	fn default() -> Self {
		Self::new(GLYPHS)
	}
}

impl GlyphCatalog {
	pub const fn new(glyphs: &'static [Glyph]) -> Self {
		Self { glyphs }
	}

	#[tracing::instrument(level = "debug", skip(self), err(level = "debug"))]
	pub fn lookup(&self, id: &str) -> Result<&'static Glyph, GlyphNotFound> {
		self
			.glyphs
			.iter()
			.find(|g| g.id == id)
			.ok_or_else(|| GlyphNotFound(id.to_owned()))
	}

	/// All glyphs in display order.
	pub fn iter(&self) -> impl Iterator<Item = &'static Glyph> {
		self.glyphs.iter()
	}

	pub fn digits(&self) -> impl Iterator<Item = &'static Glyph> {
		self.iter().filter(|g| g.is_digit())
	}
}

static GLYPHS: &[Glyph] = &[
	Glyph {
		id: "1",
		polylines: &[
			&[vec2(220.0, 100.0), vec2(250.0, 70.0), vec2(250.0, 350.0)],
			&[vec2(180.0, 350.0), vec2(320.0, 350.0)],
		],
		instructions: "Mulai dari atas, tarik ke bawah, lalu tambahkan garis dasar.",
	},
	Glyph {
		id: "2",
		polylines: &[&[
			vec2(180.0, 120.0),
			vec2(220.0, 70.0),
			vec2(280.0, 70.0),
			vec2(320.0, 120.0),
			vec2(180.0, 280.0),
			vec2(180.0, 350.0),
			vec2(320.0, 350.0),
		]],
		instructions:
			"Mulai dari kiri atas, lengkung ke kanan, lalu diagonal ke bawah dan menyeberang.",
	},
	Glyph {
		id: "3",
		polylines: &[
			&[
				vec2(180.0, 100.0),
				vec2(250.0, 50.0),
				vec2(300.0, 100.0),
				vec2(250.0, 200.0),
			],
			&[
				vec2(250.0, 200.0),
				vec2(300.0, 250.0),
				vec2(300.0, 300.0),
				vec2(250.0, 350.0),
				vec2(180.0, 300.0),
			],
		],
		instructions: "Buat dua lengkungan di sisi kanan!",
	},
	Glyph {
		id: "4",
		polylines: &[
			&[vec2(280.0, 50.0), vec2(180.0, 230.0), vec2(320.0, 230.0)],
			&[vec2(280.0, 50.0), vec2(280.0, 350.0)],
		],
		instructions: "Tarik ke bawah, menyeberang, lalu selesaikan dengan garis ke bawah.",
	},
	Glyph {
		id: "5",
		polylines: &[&[
			vec2(300.0, 50.0),
			vec2(180.0, 50.0),
			vec2(180.0, 180.0),
			vec2(250.0, 180.0),
			vec2(300.0, 230.0),
			vec2(300.0, 300.0),
			vec2(250.0, 350.0),
			vec2(180.0, 300.0),
		]],
		instructions: "Menyeberang, ke bawah, lengkung ke kanan dan bawah.",
	},
	Glyph {
		id: "6",
		polylines: &[&[
			vec2(280.0, 100.0),
			vec2(220.0, 50.0),
			vec2(180.0, 120.0),
			vec2(180.0, 280.0),
			vec2(220.0, 350.0),
			vec2(280.0, 350.0),
			vec2(320.0, 300.0),
			vec2(320.0, 250.0),
			vec2(280.0, 200.0),
			vec2(200.0, 200.0),
		]],
		instructions: "Mulai dari atas, lengkung ke bawah dan putar membuat lingkaran di bawah.",
	},
	Glyph {
		id: "7",
		polylines: &[&[vec2(180.0, 50.0), vec2(320.0, 50.0), vec2(220.0, 350.0)]],
		instructions: "Tarik menyeberang di atas, lalu diagonal ke bawah.",
	},
	Glyph {
		id: "8",
		polylines: &[&[
			vec2(250.0, 200.0),
			vec2(200.0, 150.0),
			vec2(200.0, 100.0),
			vec2(250.0, 50.0),
			vec2(300.0, 100.0),
			vec2(300.0, 150.0),
			vec2(250.0, 200.0),
			vec2(200.0, 250.0),
			vec2(200.0, 300.0),
			vec2(250.0, 350.0),
			vec2(300.0, 300.0),
			vec2(300.0, 250.0),
			vec2(250.0, 200.0),
		]],
		instructions: "Mulai di tengah, putar ke atas, lalu putar ke bawah seperti ular.",
	},
	Glyph {
		id: "9",
		polylines: &[
			// Head, clockwise from the right.
			&[
				vec2(320.0, 140.0),
				vec2(320.0, 100.0),
				vec2(280.0, 60.0),
				vec2(220.0, 60.0),
				vec2(180.0, 100.0),
				vec2(180.0, 140.0),
				vec2(220.0, 180.0),
				vec2(280.0, 180.0),
				vec2(320.0, 140.0),
			],
			// Tail.
			&[
				vec2(320.0, 140.0),
				vec2(320.0, 200.0),
				vec2(300.0, 260.0),
				vec2(270.0, 310.0),
				vec2(230.0, 350.0),
				vec2(180.0, 350.0),
			],
		],
		instructions: "Gambar lingkaran di atas, lalu lengkung ke bawah seperti ekor.",
	},
	Glyph {
		id: "A",
		polylines: &[
			&[vec2(150.0, 350.0), vec2(250.0, 50.0), vec2(350.0, 350.0)],
			&[vec2(195.0, 200.0), vec2(305.0, 200.0)],
		],
		instructions: "Mulai dari kiri bawah, naik ke atas, lalu turun. Lalu silang di tengah.",
	},
	Glyph {
		id: "B",
		polylines: &[
			&[vec2(150.0, 50.0), vec2(150.0, 350.0)],
			&[
				vec2(150.0, 50.0),
				vec2(250.0, 50.0),
				vec2(300.0, 100.0),
				vec2(250.0, 175.0),
				vec2(150.0, 175.0),
			],
			&[
				vec2(150.0, 175.0),
				vec2(280.0, 175.0),
				vec2(320.0, 250.0),
				vec2(250.0, 350.0),
				vec2(150.0, 350.0),
			],
		],
		instructions: "Gambar garis vertikal dulu. Lalu dua lengkungan!",
	},
	Glyph {
		id: "C",
		polylines: &[&[
			vec2(320.0, 100.0),
			vec2(270.0, 50.0),
			vec2(220.0, 50.0),
			vec2(170.0, 100.0),
			vec2(170.0, 300.0),
			vec2(220.0, 350.0),
			vec2(270.0, 350.0),
			vec2(320.0, 300.0),
		]],
		instructions: "Mulai dari kanan atas dan lengkung ke kiri.",
	},
];

#[cfg(test)]
mod tests {
	use super::*;
	use crate::engine::is_point_valid;
	use itertools::Itertools;

	#[test]
	fn test_lookup() {
		let catalog = GlyphCatalog::default();
		assert_eq!(catalog.lookup("A").unwrap().id, "A");
		assert_eq!(catalog.lookup("Q"), Err(GlyphNotFound("Q".into())));
		assert!(catalog.lookup(DEFAULT_GLYPH).is_ok());
	}

	#[test]
	fn test_display_order() {
		let catalog = GlyphCatalog::default();
		let ids = catalog.iter().map(|g| g.id).join("");
		assert_eq!(ids, "123456789ABC");
		let digits = catalog.digits().map(|g| g.id).join("");
		assert_eq!(digits, "123456789");
	}

	#[test]
	fn test_glyphs_are_traceable() {
		for glyph in GlyphCatalog::default().iter() {
			assert!(!glyph.instructions.is_empty(), "{}", glyph.id);
			let path = glyph.reference_path();
			assert!(path.segments().count() > 0, "{}", glyph.id);
			for polyline in path.polylines() {
				for point in polyline.points() {
					assert!(point.cmpge(Vec2::ZERO).all() && point.cmple(Vec2::splat(500.0)).all());
					// Every vertex lies on its own guide.
					assert!(is_point_valid(*point, &path, 35.0), "{}", glyph.id);
				}
			}
		}
	}

	#[test]
	fn test_nine_tail_alone_is_valid() {
		let nine = GlyphCatalog::default().lookup("9").unwrap();
		let path = nine.reference_path();
		let tail_only = vec2(240.0, 345.0);
		assert!(path.polylines()[0].distance_to(tail_only).unwrap() >= 35.0);
		assert!(is_point_valid(tail_only, &path, 35.0));
	}
}
