use csscolorparser::Color;

/// Sizes used by the tracing game, in virtual canvas units.
#[derive(Clone, Copy, Debug, PartialEq, bon::Builder)]
pub struct TraceConfig {
	/// Width of the grey guide drawn under the reference path.
	#[builder(default = 40.0)]
	pub guide_width: f32,

	/// Width of the child's pen.
	#[builder(default = 25.0)]
	pub draw_width: f32,

	/// How far from the reference path a sample may stray and still count.
	#[builder(default = 35.0)]
	pub tolerance: f32,

	/// Side length of the square virtual canvas.
	#[builder(default = 500.0)]
	pub canvas_size: f32,
}

impl Default for TraceConfig {
	fn default() -> Self {
		Self::builder().build()
	}
}

impl TraceConfig {
	pub fn view_box(&self) -> String {
		format!("0 0 {0} {0}", self.canvas_size)
	}
}

#[derive(Clone, Debug, PartialEq, bon::Builder)]
pub struct TraceTheme {
	#[builder(default = Color::from_rgba8(0xe5, 0xe7, 0xeb, 0xff))]
	pub guide: Color,
	#[builder(default = Color::from_rgba8(0x94, 0xa3, 0xb8, 0xff))]
	pub center_line: Color,
	#[builder(default = Color::from_rgba8(0x4a, 0xde, 0x80, 0xff))]
	pub correct: Color,
	#[builder(default = Color::from_rgba8(0xf8, 0x71, 0x71, 0xff))]
	pub incorrect: Color,
	#[builder(default = Color::from_rgba8(0xf0, 0xf9, 0xff, 0xff))]
	pub grid: Color,
}

impl Default for TraceTheme {
	fn default() -> Self {
		Self::builder().build()
	}
}

/// `#rrggbb`, which every SVG renderer accepts.
pub fn css_hex(color: &Color) -> String {
	let [r, g, b, _] = color.to_rgba8();
	format!("#{r:02x}{g:02x}{b:02x}")
}
