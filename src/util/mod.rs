use glam::Vec2;
use wasm_bindgen::JsCast;

mod result_ext;
pub use result_ext::*;

#[derive(thiserror::Error, Debug)]
#[error("javascript error: {0}")]
pub struct JsError(String);

impl From<wasm_bindgen::JsValue> for JsError {
	fn from(value: wasm_bindgen::JsValue) -> Self {
		JsError(format!("{:?}", value))
	}
}

static_assertions::assert_impl_all!(JsError: std::error::Error, Send, Sync);

fn current_element(event: &web_sys::Event) -> Option<web_sys::Element> {
	event
		.current_target()
		.and_then(|target| target.dyn_into::<web_sys::Element>().ok())
}

pub trait PointerCapture {
	fn set_pointer_capture(&self) -> bool;
	fn release_pointer_capture(&self) -> bool;
}

impl PointerCapture for leptos::ev::PointerEvent {
	fn set_pointer_capture(&self) -> bool {
		current_element(self)
			.and_then(|target| {
				target
					.set_pointer_capture(self.pointer_id())
					.map_err(JsError::from)
					.ok_or_log("capture pointer")
			})
			.is_some()
	}

	fn release_pointer_capture(&self) -> bool {
		current_element(self)
			.and_then(|target| {
				target
					.release_pointer_capture(self.pointer_id())
					.map_err(JsError::from)
					.ok_or_log("release pointer")
			})
			.is_some()
	}
}

pub trait CoordinateSource {
	/// Pointer position relative to the element the handler is attached to, and that element's
	/// displayed size, both in CSS pixels.
	fn get_offset_and_size(&self) -> Option<(Vec2, Vec2)>;

	/// Pointer position in a virtual space of `virtual_size` stretched over the element.
	fn get_virtual_coordinates(&self, virtual_size: Vec2) -> Option<Vec2> {
		let (offset, size) = self.get_offset_and_size()?;
		crate::geom::to_virtual(offset, size, virtual_size)
	}
}

impl CoordinateSource for leptos::ev::PointerEvent {
	fn get_offset_and_size(&self) -> Option<(Vec2, Vec2)> {
		let rect = current_element(self)?.get_bounding_client_rect();
		let offset = Vec2::new(
			(self.client_x() as f64 - rect.left()) as f32,
			(self.client_y() as f64 - rect.top()) as f32,
		);
		let size = Vec2::new(rect.width() as f32, rect.height() as f32);
		Some((offset, size))
	}
}
