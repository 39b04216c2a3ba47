use crate::engine::css_hex;
use crate::matching::*;
use crate::util::{CoordinateSource, PointerCapture};
use glam::Vec2;
use leptos::prelude::*;
use leptos_use::use_media_query;
use thaw::{Button, ButtonAppearance};

/// Distance from an anchor to the centre of its picture or the start of its word.
const IMAGE_OFFSET: f32 = 70.0;
const TEXT_OFFSET: f32 = 25.0;

/// The matching board: pictures, words, their anchors and the lines between them.
#[component]
pub fn MatchBoardView(board: RwSignal<MatchBoard>) -> impl IntoView {
	let narrow = use_media_query("(max-width: 768px)");
	let layout = Memo::new(move |_| {
		let orientation = if narrow.get() {
			Orientation::Vertical
		} else {
			Orientation::Horizontal
		};
		BoardLayout::new(orientation, board.with(|b| b.images().count()))
	});
	let (result, set_result) = signal(None::<String>);

	let pointer_position = move |e: &leptos::ev::PointerEvent| {
		e.get_virtual_coordinates(layout.get_untracked().size())
	};

	let pointerdown = move |e: leptos::ev::PointerEvent| {
		if !e.is_primary() {
			return;
		}
		e.prevent_default();
		let Some(point) = pointer_position(&e) else {
			return;
		};
		let layout = layout.get_untracked();
		let (image, text) = board.with_untracked(|b| {
			(
				layout.hit_image(b.images().map(|i| i.id), point),
				layout.hit_text(b.texts().map(|t| t.id), point),
			)
		});
		if let Some(image) = image {
			let Some(row) = board.with_untracked(|b| b.image_index(image)) else {
				return;
			};
			e.set_pointer_capture();
			board.update(|b| *b = b.clone().begin_drag(image, layout.image_anchor(row)));
		} else if let Some(text) = text {
			board.update(|b| *b = b.clone().tap_text(text));
		}
	};

	let pointermove = move |e: leptos::ev::PointerEvent| {
		if !e.is_primary() || board.with_untracked(|b| b.drag().is_none()) {
			return;
		}
		if let Some(point) = pointer_position(&e) {
			board.update(|b| *b = b.clone().drag_to(point));
		}
	};

	let pointerup = move |e: leptos::ev::PointerEvent| {
		if !e.is_primary() || board.with_untracked(|b| b.drag().is_none()) {
			return;
		}
		e.release_pointer_capture();
		let layout = layout.get_untracked();
		let point = pointer_position(&e);
		board.update(|b| {
			*b = match point {
				Some(point) => b.clone().drop_at(point, &layout),
				None => b.clone().end_drag(None),
			}
		});
	};

	let check = move |_: leptos::ev::MouseEvent| {
		let score = board.with_untracked(MatchBoard::check);
		tracing::info!(%score, "checked answers");
		set_result.set(Some(score.message()));
	};

	let connections = move || {
		let layout = layout.get();
		board.with(|b| {
			b.connections()
				.iter()
				.filter_map(|c| {
					let (from, to) = layout.endpoints(b, c)?;
					let d = connection_path(from, to, layout.orientation);
					Some((d, css_hex(&b.image_color(c.image_id))))
				})
				.collect::<Vec<_>>()
		})
	};

	let drag_line = move || {
		board.with(|b| {
			b.drag().map(|drag| {
				let color = css_hex(&b.image_color(drag.image_id));
				view! {
					<line
						x1=drag.from.x.to_string()
						y1=drag.from.y.to_string()
						x2=drag.cursor.x.to_string()
						y2=drag.cursor.y.to_string()
						stroke=color
						stroke-width="2"
						stroke-dasharray="5,5"
					/>
				}
			})
		})
	};

	let items = move || {
		let layout = layout.get();
		let axis = layout.main_axis();
		let text_anchor = match layout.orientation {
			Orientation::Horizontal => "start",
			Orientation::Vertical => "middle",
		};
		let dot = |at: Vec2| {
			view! { <circle class="MatchDot" cx=at.x.to_string() cy=at.y.to_string() r="12"/> }
		};
		board.with(|b| {
			let images = b.images().enumerate().map(|(row, item)| {
				let anchor = layout.image_anchor(row);
				let centre = anchor - axis * IMAGE_OFFSET;
				view! {
					<g class="MatchItem">
						<text
							x=centre.x.to_string()
							y=centre.y.to_string()
							font-size="48"
							text-anchor="middle"
							dominant-baseline="middle"
						>
							{item.image}
						</text>
						{dot(anchor)}
					</g>
				}
			});
			let texts = b.texts().enumerate().map(|(row, item)| {
				let anchor = layout.text_anchor(row);
				let start = anchor + axis * TEXT_OFFSET;
				view! {
					<g class="MatchItem">
						{dot(anchor)}
						<text
							x=start.x.to_string()
							y=start.y.to_string()
							font-size="28"
							text-anchor=text_anchor
							dominant-baseline="middle"
						>
							{item.text}
						</text>
					</g>
				}
			});
			(images.collect_view(), texts.collect_view())
		})
	};

	view! {
		<div class="MatchBoard">
			<svg
				class="MatchSurface"
				viewBox=move || layout.get().view_box()
				style="touch-action: none; width: 100%"
				on:pointerdown=pointerdown
				on:pointermove=pointermove
				on:pointerup=pointerup
				on:pointercancel=pointerup
			>
				{move || {
					connections()
						.into_iter()
						.map(|(d, color)| {
							view! {
								<path d=d stroke=color stroke-width="3" fill="none" class="ConnectionLine"/>
							}
						})
						.collect_view()
				}}
				{drag_line}
				{items}
			</svg>
			<Button appearance=ButtonAppearance::Primary on_click=check>
				"Periksa Jawaban"
			</Button>
			<p class="Result">{move || result.get()}</p>
		</div>
	}
}
