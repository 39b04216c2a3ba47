use crate::engine::*;
use crate::geom::svg_path_data;
use crate::util::CoordinateSource;
use glam::Vec2;
use leptos::prelude::*;

/// SVG drawing surface for one tracing [`Session`].
///
/// Renders the grid, the guide with its dashed centre line, and every stroke drawn so far, and
/// feeds pointer events back into the session.
#[component]
pub fn TracingCanvas(session: RwSignal<Session>) -> impl IntoView {
	let theme: TraceTheme = use_context().unwrap_or_default();
	let config = session.with_untracked(|s| *s.config());
	let virtual_size = Vec2::splat(config.canvas_size);

	let dispatch = move |event: TraceEvent| session.update(|s| s.dispatch(event));

	let pointerdown = move |e: leptos::ev::PointerEvent| {
		if !e.is_primary() {
			return;
		}
		// Keep touch input from scrolling the page.
		e.prevent_default();
		let Some(point) = e.get_virtual_coordinates(virtual_size) else {
			return;
		};
		dispatch(TraceEvent::PointerDown(point));
	};

	let pointermove = move |e: leptos::ev::PointerEvent| {
		if !e.is_primary() || session.with_untracked(|s| s.phase() == Phase::Idle) {
			return;
		}
		e.prevent_default();
		let Some(point) = e.get_virtual_coordinates(virtual_size) else {
			return;
		};
		dispatch(TraceEvent::PointerMove(point));
	};

	let pointerup = move |e: leptos::ev::PointerEvent| {
		if e.is_primary() {
			dispatch(TraceEvent::PointerUp);
		}
	};

	let guides = move || {
		session.with(|s| {
			s.reference_path()
				.polylines()
				.iter()
				.map(|p| svg_path_data(p.points()))
				.collect::<Vec<_>>()
		})
	};

	let strokes = move || {
		session.with(|s| {
			s.all_strokes()
				.filter(|stroke| stroke.is_drawable())
				.map(|stroke| (svg_path_data(stroke.points()), stroke.is_correct()))
				.collect::<Vec<_>>()
		})
	};

	let grid_color = css_hex(&theme.grid);
	let guide_color = css_hex(&theme.guide);
	let center_line_color = css_hex(&theme.center_line);
	let correct_color = css_hex(&theme.correct);
	let incorrect_color = css_hex(&theme.incorrect);
	let guide_width = config.guide_width.to_string();
	let draw_width = config.draw_width.to_string();

	view! {
		<svg
			class="TracingCanvas"
			viewBox=config.view_box()
			style="touch-action: none"
			on:pointerdown=pointerdown
			on:pointermove=pointermove
			on:pointerup=pointerup
			on:pointerleave=pointerup
			on:pointercancel=pointerup
		>
			<defs>
				<pattern id="grid" width="50" height="50" patternUnits="userSpaceOnUse">
					<path d="M 50 0 L 0 0 0 50" fill="none" stroke=grid_color stroke-width="1"/>
				</pattern>
			</defs>
			<rect width="100%" height="100%" fill="url(#grid)"/>

			{move || {
				guides()
					.into_iter()
					.map(|d| {
						view! {
							<path
								d=d
								stroke=guide_color.clone()
								stroke-width=guide_width.clone()
								fill="none"
								stroke-linecap="round"
								stroke-linejoin="round"
							/>
						}
					})
					.collect_view()
			}}

			// Dashed centre lines go over every guide.
			{move || {
				guides()
					.into_iter()
					.map(|d| {
						view! {
							<path
								d=d
								stroke=center_line_color.clone()
								stroke-width="2"
								fill="none"
								stroke-dasharray="10,10"
							/>
						}
					})
					.collect_view()
			}}

			{move || {
				strokes()
					.into_iter()
					.map(|(d, correct)| {
						let color = if correct { correct_color.clone() } else { incorrect_color.clone() };
						view! {
							<path
								d=d
								stroke=color
								stroke-width=draw_width.clone()
								fill="none"
								stroke-linecap="round"
								stroke-linejoin="round"
								opacity="0.8"
							/>
						}
					})
					.collect_view()
			}}
		</svg>
	}
}
