use crate::content::GlyphCatalog;
use crate::engine::{Session, TraceEvent};
use leptos::prelude::*;

/// One button per glyph. Choosing a glyph starts over on a clean canvas.
#[component]
pub fn GlyphSelector(session: RwSignal<Session>) -> impl IntoView {
	let catalog: GlyphCatalog = use_context().unwrap_or_default();

	view! {
		<div class="GlyphSelector">
			{catalog
				.iter()
				.map(|glyph| {
					let is_active = move || session.with(|s| s.glyph_id() == glyph.id);
					let select = move |_| {
						session.update(|s| {
							s.dispatch(TraceEvent::Select {
								id: glyph.id.to_owned(),
								path: glyph.reference_path(),
							})
						})
					};
					view! {
						<button class="GlyphButton" class:GlyphButtonActive=is_active on:click=select>
							{glyph.id}
						</button>
					}
				})
				.collect_view()}
		</div>
	}
}
