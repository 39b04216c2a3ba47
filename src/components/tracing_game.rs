use super::{GlyphSelector, TracingCanvas};
use crate::content::GlyphCatalog;
use crate::engine::{Session, StrokeTally, TraceEvent};
use leptos::prelude::*;
use thaw::{Button, ButtonAppearance};

fn tally_message(tally: StrokeTally) -> String {
	match tally {
		StrokeTally { total: 0, .. } => "Belum ada garis. Ayo mulai menulis!".to_owned(),
		StrokeTally { correct, total } if correct == total => format!("Hebat! {tally} garis benar."),
		_ => format!("{tally} garis benar. Ayo coba lagi!"),
	}
}

/// Canvas, instructions and controls for tracing one glyph at a time.
#[component]
pub fn TracingGame(
	session: RwSignal<Session>,
	/// Whether to offer the row of glyph buttons.
	#[prop(optional)]
	with_selector: bool,
) -> impl IntoView {
	let catalog: GlyphCatalog = use_context().unwrap_or_default();
	let (result, set_result) = signal(None::<String>);

	let instructions = move || {
		session.with(|s| {
			catalog
				.lookup(s.glyph_id())
				.map(|glyph| glyph.instructions)
				.unwrap_or_default()
		})
	};

	// A new glyph means a new attempt.
	let glyph_id = Memo::new(move |_| session.with(|s| s.glyph_id().to_owned()));
	Effect::new(move |_| {
		glyph_id.track();
		set_result.set(None);
	});

	let reset = move |_: leptos::ev::MouseEvent| {
		set_result.set(None);
		session.update(|s| s.dispatch(TraceEvent::Reset));
	};

	let finish = move |_: leptos::ev::MouseEvent| {
		let tally = session.with_untracked(Session::tally);
		tracing::info!(glyph = %glyph_id.get_untracked(), %tally, "finished");
		set_result.set(Some(tally_message(tally)));
		session.update(|s| s.dispatch(TraceEvent::Reset));
	};

	view! {
		<div class="TracingGame">
			<div class="CanvasContainer">
				<TracingCanvas session/>
				<div class="InstructionText">{instructions}</div>
			</div>
			<div class="Controls">
				{with_selector.then(|| view! { <GlyphSelector session/> })}
				<div class="ActionButtons">
					<Button on_click=reset>"Ulang"</Button>
					<Button appearance=ButtonAppearance::Primary on_click=finish>"Selesai"</Button>
				</div>
				<p class="Result">{move || result.get()}</p>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_tally_message() {
		assert_eq!(
			tally_message(StrokeTally { correct: 2, total: 2 }),
			"Hebat! 2/2 garis benar."
		);
		assert_eq!(
			tally_message(StrokeTally { correct: 1, total: 3 }),
			"1/3 garis benar. Ayo coba lagi!"
		);
		assert_eq!(
			tally_message(StrokeTally::default()),
			"Belum ada garis. Ayo mulai menulis!"
		);
	}
}
