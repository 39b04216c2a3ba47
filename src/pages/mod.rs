use crate::components::*;
use crate::content::{GlyphCatalog, ANIMALS, DEFAULT_GLYPH};
use crate::engine::{Session, TraceConfig, TraceEvent};
use crate::matching::MatchBoard;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_params_map};

/// Common frame for every game page.
#[component]
fn GameLayout(children: Children) -> impl IntoView {
	view! {
		<div class="GameLayout">
			<A href="/">"← Kembali ke Beranda"</A>
			{children()}
		</div>
	}
}

#[component]
pub fn Home() -> impl IntoView {
	view! {
		<Title text="Beranda"/>
		<div class="Home">
			<h1>"Ayo Bermain dan Belajar!"</h1>
			<div class="GameGrid">
				<GameCard
					title="Cocokkan Gambar"
					description="Tarik garis dari gambar ke kata yang benar."
					icon="🧩"
					href="/connect-picture-to-text"
				/>
				<GameCard
					title="Menulis Huruf"
					description="Ikuti garis untuk menulis huruf dan angka."
					icon="✏️"
					href="/letter-tracing"
				/>
				<GameCard
					title="Menulis Angka"
					description="Belajar menulis angka 1 sampai 9."
					icon="🔢"
					href="/number-tracing/1"
				/>
			</div>
		</div>
	}
}

#[component]
pub fn LetterTracing() -> impl IntoView {
	let catalog: GlyphCatalog = use_context().unwrap_or_default();
	let config: TraceConfig = use_context().unwrap_or_default();
	let session = RwSignal::new(
		catalog
			.lookup(DEFAULT_GLYPH)
			.map(|glyph| Session::for_glyph(glyph, config))
			.unwrap_or_default(),
	);

	view! {
		<Title text="Menulis Huruf"/>
		<GameLayout>
			<h1>"Ayo Menulis!"</h1>
			<TracingGame session with_selector=true/>
		</GameLayout>
	}
}

#[component]
pub fn NumberTracing() -> impl IntoView {
	let catalog: GlyphCatalog = use_context().unwrap_or_default();
	let params = use_params_map();
	let number = Memo::new(move |_| params.with(|p| p.get("number")).unwrap_or_default());

	let glyph = Memo::new(move |_| {
		number.with(|n| catalog.lookup(n).ok().filter(|g| g.is_digit()))
	});

	let config: TraceConfig = use_context().unwrap_or_default();
	let session = RwSignal::new(
		glyph
			.get_untracked()
			.map(|g| Session::for_glyph(g, config))
			.unwrap_or_default(),
	);
	// Following a digit link keeps this page mounted, so switch glyphs in place.
	Effect::new(move |_| {
		let Some(glyph) = glyph.get() else {
			return;
		};
		if session.with_untracked(|s| s.glyph_id() != glyph.id) {
			session.update(|s| {
				s.dispatch(TraceEvent::Select {
					id: glyph.id.to_owned(),
					path: glyph.reference_path(),
				})
			});
		}
	});

	let digits = catalog.digits().map(|glyph| {
		let href = format!("/number-tracing/{}", glyph.id);
		view! {
			<A href=href>
				{glyph.id}
			</A>
		}
	});

	view! {
		<Title text=move || format!("Menulis Angka {}", number.get())/>
		<GameLayout>
			<h1>{move || format!("Ayo Menulis Angka {}!", number.get())}</h1>
			{move || {
				if glyph.with(Option::is_some) {
					view! { <TracingGame session/> }.into_any()
				} else {
					view! { <fallback::Missing message="Angka tidak ditemukan"/> }.into_any()
				}
			}}
			<nav class="DigitNav">{digits.collect_view()}</nav>
		</GameLayout>
	}
}

#[component]
pub fn ConnectPictureToText() -> impl IntoView {
	let board = RwSignal::new(MatchBoard::new(ANIMALS));

	view! {
		<Title text="Cocokkan Gambar"/>
		<GameLayout>
			<h1>"Cocokkan Gambar!"</h1>
			<p>"Tarik garis dari gambar ke kata yang sesuai."</p>
			<MatchBoardView board/>
		</GameLayout>
	}
}

#[component]
pub fn NotFound() -> impl IntoView {
	let path = use_location().pathname.get_untracked();

	view! {
		<Title text="Tidak ditemukan"/>
		<div class="NotFound">
			<div>{format!("Halaman tidak ditemukan: {path}")}</div>
			<A href="/">"Kembali ke Beranda"</A>
		</div>
	}
}
