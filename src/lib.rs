pub mod content;
pub mod engine;
pub mod geom;
pub mod matching;

pub(crate) mod util;

mod components;
mod pages;

use content::GlyphCatalog;
use engine::{TraceConfig, TraceTheme};
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();
	provide_context(TraceConfig::default());
	provide_context(TraceTheme::default());
	provide_context(GlyphCatalog::default());

	view! {
		<Title formatter=|page: String| format!("Bermain - {page}")/>

		// Inject metadata in the <head> tag.
		<Meta charset="UTF-8"/>
		<Meta name="viewport" content="width=device-width, initial-scale=1.0"/>
		<Meta name="description" content="Permainan belajar menulis dan membaca untuk anak"/>

		<thaw::ConfigProvider>
			<Router>
				<Routes fallback=pages::NotFound>
					<Route path=path!("/") view=pages::Home/>
					<Route path=path!("/letter-tracing") view=pages::LetterTracing/>
					<Route path=path!("/number-tracing/:number") view=pages::NumberTracing/>
					<Route path=path!("/connect-picture-to-text") view=pages::ConnectPictureToText/>
				</Routes>
			</Router>
		</thaw::ConfigProvider>
	}
}
