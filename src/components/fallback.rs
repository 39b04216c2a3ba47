use leptos::prelude::*;

/// Shown in place of content that could not be found.
#[component]
pub fn Missing(#[prop(into)] message: String) -> impl IntoView {
	view! { <div class="Missing">{message}</div> }
}
