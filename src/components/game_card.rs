use leptos::prelude::*;
use leptos_router::components::A;
use thaw::{Body1, Caption1, Card, CardHeader, CardPreview};

/// A tile on the home page linking to one game.
#[component]
pub fn GameCard(
	#[prop(into)] title: String,
	#[prop(into)] description: String,
	icon: &'static str,
	href: &'static str,
) -> impl IntoView {
	view! {
		<A href=href>
			<Card class="GameCard">
				<CardPreview>
					<div class="GameIcon">{icon}</div>
				</CardPreview>
				<CardHeader>
					<Body1>
						<b>{title}</b>
					</Body1>
				</CardHeader>
				<Caption1>{description}</Caption1>
			</Card>
		</A>
	}
}
