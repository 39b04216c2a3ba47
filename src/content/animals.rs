/// One picture and the word that names it. Pictures and words share the `id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchItem {
	pub id: &'static str,
	pub image: &'static str,
	pub text: &'static str,
}

pub static ANIMALS: &[MatchItem] = &[
	MatchItem {
		id: "1",
		image: "🐶",
		text: "Anjing",
	},
	MatchItem {
		id: "2",
		image: "🐱",
		text: "Kucing",
	},
	MatchItem {
		id: "3",
		image: "🐘",
		text: "Gajah",
	},
	MatchItem {
		id: "4",
		image: "🦁",
		text: "Singa",
	},
];
