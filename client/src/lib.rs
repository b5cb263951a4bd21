#[macro_use]
mod comp_util;
mod analytics;
mod banner;
mod config;
mod site;
mod storage;
mod subs;
mod util;

use common::config::Locale;
use wasm_bindgen::prelude::*;
use yew::{html, Component, ComponentLink, Html};

struct App {
	lang: Locale,
}

impl Component for App {
	comp_static! {}

	fn create(_: Self::Properties, _: ComponentLink<Self>) -> Self {
		Self {
			lang: Locale::from_path(
				&util::window().location().pathname().unwrap_or_default(),
			),
		}
	}

	fn view(&self) -> Html {
		html! {
			<banner::Banner lang=self.lang />
		}
	}
}

#[wasm_bindgen(start)]
pub fn main_js() -> util::Result {
	console_error_panic_hook::set_once();
	wasm_logger::init(wasm_logger::Config::new(if cfg!(debug_assertions) {
		log::Level::Debug
	} else {
		log::Level::Warn
	}));

	yew::start_app::<App>();

	Ok(())
}
