use crate::util;
use common::analytics::{Analytics, TrackEvent};
use js_sys::{Function, Object, Reflect};
use wasm_bindgen::{JsCast, JsValue};

/// Google Analytics `window.gtag` binding
pub struct Gtag(Function);

impl Gtag {
	/// Look up gtag on the page. None, if the script is not loaded.
	pub fn detect() -> Option<Self> {
		Reflect::get(util::window(), &"gtag".into())
			.ok()?
			.dyn_into::<Function>()
			.ok()
			.map(Self)
	}
}

impl Analytics for Gtag {
	fn track(&self, ev: &TrackEvent) -> common::Result {
		let params = Object::new();
		let set = |k: &str, v: &str| {
			Reflect::set(&params, &k.into(), &v.into()).map(|_| ())
		};
		set("event_category", ev.category)
			.and_then(|_| set("event_label", &ev.label))
			.and_then(|_| {
				self.0
					.call3(
						&JsValue::NULL,
						&"event".into(),
						&ev.action.into(),
						&params,
					)
					.map(|_| ())
			})
			.map_err(|err| common::Error::Analytics(format!("{:?}", err)))
	}
}
