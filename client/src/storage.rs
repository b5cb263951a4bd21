use crate::util;
use common::dismissal::KeyValueStore;
use wasm_bindgen::JsValue;

const PROBE_KEY: &str = "__banner_storage_probe__";

/// Browser local storage
pub struct BrowserStorage(web_sys::Storage);

/// Get local storage, if it is available and writable. Storage can be
/// disabled, or throw on writes in private browsing modes.
pub fn local_storage() -> Option<BrowserStorage> {
	let ls = util::window().local_storage().ok()??;
	ls.set_item(PROBE_KEY, PROBE_KEY).ok()?;
	ls.remove_item(PROBE_KEY).ok()?;
	Some(BrowserStorage(ls))
}

fn to_err(err: JsValue) -> common::Error {
	common::Error::Storage(format!("{:?}", err))
}

impl KeyValueStore for BrowserStorage {
	fn get_item(&self, key: &str) -> common::Result<Option<String>> {
		self.0.get_item(key).map_err(to_err)
	}

	fn set_item(&self, key: &str, value: &str) -> common::Result {
		self.0.set_item(key, value).map_err(to_err)
	}
}
