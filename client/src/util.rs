use wasm_bindgen::prelude::JsValue;

// Simple string error type for passing between subsystems and FFI
#[derive(Debug)]
pub struct Error(String);

impl Into<JsValue> for Error {
	fn into(self) -> JsValue {
		JsValue::from(&self.0)
	}
}

impl AsRef<str> for Error {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

impl From<JsValue> for Error {
	fn from(v: JsValue) -> Error {
		Error(format!("{:?}", v))
	}
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

// Trait specialization when?
macro_rules! from_display {
	($($type:ty),+) => {
		$(
			impl From<$type> for Error {
				fn from(err: $type) -> Error {
					Error(err.to_string())
				}
			}
		)+
	};
}
from_display! {
	String,
	&str,
	common::Error,
	serde_json::error::Error
}

// Shorthand for most commonly used Result type
pub type Result<T = ()> = std::result::Result<T, Error>;

// Cache global JS variable lookup
#[macro_export]
macro_rules! cache_variable {
	($type:ty, $get:expr) => {{
		static mut CACHED: Option<$type> = None;
		unsafe {
			if CACHED.is_none() {
				CACHED = Some($get());
			}
			CACHED.as_ref().unwrap()
		}
	}};
}

// Define function that caches global JS variable lookup
#[macro_export]
macro_rules! def_cached_getter {
	($visibility:vis, $name:ident, $type:ty, $get:expr) => {
		$visibility fn $name() -> &'static $type {
			$crate::cache_variable! { $type, $get }
		}
	};
}

// Get JS window global
def_cached_getter! { pub, window, web_sys::Window,
	|| web_sys::window().expect("window undefined")
}

// Get page document
def_cached_getter! { pub, document, web_sys::Document,
	|| window().document().expect("document undefined")
}

// Log any error to console
pub fn log_error_res<T, E: Into<Error>>(res: std::result::Result<T, E>) {
	if let Err(err) = res {
		log::error!("{}", err.into());
	}
}
