use crate::Result;
use log::{debug, warn};
use serde::Serialize;

/// Analytics event reported on banner link activation
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct TrackEvent {
	pub action: &'static str,
	pub category: &'static str,
	pub label: String,
}

impl TrackEvent {
	pub fn banner_click(href: impl Into<String>) -> Self {
		Self {
			action: "click",
			category: "top_banner",
			label: href.into(),
		}
	}
}

/// Event reporting sink
pub trait Analytics {
	fn track(&self, ev: &TrackEvent) -> Result;
}

/// Report event to sink, if any. Never fails.
pub fn report(sink: Option<&dyn Analytics>, ev: &TrackEvent) {
	match sink {
		Some(s) => {
			if let Err(err) = s.track(ev) {
				warn!("could not report {:?}: {}", ev, err);
			}
		}
		None => debug!("no analytics sink; dropping {:?}", ev),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Error;
	use std::cell::RefCell;

	#[derive(Default)]
	struct Recorder(RefCell<Vec<TrackEvent>>);

	impl Analytics for Recorder {
		fn track(&self, ev: &TrackEvent) -> Result {
			self.0.borrow_mut().push(ev.clone());
			Ok(())
		}
	}

	struct Broken;

	impl Analytics for Broken {
		fn track(&self, _: &TrackEvent) -> Result {
			Err(Error::Analytics("gtag is not a function".into()))
		}
	}

	#[test]
	fn banner_click_event() {
		let r = Recorder::default();
		report(Some(&r), &TrackEvent::banner_click("https://example.com"));
		assert_eq!(
			r.0.into_inner(),
			vec![TrackEvent {
				action: "click",
				category: "top_banner",
				label: "https://example.com".into(),
			}]
		);
	}

	#[test]
	fn missing_sink() {
		report(None, &TrackEvent::banner_click("https://example.com"));
	}

	#[test]
	fn failing_sink() {
		report(Some(&Broken), &TrackEvent::banner_click("https://example.com"));
	}
}
