use crate::{Error, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use log::{debug, warn};

/// Local storage key the dismissal timestamp is stored under
pub const NOT_SHOW_BANNER_KEY: &str = "ANT_DESIGN_NOT_SHOW_BANNER";

/// Persistent string key-value storage
pub trait KeyValueStore {
	fn get_item(&self, key: &str) -> Result<Option<String>>;

	fn set_item(&self, key: &str, value: &str) -> Result;
}

/// Format a timestamp as ISO-8601 UTC with millisecond precision,
/// like `2024-01-02T03:04:05.678Z`
pub fn format_timestamp(t: DateTime<Utc>) -> String {
	t.to_rfc3339_opts(SecondsFormat::Millis, true)
}

pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>> {
	DateTime::parse_from_rfc3339(s)
		.map(|t| t.with_timezone(&Utc))
		.map_err(|e| Error::Timestamp(s.into(), e))
}

/// Record the banner was dismissed at `now`.
/// Storage is optional. Returns, if a record was written.
pub fn record_dismissal(
	store: Option<&dyn KeyValueStore>,
	now: DateTime<Utc>,
) -> bool {
	let store = match store {
		Some(s) => s,
		None => {
			debug!("no storage available; dismissal not recorded");
			return false;
		}
	};
	match store.set_item(NOT_SHOW_BANNER_KEY, &format_timestamp(now)) {
		Ok(()) => true,
		Err(err) => {
			warn!("could not record banner dismissal: {}", err);
			false
		}
	}
}

/// Read the time the banner was last dismissed, if any valid record exists
pub fn read_dismissal(store: &dyn KeyValueStore) -> Option<DateTime<Utc>> {
	match store.get_item(NOT_SHOW_BANNER_KEY) {
		Ok(Some(v)) => match parse_timestamp(&v) {
			Ok(t) => Some(t),
			Err(err) => {
				debug!("ignoring dismissal record: {}", err);
				None
			}
		},
		Ok(None) => None,
		Err(err) => {
			warn!("could not read banner dismissal: {}", err);
			None
		}
	}
}
