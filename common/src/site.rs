use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Time a dismissal keeps the banner hidden for
pub const DISMISSAL_TTL_HOURS: i64 = 24;

/// Page-level state shared between unrelated components
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SiteState {
	/// Heading banner has not been dismissed
	pub banner_visible: bool,
}

impl Default for SiteState {
	fn default() -> Self {
		Self {
			banner_visible: true,
		}
	}
}

/// Partial update of SiteState. Only set fields are applied.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SitePatch {
	pub banner_visible: Option<bool>,
}

impl SiteState {
	/// Build initial state from the last recorded banner dismissal
	pub fn from_dismissal(
		dismissed: Option<DateTime<Utc>>,
		now: DateTime<Utc>,
	) -> Self {
		Self {
			banner_visible: match dismissed {
				Some(t) => now - t >= Duration::hours(DISMISSAL_TTL_HOURS),
				None => true,
			},
		}
	}

	/// Apply patch and return, if state was altered
	pub fn apply(&mut self, patch: SitePatch) -> bool {
		let mut changed = false;
		if let Some(v) = patch.banner_visible {
			changed |= self.banner_visible != v;
			self.banner_visible = v;
		}
		changed
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::dismissal::{
		read_dismissal, record_dismissal, tests::MemoryStore,
	};
	use chrono::TimeZone;

	fn now() -> DateTime<Utc> {
		Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
	}

	#[test]
	fn visible_by_default() {
		assert!(SiteState::default().banner_visible);
		assert!(SiteState::from_dismissal(None, now()).banner_visible);
	}

	#[test]
	fn recent_dismissal_hides() {
		let s = SiteState::from_dismissal(
			Some(now() - Duration::hours(3)),
			now(),
		);
		assert!(!s.banner_visible);
	}

	#[test]
	fn expired_dismissal_shows() {
		let s = SiteState::from_dismissal(
			Some(now() - Duration::hours(DISMISSAL_TTL_HOURS)),
			now(),
		);
		assert!(s.banner_visible);
	}

	#[test]
	fn apply_patch() {
		let mut s = SiteState::default();
		assert!(!s.apply(SitePatch::default()));
		assert!(s.banner_visible);

		let hide = SitePatch {
			banner_visible: Some(false),
		};
		assert!(s.apply(hide.clone()));
		assert!(!s.banner_visible);
		assert!(!s.apply(hide));
	}

	#[test]
	fn dismissal_round_trip_through_store() {
		let store = MemoryStore::default();
		record_dismissal(Some(&store), now() - Duration::minutes(5));
		let s = SiteState::from_dismissal(read_dismissal(&store), now());
		assert!(!s.banner_visible);
	}
}
