use crate::config::{Locale, SiteConfig};

/// Everything the banner's visibility depends on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BannerInputs<'a> {
	pub locale: Locale,
	pub visible: bool,
	pub title: &'a str,
	pub href: &'a str,
}

impl<'a> BannerInputs<'a> {
	/// Collect inputs from the site configuration and shared visibility flag
	pub fn new(locale: Locale, visible: bool, config: &'a SiteConfig) -> Self {
		let (title, href) = config.banner(locale);
		Self {
			locale,
			visible,
			title,
			href,
		}
	}

	/// Returns, if the banner may be shown for these inputs
	pub fn eligible(&self) -> bool {
		self.locale == Locale::PRIMARY
			&& self.visible
			&& !self.title.is_empty()
			&& !self.href.is_empty()
	}
}

/// Two-phase banner visibility gate.
///
/// Starts out pending and hidden, so the first render matches what a
/// server-rendered page without client state would produce. Resolved only
/// once evaluated in a confirmed client environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gate {
	Pending,
	Resolved(bool),
}

impl Default for Gate {
	fn default() -> Self {
		Self::Pending
	}
}

impl Gate {
	#[inline]
	pub fn show(&self) -> bool {
		matches!(self, Self::Resolved(true))
	}

	#[inline]
	pub fn is_pending(&self) -> bool {
		matches!(self, Self::Pending)
	}

	/// Resolve the gate from current inputs. Returns, if the shown state
	/// changed.
	pub fn evaluate(&mut self, inputs: &BannerInputs) -> bool {
		let was = self.show();
		*self = Self::Resolved(inputs.eligible());
		was != self.show()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn inputs<'a>(
		locale: Locale,
		visible: bool,
		title: &'a str,
		href: &'a str,
	) -> BannerInputs<'a> {
		BannerInputs {
			locale,
			visible,
			title,
			href,
		}
	}

	#[test]
	fn primary_locale_requires_everything() {
		let t = "New feature";
		let h = "https://example.com";

		assert!(inputs(Locale::cn, true, t, h).eligible());
		assert!(!inputs(Locale::cn, false, t, h).eligible());
		assert!(!inputs(Locale::cn, true, "", h).eligible());
		assert!(!inputs(Locale::cn, true, t, "").eligible());
		assert!(!inputs(Locale::cn, false, "", "").eligible());
	}

	#[test]
	fn pending_until_evaluated() {
		let mut g = Gate::default();
		assert!(g.is_pending());
		assert!(!g.show());

		assert!(g.evaluate(&inputs(
			Locale::cn,
			true,
			"New feature",
			"https://example.com"
		)));
		assert!(!g.is_pending());
		assert!(g.show());
	}

	#[test]
	fn evaluation_is_idempotent() {
		let i = inputs(Locale::cn, true, "New feature", "https://example.com");
		let mut g = Gate::default();
		assert!(g.evaluate(&i));
		assert!(!g.evaluate(&i));
		assert!(g.show());
	}

	#[test]
	fn hides_after_visibility_cleared() {
		let mut g = Gate::default();
		g.evaluate(&inputs(Locale::cn, true, "a", "b"));
		assert!(g.evaluate(&inputs(Locale::cn, false, "a", "b")));
		assert_eq!(g, Gate::Resolved(false));
	}

	#[test]
	fn non_primary_scenario() {
		let mut g = Gate::default();
		assert!(!g.evaluate(&inputs(
			Locale::en,
			true,
			"New feature",
			"https://example.com"
		)));
		assert!(!g.show());
	}

	#[test]
	fn inputs_from_config() {
		let c = SiteConfig::from_json(
			r#"{"headingBanner":{"cn":{"title":"t","href":"h"}}}"#,
		)
		.unwrap();
		assert!(BannerInputs::new(Locale::cn, true, &c).eligible());
		assert!(!BannerInputs::new(Locale::en, true, &c).eligible());
	}

	proptest! {
		#[test]
		fn never_eligible_outside_primary_locale(
			visible in any::<bool>(),
			title in ".*",
			href in ".*",
		) {
			prop_assert!(!inputs(Locale::en, visible, &title, &href).eligible());
		}

		#[test]
		fn primary_locale_eligibility(
			visible in any::<bool>(),
			title in ".{0,16}",
			href in ".{0,16}",
		) {
			prop_assert_eq!(
				inputs(Locale::cn, visible, &title, &href).eligible(),
				visible && !title.is_empty() && !href.is_empty()
			);
		}
	}
}
