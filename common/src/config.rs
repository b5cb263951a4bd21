use serde::{Deserialize, Serialize};

/// Available documentation site languages
#[allow(non_camel_case_types)]
#[derive(Serialize, Deserialize, Hash, Eq, PartialEq, Debug, Clone, Copy)]
pub enum Locale {
	cn,
	en,
}

impl Default for Locale {
	fn default() -> Self {
		Self::en
	}
}

impl Locale {
	/// The only locale the heading banner is shown for
	pub const PRIMARY: Self = Self::cn;

	/// Derive the locale from a page path. Chinese pages carry a `-cn`
	/// suffix on their last path segment, like `/components/button-cn/`.
	pub fn from_path(path: &str) -> Self {
		match path.split('/').filter(|s| !s.is_empty()).last() {
			Some(seg) if seg.ends_with("-cn") => Self::cn,
			_ => Self::en,
		}
	}

	/// Label of the banner's call-to-action link
	pub fn call_to_action(self) -> &'static str {
		match self {
			Self::cn => "前往了解",
			Self::en => "Learn more",
		}
	}
}

/// Heading banner contents for a single locale
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HeadingBanner {
	pub title: Option<String>,
	pub href: Option<String>,
}

/// Heading banner contents per locale
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct HeadingBanners {
	pub cn: Option<HeadingBanner>,
	pub en: Option<HeadingBanner>,
}

impl HeadingBanners {
	pub fn get(&self, locale: Locale) -> Option<&HeadingBanner> {
		match locale {
			Locale::cn => self.cn.as_ref(),
			Locale::en => self.en.as_ref(),
		}
	}
}

/// Site-wide configuration supplied by the hosting page
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
	pub heading_banner: HeadingBanners,
}

impl SiteConfig {
	pub fn from_json(s: &str) -> crate::Result<Self> {
		Ok(serde_json::from_str(s)?)
	}

	/// Banner title and link for a locale. Missing values are empty.
	pub fn banner(&self, locale: Locale) -> (&str, &str) {
		match self.heading_banner.get(locale) {
			Some(b) => (
				b.title.as_deref().unwrap_or_default(),
				b.href.as_deref().unwrap_or_default(),
			),
			None => ("", ""),
		}
	}
}
