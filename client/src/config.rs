use crate::{
	subs::{PartialAgent, Subscribe},
	util,
};
use common::config::SiteConfig;

// Partial subscription agent
#[derive(Default)]
pub struct PAgent();

impl PartialAgent for PAgent {
	type Data = SiteConfig;
	type Input = ();

	fn init(&mut self, data: &mut Self::Data) -> util::Result {
		// Read configs from JSON embedded in the HTML
		*data = SiteConfig::from_json(
			&util::document()
				.get_element_by_id("site-config-data")
				.ok_or("inline site configs not found")?
				.inner_html(),
		)?;
		Ok(())
	}
}

impl Subscribe for SiteConfig {
	type PA = PAgent;
}
