use crate::{
	storage,
	subs::{PartialAgent, Subscribe},
	util,
};
use chrono::Utc;
use common::{
	dismissal::read_dismissal,
	site::{SitePatch, SiteState},
};
use log::debug;

// Partial subscription agent
#[derive(Default)]
pub struct PAgent();

impl PartialAgent for PAgent {
	type Data = SiteState;
	type Input = SitePatch;

	fn init(&mut self, data: &mut Self::Data) -> util::Result {
		// Banner stays hidden for a while after being dismissed
		let dismissed = storage::local_storage()
			.and_then(|ls| read_dismissal(&ls));
		*data = SiteState::from_dismissal(dismissed, Utc::now());
		debug!("initial site state: {:?}", data);
		Ok(())
	}

	fn handle_input(&mut self, req: Self::Input, data: &mut Self::Data) -> bool {
		debug!("site state patch: {:?}", req);
		data.apply(req)
	}
}

impl Subscribe for SiteState {
	type PA = PAgent;
}
