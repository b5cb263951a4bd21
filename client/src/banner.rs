use crate::{
	analytics::Gtag,
	config, site, storage,
	subs::{self, Subscribe, Subscription},
};
use chrono::Utc;
use common::{
	analytics::{report, Analytics, TrackEvent},
	config::{Locale, SiteConfig},
	dismissal::{record_dismissal, KeyValueStore},
	gate::{BannerInputs, Gate},
	site::{SitePatch, SiteState},
};
use log::debug;
use yew::{html, Component, ComponentLink, Html, Properties};

const BANNER_STYLE: &str = "width: 100%; text-align: center; \
	word-break: keep-all; user-select: none; color: #000; \
	background: linear-gradient(90deg, #84fab0, #8fd3f4);";

#[derive(Properties, Clone, PartialEq, Eq)]
pub struct Props {
	pub lang: Locale,
}

pub enum Msg {
	/// First render has completed in the browser
	ClientReady,

	State(subs::Message<SiteState>),
	Config(subs::Message<SiteConfig>),
	LinkClicked,
	Close,
}

/// Dismissible promotional banner at the top of the page
pub struct Banner {
	props: Props,
	link: ComponentLink<Self>,
	site: Subscription<site::PAgent>,
	config: Subscription<config::PAgent>,
	gate: Gate,

	// Rendered at least once on the client
	client_ready: bool,
}

impl Banner {
	/// Recompute the gate from current inputs. Stays pending, until both the
	/// client environment and all shared state are available. Returns, if the
	/// banner has to be rerendered.
	fn reevaluate(&mut self) -> bool {
		if !self.client_ready || !self.site.ready() || !self.config.ready() {
			return false;
		}
		self.gate.evaluate(&BannerInputs::new(
			self.props.lang,
			self.site.banner_visible,
			&self.config,
		))
	}

	fn href(&self) -> &str {
		self.config.banner(self.props.lang).1
	}
}

impl Component for Banner {
	type Message = Msg;
	type Properties = Props;

	fn create(props: Self::Properties, link: ComponentLink<Self>) -> Self {
		Self {
			site: SiteState::subscribe(&link, Msg::State),
			config: SiteConfig::subscribe(&link, Msg::Config),
			props,
			link,
			gate: Default::default(),
			client_ready: false,
		}
	}

	fn update(&mut self, msg: Self::Message) -> bool {
		match msg {
			Msg::ClientReady => {
				self.client_ready = true;
				self.reevaluate()
			}
			Msg::State(m) => {
				self.site.set(m);
				self.reevaluate()
			}
			Msg::Config(m) => {
				self.config.set(m);
				self.reevaluate()
			}
			Msg::LinkClicked => {
				let gtag = Gtag::detect();
				report(
					gtag.as_ref().map(|g| g as &dyn Analytics),
					&TrackEvent::banner_click(self.href()),
				);
				false
			}
			Msg::Close => {
				debug!("banner dismissed");
				self.site.send(SitePatch {
					banner_visible: Some(false),
				});
				let ls = storage::local_storage();
				record_dismissal(
					ls.as_ref().map(|s| s as &dyn KeyValueStore),
					Utc::now(),
				);
				false
			}
		}
	}

	fn change(&mut self, props: Self::Properties) -> bool {
		if self.props != props {
			self.props = props;
			self.reevaluate();
			true
		} else {
			false
		}
	}

	fn rendered(&mut self, first_render: bool) {
		if first_render {
			self.link.send_message(Msg::ClientReady);
		}
	}

	fn view(&self) -> Html {
		if !self.gate.show() {
			return html! {};
		}

		let (title, href) = self.config.banner(self.props.lang);
		html! {
			<div class="banner-alert banner-alert-info" role="alert" style=BANNER_STYLE>
				<div class="banner-alert-content">
					<span>{title}</span>
					<a
						class="banner-link"
						href={href.to_owned()}
						target="_blank"
						rel="noreferrer"
						onclick={self.link.callback(|_| Msg::LinkClicked)}
					>
						{self.props.lang.call_to_action()}
					</a>
				</div>
				<button
					type="button"
					class="banner-alert-close"
					aria-label="Close"
					onclick={self.link.callback(|_| Msg::Close)}
				>
					{"×"}
				</button>
			</div>
		}
	}
}
