use crate::util;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::rc::Rc;
use yew::{
	agent::{Agent, AgentLink, Bridge, Bridged, Context, HandlerId},
	Component, ComponentLink,
};

// Partial yew::Agent implementer wrapped by SubManager
pub trait PartialAgent: Default {
	// Data to be stored and delivered to subscribers
	type Data: Serialize + for<'de> Deserialize<'de> + Default + Clone;

	// Input message type
	type Input: Serialize + for<'de> Deserialize<'de>;

	// Read initial data, like from local storage or the page
	#[allow(unused_variables)]
	fn init(&mut self, data: &mut Self::Data) -> util::Result {
		Ok(())
	}

	// Handle input message and return, if data was mutated
	#[allow(unused_variables)]
	fn handle_input(&mut self, req: Self::Input, data: &mut Self::Data) -> bool {
		false
	}
}

// Message containing new value from SubManager
#[derive(Clone, Serialize, Deserialize)]
pub enum Message<T> {
	Initial(Rc<T>),
	Update(Rc<T>),
}

// Extracts only the new value from the message
impl<T> Into<Rc<T>> for Message<T> {
	fn into(self) -> Rc<T> {
		match self {
			Message::Initial(v) | Message::Update(v) => v,
		}
	}
}

// Wrapper type for implementing subscription-based data update propagation
pub struct SubManager<PA>
where
	PA: PartialAgent + 'static,
{
	link: AgentLink<Self>,
	clients: HashSet<HandlerId>,

	// Last value sent to subscribers
	sent: Rc<PA::Data>,

	// Value being mutated by the inner agent
	data: PA::Data,

	inner: PA,
}

impl<PA> SubManager<PA>
where
	PA: PartialAgent + 'static,
{
	// Apply change to data and send change notification to all subscribers
	fn apply_change(&mut self) {
		debug!("sending changes to {} subscribers", self.clients.len());

		self.sent = self.data.clone().into();
		let msg = Message::Update(self.sent.clone());
		for id in self.clients.iter() {
			self.link.respond(*id, msg.clone());
		}
	}
}

impl<PA> Agent for SubManager<PA>
where
	PA: PartialAgent + 'static,
{
	type Reach = Context<Self>;
	type Message = ();
	type Input = PA::Input;
	type Output = Message<PA::Data>;

	fn create(link: AgentLink<Self>) -> Self {
		let mut data = PA::Data::default();
		let mut inner = PA::default();
		util::log_error_res(inner.init(&mut data));
		Self {
			link,
			inner,
			sent: data.clone().into(),
			data,
			clients: HashSet::new(),
		}
	}

	fn update(&mut self, _: Self::Message) {}

	fn handle_input(&mut self, req: Self::Input, _: HandlerId) {
		if self.inner.handle_input(req, &mut self.data) {
			self.apply_change();
		}
	}

	fn connected(&mut self, id: HandlerId) {
		self.clients.insert(id);
		self.link
			.respond(id, Message::Initial(self.sent.clone()));
	}

	fn disconnected(&mut self, id: HandlerId) {
		self.clients.remove(&id);
	}
}

// Helper for subscribing to and storing value provided by SubManager
pub struct Subscription<PA>
where
	PA: PartialAgent + 'static,
{
	// Maintains link
	bridge: Box<dyn Bridge<SubManager<PA>>>,

	val: Rc<PA::Data>,

	// Initial value has been received from the agent
	ready: bool,
}

impl<PA> Subscription<PA>
where
	PA: PartialAgent + 'static,
{
	// Bridge SubManager with a Component
	pub fn bridge<C, F>(link: &ComponentLink<C>, conv: F) -> Self
	where
		C: Component,
		F: Fn(Message<PA::Data>) -> C::Message + 'static,
	{
		Self {
			bridge: SubManager::bridge(link.callback(conv)),
			val: PA::Data::default().into(),
			ready: false,
		}
	}

	// Set a new value by consuming a message
	pub fn set(&mut self, msg: impl Into<Rc<PA::Data>>) {
		self.val = msg.into();
		self.ready = true;
	}

	// Returns, if the agent has delivered its value at least once
	#[inline]
	pub fn ready(&self) -> bool {
		self.ready
	}

	// Send input to the agent
	pub fn send(&mut self, req: PA::Input) {
		self.bridge.send(req);
	}
}

impl<PA> std::ops::Deref for Subscription<PA>
where
	PA: PartialAgent + 'static,
{
	type Target = PA::Data;

	fn deref(&self) -> &Self::Target {
		self.val.deref()
	}
}

// Trait for cleaner subscription to a singleton value
pub trait Subscribe {
	type PA: PartialAgent + 'static;

	fn subscribe<C, F>(link: &ComponentLink<C>, conv: F) -> Subscription<Self::PA>
	where
		C: Component,
		F: Fn(Message<<Self::PA as PartialAgent>::Data>) -> C::Message + 'static,
	{
		debug!("subscribed");
		Subscription::<Self::PA>::bridge(link, conv)
	}
}

#[test]
fn message_value() {
	let v: Rc<u8> = Message::Initial(Rc::new(1)).into();
	assert_eq!(*v, 1);
	let v: Rc<u8> = Message::Update(Rc::new(2)).into();
	assert_eq!(*v, 2);
}
