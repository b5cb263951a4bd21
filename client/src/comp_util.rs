// Helpers for more easily implementing components

// Generate Component update methods for static components
#[macro_export]
macro_rules! comp_static {
	($props:ty) => {
		type Properties = $props;
		type Message = ();

		fn change(&mut self, _: Self::Properties) -> bool {
			false
		}

		fn update(&mut self, _: Self::Message) -> bool {
			false
		}
	};
	() => {
		$crate::comp_static! {()}
	};
}
