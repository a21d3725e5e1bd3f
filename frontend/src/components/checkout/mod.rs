//! Checkout form: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, and the purchase
//! request.
//!
//! All form behavior lives in [`common::checkout::CheckoutState`]; this
//! component forwards UI events to it and performs the network call.

use yew::prelude::*;

mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CheckoutComponent;

impl Component for CheckoutComponent {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        CheckoutComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
