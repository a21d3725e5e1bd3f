//! Update function for the checkout component.
//!
//! Elm-style: each `Msg` is applied to the `CheckoutState` reducer and the
//! function returns whether the view should re-render. `Msg::Submit` is the
//! only message with a side effect: when the draft is valid it spawns the
//! purchase request, whose result comes back as `Msg::SubmitFinished`.

use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use super::helpers::send_purchase;
use super::messages::Msg;
use super::state::CheckoutComponent;

pub fn update(component: &mut CheckoutComponent, ctx: &Context<CheckoutComponent>, msg: Msg) -> bool {
    let checkout = &mut component.checkout;

    match msg {
        Msg::SelectConcert(id) => {
            checkout.select_concert(id);
            true
        }
        Msg::UpdateField(field, value) => {
            checkout.update_field(field, value);
            true
        }
        Msg::Submit => {
            let Some(request) = checkout.begin_submit() else {
                // Validation errors or a request already in flight.
                return true;
            };

            log!(format!(
                "Submitting {} ticket(s) for concert {}",
                request.quantity, request.concert_id
            ));
            let link = ctx.link().clone();
            spawn_local(async move {
                let outcome = send_purchase(&request).await;
                link.send_message(Msg::SubmitFinished(outcome));
            });
            true
        }
        Msg::SubmitFinished(outcome) => {
            checkout.complete_submit(outcome);
            true
        }
    }
}
