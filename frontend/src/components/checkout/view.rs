//! View rendering for the checkout component.
//!
//! Layout: concert picker, result banners, the selected concert, three input
//! groups (contact, payment, billing address) and the total with the submit
//! button. Each input shows its local validation error, or failing that the
//! error the purchase API reported for it.

use common::checkout::SubmitStatus;
use common::model::concert::format_price;
use common::model::field::Field;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::CheckoutComponent;
use crate::components::concerts::ConcertPicker;

const CONTACT_FIELDS: [Field; 4] = [Field::Name, Field::Email, Field::Phone, Field::Quantity];
const PAYMENT_FIELDS: [Field; 3] = [Field::CreditCard, Field::Expiration, Field::SecurityCode];
const ADDRESS_FIELDS: [Field; 5] = [
    Field::Address,
    Field::City,
    Field::Province,
    Field::PostalCode,
    Field::Country,
];

pub fn view(component: &CheckoutComponent, ctx: &Context<CheckoutComponent>) -> Html {
    let link = ctx.link();
    let checkout = &component.checkout;

    html! {
        <>
            <ConcertPicker
                selected_id={checkout.selected_concert_id}
                on_select={link.callback(Msg::SelectConcert)}
            />
            <section class="purchase">
                <h2>{"Purchase Tickets"}</h2>
                { build_banners(component) }
                <form
                    class="checkout-form"
                    onsubmit={link.callback(|e: SubmitEvent| {
                        e.prevent_default();
                        Msg::Submit
                    })}
                >
                    <div class="selected-concert">
                        <p>
                            {"Selected Concert: "}
                            { checkout.selected_concert().map(|c| c.title).unwrap_or_default() }
                        </p>
                    </div>
                    <div class="form-columns">
                        { build_group(component, link, "Contact Information", &CONTACT_FIELDS) }
                        { build_group(component, link, "Payment Information", &PAYMENT_FIELDS) }
                    </div>
                    { build_group(component, link, "Billing Address", &ADDRESS_FIELDS) }
                    { build_total(component) }
                </form>
            </section>
        </>
    }
}

/// Success or error banner for the last submission, if any.
fn build_banners(component: &CheckoutComponent) -> Html {
    match &component.checkout.status {
        SubmitStatus::Succeeded => html! {
            <div class="banner banner-success">
                <p class="banner-title">{"Success!"}</p>
                <p>{"Your tickets have been purchased. Check your email for confirmation."}</p>
            </div>
        },
        SubmitStatus::Failed(message) => html! {
            <div class="banner banner-error">
                <p class="banner-title">{"Error"}</p>
                <p>{message.clone()}</p>
            </div>
        },
        SubmitStatus::Idle | SubmitStatus::Submitting => html! {},
    }
}

fn build_group(
    component: &CheckoutComponent,
    link: &Scope<CheckoutComponent>,
    title: &'static str,
    fields: &[Field],
) -> Html {
    html! {
        <div class="form-group">
            <h3>{title}</h3>
            { for fields.iter().map(|field| build_input(component, link, *field)) }
        </div>
    }
}

fn build_input(component: &CheckoutComponent, link: &Scope<CheckoutComponent>, field: Field) -> Html {
    let checkout = &component.checkout;
    let local_error = checkout.field_error(field);
    let message = local_error.or_else(|| checkout.server_error(field));

    html! {
        <div class="form-field">
            <label for={field.name()}>{field.label()}</label>
            <input
                type={field.input_type()}
                id={field.name()}
                name={field.name()}
                value={checkout.draft.get(field).to_string()}
                maxlength={field.max_length().map(|max| max.to_string())}
                min={(field == Field::Quantity).then_some("1")}
                placeholder={(field == Field::Expiration).then_some("MM/YY")}
                class={classes!("form-input", if local_error.is_some() { "input-error" } else { "" })}
                oninput={link.callback(move |e: InputEvent| {
                    let input: HtmlInputElement = e.target_unchecked_into();
                    Msg::UpdateField(field, input.value())
                })}
            />
            {
                if let Some(message) = message {
                    html! { <p class="field-error">{message.to_string()}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

/// Total block and submit button.
fn build_total(component: &CheckoutComponent) -> Html {
    let checkout = &component.checkout;
    let unit_price = checkout.selected_concert().map_or(0, |c| c.price_cents);
    let submitting = checkout.is_submitting();

    html! {
        <div class="total">
            <div class="total-row">
                <div>
                    <p class="total-label">{"Total:"}</p>
                    <p class="muted">
                        { format!("{} x {}", checkout.draft.quantity, format_price(unit_price)) }
                    </p>
                </div>
                <p class="total-amount">{ format_price(checkout.total_cents()) }</p>
            </div>
            <button type="submit" class="submit-btn" disabled={submitting}>
                { if submitting { "Processing..." } else { "Purchase Tickets" } }
            </button>
        </div>
    }
}
