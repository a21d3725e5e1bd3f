//! "Upcoming Concerts" grid. Clicking a card reports its id to the parent.

use common::model::concert::{format_price, Concert, CONCERTS};
use yew::html::Scope;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ConcertPickerProps {
    /// Currently selected concert id. May match no card.
    pub selected_id: u32,
    pub on_select: Callback<u32>,
}

pub enum Msg {
    Select(u32),
}

pub struct ConcertPicker;

impl Component for ConcertPicker {
    type Message = Msg;
    type Properties = ConcertPickerProps;

    fn create(_ctx: &Context<Self>) -> Self {
        ConcertPicker
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Select(id) => {
                ctx.props().on_select.emit(id);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let selected_id = ctx.props().selected_id;
        let link = ctx.link();

        html! {
            <section class="concerts">
                <h2>{"Upcoming Concerts"}</h2>
                <div class="concert-grid">
                    { for CONCERTS.iter().map(|concert| concert_card(concert, concert.id == selected_id, link)) }
                </div>
            </section>
        }
    }
}

fn concert_card(concert: &Concert, selected: bool, link: &Scope<ConcertPicker>) -> Html {
    let id = concert.id;

    html! {
        <div
            key={id}
            class={classes!("concert-card", if selected { "selected" } else { "" })}
            onclick={link.callback(move |_: MouseEvent| Msg::Select(id))}
        >
            <h3>{concert.title}</h3>
            <p class="muted">{concert.date}</p>
            <p class="muted">{concert.venue}</p>
            <p class="price">{format_price(concert.price_cents)}</p>
            <button type="button" class={classes!("select-btn", if selected { "active" } else { "" })}>
                { if selected { "Selected" } else { "Select" } }
            </button>
        </div>
    }
}
