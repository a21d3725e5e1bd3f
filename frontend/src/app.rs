use crate::components::checkout::CheckoutComponent;
use crate::components::footer::footer;
use crate::components::hero::HeroComponent;
use yew::{html, Component, Context, Html};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="page">
                <HeroComponent />
                <main class="content">
                    <CheckoutComponent />
                </main>
                { footer() }
            </div>
        }
    }
}
