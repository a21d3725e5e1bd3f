//! Page header with a rotating background.
//!
//! The header owns the slideshow timer: it is started when the component is
//! created and cancelled in `destroy`, so no interval outlives the header.

use common::slideshow::{Slideshow, ROTATION_INTERVAL_MS};
use gloo_timers::callback::Interval;
use yew::prelude::*;

pub enum Msg {
    Advance,
}

pub struct HeroComponent {
    slideshow: Slideshow,
    interval: Option<Interval>,
}

impl HeroComponent {
    fn start(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        self.interval = Some(Interval::new(ROTATION_INTERVAL_MS, move || {
            link.send_message(Msg::Advance)
        }));
    }

    fn cancel(&mut self) {
        // Dropping the handle clears the browser interval.
        self.interval.take();
    }
}

impl Component for HeroComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let mut hero = Self {
            slideshow: Slideshow::default(),
            interval: None,
        };
        hero.start(ctx);
        hero
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Advance => {
                self.slideshow.advance();
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let style = format!("background-image: {};", self.slideshow.current_image());

        html! {
            <header class="hero" style={style}>
                <div class="hero-overlay">
                    <div class="hero-text">
                        <h1>{"TicketHub"}</h1>
                        <p>{"Get tickets for the hottest concerts"}</p>
                    </div>
                </div>
            </header>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.cancel();
    }
}
