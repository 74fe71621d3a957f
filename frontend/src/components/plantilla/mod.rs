//! Athletes page: root module wiring the Yew `Component` implementation with
//! submodules for state, update logic, view rendering, DOM access and helpers.
//!
//! On first render the page loads the microservice home message.

use yew::prelude::*;

mod dom;
mod helpers;
mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::PlantillaComponent;

impl Component for PlantillaComponent {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Home);
        PlantillaComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
