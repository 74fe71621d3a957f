//! Update function for the athletes page.
//!
//! Elm-style: receives the state, the `Context` and a `Msg`, mutates the state
//! and returns whether the view should re-render.
//!
//! Every menu option follows the same path: call the microservice, then feed
//! the result back as a `*Loaded` message. A failed call raises the alert and
//! leaves the article untouched. Responses that arrive late are not cancelled;
//! the last one to arrive wins.

use common::model::Athlete;
use common::requests::SaveAthleteRequest;
use common::template::registry::{form_ids, registry};
use common::views::{self, TITLE_ABOUT, TITLE_HOME, TITLE_SHOW};
use gloo_console::error;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::dom;
use super::helpers::report;
use super::messages::Msg;
use super::state::PlantillaComponent;
use crate::api;

pub fn update(component: &mut PlantillaComponent, ctx: &Context<PlantillaComponent>, msg: Msg) -> bool {
    match msg {
        Msg::Home => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_info("/plantilla/").await {
                    Ok(value) => link.send_message(Msg::HomeLoaded(value)),
                    Err(e) => report(&e),
                }
            });
            false
        }
        Msg::AcercaDe => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_info("/plantilla/acercade").await {
                    Ok(value) => link.send_message(Msg::AboutLoaded(value)),
                    Err(e) => report(&e),
                }
            });
            false
        }
        Msg::Listar(listing) => {
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_all().await {
                    Ok(records) => link.send_message(Msg::ListLoaded(listing, records)),
                    Err(e) => report(&e),
                }
            });
            false
        }
        Msg::Mostrar(id) => {
            fetch_and_show(ctx, id);
            false
        }
        Msg::HomeLoaded(value) => {
            component.show(TITLE_HOME, views::home_message(Some(&value)));
            true
        }
        Msg::AboutLoaded(value) => {
            component.show(TITLE_ABOUT, views::about_html(Some(&value)));
            true
        }
        Msg::ListLoaded(listing, mut records) => match listing.render(&mut records) {
            Ok(html) => {
                component.show(listing.title(), html);
                true
            }
            Err(e) => {
                error!(e.to_string());
                false
            }
        },
        Msg::AthleteLoaded(athlete) => show_athlete(component, athlete),
        Msg::Editar => {
            start_editing(component, &form_ids::EDITABLE);
            false
        }
        Msg::EditarNombre => {
            start_editing(component, &form_ids::NAME_ONLY);
            false
        }
        Msg::Cancelar => match component.displayed.take() {
            // Re-rendering the stored athlete restores the read-only form.
            Some(athlete) => show_athlete(component, athlete),
            None => false,
        },
        Msg::Guardar => {
            let Some(displayed) = component.displayed.as_ref() else {
                return false;
            };
            let request = SaveAthleteRequest::from_form(displayed, component.unlocked, dom::input_value);
            let link = ctx.link().clone();
            spawn_local(async move {
                if let Err(e) = api::save(&request).await {
                    report(&e);
                    return;
                }
                // The save answer is opaque; show whatever the store now holds.
                match api::fetch_by_id(&request.id_deportista).await {
                    Ok(athlete) => link.send_message(Msg::AthleteLoaded(athlete)),
                    Err(e) => report(&e),
                }
            });
            false
        }
    }
}

fn fetch_and_show(ctx: &Context<PlantillaComponent>, id: String) {
    let link = ctx.link().clone();
    spawn_local(async move {
        match api::fetch_by_id(&id).await {
            Ok(athlete) => link.send_message(Msg::AthleteLoaded(athlete)),
            Err(e) => report(&e),
        }
    });
}

fn show_athlete(component: &mut PlantillaComponent, athlete: Athlete) -> bool {
    match registry().athlete_as_form(&athlete) {
        Ok(html) => {
            component.show(TITLE_SHOW, html);
            component.displayed = Some(athlete);
            true
        }
        Err(e) => {
            error!(e.to_string());
            false
        }
    }
}

fn start_editing(component: &mut PlantillaComponent, fields: &'static [&'static str]) {
    component.unlocked = fields;
    dom::show_options(dom::SECONDARY_OPTIONS, false);
    dom::show_options(dom::EDIT_OPTIONS, true);
    dom::set_disabled(fields, false);
}
