//! View rendering for the athletes page: a menu bar and the article.
//!
//! The article body is raw HTML from the template registry. Its action links
//! are dispatched by a single click handler on the container, which reads the
//! `data-accion` / `data-id` attributes of the clicked link.

use super::dom::clicked_action;
use super::messages::Msg;
use super::state::PlantillaComponent;
use common::sort::SortKey;
use common::views::Listing;
use yew::html::Scope;
use yew::prelude::*;

pub fn view(component: &PlantillaComponent, ctx: &Context<PlantillaComponent>) -> Html {
    let link = ctx.link();

    html! {
        <>
            { build_menu(link) }
            <article>
                <h1>{ component.title.clone() }</h1>
                <div
                    key={component.render_id.to_string()}
                    class="contenido"
                    onclick={on_action(link)}
                >
                    { Html::from_html_unchecked(component.body.clone()) }
                </div>
            </article>
        </>
    }
}

fn build_menu(link: &Scope<PlantillaComponent>) -> Html {
    html! {
        <nav>
            { menu_button("Home", link.callback(|_| Msg::Home)) }
            { menu_button("Acerca de", link.callback(|_| Msg::AcercaDe)) }
            { menu_button("Listar deportistas", link.callback(|_| Msg::Listar(Listing::All))) }
            { menu_button("Listar nombres", link.callback(|_| Msg::Listar(Listing::Names))) }
            { menu_button("Listar nombres ordenados", link.callback(|_| Msg::Listar(Listing::NamesSorted))) }
            {
                for SortKey::ALL.into_iter().map(|key| {
                    let label = format!("Ordenar por {}", key.label().to_lowercase());
                    menu_button(&label, link.callback(move |_| Msg::Listar(Listing::SortedBy(key))))
                })
            }
        </nav>
    }
}

fn menu_button(label: &str, on_click: Callback<MouseEvent>) -> Html {
    html! {
        <button onclick={on_click}>{ label.to_string() }</button>
    }
}

/// Maps clicks on the rendered action links to messages.
fn on_action(link: &Scope<PlantillaComponent>) -> Callback<MouseEvent> {
    link.batch_callback(|e: MouseEvent| {
        let (action, id) = clicked_action(&e)?;
        e.prevent_default();
        match action.as_str() {
            "mostrar" => id.map(Msg::Mostrar),
            "editar" => Some(Msg::Editar),
            "editar-nombre" => Some(Msg::EditarNombre),
            "guardar" => Some(Msg::Guardar),
            "cancelar" => Some(Msg::Cancelar),
            _ => None,
        }
    })
}
