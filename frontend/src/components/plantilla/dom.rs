//! Direct access to the DOM produced by the template registry: action links,
//! the detail form inputs and the option links shown or hidden while editing.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement, MouseEvent};

const CLASS_SHOW: &str = "mostrar";
const CLASS_HIDE: &str = "ocultar";

/// Links shown while a record is only being displayed.
pub const SECONDARY_OPTIONS: &str = "opcion-secundaria";
/// Links shown while a record is being edited.
pub const EDIT_OPTIONS: &str = "opcion-terciaria editar";

fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

fn input(id: &str) -> Option<HtmlInputElement> {
    document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlInputElement>()
        .ok()
}

/// `(data-accion, data-id)` of the action link a click landed on, if any.
pub fn clicked_action(event: &MouseEvent) -> Option<(String, Option<String>)> {
    let target = event.target()?.dyn_into::<Element>().ok()?;
    let link = target.closest("[data-accion]").ok()??;
    let action = link.get_attribute("data-accion")?;
    Some((action, link.get_attribute("data-id")))
}

pub fn set_disabled(ids: &[&str], disabled: bool) {
    for id in ids {
        if let Some(input) = input(id) {
            input.set_disabled(disabled);
        }
    }
}

/// Shows or hides every element carrying all of `class_names`.
pub fn show_options(class_names: &str, showing: bool) {
    let Some(document) = document() else {
        return;
    };
    let (remove, add) = if showing {
        (CLASS_HIDE, CLASS_SHOW)
    } else {
        (CLASS_SHOW, CLASS_HIDE)
    };

    let options = document.get_elements_by_class_name(class_names);
    for i in 0..options.length() {
        if let Some(option) = options.item(i) {
            option.class_list().remove_1(remove).ok();
            option.class_list().add_1(add).ok();
        }
    }
}

/// Current text of a form input.
pub fn input_value(id: &str) -> Option<String> {
    input(id).map(|input| input.value())
}
