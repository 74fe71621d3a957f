//! Page-level views: what each menu option puts in the article title and body.

use crate::model::Athlete;
use crate::sort::{self, SortKey};
use crate::template::{RenderError, View, registry};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TITLE_HOME: &str = "Plantilla Home";
pub const TITLE_ABOUT: &str = "Plantilla Acerca de";
pub const TITLE_LIST: &str = "Listado de deportistas";
pub const TITLE_NAMES: &str = "Listado de nombres de deportistas";
pub const TITLE_NAMES_SORTED: &str = "Listado de nombres de deportistas alfabeticamente";
pub const TITLE_SHOW: &str = "Mostrar un deportista";

/// Info returned by the home and about routes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DownloadedInfo {
    pub mensaje: String,
    pub autor: String,
    pub email: String,
    pub fecha: String,
}

impl DownloadedInfo {
    /// Stand-in used whenever the downloaded info is unusable.
    pub fn null() -> Self {
        Self {
            mensaje: "Datos Descargados No válidos".to_string(),
            autor: String::new(),
            email: String::new(),
            fecha: String::new(),
        }
    }
}

/// A JSON value the way a template literal prints it: strings bare, anything
/// else in its JSON form.
fn as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Only a JSON object counts as downloaded info.
fn usable(value: Option<&Value>) -> Option<&serde_json::Map<String, Value>> {
    match value? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}

/// Body of the home page.
pub fn home_message(value: Option<&Value>) -> String {
    usable(value)
        .and_then(|map| map.get("mensaje"))
        .map(as_text)
        .unwrap_or_else(|| DownloadedInfo::null().mensaje)
}

/// Body of the about page. All four fields must be present, otherwise the
/// null info is shown.
pub fn about_html(value: Option<&Value>) -> String {
    let info = usable(value)
        .and_then(|map| {
            Some(DownloadedInfo {
                mensaje: as_text(map.get("mensaje")?),
                autor: as_text(map.get("autor")?),
                email: as_text(map.get("email")?),
                fecha: as_text(map.get("fecha")?),
            })
        })
        .unwrap_or_else(DownloadedInfo::null);

    format!(
        "<div>\n    <p>{}</p>\n    <ul>\n        <li><b>Autor/a</b>: {}</li>\n        <li><b>E-mail</b>: {}</li>\n        <li><b>Fecha</b>: {}</li>\n    </ul>\n    </div>\n    ",
        info.mensaje, info.autor, info.email, info.fecha
    )
}

/// The listings offered by the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    /// Every field of every athlete, in store order.
    All,
    /// Names only, in store order.
    Names,
    /// Names only, alphabetically.
    NamesSorted,
    /// Every field, ordered by the chosen key.
    SortedBy(SortKey),
}

impl Listing {
    pub fn title(self) -> &'static str {
        match self {
            Listing::All | Listing::SortedBy(_) => TITLE_LIST,
            Listing::Names => TITLE_NAMES,
            Listing::NamesSorted => TITLE_NAMES_SORTED,
        }
    }

    pub fn view(self) -> View {
        match self {
            Listing::All | Listing::SortedBy(_) => View::Full,
            Listing::Names | Listing::NamesSorted => View::Names,
        }
    }

    pub fn sort_key(self) -> Option<SortKey> {
        match self {
            Listing::All | Listing::Names => None,
            Listing::NamesSorted => Some(SortKey::Name),
            Listing::SortedBy(key) => Some(key),
        }
    }

    /// Sorts `records` if the listing asks for it and renders the table.
    pub fn render(self, records: &mut [Athlete]) -> Result<String, RenderError> {
        render_list(records, self.view(), self.sort_key())
    }
}

/// Optionally sorts `records` in place, then renders them as one table.
pub fn render_list(
    records: &mut [Athlete],
    view: View,
    key: Option<SortKey>,
) -> Result<String, RenderError> {
    if let Some(key) = key {
        sort::sort(records, key);
    }
    registry().render_table(view, records)
}
