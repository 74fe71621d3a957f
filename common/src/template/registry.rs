//! The fixed set of HTML views and the registry that renders them.
//!
//! Each view is a header, a per-record row and a footer. A rendered table is
//! always `header + rows + footer`, so it starts with the header text and ends
//! with the footer text. Action links carry `data-accion` / `data-id`
//! attributes that the front-end dispatches on.

use super::{RenderError, Tag, TemplateEngine};
use crate::model::Athlete;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Header of the compact listing.
pub const COMPACT_HEADER: &str = concat!(
    "<table class=\"listado-deportistas\">\n",
    "        <thead>\n",
    "        <th>Nombre</th><th>Apellidos</th><th>Fecha Nac</th><th>Nacionalidad</th>",
    "<th>Años_mundial</th><th>Num_Juegos_olimpicos</th>\n",
    "        </thead>\n",
    "        <tbody>\n",
    "    ",
);

const COMPACT_ROW: &str = concat!(
    "<tr>\n",
    "    <td>### NOMBRE ###</td>\n",
    "    <td>### APELLIDOS ###</td>\n",
    "    <td>### FECHA_NAC ###</td>\n",
    "    <td>### NACIONALIDAD ###</td>\n",
    "    <td>### AÑOS_MUNDIAL ###</td>\n",
    "    <td>### NUM PARTICIPACION J OLIMPICOS ###</td>\n",
    "    </tr>\n",
    "    ",
);

/// Footer shared by every table view.
pub const TABLE_FOOTER: &str = "</tbody></table>";

const FULL_HEADER: &str = concat!(
    "<table width=\"100%\" class=\"listado-deportistas\">\n",
    "    <thead>\n",
    "        <th width=\"10%\">Id</th>\n",
    "        <th width=\"10%\">Nombre</th>\n",
    "        <th width=\"10%\">Apellidos</th>\n",
    "        <th width=\"20%\">Fecha Nacimiento</th>\n",
    "        <th width=\"15%\">Nacionalidad</th>\n",
    "        <th width=\"15%\">Años de Participacion Mundial</th>\n",
    "        <th width=\"15%\">Nº de participacion en Juegos Olimpicos</th>\n",
    "        <th>Opciones</th>\n",
    "\n",
    "    </thead>\n",
    "    <tbody>",
);

const FULL_ROW: &str = concat!(
    "\n",
    "    <tr title=\"### ID ###\">\n",
    "        <td>### ID ###</td>\n",
    "        <td>### NOMBRE ###</td>\n",
    "        <td>### APELLIDOS ###</td>\n",
    "        <td>### FECHA_NAC ###</td>\n",
    "        <td>### NACIONALIDAD ###</td>\n",
    "        <td>### AÑOS_MUNDIAL ###</td>\n",
    "        <td>### NUM PARTICIPACION J OLIMPICOS ###</td>\n",
    "        <td>\n",
    "                <div><a href=\"#\" data-accion=\"mostrar\" data-id=\"### ID ###\" ",
    "class=\"opcion-secundaria mostrar\">Mostrar</a></div>\n",
    "        </td>\n",
    "    </tr>",
);

const NAMES_HEADER: &str = concat!(
    "<table class=\"listado-deportistas\">\n",
    "    <thead>\n",
    "    <th>Nombre</th>\n",
    "    </thead>\n",
    "    <tbody>\n",
);

const NAMES_ROW: &str = concat!("<tr>\n", "    <td>### NOMBRE ###</td>\n", "    </tr>\n", "    ");

const FORM: &str = concat!(
    "\n",
    "<form method='post' action=''>\n",
    "    <table width=\"100%\" class=\"listado-deportistas\">\n",
    "        <thead>\n",
    "        <th>ID</th><th>Nombre</th><th>Apellidos</th><th>Fecha Nac</th><th>Nacionalidad</th>",
    "<th>Años mundial</th><th>Nº Juegos olimpicos</th><th>Opciones</th>\n",
    "        </thead>\n",
    "        <tbody>\n",
    "            <tr title=\"### ID ###\">\n",
    "                <td><input type=\"text\" class=\"form-deportista-elemento\" disabled id=\"form-deportista-id\"\n",
    "                        value=\"### ID ###\" \n",
    "                        name=\"id_deportista\"/></td>\n",
    "                <td><input type=\"text\" class=\"form-deportista-elemento editable\" disabled\n",
    "                        id=\"form-deportista-nombre\" required value=\"### NOMBRE ###\" \n",
    "                        name=\"nombre\"/></td>\n",
    "                <td><input type=\"text\" class=\"form-deportista-elemento editable\" disabled\n",
    "                        id=\"form-deportista-apellidos\" value=\"### APELLIDOS ###\" \n",
    "                        name=\"apellidos\"/></td>\n",
    "                <td><input type=\"text\" class=\"form-deportista-elemento\" disabled\n",
    "                        id=\"form-deportista-f_nac\" required value=\"### FECHA_NAC ###\" \n",
    "                        name=\"fecha_nacimiento\"/></td>\n",
    "                <td><input type=\"text\" class=\"form-deportista-elemento editable\" disabled\n",
    "                        id=\"form-deportista-nacionalidad\" required value=\"### NACIONALIDAD ###\" \n",
    "                        name=\"nacionalidad\"/></td>        \n",
    "                <td><input type=\"text\" class=\"form-deportista-elemento\" disabled\n",
    "                        id=\"form-deportistas-años_de_p_mundial\" required value=\"### AÑOS_MUNDIAL ###\" \n",
    "                        name=\"años_de_participacion_mundial\"/></td>  \n",
    "                <td><input type=\"number\" class=\"form-deportista-elemento editable\" disabled\n",
    "                        id=\"form-deportista-numero_de_participaciones_juegos_olimpicos\" min=\"0\" max=\"20\" size=\"8\" required\n",
    "                        value=\"### NUM PARTICIPACION J OLIMPICOS ###\" \n",
    "                        name=\"numero_de_participaciones_juegos_olimpicos\"/></td>\n",
    "                <td>\n",
    "                    <div><a href=\"#\" data-accion=\"editar-nombre\" class=\"opcion-secundaria mostrar\">Editar nombre</a></div>\n",
    "                    <div><a href=\"#\" data-accion=\"editar\" class=\"opcion-secundaria mostrar\">Editar varios campos</a></div>\n",
    "                    <div><a href=\"#\" data-accion=\"guardar\" class=\"opcion-terciaria editar ocultar\">Guardar</a></div>\n",
    "                    <div><a href=\"#\" data-accion=\"cancelar\" class=\"opcion-terciaria editar ocultar\">Cancelar</a></div>\n",
    "                </td>\n",
    "            </tr>\n",
    "        </tbody>\n",
    "    </table>\n",
    "</form>\n",
);

/// Element ids of the detail form inputs.
pub mod form_ids {
    pub const ID: &str = "form-deportista-id";
    pub const NAME: &str = "form-deportista-nombre";
    pub const SURNAME: &str = "form-deportista-apellidos";
    pub const BIRTH_DATE: &str = "form-deportista-f_nac";
    pub const NATIONALITY: &str = "form-deportista-nacionalidad";
    pub const WORLD_YEARS: &str = "form-deportistas-años_de_p_mundial";
    pub const OLYMPIC_COUNT: &str = "form-deportista-numero_de_participaciones_juegos_olimpicos";

    /// Inputs unlocked by "Editar varios campos".
    pub const EDITABLE: [&str; 4] = [NAME, SURNAME, NATIONALITY, OLYMPIC_COUNT];
    /// Inputs unlocked by "Editar nombre".
    pub const NAME_ONLY: [&str; 1] = [NAME];
}

/// The views a record list or a single record can be rendered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// Six data columns, no id and no actions.
    Compact,
    /// Id, data columns and a "Mostrar" action per row.
    Full,
    /// Names only.
    Names,
    /// Detail/edit form for one record.
    Form,
}

impl View {
    pub const ALL: [View; 4] = [View::Compact, View::Full, View::Names, View::Form];
}

/// Header, row and footer of one view, plus the tags its row uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewTemplate {
    pub header: &'static str,
    pub row: &'static str,
    pub footer: &'static str,
    pub tags: &'static [Tag],
}

/// Immutable view registry, built once and shared.
#[derive(Debug)]
pub struct TemplateRegistry {
    views: HashMap<View, ViewTemplate>,
    engine: TemplateEngine,
}

static REGISTRY: LazyLock<TemplateRegistry> =
    LazyLock::new(|| TemplateRegistry::standard(TemplateEngine::default()));

/// The process-wide registry with the default engine policies.
pub fn registry() -> &'static TemplateRegistry {
    &REGISTRY
}

impl TemplateRegistry {
    /// Registry holding the four standard views, rendered through `engine`.
    pub fn standard(engine: TemplateEngine) -> Self {
        const DATA_TAGS: &[Tag] = &[
            Tag::Name,
            Tag::Surname,
            Tag::BirthDate,
            Tag::Nationality,
            Tag::WorldYears,
            Tag::OlympicCount,
        ];

        let views = HashMap::from([
            (
                View::Compact,
                ViewTemplate {
                    header: COMPACT_HEADER,
                    row: COMPACT_ROW,
                    footer: TABLE_FOOTER,
                    tags: DATA_TAGS,
                },
            ),
            (
                View::Full,
                ViewTemplate {
                    header: FULL_HEADER,
                    row: FULL_ROW,
                    footer: TABLE_FOOTER,
                    tags: &Tag::ALL,
                },
            ),
            (
                View::Names,
                ViewTemplate {
                    header: NAMES_HEADER,
                    row: NAMES_ROW,
                    footer: TABLE_FOOTER,
                    tags: &[Tag::Name],
                },
            ),
            (
                View::Form,
                ViewTemplate {
                    header: "",
                    row: FORM,
                    footer: "",
                    tags: &Tag::ALL,
                },
            ),
        ]);

        Self { views, engine }
    }

    pub fn engine(&self) -> TemplateEngine {
        self.engine
    }

    pub fn get(&self, view: View) -> &ViewTemplate {
        // `standard` registers every `View` variant.
        &self.views[&view]
    }

    /// One record rendered through the row template of `view`.
    pub fn render_row(&self, view: View, record: &Athlete) -> Result<String, RenderError> {
        self.engine.substitute(self.get(view).row, record)
    }

    /// `header + one row per record + footer`.
    pub fn render_table(&self, view: View, records: &[Athlete]) -> Result<String, RenderError> {
        let template = self.get(view);
        let mut html = String::from(template.header);
        for record in records {
            html.push_str(&self.engine.substitute(template.row, record)?);
        }
        html.push_str(template.footer);
        Ok(html)
    }

    /// A table holding a single record.
    pub fn render_single(&self, view: View, record: &Athlete) -> Result<String, RenderError> {
        self.render_table(view, std::slice::from_ref(record))
    }

    /// The detail form filled with `record`.
    pub fn athlete_as_form(&self, record: &Athlete) -> Result<String, RenderError> {
        self.render_row(View::Form, record)
    }
}

/// Header of the compact listing; independent of any data.
pub fn cabecera_table() -> &'static str {
    COMPACT_HEADER
}

/// Footer of every table view.
pub fn pie_table() -> &'static str {
    TABLE_FOOTER
}
