//! The *deportista* record as stored by the document database.
//!
//! Wire shape, shared by the microservice responses and the front-end:
//!
//! ```json
//! { "ref": { "@ref": { "id": "362..." } },
//!   "ts": 1680000000000000,
//!   "data": { "nombre": "...", "apellidos": "...",
//!             "fecha_nacimiento": { "dia": 12, "mes": 6, "año": 1990 },
//!             "nacionalidad": "España",
//!             "años_de_participacion_mundial": [2014, 2018],
//!             "numero_de_participaciones_juegos_olimpicos": 2 } }
//! ```
//!
//! Several fields have more than one shape in real data. Each of them is an
//! untagged union so no shape is silently dropped.

use crate::model::scalar::{Scalar, parse_int};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// One athlete document: its reference plus its data fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Athlete {
    #[serde(rename = "ref", default)]
    pub reference: DocumentRef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ts: Option<i64>,
    #[serde(default)]
    pub data: AthleteData,
}

impl Athlete {
    pub fn new(id: impl Into<String>, data: AthleteData) -> Self {
        Self {
            reference: DocumentRef::new(id),
            ts: None,
            data,
        }
    }

    /// Document id, or `None` for records that carry no reference.
    pub fn id(&self) -> Option<&str> {
        let id = self.reference.inner.id.as_str();
        (!id.is_empty()).then_some(id)
    }
}

/// `{ "@ref": { "id": ... } }`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DocumentRef {
    #[serde(rename = "@ref", default)]
    pub inner: RefId,
}

impl DocumentRef {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            inner: RefId {
                id: id.into(),
                collection: None,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RefId {
    #[serde(default)]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub collection: Option<Value>,
}

/// Data fields of an athlete. Every field is optional on the wire; fields this
/// model does not know about are kept in `extra` and written back untouched.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AthleteData {
    #[serde(rename = "nombre", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "apellidos", default, skip_serializing_if = "Option::is_none")]
    pub surname: Option<String>,

    #[serde(
        rename = "fecha_nacimiento",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<BirthDate>,

    #[serde(
        rename = "nacionalidad",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub nationality: Option<Nationality>,

    #[serde(
        rename = "años_de_participacion_mundial",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub world_participation: Option<WorldParticipation>,

    #[serde(
        rename = "numero_de_participaciones_juegos_olimpicos",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub olympic_games: Option<Scalar>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Birth date: normally a `{dia, mes, año}` triple, occasionally a plain
/// `"D/M/Y"` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BirthDate {
    Parts {
        #[serde(rename = "dia", default)]
        day: Option<Scalar>,
        #[serde(rename = "mes", default)]
        month: Option<Scalar>,
        #[serde(rename = "año", default)]
        year: Option<Scalar>,
    },
    Text(String),
}

impl BirthDate {
    pub fn from_parts(day: i64, month: i64, year: i64) -> Self {
        BirthDate::Parts {
            day: Some(Scalar::Integer(day)),
            month: Some(Scalar::Integer(month)),
            year: Some(Scalar::Integer(year)),
        }
    }

    /// The `"D/M/Y"` display form. Parts are printed verbatim, without padding.
    /// A triple with a missing part has no display form.
    pub fn display(&self) -> Option<String> {
        match self {
            BirthDate::Parts {
                day: Some(day),
                month: Some(month),
                year: Some(year),
            } => Some(format!("{}/{}/{}", day, month, year)),
            BirthDate::Parts { .. } => None,
            BirthDate::Text(text) => Some(text.clone()),
        }
    }

    /// `(day, month, year)` as integers.
    pub fn numeric_parts(&self) -> Option<(i64, i64, i64)> {
        match self {
            BirthDate::Parts {
                day: Some(day),
                month: Some(month),
                year: Some(year),
            } => Some((day.as_integer()?, month.as_integer()?, year.as_integer()?)),
            BirthDate::Parts { .. } => None,
            BirthDate::Text(text) => {
                let mut parts = text.split('/').map(parse_int);
                let day = parts.next()??;
                let month = parts.next()??;
                let year = parts.next()??;
                Some((day, month, year))
            }
        }
    }
}

/// Nationality: a plain country name, or a structured place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Nationality {
    Plain(String),
    Place {
        #[serde(rename = "pais", default, skip_serializing_if = "Option::is_none")]
        country: Option<String>,
        #[serde(rename = "comunidad", default, skip_serializing_if = "Option::is_none")]
        region: Option<String>,
        #[serde(rename = "provincia", default, skip_serializing_if = "Option::is_none")]
        province: Option<String>,
    },
}

impl fmt::Display for Nationality {
    /// Plain names print verbatim; places print as `"pais, comunidad, provincia"`,
    /// skipping absent parts.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Nationality::Plain(name) => f.write_str(name),
            Nationality::Place {
                country,
                region,
                province,
            } => {
                let parts: Vec<&str> = [country, region, province]
                    .into_iter()
                    .filter_map(|part| part.as_deref())
                    .filter(|part| !part.is_empty())
                    .collect();
                f.write_str(&parts.join(", "))
            }
        }
    }
}

/// World championship participation: a count/year, or the list of years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WorldParticipation {
    Years(Vec<Scalar>),
    Single(Scalar),
}

impl WorldParticipation {
    /// Integer used for ordering: the value itself, or the first year of a list.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            WorldParticipation::Single(value) => value.as_integer(),
            WorldParticipation::Years(years) => years.first().and_then(Scalar::as_integer),
        }
    }
}

impl fmt::Display for WorldParticipation {
    /// Lists print comma separated with no spaces (`1995,2004`).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WorldParticipation::Single(value) => write!(f, "{}", value),
            WorldParticipation::Years(years) => {
                let joined: Vec<String> = years.iter().map(Scalar::to_string).collect();
                f.write_str(&joined.join(","))
            }
        }
    }
}
