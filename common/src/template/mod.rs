//! Placeholder substitution for the HTML views.
//!
//! Templates are plain strings containing `### TAG ###` tokens. Rendering a
//! record replaces every occurrence of every known token with the display
//! string of the matching field. Tokens with an unknown name are left as they
//! are, and nothing outside the `###` delimiters is ever touched.
//!
//! Two policies make the behaviour explicit instead of incidental:
//! - [`MissingValue`] decides what a token becomes when the record lacks the
//!   field (empty text by default).
//! - [`Escaping`] decides whether values are HTML-escaped. The default is
//!   [`Escaping::Raw`]: values are inserted verbatim, exactly as the views have
//!   always rendered them, injection risk included.

pub mod registry;
pub mod tag;

use crate::model::Athlete;
use regex::{Captures, Regex};
use std::sync::LazyLock;
use thiserror::Error;

pub use registry::{TemplateRegistry, View, ViewTemplate, registry};
pub use tag::Tag;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"### ([^#]+?) ###").expect("token pattern is valid"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("el deportista no tiene valor para {tag}")]
    MissingField { tag: Tag },
}

/// What a token becomes when the record has no value for its field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingValue {
    /// Replace the token with an empty string.
    #[default]
    Empty,
    /// Leave the token in the output, where `unresolved_tokens` can find it.
    KeepToken,
    /// Abort rendering with [`RenderError::MissingField`].
    Fail,
}

/// How field values are written into the HTML.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Escaping {
    #[default]
    Raw,
    Html,
}

impl Escaping {
    fn apply(self, value: &str) -> String {
        match self {
            Escaping::Raw => value.to_string(),
            Escaping::Html => escape_html(value),
        }
    }
}

/// Substitution engine configured with its two policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TemplateEngine {
    pub missing: MissingValue,
    pub escaping: Escaping,
}

impl TemplateEngine {
    pub fn new(missing: MissingValue, escaping: Escaping) -> Self {
        Self { missing, escaping }
    }

    /// Replaces every known token in `template` with the value taken from `record`.
    pub fn substitute(&self, template: &str, record: &Athlete) -> Result<String, RenderError> {
        let mut missing_tag = None;
        let rendered = TOKEN_RE.replace_all(template, |caps: &Captures| {
            let token = &caps[0];
            let Some(tag) = Tag::from_name(&caps[1]) else {
                return token.to_string();
            };
            match tag.extract(record) {
                Some(value) => self.escaping.apply(&value),
                None => match self.missing {
                    MissingValue::Empty => String::new(),
                    MissingValue::KeepToken => token.to_string(),
                    MissingValue::Fail => {
                        missing_tag.get_or_insert(tag);
                        token.to_string()
                    }
                },
            }
        });

        match missing_tag {
            Some(tag) => Err(RenderError::MissingField { tag }),
            None => Ok(rendered.into_owned()),
        }
    }
}

/// Substitutes with the default policies (missing fields render empty, values raw).
pub fn substitute(template: &str, record: &Athlete) -> Result<String, RenderError> {
    TemplateEngine::default().substitute(template, record)
}

/// Lists the `### X ###` tokens still present in `text`, in order of appearance.
pub fn unresolved_tokens(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Escapes `&`, `<`, `>`, `"` and `'` as HTML entities.
pub fn escape_html(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
