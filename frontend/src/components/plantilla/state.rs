//! Component state for the athletes page.

use common::model::Athlete;
use common::views::TITLE_HOME;
use yew::prelude::*;

/// State of the single page: the article currently shown, plus the athlete
/// behind the detail view so "Cancelar" can put it back.
///
/// Fields are `pub` because they are accessed by `view` and `update` modules.
pub struct PlantillaComponent {
    /// Article title.
    pub title: String,

    /// Article body, as produced by the template registry.
    pub body: AttrValue,

    /// Bumped on every article change. Keys the body container so the raw HTML
    /// is rebuilt even when the text is unchanged (e.g. after "Cancelar").
    pub render_id: u64,

    /// Athlete currently shown in the detail view, if any.
    pub displayed: Option<Athlete>,

    /// Form inputs unlocked by the last "Editar" action. Only these are sent.
    pub unlocked: &'static [&'static str],
}

impl PlantillaComponent {
    pub fn new() -> Self {
        Self {
            title: TITLE_HOME.to_string(),
            body: AttrValue::from(""),
            render_id: 0,
            displayed: None,
            unlocked: &[],
        }
    }

    /// Replaces the article. Leaving the detail view forgets the athlete and
    /// locks the form again.
    pub fn show(&mut self, title: &str, body: String) {
        self.title = title.to_string();
        self.body = AttrValue::from(body);
        self.render_id += 1;
        self.displayed = None;
        self.unlocked = &[];
    }
}
