use crate::model::{Athlete, AthleteData, BirthDate, Nationality, Scalar, WorldParticipation};
use crate::template::Tag;
use crate::template::registry::form_ids;
use serde::{Deserialize, Serialize};

/// Payload of `POST /plantilla/setTodo/`.
///
/// The edit form sends the inputs it changed as text, so most values arrive as
/// strings; callers such as tests may send numbers or structured values
/// instead, which the union types accept as well.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SaveAthleteRequest {
    #[serde(default)]
    pub id_deportista: String,

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
}

impl SaveAthleteRequest {
    /// Builds the request from the detail form showing `displayed`.
    ///
    /// Only the inputs in `unlocked` are read, through `read` (input id to its
    /// current text). An input whose text still equals what the form showed is
    /// left out, so the stored value keeps its shape: a structured nationality
    /// or a list of years is only replaced by text when the user retyped it.
    pub fn from_form(
        displayed: &Athlete,
        unlocked: &[&str],
        read: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let changed = |id: &str, tag: Tag| -> Option<String> {
            if !unlocked.contains(&id) {
                return None;
            }
            let text = read(id)?;
            let shown = tag.extract(displayed).unwrap_or_default();
            (text != shown).then_some(text)
        };

        Self {
            id_deportista: displayed.id().unwrap_or_default().to_string(),
            name: changed(form_ids::NAME, Tag::Name),
            surname: changed(form_ids::SURNAME, Tag::Surname),
            birth_date: None,
            nationality: changed(form_ids::NATIONALITY, Tag::Nationality).map(Nationality::Plain),
            world_participation: changed(form_ids::WORLD_YEARS, Tag::WorldYears)
                .map(|years| WorldParticipation::Single(Scalar::Text(years))),
            olympic_games: changed(form_ids::OLYMPIC_COUNT, Tag::OlympicCount).map(Scalar::Text),
        }
    }

    /// Fields the update writes. The birth date is shown in the form but is
    /// never written back; absent fields leave the stored value unchanged.
    pub fn to_patch(&self) -> AthleteData {
        AthleteData {
            name: self.name.clone(),
            surname: self.surname.clone(),
            birth_date: None,
            nationality: self.nationality.clone(),
            world_participation: self.world_participation.clone(),
            olympic_games: self.olympic_games.clone(),
            extra: Default::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_payload_is_read_as_text() {
        let request: SaveAthleteRequest = serde_json::from_str(
            r#"{ "id_deportista": "362",
                 "nombre": "Ana",
                 "apellidos": "Ruiz",
                 "fecha_nacimiento": "10/5/1990",
                 "nacionalidad": "España",
                 "años_de_participacion_mundial": "2014,2018",
                 "numero_de_participaciones_juegos_olimpicos": "2" }"#,
        )
        .unwrap();
        assert_eq!(request.id_deportista, "362");
        assert_eq!(request.birth_date, Some(BirthDate::Text("10/5/1990".into())));
        assert_eq!(request.olympic_games, Some(Scalar::Text("2".into())));
    }

    fn placed_athlete() -> Athlete {
        Athlete::new(
            "362",
            AthleteData {
                name: Some("Pau".into()),
                surname: Some("Gasol".into()),
                birth_date: Some(BirthDate::from_parts(6, 7, 1980)),
                nationality: Some(Nationality::Place {
                    country: Some("España".into()),
                    region: Some("Cataluña".into()),
                    province: Some("Barcelona".into()),
                }),
                world_participation: Some(WorldParticipation::Years(vec![
                    Scalar::Integer(2009),
                    Scalar::Integer(2013),
                ])),
                olympic_games: None,
                extra: Default::default(),
            },
        )
    }

    /// Form inputs as first rendered for `athlete`, with `edits` typed over them.
    fn form<'a>(athlete: &Athlete, edits: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        let shown: Vec<(&'static str, String)> = [
            (form_ids::NAME, Tag::Name),
            (form_ids::SURNAME, Tag::Surname),
            (form_ids::BIRTH_DATE, Tag::BirthDate),
            (form_ids::NATIONALITY, Tag::Nationality),
            (form_ids::WORLD_YEARS, Tag::WorldYears),
            (form_ids::OLYMPIC_COUNT, Tag::OlympicCount),
        ]
        .into_iter()
        .map(|(id, tag)| (id, tag.extract(athlete).unwrap_or_default()))
        .collect();

        move |id: &str| {
            edits
                .iter()
                .find(|(edited, _)| *edited == id)
                .map(|(_, text)| text.to_string())
                .or_else(|| {
                    shown
                        .iter()
                        .find(|(input, _)| *input == id)
                        .map(|(_, text)| text.clone())
                })
        }
    }

    #[test]
    fn name_only_edit_sends_just_the_name() {
        let athlete = placed_athlete();
        let request = SaveAthleteRequest::from_form(
            &athlete,
            &form_ids::NAME_ONLY,
            form(&athlete, &[(form_ids::NAME, "Marc")]),
        );
        assert_eq!(
            request,
            SaveAthleteRequest {
                id_deportista: "362".into(),
                name: Some("Marc".into()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn locked_inputs_are_ignored_even_when_they_differ() {
        let athlete = placed_athlete();
        let request = SaveAthleteRequest::from_form(
            &athlete,
            &form_ids::NAME_ONLY,
            form(&athlete, &[(form_ids::NATIONALITY, "Francia"), (form_ids::WORLD_YEARS, "2020")]),
        );
        assert_eq!(request.nationality, None);
        assert_eq!(request.world_participation, None);
        assert_eq!(request.name, None);
    }

    #[test]
    fn multi_field_edit_keeps_untouched_shapes() {
        let athlete = placed_athlete();
        let request = SaveAthleteRequest::from_form(
            &athlete,
            &form_ids::EDITABLE,
            form(&athlete, &[(form_ids::SURNAME, "Gasol Sáez"), (form_ids::OLYMPIC_COUNT, "4")]),
        );
        assert_eq!(request.surname.as_deref(), Some("Gasol Sáez"));
        assert_eq!(request.olympic_games, Some(Scalar::Text("4".into())));
        // Shown unchanged: the structured place and the missing fields stay out.
        assert_eq!(request.nationality, None);
        assert_eq!(request.name, None);
        assert_eq!(request.world_participation, None);
        assert_eq!(request.birth_date, None);
    }

    #[test]
    fn retyped_nationality_is_sent_as_text() {
        let athlete = placed_athlete();
        let request = SaveAthleteRequest::from_form(
            &athlete,
            &form_ids::EDITABLE,
            form(&athlete, &[(form_ids::NATIONALITY, "Andorra")]),
        );
        assert_eq!(request.nationality, Some(Nationality::Plain("Andorra".into())));
    }

    #[test]
    fn empty_inputs_for_missing_fields_are_not_sent() {
        let athlete = placed_athlete();
        let request = SaveAthleteRequest::from_form(&athlete, &form_ids::EDITABLE, form(&athlete, &[]));
        assert_eq!(request.olympic_games, None);
        assert_eq!(serde_json::to_value(&request).unwrap(), serde_json::json!({ "id_deportista": "362" }));
    }

    #[test]
    fn patch_skips_the_birth_date_and_absent_fields() {
        let request = SaveAthleteRequest {
            id_deportista: "362".into(),
            name: Some("Ana".into()),
            birth_date: Some(BirthDate::from_parts(1, 2, 2000)),
            ..Default::default()
        };
        let patch = serde_json::to_value(request.to_patch()).unwrap();
        assert_eq!(patch, serde_json::json!({ "nombre": "Ana" }));
    }
}
