//! Placeholder tags and the record-shape adapter that maps each tag to the
//! display string of an athlete field.

use crate::model::{Athlete, BirthDate};
use std::fmt;

/// Opening and closing delimiter of every placeholder token.
pub const DELIMITER: &str = "###";

/// A placeholder that templates may contain as `### <name> ###`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Id,
    Name,
    Surname,
    BirthDate,
    Nationality,
    WorldYears,
    OlympicCount,
}

impl Tag {
    pub const ALL: [Tag; 7] = [
        Tag::Id,
        Tag::Name,
        Tag::Surname,
        Tag::BirthDate,
        Tag::Nationality,
        Tag::WorldYears,
        Tag::OlympicCount,
    ];

    /// Name written between the delimiters.
    pub fn name(self) -> &'static str {
        match self {
            Tag::Id => "ID",
            Tag::Name => "NOMBRE",
            Tag::Surname => "APELLIDOS",
            Tag::BirthDate => "FECHA_NAC",
            Tag::Nationality => "NACIONALIDAD",
            Tag::WorldYears => "AÑOS_MUNDIAL",
            Tag::OlympicCount => "NUM PARTICIPACION J OLIMPICOS",
        }
    }

    pub fn from_name(name: &str) -> Option<Tag> {
        Tag::ALL.into_iter().find(|tag| tag.name() == name)
    }

    /// Full token, e.g. `### NOMBRE ###`.
    pub fn token(self) -> String {
        format!("{} {} {}", DELIMITER, self.name(), DELIMITER)
    }

    /// Display string of the field behind this tag, or `None` when the record
    /// lacks it.
    pub fn extract(self, record: &Athlete) -> Option<String> {
        let data = &record.data;
        match self {
            Tag::Id => record.id().map(str::to_string),
            Tag::Name => data.name.clone(),
            Tag::Surname => data.surname.clone(),
            Tag::BirthDate => data.birth_date.as_ref().and_then(BirthDate::display),
            Tag::Nationality => data.nationality.as_ref().map(ToString::to_string),
            Tag::WorldYears => data.world_participation.as_ref().map(ToString::to_string),
            Tag::OlympicCount => data.olympic_games.as_ref().map(ToString::to_string),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
