//! Client-side ordering of athlete lists.
//!
//! Each sortable field has its own policy: a key extractor and a direction.
//! Text fields sort ascending with a locale-style comparison, counts sort
//! descending, birth dates ascending by calendar date. Sorting is stable and in
//! place. Records without a usable key always go after the ones that have one,
//! whatever the direction.

use crate::model::{Athlete, BirthDate};
use chrono::{Days, Months, NaiveDate};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Name,
    Surname,
    BirthDate,
    Nationality,
    WorldYears,
    OlympicCount,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Comparable value extracted from a record.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue {
    Text(String),
    Number(i64),
    Date(NaiveDate),
}

impl SortValue {
    fn compare(&self, other: &SortValue) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => locale_cmp(a, b),
            (SortValue::Number(a), SortValue::Number(b)) => a.cmp(b),
            (SortValue::Date(a), SortValue::Date(b)) => a.cmp(b),
            // A policy always extracts a single variant.
            _ => Ordering::Equal,
        }
    }
}

/// Key extractor plus direction for one field.
#[derive(Clone, Copy)]
pub struct SortPolicy {
    pub key: fn(&Athlete) -> Option<SortValue>,
    pub direction: Direction,
}

impl SortPolicy {
    /// Orders two records: present keys by `direction`, missing keys last.
    pub fn compare(&self, a: &Athlete, b: &Athlete) -> Ordering {
        match ((self.key)(a), (self.key)(b)) {
            (Some(a), Some(b)) => match self.direction {
                Direction::Ascending => a.compare(&b),
                Direction::Descending => b.compare(&a),
            },
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::Name,
        SortKey::Surname,
        SortKey::BirthDate,
        SortKey::Nationality,
        SortKey::WorldYears,
        SortKey::OlympicCount,
    ];

    pub fn policy(self) -> SortPolicy {
        match self {
            SortKey::Name => SortPolicy {
                key: |a| a.data.name.clone().map(SortValue::Text),
                direction: Direction::Ascending,
            },
            SortKey::Surname => SortPolicy {
                key: |a| a.data.surname.clone().map(SortValue::Text),
                direction: Direction::Ascending,
            },
            SortKey::BirthDate => SortPolicy {
                key: |a| birth_date_key(a.data.birth_date.as_ref()?).map(SortValue::Date),
                direction: Direction::Ascending,
            },
            SortKey::Nationality => SortPolicy {
                key: |a| a.data.nationality.as_ref().map(|n| SortValue::Text(n.to_string())),
                direction: Direction::Ascending,
            },
            SortKey::WorldYears => SortPolicy {
                key: |a| a.data.world_participation.as_ref()?.as_integer().map(SortValue::Number),
                direction: Direction::Descending,
            },
            SortKey::OlympicCount => SortPolicy {
                key: |a| a.data.olympic_games.as_ref()?.as_integer().map(SortValue::Number),
                direction: Direction::Descending,
            },
        }
    }

    /// Field name used by the menu and in URLs.
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "nombre",
            SortKey::Surname => "apellidos",
            SortKey::BirthDate => "fecha_nacimiento",
            SortKey::Nationality => "nacionalidad",
            SortKey::WorldYears => "años_mundial",
            SortKey::OlympicCount => "num_jjoo",
        }
    }

    /// Button label.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::Name => "Nombre",
            SortKey::Surname => "Apellidos",
            SortKey::BirthDate => "Fecha de nacimiento",
            SortKey::Nationality => "Nacionalidad",
            SortKey::WorldYears => "Años en mundiales",
            SortKey::OlympicCount => "Nº de Juegos Olímpicos",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("campo de ordenación desconocido: {}", s))
    }
}

/// Sorts `records` in place by the policy of `key`.
pub fn sort(records: &mut [Athlete], key: SortKey) {
    let policy = key.policy();
    records.sort_by(|a, b| policy.compare(a, b));
}

/// Sorts `records` in place by `key`, overriding the field's direction.
pub fn sort_with(records: &mut [Athlete], key: SortKey, direction: Direction) {
    let policy = SortPolicy {
        direction,
        ..key.policy()
    };
    records.sort_by(|a, b| policy.compare(a, b));
}

/// Calendar date of `(year, month - 1, day)`, with out-of-range months and days
/// rolling over into the following months and years.
fn birth_date_key(date: &BirthDate) -> Option<NaiveDate> {
    let (day, month, year) = date.numeric_parts()?;
    let start = NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, 1, 1)?;
    let with_months = shift_months(start, month.checked_sub(1)?)?;
    shift_days(with_months, day.checked_sub(1)?)
}

fn shift_months(date: NaiveDate, months: i64) -> Option<NaiveDate> {
    let amount = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        date.checked_add_months(amount)
    } else {
        date.checked_sub_months(amount)
    }
}

fn shift_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    let amount = Days::new(days.unsigned_abs());
    if days >= 0 {
        date.checked_add_days(amount)
    } else {
        date.checked_sub_days(amount)
    }
}

/// Case- and accent-insensitive comparison, falling back to the raw strings
/// when the folded forms are equal.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    fold(a).cmp(&fold(b)).then_with(|| a.cmp(b))
}

fn fold(text: &str) -> String {
    text.chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'á' | 'à' | 'ä' | 'â' | 'ã' | 'å' => 'a',
            'é' | 'è' | 'ë' | 'ê' => 'e',
            'í' | 'ì' | 'ï' | 'î' => 'i',
            'ó' | 'ò' | 'ö' | 'ô' | 'õ' => 'o',
            'ú' | 'ù' | 'ü' | 'û' => 'u',
            'ñ' => 'n',
            'ç' => 'c',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AthleteData, Nationality, Scalar, WorldParticipation};

    fn named(name: &str) -> Athlete {
        Athlete::new(
            name,
            AthleteData {
                name: Some(name.into()),
                ..Default::default()
            },
        )
    }

    fn names(records: &[Athlete]) -> Vec<&str> {
        records.iter().filter_map(|a| a.data.name.as_deref()).collect()
    }

    fn with_olympics(name: &str, count: Scalar) -> Athlete {
        let mut athlete = named(name);
        athlete.data.olympic_games = Some(count);
        athlete
    }

    fn born(name: &str, day: i64, month: i64, year: i64) -> Athlete {
        let mut athlete = named(name);
        athlete.data.birth_date = Some(BirthDate::from_parts(day, month, year));
        athlete
    }

    #[test]
    fn names_sort_alphabetically() {
        let mut records = vec![named("Zoe"), named("Ana"), named("Carlos")];
        sort(&mut records, SortKey::Name);
        assert_eq!(names(&records), vec!["Ana", "Carlos", "Zoe"]);
    }

    #[test]
    fn text_comparison_ignores_case_and_accents() {
        let mut records = vec![named("Óscar"), named("alberto"), named("Nuria"), named("Ñoño"), named("Beatriz")];
        sort(&mut records, SortKey::Name);
        assert_eq!(names(&records), vec!["alberto", "Beatriz", "Ñoño", "Nuria", "Óscar"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        for key in SortKey::ALL {
            let mut records = vec![
                with_olympics("Zoe", Scalar::Integer(1)),
                born("Ana", 3, 4, 1990),
                with_olympics("Carlos", Scalar::Text("4".into())),
                named("Berta"),
            ];
            sort(&mut records, key);
            let once = records.clone();
            sort(&mut records, key);
            assert_eq!(records, once, "{key} is not idempotent");
        }
    }

    #[test]
    fn equal_keys_keep_their_order() {
        let mut records = vec![
            with_olympics("Primero", Scalar::Integer(2)),
            with_olympics("Otro", Scalar::Integer(5)),
            with_olympics("Segundo", Scalar::Text("2".into())),
        ];
        sort(&mut records, SortKey::OlympicCount);
        assert_eq!(names(&records), vec!["Otro", "Primero", "Segundo"]);
    }

    #[test]
    fn counts_sort_descending_and_missing_go_last() {
        let mut records = vec![
            named("Sin dato"),
            with_olympics("Uno", Scalar::Integer(1)),
            with_olympics("Tres", Scalar::Text("3".into())),
            with_olympics("Texto", Scalar::Text("ninguno".into())),
            with_olympics("Dos", Scalar::Float(2.0)),
        ];
        sort(&mut records, SortKey::OlympicCount);
        assert_eq!(names(&records), vec!["Tres", "Dos", "Uno", "Sin dato", "Texto"]);

        sort_with(&mut records, SortKey::OlympicCount, Direction::Ascending);
        assert_eq!(names(&records), vec!["Uno", "Dos", "Tres", "Sin dato", "Texto"]);
    }

    #[test]
    fn world_years_use_the_first_year_of_a_list() {
        let mut a = named("Lista");
        a.data.world_participation = Some(WorldParticipation::Years(vec![
            Scalar::Integer(1995),
            Scalar::Integer(2004),
        ]));
        let mut b = named("Suelto");
        b.data.world_participation = Some(WorldParticipation::Single(Scalar::Integer(2001)));
        let mut records = vec![a, b];
        sort(&mut records, SortKey::WorldYears);
        assert_eq!(names(&records), vec!["Suelto", "Lista"]);
    }

    #[test]
    fn birth_dates_sort_by_calendar() {
        let mut records = vec![
            born("Tarde", 1, 1, 2001),
            born("Pronto", 31, 12, 1989),
            born("Medio", 15, 6, 1995),
        ];
        sort(&mut records, SortKey::BirthDate);
        assert_eq!(names(&records), vec!["Pronto", "Medio", "Tarde"]);
    }

    #[test]
    fn out_of_range_date_parts_roll_over() {
        // 32/12/1999 is 1/1/2000; month 13 of 1999 is January 2000.
        let rolled = birth_date_key(&BirthDate::from_parts(32, 12, 1999));
        assert_eq!(rolled, NaiveDate::from_ymd_opt(2000, 1, 1));
        let month = birth_date_key(&BirthDate::from_parts(1, 13, 1999));
        assert_eq!(month, NaiveDate::from_ymd_opt(2000, 1, 1));
        let zero_day = birth_date_key(&BirthDate::from_parts(0, 3, 2000));
        assert_eq!(zero_day, NaiveDate::from_ymd_opt(2000, 2, 29));
    }

    #[test]
    fn extreme_date_parts_sort_as_missing() {
        let mut huge = named("Huge");
        huge.data.birth_date = Some(BirthDate::Parts {
            day: Some(Scalar::Integer(1)),
            month: Some(Scalar::Float(-1e300)),
            year: Some(Scalar::Integer(2000)),
        });
        let lowest = born("Lowest", i64::MIN, 1, 2000);
        let mut records = vec![huge, lowest, born("Ana", 1, 1, 1990)];

        sort(&mut records, SortKey::BirthDate);

        assert_eq!(names(&records), vec!["Ana", "Huge", "Lowest"]);
    }

    #[test]
    fn nationality_sorts_by_display_form() {
        let mut a = named("Lugar");
        a.data.nationality = Some(Nationality::Place {
            country: Some("España".into()),
            region: Some("Andalucía".into()),
            province: None,
        });
        let mut b = named("Plano");
        b.data.nationality = Some(Nationality::Plain("Alemania".into()));
        let mut records = vec![a, b];
        sort(&mut records, SortKey::Nationality);
        assert_eq!(names(&records), vec!["Plano", "Lugar"]);
    }

    #[test]
    fn keys_parse_from_their_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>(), Ok(key));
        }
        assert!("email".parse::<SortKey>().is_err());
    }
}
