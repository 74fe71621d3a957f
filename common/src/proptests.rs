//! Property-based tests over generated athletes.

use crate::model::{Athlete, AthleteData, BirthDate, Nationality, Scalar, WorldParticipation};
use crate::sort::{Direction, SortKey, sort, sort_with};
use crate::template::{Tag, View, registry, substitute, unresolved_tokens};
use proptest::prelude::*;

/// Free text as typed in the form. Never contains `#`, so a value can not
/// spell a token of its own.
fn text() -> impl Strategy<Value = String> {
    "[A-Za-z0-9ÁÉÍÓÚáéíóúñÑü ,./-]{0,12}"
}

fn scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        any::<i64>().prop_map(Scalar::Integer),
        (-1.0e9f64..1.0e9).prop_map(Scalar::Float),
        text().prop_map(Scalar::Text),
    ]
}

fn birth_date() -> impl Strategy<Value = BirthDate> {
    prop_oneof![
        (1i64..=31, 1i64..=12, 1900i64..=2020)
            .prop_map(|(day, month, year)| BirthDate::from_parts(day, month, year)),
        (
            prop::option::of(scalar()),
            prop::option::of(scalar()),
            prop::option::of(scalar()),
        )
            .prop_map(|(day, month, year)| BirthDate::Parts { day, month, year }),
        text().prop_map(BirthDate::Text),
    ]
}

fn nationality() -> impl Strategy<Value = Nationality> {
    prop_oneof![
        text().prop_map(Nationality::Plain),
        (
            prop::option::of(text()),
            prop::option::of(text()),
            prop::option::of(text()),
        )
            .prop_map(|(country, region, province)| Nationality::Place {
                country,
                region,
                province,
            }),
    ]
}

fn world_participation() -> impl Strategy<Value = WorldParticipation> {
    prop_oneof![
        prop::collection::vec(scalar(), 0..4).prop_map(WorldParticipation::Years),
        scalar().prop_map(WorldParticipation::Single),
    ]
}

fn athlete_data() -> impl Strategy<Value = AthleteData> {
    (
        prop::option::of(text()),
        prop::option::of(text()),
        prop::option::of(birth_date()),
        prop::option::of(nationality()),
        prop::option::of(world_participation()),
        prop::option::of(scalar()),
    )
        .prop_map(
            |(name, surname, birth_date, nationality, world_participation, olympic_games)| AthleteData {
                name,
                surname,
                birth_date,
                nationality,
                world_participation,
                olympic_games,
                extra: Default::default(),
            },
        )
}

fn athlete() -> impl Strategy<Value = Athlete> {
    ("[a-z0-9]{0,8}", athlete_data()).prop_map(|(id, data)| Athlete::new(id, data))
}

fn sort_key() -> impl Strategy<Value = SortKey> {
    prop::sample::select(SortKey::ALL.to_vec())
}

/// Every known token, once, separated by plain text.
fn every_token() -> String {
    Tag::ALL
        .iter()
        .map(|tag| tag.token())
        .collect::<Vec<_>>()
        .join(" | ")
}

proptest! {
    #[test]
    fn substitution_leaves_no_tokens(record in athlete()) {
        let rendered = substitute(&every_token(), &record).unwrap();
        prop_assert!(unresolved_tokens(&rendered).is_empty(), "tokens left in {}", rendered);
    }

    #[test]
    fn substitution_shows_every_display_string(record in athlete()) {
        let rendered = substitute(&every_token(), &record).unwrap();
        for tag in Tag::ALL {
            if let Some(value) = tag.extract(&record) {
                prop_assert!(rendered.contains(&value), "{} missing in {}", value, rendered);
            }
        }
    }

    #[test]
    fn every_view_resolves_its_tokens(record in athlete()) {
        for view in View::ALL {
            let row = registry().render_row(view, &record).unwrap();
            prop_assert!(unresolved_tokens(&row).is_empty());
        }
    }

    #[test]
    fn sorting_twice_changes_nothing(records in prop::collection::vec(athlete(), 0..12), key in sort_key()) {
        let mut once = records;
        sort(&mut once, key);
        let mut twice = once.clone();
        sort(&mut twice, key);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn sorting_keeps_every_record(records in prop::collection::vec(athlete(), 0..12), key in sort_key()) {
        let mut sorted = records.clone();
        sort_with(&mut sorted, key, Direction::Descending);
        prop_assert_eq!(sorted.len(), records.len());
        for record in &records {
            prop_assert!(sorted.contains(record));
        }
    }
}
