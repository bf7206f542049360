//! The filtered join across both collections.

use rosterdb::{person_key, Date, Error, Month, Registry};

use crate::fixtures::{event_for, person};

fn jan(day: u8, year: u16) -> Date {
    Date::new(day, Month::Jan, year).unwrap()
}

/// One matching event and one other-subject event inside the window
/// yield exactly one joined row.
#[test]
fn join_filters_by_window_subject_and_birth_date() {
    let ivanov = person("Ivanov", 7, 1);
    let math = event_for(&ivanov, "Math", 5, jan(15, 2020));
    let physics = event_for(&ivanov, "Physics", 4, jan(16, 2020));

    let registry = Registry::new(
        vec![ivanov.clone()],
        vec![math, physics],
        person_key,
        None,
    )
    .unwrap();

    let mut steps = 0;
    let rows = registry
        .get_filtered(ivanov.birth_date(), "Math", jan(10, 2020), jan(20, 2020), &mut steps)
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].subject(), "Math");
    assert_eq!(rows[0].group(), 7);
    assert_eq!(rows[0].person_name(), ivanov.name());
}

#[test]
fn join_excludes_events_outside_the_window() {
    let ivanov = person("Ivanov", 7, 1);
    let early = event_for(&ivanov, "Math", 5, jan(5, 2020));
    let late = event_for(&ivanov, "Math", 3, jan(25, 2020));

    let registry =
        Registry::new(vec![ivanov.clone()], vec![early, late], person_key, None).unwrap();

    let mut steps = 0;
    let rows = registry
        .get_filtered(ivanov.birth_date(), "Math", jan(10, 2020), jan(20, 2020), &mut steps)
        .unwrap();
    assert!(rows.is_empty());
}

#[test]
fn join_excludes_other_birth_dates() {
    let ivanov = person("Ivanov", 7, 1);
    let petrov = person("Petrov", 7, 2);
    let ivanov_math = event_for(&ivanov, "Math", 5, jan(15, 2020));
    let petrov_math = event_for(&petrov, "Math", 4, jan(15, 2020));

    let registry = Registry::new(
        vec![ivanov.clone(), petrov.clone()],
        vec![ivanov_math, petrov_math],
        person_key,
        None,
    )
    .unwrap();

    let mut steps = 0;
    let rows = registry
        .get_filtered(petrov.birth_date(), "Math", jan(10, 2020), jan(20, 2020), &mut steps)
        .unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].person_name(), petrov.name());
}

#[test]
fn reversed_window_is_rejected() {
    let ivanov = person("Ivanov", 7, 1);
    let registry =
        Registry::new(vec![ivanov.clone()], Vec::new(), person_key, None).unwrap();

    let mut steps = 0;
    let err = registry
        .get_filtered(ivanov.birth_date(), "Math", jan(20, 2020), jan(10, 2020), &mut steps)
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}

#[test]
fn empty_subject_is_rejected() {
    let ivanov = person("Ivanov", 7, 1);
    let registry =
        Registry::new(vec![ivanov.clone()], Vec::new(), person_key, None).unwrap();

    let mut steps = 0;
    let err = registry
        .get_filtered(ivanov.birth_date(), "", jan(10, 2020), jan(20, 2020), &mut steps)
        .unwrap_err();
    assert!(matches!(err, Error::Validation(_)));
}
