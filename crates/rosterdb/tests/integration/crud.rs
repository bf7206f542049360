//! CRUD round-trips across the composed repositories.

use rosterdb::{person_key, Date, Month, PersonRepo, Registry};

use crate::fixtures::{event_for, people_pool, person, Rng};

#[test]
fn people_round_trip_leaves_an_empty_repository() {
    let mut rng = Rng::new(42);
    let rows = people_pool(&mut rng, 20);
    let mut repo = PersonRepo::from_rows(rows.clone(), person_key, None).unwrap();

    // delete in a scrambled order
    let mut order: Vec<usize> = (0..rows.len()).collect();
    for i in (1..order.len()).rev() {
        let j = (rng.next_range((i + 1) as u64)) as usize;
        order.swap(i, j);
    }

    for i in order {
        assert!(repo.delete(&rows[i]).unwrap());
    }

    assert_eq!(repo.size(), 0);
    assert!(repo.rows().is_empty());
}

#[test]
fn registry_add_and_search_person() {
    let mut registry = Registry::new(Vec::new(), Vec::new(), person_key, Some(32)).unwrap();

    let ivanov = person("Ivanov", 7, 1);
    assert!(registry.add_person(&ivanov).unwrap());
    assert!(!registry.add_person(&ivanov).unwrap());

    let key = person_key(ivanov.name(), &ivanov.birth_date());
    let mut steps = 0;
    assert_eq!(registry.search_person(&key, &mut steps), Some(&ivanov));
    assert!(steps >= 1);
    assert_eq!(registry.search_person("Nobody At All 01 jan 2000", &mut steps), None);
}

#[test]
fn event_lifecycle_through_the_registry() {
    let ivanov = person("Ivanov", 7, 1);
    let mut registry =
        Registry::new(vec![ivanov.clone()], Vec::new(), person_key, None).unwrap();

    let date = Date::new(10, Month::Feb, 2020).unwrap();
    let math = event_for(&ivanov, "Math", 5, date);

    assert!(registry.add_event(math.clone()).unwrap());
    assert!(!registry.add_event(math.clone()).unwrap());
    assert_eq!(registry.events_count(), 1);

    let key = person_key(ivanov.name(), &ivanov.birth_date());
    let mut steps = 0;
    let found = registry.search_events(&key, &mut steps).unwrap();
    assert_eq!(found, vec![math.clone()]);

    assert!(registry.delete_event(&math).unwrap());
    assert_eq!(registry.events_count(), 0);
}

#[test]
fn delete_events_clears_a_whole_bucket() {
    let ivanov = person("Ivanov", 7, 1);
    let mut registry =
        Registry::new(vec![ivanov.clone()], Vec::new(), person_key, None).unwrap();

    for (i, subject) in ["Math", "Physics", "History"].iter().enumerate() {
        let date = Date::new(10 + i as u8, Month::Feb, 2020).unwrap();
        registry.add_event(event_for(&ivanov, subject, 4, date)).unwrap();
    }
    assert_eq!(registry.events_count(), 3);

    let key = person_key(ivanov.name(), &ivanov.birth_date());
    assert_eq!(registry.delete_events(&key).unwrap(), 3);
    assert_eq!(registry.events_count(), 0);

    // the person is now deletable
    assert!(registry.delete_person(&ivanov).unwrap());
    assert_eq!(registry.people_count(), 0);
}

#[test]
fn row_sets_are_exposed_in_row_id_order() {
    let rows = vec![person("Ivanov", 7, 1), person("Petrov", 8, 2)];
    let registry = Registry::new(rows.clone(), Vec::new(), person_key, None).unwrap();

    assert_eq!(registry.people(), rows.as_slice());
    assert!(registry.events().is_empty());
}

#[test]
fn diagnostic_dumps_cover_all_structures() {
    let ivanov = person("Ivanov", 7, 1);
    let date = Date::new(10, Month::Feb, 2020).unwrap();
    let math = event_for(&ivanov, "Math", 5, date);
    let registry =
        Registry::new(vec![ivanov.clone()], vec![math], person_key, None).unwrap();

    assert!(registry.render_people_index(true).contains("Ivanov"));
    assert!(registry.render_key_tree().contains("Ivanov"));
    assert!(registry.render_date_tree().contains("10 feb 2020"));
}
