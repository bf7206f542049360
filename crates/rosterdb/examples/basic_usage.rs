//! Basic usage: bulk load, mutate, query, and dump diagnostics.

use rosterdb::{person_key, Date, Event, Month, Person, PersonName, Registry};

fn main() -> Result<(), rosterdb::Error> {
    let ivanov = Person::new(
        PersonName::new("Ivanov", "Ivan", "Ivanovich"),
        7,
        Date::new(1, Month::Jan, 2010)?,
    )?;
    let petrov = Person::new(
        PersonName::new("Petrov", "Petr", "Petrovich"),
        8,
        Date::new(2, Month::Feb, 2011)?,
    )?;

    let math = Event::new(
        ivanov.name().clone(),
        ivanov.birth_date(),
        "Math",
        5,
        Date::new(15, Month::Jan, 2020)?,
    )?;

    let mut registry =
        Registry::new(vec![ivanov.clone(), petrov], vec![math], person_key, None)?;

    // add another event, then query the person's bucket
    let physics = Event::new(
        ivanov.name().clone(),
        ivanov.birth_date(),
        "Physics",
        4,
        Date::new(18, Month::Jan, 2020)?,
    )?;
    registry.add_event(physics)?;

    let key = person_key(ivanov.name(), &ivanov.birth_date());
    let mut steps = 0;
    for event in registry.search_events(&key, &mut steps)? {
        println!("{event}");
    }
    println!("found in {steps} steps");

    // filtered join over a date window
    let mut steps = 0;
    let joined = registry.get_filtered(
        ivanov.birth_date(),
        "Math",
        Date::new(10, Month::Jan, 2020)?,
        Date::new(20, Month::Jan, 2020)?,
        &mut steps,
    )?;
    for row in joined {
        println!("{row}");
    }

    // structural dumps
    println!("-- key tree --\n{}", registry.render_key_tree());
    println!("-- people index --\n{}", registry.render_people_index(true));

    Ok(())
}
