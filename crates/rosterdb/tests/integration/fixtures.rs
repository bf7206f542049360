//! Test data builders with seeded random generation for
//! reproducibility.

use rosterdb::{Date, Event, Month, Person, PersonName};

/// Simple pseudo-random number generator (Xorshift64) for reproducible
/// data without external dependencies.
pub struct Rng {
    state: u64,
}

impl Rng {
    pub const fn new(seed: u64) -> Self {
        Self { state: if seed == 0 { 0x853c_49e6_748f_ea9b } else { seed } }
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }

    pub fn next_range(&mut self, max: u64) -> u64 {
        if max == 0 {
            return 0;
        }
        self.next_u64() % max
    }
}

pub fn person(last: &str, group: i32, birth_day: u8) -> Person {
    Person::new(
        PersonName::new(last, "Ivan", "Ivanovich"),
        group,
        Date::new(birth_day, Month::Jan, 2010).unwrap(),
    )
    .unwrap()
}

pub fn event_for(person: &Person, subject: &str, score: i32, date: Date) -> Event {
    Event::new(person.name().clone(), person.birth_date(), subject, score, date).unwrap()
}

/// A pool of distinct people with seeded last names.
pub fn people_pool(rng: &mut Rng, count: usize) -> Vec<Person> {
    (0..count)
        .map(|i| {
            let group = 1 + (rng.next_range(11)) as i32;
            person(&format!("Person{i:03}"), group, 1 + (i % 28) as u8)
        })
        .collect()
}
