use crate::core::sorter::{birthday_of, sort_chronologically};
use crate::domain::model::{Applied, Person, PersonCollection};
use crate::utils::error::Result;

/// Fields of a person as typed on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPerson {
    pub surname: String,
    pub name: String,
    pub zodiac: Option<String>,
    pub birthday: String,
}

/// Appends a person and re-sorts the collection by birthday.
///
/// The new birthday is checked before the collection is touched. A stored
/// record with an unusable birthday also rejects the add, since the result
/// could not be ordered.
pub fn add(mut people: PersonCollection, new_person: &NewPerson) -> Result<Applied> {
    let person = Person::new(
        &new_person.surname,
        &new_person.name,
        new_person.zodiac.as_deref(),
        &new_person.birthday,
    );
    birthday_of(&person)?;

    people.push(person);
    sort_chronologically(&mut people)?;

    tracing::info!(
        "Added {} {} ({} people total)",
        new_person.surname,
        new_person.name,
        people.len()
    );
    Ok(Applied::changed(people))
}

/// People whose surname equals `surname` exactly, in collection order.
pub fn select<'a>(surname: &str, people: &'a PersonCollection) -> Vec<&'a Person> {
    people.iter().filter(|person| person.surname == surname).collect()
}
