use serde::{Deserialize, Serialize};

/// Separator between the day, month and year tokens of a birthday.
pub const BIRTHDAY_SEPARATOR: char = '.';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub surname: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zodiac: Option<String>,
    pub birthday: Vec<String>,
    /// Keys the registry does not know about, kept so a rewrite loses nothing.
    /// They are written back after `birthday`, sorted alphabetically.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Person {
    pub fn new(surname: &str, name: &str, zodiac: Option<&str>, birthday: &str) -> Self {
        Self {
            surname: surname.to_string(),
            name: name.to_string(),
            zodiac: zodiac.map(str::to_string),
            birthday: split_birthday(birthday),
            extra: serde_json::Map::new(),
        }
    }

    pub fn birthday_text(&self) -> String {
        self.birthday.join(&BIRTHDAY_SEPARATOR.to_string())
    }
}

pub fn split_birthday(text: &str) -> Vec<String> {
    text.split(BIRTHDAY_SEPARATOR).map(str::to_string).collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonCollection {
    people: Vec<Person>,
}

impl PersonCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Person> {
        self.people.iter()
    }

    pub fn as_slice(&self) -> &[Person] {
        &self.people
    }

    pub fn push(&mut self, person: Person) {
        self.people.push(person);
    }

    pub(crate) fn people_mut(&mut self) -> &mut Vec<Person> {
        &mut self.people
    }
}

impl From<Vec<Person>> for PersonCollection {
    fn from(people: Vec<Person>) -> Self {
        Self { people }
    }
}

/// Result of a mutating operation: the authoritative collection and whether
/// it has to be written back before the run ends.
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub people: PersonCollection,
    pub needs_persisting: bool,
}

impl Applied {
    pub fn unchanged(people: PersonCollection) -> Self {
        Self {
            people,
            needs_persisting: false,
        }
    }

    pub fn changed(people: PersonCollection) -> Self {
        Self {
            people,
            needs_persisting: true,
        }
    }
}
