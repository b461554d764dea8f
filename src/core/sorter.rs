use crate::domain::model::{Person, PersonCollection};
use crate::utils::error::{RegistryError, Result};
use chrono::NaiveDate;

/// Interprets birthday tokens as day, month and year.
pub fn parse_birthday(tokens: &[String]) -> std::result::Result<NaiveDate, String> {
    let [day, month, year] = tokens else {
        return Err(format!("expected 3 tokens, found {}", tokens.len()));
    };

    let day = numeric_token("day", day, 1, 2)?;
    let month = numeric_token("month", month, 1, 2)?;
    let year = numeric_token("year", year, 4, 4)?;
    if year == 0 {
        return Err("year 0000 is out of range".to_string());
    }

    NaiveDate::from_ymd_opt(year as i32, month, day)
        .ok_or_else(|| "no such calendar date".to_string())
}

fn numeric_token(
    label: &str,
    token: &str,
    min_digits: usize,
    max_digits: usize,
) -> std::result::Result<u32, String> {
    let digits_ok = (min_digits..=max_digits).contains(&token.len())
        && token.bytes().all(|b| b.is_ascii_digit());
    if !digits_ok {
        return Err(format!(
            "{} '{}' is not a {}-{} digit number",
            label, token, min_digits, max_digits
        ));
    }
    token
        .parse()
        .map_err(|e| format!("{} '{}': {}", label, token, e))
}

pub fn birthday_of(person: &Person) -> Result<NaiveDate> {
    parse_birthday(&person.birthday).map_err(|reason| RegistryError::MalformedDate {
        surname: person.surname.clone(),
        name: person.name.clone(),
        birthday: person.birthday_text(),
        reason,
    })
}

/// Orders the collection ascending by birthday. Every date is parsed before
/// anything moves, so on error the collection is left as it was.
pub fn sort_chronologically(people: &mut PersonCollection) -> Result<()> {
    let keys = people
        .iter()
        .map(birthday_of)
        .collect::<Result<Vec<_>>>()?;

    let mut keyed: Vec<(NaiveDate, Person)> = keys
        .into_iter()
        .zip(std::mem::take(people.people_mut()))
        .collect();
    keyed.sort_by_key(|(date, _)| *date);
    *people.people_mut() = keyed.into_iter().map(|(_, person)| person).collect();

    tracing::debug!("Sorted {} people by birthday", people.len());
    Ok(())
}
