use crate::domain::model::PersonCollection;
use crate::domain::ports::Storage;
use crate::domain::schema::{self, SchemaViolation};
use crate::utils::error::{RegistryError, Result};
use serde::Serialize;

/// What a load found at the given path.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded {
    Missing,
    Invalid(SchemaViolation),
    Valid(PersonCollection),
}

impl Loaded {
    /// The usable collection, or an empty one when there is none.
    pub fn into_collection(self) -> PersonCollection {
        match self {
            Loaded::Valid(people) => people,
            Loaded::Missing | Loaded::Invalid(_) => PersonCollection::new(),
        }
    }
}

pub struct DocumentStore<S: Storage> {
    storage: S,
}

impl<S: Storage> DocumentStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Reads and validates the document at `path`. Malformed JSON is an
    /// error; a well-formed document that fails validation is `Invalid`.
    pub fn load(&self, path: &str) -> Result<Loaded> {
        if !self.storage.exists(path) {
            tracing::debug!("No data file at {}, starting empty", path);
            return Ok(Loaded::Missing);
        }

        let raw = self.storage.read_file(path)?;
        let document: serde_json::Value =
            serde_json::from_slice(&raw).map_err(|source| RegistryError::ParseError {
                path: path.to_string(),
                source,
            })?;

        let mut reported = None;
        let valid = schema::validate(&document, |violation| reported = Some(violation.clone()));
        if let (false, Some(violation)) = (valid, reported) {
            tracing::debug!("Ignoring {}", path);
            return Ok(Loaded::Invalid(violation));
        }

        let people: PersonCollection = serde_json::from_value(document)?;
        tracing::debug!("Loaded {} people from {}", people.len(), path);
        Ok(Loaded::Valid(people))
    }

    /// Overwrites `path` with the collection, indented by four spaces.
    pub fn save(&self, path: &str, people: &PersonCollection) -> Result<()> {
        let data = to_document(people)?;
        self.storage.write_file(path, &data)?;
        tracing::info!("Saved {} people to {}", people.len(), path);
        Ok(())
    }
}

/// serde_json leaves non-ASCII characters unescaped.
pub fn to_document(people: &PersonCollection) -> Result<Vec<u8>> {
    let mut data = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut data, formatter);
    people.serialize(&mut serializer)?;
    Ok(data)
}
