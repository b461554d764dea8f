use crate::config::Command;
use crate::core::operations::{self, NewPerson};
use crate::core::store::{DocumentStore, Loaded};
use crate::core::{Applied, PersonCollection, Presenter, Storage};
use crate::utils::error::{RegistryError, Result};

/// Runs one command against one data file: load, apply, then persist or present.
pub struct Registry<S: Storage> {
    store: DocumentStore<S>,
}

impl<S: Storage> Registry<S> {
    pub fn new(storage: S) -> Self {
        Self {
            store: DocumentStore::new(storage),
        }
    }

    pub fn store(&self) -> &DocumentStore<S> {
        &self.store
    }

    /// Returns whether the data file was written.
    pub fn run<P: Presenter>(&self, command: Command, presenter: &mut P) -> Result<bool> {
        let path = command.filename().to_string();
        tracing::debug!("Running {:?}", command);

        let people = match self.store.load(&path)? {
            Loaded::Invalid(violation) => {
                let err = RegistryError::from(violation);
                tracing::warn!("{} (Severity: {:?})", err, err.severity());
                presenter.diagnostic(&format!(
                    "{} ({})",
                    err.user_friendly_message(),
                    err.recovery_suggestion()
                ))?;
                PersonCollection::new()
            }
            loaded => loaded.into_collection(),
        };

        let applied = match command {
            Command::Add { person, .. } => operations::add(people, &NewPerson::from(person))?,
            Command::Select { surname, .. } => {
                let selected = operations::select(&surname, &people);
                tracing::debug!("{} of {} people match '{}'", selected.len(), people.len(), surname);
                let selected: Vec<_> = selected.into_iter().cloned().collect();
                presenter.show(&selected)?;
                Applied::unchanged(people)
            }
            Command::Display { .. } => {
                presenter.show(people.as_slice())?;
                Applied::unchanged(people)
            }
        };

        if applied.needs_persisting {
            self.store.save(&path, &applied.people)?;
        }
        Ok(applied.needs_persisting)
    }
}
