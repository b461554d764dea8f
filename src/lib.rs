pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{LocalStorage, TablePresenter};
pub use config::{Cli, Command, RegistryConfig};
pub use core::{registry::Registry, store::DocumentStore};
pub use domain::model::{Person, PersonCollection};
pub use utils::error::{RegistryError, Result};
