pub mod operations;
pub mod registry;
pub mod sorter;
pub mod store;

pub use crate::domain::model::{Applied, Person, PersonCollection};
pub use crate::domain::ports::{Presenter, Storage};
pub use crate::utils::error::Result;
