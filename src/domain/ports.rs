use crate::domain::model::Person;
use crate::utils::error::Result;

pub trait Storage {
    fn exists(&self, path: &str) -> bool;
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

/// User-facing output: the people table and any diagnostics about the data file.
pub trait Presenter {
    fn show(&mut self, people: &[Person]) -> Result<()>;
    fn diagnostic(&mut self, message: &str) -> Result<()>;
}
