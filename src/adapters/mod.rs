// Adapters layer: concrete implementations of the domain ports.

pub mod storage;
pub mod table;

pub use storage::LocalStorage;
pub use table::TablePresenter;
