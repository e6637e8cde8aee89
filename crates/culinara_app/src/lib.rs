//! Culinara app shell: file-backed storage, logging, the global error hook,
//! and bootstrap wiring for the stores.
mod bootstrap;
mod error_hook;
mod logging;
mod storage;

pub use bootstrap::{bootstrap, default_data_dir, App};
pub use error_hook::install_error_hook;
pub use logging::{init_logging, LogDestination};
pub use storage::JsonFileStorage;
