//! Configuration and dependency wiring for the search admin service.

mod dependencies;
mod settings;

pub use dependencies::Dependencies;
pub use settings::AppConfig;
