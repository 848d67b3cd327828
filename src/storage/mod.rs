pub mod config;
pub mod preferences;

pub use preferences::JsonFileStore;
