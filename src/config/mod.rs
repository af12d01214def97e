//! Configuration: where the store lives and where imports come from.

pub mod settings;

pub use settings::{default_config_dir, ensure_config_dir, Settings};
