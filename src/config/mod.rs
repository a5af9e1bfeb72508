//! Configuration management for LogTail

pub mod settings;

pub use settings::{ServerConfig, ServerSettings};
