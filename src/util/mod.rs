// Utilities for the console adapter: configuration and key files

pub mod config;
pub mod file_ops;

pub use config::{DemoConfig, Direction};
