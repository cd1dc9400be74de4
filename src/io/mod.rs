//! Command line, configuration, errors and file access

/// Command-line interface and run orchestration
pub mod cli;
/// Compile-time defaults
pub mod configuration;
/// Error types
pub mod error;
/// Image loading and saving
pub mod image;
/// Terminal progress display
pub mod progress;
