pub mod config;
pub mod error;
pub mod io;
pub mod manifest;
pub mod models;
pub mod parsing;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use config::ParserConfig;
pub use error::ParserConfigError;
pub use io::*;
pub use manifest::{IssueSummary, Manifest, build_manifest};
pub use models::*;
pub use parsing::{Parser, parse_document, parse_issue};
