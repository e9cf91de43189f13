//! Custom error types for the application.
//!
//! Provides structured error handling for each domain:
//!
//! - [`ContentError`] - Embedded site-content parsing errors

use thiserror::Error;

/// Errors from parsing the embedded site content.
///
/// The content asset is embedded at compile time, so a parse failure is a
/// startup condition, surfaced once through the root error boundary.
#[derive(Debug, Clone, Error)]
pub enum ContentError {
    /// The embedded TOML asset is malformed.
    #[error("invalid site content: {0}")]
    Parse(#[from] toml::de::Error),
}
