//! Utility modules for web and DOM operations.
//!
//! Provides:
//! - [`dom`] - Browser API access and the live-DOM reveal adapters

pub mod dom;
