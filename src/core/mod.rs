//! Core behavioral logic for the site.
//!
//! This module provides:
//! - [`reveal_random`] and its [`RandomSource`] / [`RevealTarget`] seams
//! - [`error`] domain error types

pub mod error;
pub mod reveal;

pub use reveal::{reveal_random, RandomSource, RevealTarget};
