//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`SiteContent`], [`SiteMeta`] - Embedded site content
//! - [`NavLink`], [`SocialLink`] - Header and footer links
//! - [`Testimonial`] - Feedback section entries

mod content;

pub use content::{NavLink, SiteContent, SiteMeta, SocialLink, Testimonial};
