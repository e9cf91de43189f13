//! UI components built with Leptos.
//!
//! - [`feedback`] - Testimonial list with the random reveal
//! - [`footer`] - Social links, contact, copyright
//! - [`header`] - Brand and navigation
//! - [`hero`] - Title, tagline, contact call-to-action
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod feedback;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;

pub use feedback::Feedback;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
