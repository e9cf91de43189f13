//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Text assets are loaded at compile time using `include_str!`.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Embedded site content: metadata, navigation, social links, testimonials.
pub const SITE_CONTENT: &str = include_str!("../assets/content/site.toml");

// =============================================================================
// DOM Identifiers
// =============================================================================

/// Mount point for the WASM application in `index.html`.
pub const APP_MOUNT_ID: &str = "app";

/// Container element holding the feedback heading and testimonial items.
/// Child 0 is the section heading; children 1.. are testimonials.
pub const FEEDBACK_LIST_ID: &str = "feedback-list";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
