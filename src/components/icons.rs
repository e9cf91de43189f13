//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuDribbble as Dribbble, LuGithub as GitHub, LuGlobe as Globe, LuInstagram as Instagram,
        LuLinkedin as LinkedIn, LuMail as Mail, LuTwitter as Twitter,
    };
}

mod bootstrap {
    pub use icondata::{
        BsDribbble as Dribbble, BsEnvelope as Mail, BsGithub as GitHub, BsGlobe as Globe,
        BsInstagram as Instagram, BsLinkedin as LinkedIn, BsTwitter as Twitter,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(GITHUB, GitHub);
themed_icon!(TWITTER, Twitter);
themed_icon!(LINKEDIN, LinkedIn);
themed_icon!(INSTAGRAM, Instagram);
themed_icon!(DRIBBBLE, Dribbble);
themed_icon!(MAIL, Mail);
themed_icon!(GLOBE, Globe);

/// Resolve a social link's icon name from the site content.
///
/// Unknown names fall back to a generic globe.
pub fn social_icon(name: &str) -> Icon {
    match name {
        "github" => GITHUB,
        "twitter" | "x" => TWITTER,
        "linkedin" => LINKEDIN,
        "instagram" => INSTAGRAM,
        "dribbble" => DRIBBBLE,
        "mail" | "email" => MAIL,
        _ => GLOBE,
    }
}
