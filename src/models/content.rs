use serde::Deserialize;

use crate::core::error::ContentError;

// =============================================================================
// Site Content
// =============================================================================

/// All embedded site content, parsed once at startup.
///
/// Provided as context at the application root; presentational components
/// read from it. The random reveal never consults this model, it operates
/// purely on the rendered DOM child list.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteContent {
    /// Site metadata (title, tagline, contact).
    pub meta: SiteMeta,
    /// Header navigation links, in display order.
    #[serde(default)]
    pub nav: Vec<NavLink>,
    /// Footer social links, in display order.
    #[serde(default)]
    pub social: Vec<SocialLink>,
    /// Client testimonials for the feedback section, in display order.
    /// The first entry is the default-visible one before the reveal runs.
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
}

impl SiteContent {
    /// Parse site content from a TOML document.
    pub fn parse(raw: &str) -> Result<Self, ContentError> {
        Ok(toml::from_str(raw)?)
    }
}

/// Site metadata.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteMeta {
    /// Studio name, used for the brand link and page heading.
    pub title: String,
    /// Short tagline shown under the title.
    pub tagline: String,
    /// Longer lede paragraph for the hero section.
    #[serde(default)]
    pub lede: Option<String>,
    /// Contact email; the hero call-to-action renders only when set.
    #[serde(default)]
    pub contact_email: Option<String>,
}

/// A header navigation link.
#[derive(Clone, Debug, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// A footer social link.
#[derive(Clone, Debug, Deserialize)]
pub struct SocialLink {
    /// Accessible label (also the link title).
    pub label: String,
    /// Icon name, resolved by `components::icons::social_icon`.
    pub icon: String,
    pub href: String,
}

/// A client testimonial.
#[derive(Clone, Debug, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    /// Role or company, shown after the author name when present.
    #[serde(default)]
    pub role: Option<String>,
}
