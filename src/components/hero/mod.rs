//! Hero section component.
//!
//! Leads the page with the studio title, tagline, and an optional contact
//! call-to-action (rendered only when a contact email is configured).

use leptos::prelude::*;

use crate::models::SiteContent;

stylance::import_crate_style!(css, "src/components/hero/hero.module.css");

#[component]
pub fn Hero() -> impl IntoView {
    let content = use_context::<SiteContent>().expect("SiteContent must be provided at root");
    let meta = content.meta.clone();

    view! {
        <section class=css::hero id="top">
            <h1 class=css::title>{meta.title}</h1>
            <p class=css::tagline>{meta.tagline}</p>
            {meta.lede.map(|lede| view! { <p class=css::lede>{lede}</p> })}
            {meta.contact_email.map(|email| {
                view! {
                    <a class=css::cta href=format!("mailto:{}", email)>"Start a project"</a>
                }
            })}
        </section>
    }
}
