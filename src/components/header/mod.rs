//! Site header component.
//!
//! Displays the studio name and the navigation links from the site content.

use leptos::prelude::*;

use crate::models::SiteContent;

stylance::import_crate_style!(css, "src/components/header/header.module.css");

#[component]
pub fn Header() -> impl IntoView {
    let content = use_context::<SiteContent>().expect("SiteContent must be provided at root");

    let links = content
        .nav
        .iter()
        .map(|link| {
            view! {
                <a class=css::navLink href=link.href.clone()>{link.label.clone()}</a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <header class=css::bar>
            <a class=css::brand href="#top">{content.meta.title.clone()}</a>
            <nav class=css::nav>{links}</nav>
        </header>
    }
}
