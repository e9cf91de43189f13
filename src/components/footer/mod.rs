//! Site footer component.
//!
//! Displays the social links with themed icons, the contact email, and the
//! copyright line.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::SiteContent;

stylance::import_crate_style!(css, "src/components/footer/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let content = use_context::<SiteContent>().expect("SiteContent must be provided at root");

    let social = content
        .social
        .iter()
        .map(|link| {
            view! {
                <a
                    class=css::socialLink
                    href=link.href.clone()
                    title=link.label.clone()
                    target="_blank"
                    rel="noreferrer"
                >
                    <Icon icon=ic::social_icon(&link.icon) />
                </a>
            }
        })
        .collect::<Vec<_>>();

    let year = js_sys::Date::new_0().get_full_year();
    let copyright = format!("© {} {}", year, content.meta.title);

    view! {
        <footer class=css::footer>
            <div class=css::social>{social}</div>
            {content.meta.contact_email.clone().map(|email| {
                let href = format!("mailto:{}", email);
                view! { <a class=css::contact href=href>{email}</a> }
            })}
            <p class=css::copyright>{copyright}</p>
        </footer>
    }
}
