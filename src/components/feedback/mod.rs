//! Feedback section component.
//!
//! Renders the `#feedback-list` container: child 0 is the section heading,
//! children 1.. are the testimonials. The stylesheet hides every testimonial
//! except the first, so the pre-script state shows exactly one. After mount,
//! the random reveal runs once and picks which testimonial stays visible.

use leptos::prelude::*;

use crate::config;
use crate::core::reveal_random;
use crate::models::SiteContent;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/feedback/feedback.module.css");

/// Run the reveal over the live `#feedback-list` container.
///
/// An absent container is a silent no-op, per the section contract.
fn run_reveal() {
    if let Some(list) = dom::element_by_id(config::FEEDBACK_LIST_ID) {
        let mut target = dom::ElementChildren::new(list);
        let mut random = dom::MathRandom;
        reveal_random(&mut target, &mut random);
    }
}

#[component]
pub fn Feedback() -> impl IntoView {
    let content = use_context::<SiteContent>().expect("SiteContent must be provided at root");

    // Reveal runs once, after the list exists in the DOM
    let revealed = StoredValue::new(false);
    Effect::new(move || {
        if !revealed.get_value() {
            revealed.set_value(true);
            run_reveal();
        }
    });

    let items = content
        .testimonials
        .iter()
        .enumerate()
        .map(|(position, testimonial)| {
            // The first testimonial is default-visible (DOM child index 1)
            let class = if position == 0 {
                format!("{} {}", css::item, css::itemDefault)
            } else {
                css::item.to_string()
            };
            let role = testimonial.role.clone();
            view! {
                <figure class=class>
                    <blockquote class=css::quote>{testimonial.quote.clone()}</blockquote>
                    <figcaption class=css::author>
                        {testimonial.author.clone()}
                        {role.map(|role| view! { <span class=css::role>{role}</span> })}
                    </figcaption>
                </figure>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class=css::section id="feedback">
            <div class=css::list id=config::FEEDBACK_LIST_ID>
                <h2 class=css::heading>"Kind words"</h2>
                {items}
            </div>
        </section>
    }
}
