//! Root application module.
//!
//! Parses the embedded site content, provides it as context, and composes
//! the page sections inside an error boundary following Leptos conventions.

use leptos::prelude::*;

use crate::components::{Feedback, Footer, Header, Hero};
use crate::config;
use crate::models::SiteContent;

/// Root application component with error boundary.
///
/// This component:
/// - Parses the embedded site content once
/// - Wraps the page in an ErrorBoundary for graceful error handling
/// - Renders the page sections when the content is valid
///
/// A malformed content asset renders the fallback instead of a blank page.
#[component]
pub fn App() -> impl IntoView {
    let content = SiteContent::parse(config::SITE_CONTENT);

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #faf8f5;
                    color: #2b2b2b;
                    font-family: Georgia, serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #b4552d; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #6b6b6b; margin-bottom: 2rem;">
                            "An unexpected error occurred. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #f0ece6;
                            padding: 1rem;
                            border-radius: 4px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #6b6b6b;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #b4552d;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #2b2b2b;
                                color: #faf8f5;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 4px;
                                cursor: pointer;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {content.map(|content| view! { <Page content /> })}
        </ErrorBoundary>
    }
}

/// Page component composing the site sections.
///
/// Provides the parsed [`SiteContent`] as context so sections can read it
/// without prop drilling.
#[component]
fn Page(content: SiteContent) -> impl IntoView {
    provide_context(content);

    view! {
        <Header />
        <main>
            <Hero />
            <Feedback />
        </main>
        <Footer />
    }
}
