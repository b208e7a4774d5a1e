use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::WaitlistSettings;
use crate::core::settings::SETTINGS_ELEMENT_ID;
use crate::ui::pages::{LandingPage, NotFoundPage};
use crate::ui::provide_waitlist_client;

/// HTML document around [`App`].
///
/// The server puts its [`WaitlistSettings`] into context before rendering;
/// they are serialized into the head so the browser build submits the same
/// way the server rendered.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings = use_context::<WaitlistSettings>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                <script type="application/json" id=SETTINGS_ELEMENT_ID inner_html=settings.to_json()></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="antialiased">
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    // Server: settings come from context. Browser: from the shell's JSON block.
    let settings = use_context::<WaitlistSettings>().unwrap_or_else(WaitlistSettings::load);
    provide_waitlist_client(&settings);

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/simpleauth.css"/>

        <Title text="SimpleAuth"/>

        <Router>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("") view=LandingPage/>
                </Routes>
            </main>
        </Router>
    }
}
