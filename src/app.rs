//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::net::api::fetch_client_config;
use crate::state::config::ClientConfig;
use crate::state::i18n::{Locale, Translations};
use crate::util::color_scheme_bus::ColorSchemeBus;
use crate::util::site::SITE_NAME;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Server-rendered markup always uses the default config and English; the
/// fetched config and the browser locale replace them after hydration so the
/// first client render matches the SSR output.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = RwSignal::new(ClientConfig::default());
    let i18n = RwSignal::new(Translations::default());
    provide_context(config);
    provide_context(i18n);
    provide_context(ColorSchemeBus::new());

    Effect::new(move || {
        i18n.set(Translations::new(Locale::detect()));
        leptos::task::spawn_local(async move {
            if let Some(loaded) = fetch_client_config().await {
                let _ = config.try_set(loaded);
            }
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/site-footer.css"/>
        <Title text=SITE_NAME/>

        <Router>
            <main class="site-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=|| view! { <article class="site-content"></article> }/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
