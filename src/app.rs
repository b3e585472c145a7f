mod animate;
#[cfg(feature = "hydrate")]
mod aos;
mod contact;
mod dom;
mod header;
mod homepage;
mod page_state;
mod reveal;
mod scroll;
mod skills;
mod splash;
mod typing;

use std::time::Duration;

use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::config::SiteConfig;
use crate::effects::Splash;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // the splash overlay is in the server-rendered page, so scrolling starts blocked
    let splash = Splash::new(Duration::from_millis(SiteConfig::default().splash_duration));
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link
                    rel="stylesheet"
                    href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css"
                />
                <link rel="stylesheet" href="https://unpkg.com/aos@2.3.1/dist/aos.css" />
                // must load before hydration so AOS.init is defined
                <script src="https://unpkg.com/aos@2.3.1/dist/aos.js"></script>
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class=splash.body_class()>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_context(SiteConfig::default());

    view! {
        <Title formatter=|title| format!("Portfolio - {title}") />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}
