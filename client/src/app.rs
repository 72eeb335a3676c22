//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SiteConfig;
use crate::content::{FONT_STYLESHEET_URL, OWNER_NAME};
use crate::pages::home::HomePage;
use crate::state::notification::NotificationState;

const FONT_AWESOME_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css";

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
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
/// Provides the site configuration and the notification stack to every
/// section, and routes `/` to the portfolio page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SiteConfig::default());
    provide_context(RwSignal::new(NotificationState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Link rel="preload" href=FONT_STYLESHEET_URL as_="style"/>
        <Stylesheet href=FONT_STYLESHEET_URL/>
        <Stylesheet href=FONT_AWESOME_URL/>
        <Title text=format!("{OWNER_NAME} | Portafolio")/>
        <Meta name="description" content="Portafolio personal: proyectos, servicios y contacto."/>

        <Router>
            <Routes fallback=|| "Página no encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
