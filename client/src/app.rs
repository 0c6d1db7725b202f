//! Root application component and the page shell.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AppShell` is the composition root: it owns the page selector, the auth
//! state and the session mirror, hands them to the navigation bar as props,
//! and renders whichever page the router picks between the navigation bar
//! and the footer.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_query_map,
};

use crate::components::footer::Footer;
use crate::components::navigation::Navigation;
use crate::config::SupabaseConfig;
use crate::net::supabase::SupabaseClient;
use crate::router::route;
use crate::state::auth::AuthState;
use crate::state::page::{Page, PageSelector};
use crate::state::session::SessionMirror;

/// Query parameter that selects the first page rendered, e.g. `/?page=courses`.
pub const PAGE_QUERY_PARAM: &str = "page";

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
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/academy.css"/>
        <Title text="Academy"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AppShell/>
            </Routes>
        </Router>
    }
}

fn auth_client() -> Option<SupabaseClient> {
    match SupabaseConfig::from_build_env() {
        Ok(config) => Some(SupabaseClient::new(config)),
        Err(e) => {
            log::error!("auth disabled: {e}");
            None
        }
    }
}

/// Navigation bar, routed page, and footer around one page selector.
#[component]
pub fn AppShell() -> impl IntoView {
    let query = use_query_map();
    let initial = query.with_untracked(|q| initial_page(q.get(PAGE_QUERY_PARAM).as_deref()));
    let selector = PageSelector::new(initial);

    let auth = RwSignal::new(AuthState::default());
    let client = auth_client();
    provide_context(auth);
    provide_context(client.clone());

    let mirror = SessionMirror::new(auth);
    if let Some(client) = &client {
        mirror.subscribe(client);

        #[cfg(feature = "hydrate")]
        {
            let mirror = mirror.clone();
            let client = client.clone();
            leptos::task::spawn_local(async move {
                mirror.load_initial(&client).await;
            });
        }
    }
    on_cleanup(move || mirror.teardown());

    let on_logout = logout_callback(client, selector);

    view! {
        <div class="app-shell">
            <Navigation
                current_page=selector.signal()
                on_navigate=selector.navigate_callback()
                is_logged_in=Signal::derive(move || auth.get().is_logged_in)
                user=Signal::derive(move || auth.get().user)
                on_logout
            />
            <main class="app-main">{move || route(selector.current(), selector).render()}</main>
            <Footer/>
        </div>
    }
}

/// First page for a `?page=` value; absent or unknown values land on Home.
fn initial_page(slug: Option<&str>) -> Page {
    slug.map(Page::resolve).unwrap_or_default()
}

/// Logout for the navigation bar: sign out in the background, then return
/// home. Without an auth client, or outside the browser, it only returns home.
fn logout_callback(client: Option<SupabaseClient>, selector: PageSelector) -> Callback<()> {
    Callback::new(move |()| match &client {
        #[cfg(feature = "hydrate")]
        Some(client) => {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                crate::state::session::logout(&client, selector).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        Some(_) => {
            log::debug!("sign-out needs the browser; returning home");
            selector.navigate(Page::Home);
        }
        None => selector.navigate(Page::Home),
    })
}
