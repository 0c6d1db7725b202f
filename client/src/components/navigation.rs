//! Site header: brand, page links, and the session area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered on every page by the app shell. It never changes state itself;
//! page changes and logout go through the callbacks it is given.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use leptos::prelude::*;

use crate::net::types::User;
use crate::state::page::Page;

fn link_class(current: Page, page: Page) -> &'static str {
    if current == page { "nav__link nav__link--active" } else { "nav__link" }
}

fn user_label(user: Option<&User>) -> String {
    user.map(|u| u.display_name().to_owned()).unwrap_or_default()
}

#[component]
pub fn Navigation(
    #[prop(into)] current_page: Signal<Page>,
    on_navigate: Callback<Page>,
    #[prop(into)] is_logged_in: Signal<bool>,
    #[prop(into)] user: Signal<Option<User>>,
    on_logout: Callback<()>,
) -> impl IntoView {
    let menu_open = RwSignal::new(false);
    let go = move |page: Page| {
        menu_open.set(false);
        on_navigate.run(page);
    };

    let links = Page::ALL
        .into_iter()
        .filter(|page| page.is_primary_nav())
        .map(|page| {
            view! {
                <li>
                    <button class=move || link_class(current_page.get(), page) on:click=move |_| go(page)>
                        {page.label()}
                    </button>
                </li>
            }
        })
        .collect_view();

    view! {
        <header class="nav">
            <div class="nav__inner">
                <button class="nav__brand" on:click=move |_| go(Page::Home)>
                    "Academy"
                </button>
                <button
                    class="nav__toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <nav class=move || if menu_open.get() { "nav__menu nav__menu--open" } else { "nav__menu" }>
                    <ul class="nav__links">{links}</ul>
                    <div class="nav__session">
                        <Show
                            when=move || is_logged_in.get()
                            fallback=move || {
                                view! {
                                    <button class="btn btn--ghost" on:click=move |_| go(Page::Login)>
                                        "Login"
                                    </button>
                                    <button class="btn btn--primary" on:click=move |_| go(Page::Register)>
                                        "Register"
                                    </button>
                                }
                            }
                        >
                            <span class="nav__user">{move || user.with(|u| user_label(u.as_ref()))}</span>
                            <button
                                class="btn btn--ghost"
                                on:click=move |_| {
                                    menu_open.set(false);
                                    on_logout.run(());
                                }
                            >
                                "Logout"
                            </button>
                        </Show>
                    </div>
                </nav>
            </div>
        </header>
    }
}
