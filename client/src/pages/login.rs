//! Login page: email + password sign-in against the auth provider.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use super::AUTH_DISABLED;
use crate::net::supabase::SupabaseClient;
use crate::state::page::Page;

const MISSING_FIELDS: &str = "Enter your email and password.";
const INVALID_EMAIL: &str = "Enter a valid email address.";

/// Trim and check the form fields.
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !looks_like_email(email) {
        return Err(INVALID_EMAIL);
    }
    Ok((email.to_owned(), password.to_owned()))
}

pub(crate) fn looks_like_email(value: &str) -> bool {
    value
        .split_once('@')
        .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.') && !domain.starts_with('.'))
}

#[component]
pub fn LoginPage(on_navigate: Callback<Page>, on_login_success: Callback<()>) -> impl IntoView {
    let client = use_context::<Option<SupabaseClient>>().flatten();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get_untracked(), &password.get_untracked())
        {
            Ok(fields) => fields,
            Err(msg) => {
                error.set(Some(msg.to_owned()));
                return;
            }
        };
        let Some(client) = client.clone() else {
            error.set(Some(AUTH_DISABLED.to_owned()));
            return;
        };
        error.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match client.sign_in_with_password(&email_value, &password_value).await {
                Ok(_) => {
                    busy.set(false);
                    on_login_success.run(());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (client, email_value, password_value, on_login_success);
            busy.set(false);
        }
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Welcome back"</h1>
                <p class="muted">"Log in to continue learning."</p>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Email"
                        <input
                            type="email"
                            autocomplete="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Password"
                        <input
                            type="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Logging in..." } else { "Log in" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "New here? "
                    <button class="btn btn--link" on:click=move |_| on_navigate.run(Page::Register)>
                        "Create an account"
                    </button>
                </p>
            </div>
        </section>
    }
}
