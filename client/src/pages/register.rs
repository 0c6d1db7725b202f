//! Registration page: creates a provider account with the learner's name.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use super::AUTH_DISABLED;
use super::login::looks_like_email;
use crate::net::supabase::SupabaseClient;
use crate::state::page::Page;

/// Shortest password the provider accepts by default.
const MIN_PASSWORD_LEN: usize = 6;

const MISSING_FIELDS: &str = "Fill in every field.";
const INVALID_EMAIL: &str = "Enter a valid email address.";
const SHORT_PASSWORD: &str = "Password must be at least 6 characters.";
const PASSWORD_MISMATCH: &str = "Passwords do not match.";
const CONFIRM_EMAIL: &str = "Account created. Check your inbox to confirm your email, then log in.";

#[derive(Debug, PartialEq, Eq)]
struct RegisterInput {
    full_name: String,
    email: String,
    password: String,
}

fn validate_register_input(
    full_name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<RegisterInput, &'static str> {
    let full_name = full_name.trim();
    let email = email.trim();
    if full_name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    if !looks_like_email(email) {
        return Err(INVALID_EMAIL);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(SHORT_PASSWORD);
    }
    if password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(RegisterInput {
        full_name: full_name.to_owned(),
        email: email.to_owned(),
        password: password.to_owned(),
    })
}

#[component]
pub fn RegisterPage(on_navigate: Callback<Page>, on_register_success: Callback<()>) -> impl IntoView {
    let client = use_context::<Option<SupabaseClient>>().flatten();
    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let notice = RwSignal::new(None::<&'static str>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_register_input(
            &full_name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(input) => input,
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
        notice.set(None);
        busy.set(true);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use crate::net::types::SignUpOutcome;

            match client.sign_up(&input.email, &input.password, &input.full_name).await {
                Ok(SignUpOutcome::SignedIn(_)) => {
                    busy.set(false);
                    on_register_success.run(());
                }
                Ok(SignUpOutcome::ConfirmationRequired(_)) => {
                    notice.set(Some(CONFIRM_EMAIL));
                    busy.set(false);
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (client, input, on_register_success);
            busy.set(false);
        }
    };

    view! {
        <section class="auth-page">
            <div class="auth-card">
                <h1>"Create your account"</h1>
                <p class="muted">"Start with a free demo class, enroll when you are ready."</p>
                <form class="auth-form" on:submit=on_submit>
                    <label>
                        "Full name"
                        <input
                            type="text"
                            autocomplete="name"
                            prop:value=move || full_name.get()
                            on:input=move |ev| full_name.set(event_target_value(&ev))
                        />
                    </label>
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
                            autocomplete="new-password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Confirm password"
                        <input
                            type="password"
                            autocomplete="new-password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                    </label>
                    <Show when=move || error.get().is_some()>
                        <p class="auth-form__error">{move || error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || notice.get().is_some()>
                        <p class="auth-form__notice">{move || notice.get().unwrap_or_default()}</p>
                    </Show>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <button class="btn btn--link" on:click=move |_| on_navigate.run(Page::Login)>
                        "Log in"
                    </button>
                </p>
            </div>
        </section>
    }
}
