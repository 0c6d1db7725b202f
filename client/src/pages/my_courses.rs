//! Learner dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Takes no props; reads the mirrored auth state from context to greet the
//! learner or ask them to sign in.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::content::featured_courses;
use crate::state::auth::AuthState;

#[component]
pub fn MyCoursesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let greeting = move || {
        auth.get()
            .display_name()
            .map(|name| format!("Welcome back, {name}"))
            .unwrap_or_default()
    };

    view! {
        <section class="section page-header">
            <h1>"My courses"</h1>
        </section>
        <Show
            when=move || auth.get().is_logged_in
            fallback=|| {
                view! {
                    <section class="section empty-state">
                        <p>"Log in from the navigation bar to see your courses and progress."</p>
                    </section>
                }
            }
        >
            <section class="section">
                <h2>{greeting}</h2>
                <p class="muted">"You are not enrolled in a course yet. These are a good place to start:"</p>
                <div class="card-grid">
                    {featured_courses()
                        .iter()
                        .map(|course| view! { <CourseCard course=*course/> })
                        .collect_view()}
                </div>
            </section>
        </Show>
    }
}
