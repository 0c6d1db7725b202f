//! About page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="section page-header">
            <h1>"About us"</h1>
            <p>
                "Academy started as a weekend study group and grew into a school for people "
                "changing careers into technology. Our instructors ship software for a living "
                "and teach the way they learned: by building."
            </p>
        </section>
        <section class="section two-column">
            <div>
                <h2>"Our mission"</h2>
                <p>
                    "Make rigorous, practical technical education available to anyone willing "
                    "to put in the work, regardless of background."
                </p>
            </div>
            <div>
                <h2>"How we teach"</h2>
                <ul class="bullet-list">
                    <li>"Live cohorts capped at twenty learners"</li>
                    <li>"Weekly code reviews from an assigned mentor"</li>
                    <li>"Capstone projects built on real datasets and APIs"</li>
                </ul>
            </div>
        </section>
    }
}
