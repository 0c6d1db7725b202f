//! Landing page: hero, highlights, featured courses, and calls to action.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::content::featured_courses;
use crate::state::page::Page;

const HIGHLIGHTS: [(&str, &str); 3] = [
    ("Live mentors", "Small cohorts taught by working engineers, with weekly office hours."),
    ("Project based", "Every course ends with a portfolio project reviewed by an instructor."),
    ("Flexible pace", "Recorded sessions and lifetime access to course material."),
];

#[component]
pub fn HomePage(on_navigate: Callback<Page>) -> impl IntoView {
    let highlights = HIGHLIGHTS
        .iter()
        .map(|(title, text)| {
            view! {
                <div class="highlight">
                    <h3>{*title}</h3>
                    <p>{*text}</p>
                </div>
            }
        })
        .collect_view();

    let featured = featured_courses()
        .iter()
        .map(|course| view! { <CourseCard course=*course/> })
        .collect_view();

    view! {
        <section class="hero">
            <h1>"Learn the skills that build careers"</h1>
            <p class="hero__lead">
                "Industry-led courses in software, data and cloud, taught live by people who do the work."
            </p>
            <div class="hero__actions">
                <button class="btn btn--primary" on:click=move |_| on_navigate.run(Page::Courses)>
                    "Browse courses"
                </button>
                <button class="btn btn--ghost" on:click=move |_| on_navigate.run(Page::Demo)>
                    "Join a free demo class"
                </button>
            </div>
        </section>

        <section class="section highlights">{highlights}</section>

        <section class="section">
            <h2>"Featured courses"</h2>
            <div class="card-grid">{featured}</div>
            <button class="btn btn--link" on:click=move |_| on_navigate.run(Page::Courses)>
                "See all courses"
            </button>
        </section>

        <section class="section cta">
            <h2>"Ready to start?"</h2>
            <p>"Create a free account to save courses and book demo classes."</p>
            <button class="btn btn--primary" on:click=move |_| on_navigate.run(Page::Register)>
                "Create your account"
            </button>
        </section>
    }
}
