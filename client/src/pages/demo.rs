//! Free demo classes schedule.

use leptos::prelude::*;

use crate::content::{DEMO_CLASSES, course_by_slug};

#[component]
pub fn DemoClassesPage() -> impl IntoView {
    let rows = DEMO_CLASSES
        .iter()
        .map(|demo| {
            let course = course_by_slug(demo.course).map_or(demo.course, |c| c.title);
            view! {
                <li class="demo-row">
                    <div>
                        <h3>{demo.title}</h3>
                        <p class="muted">{course}</p>
                    </div>
                    <div class="demo-row__meta">
                        <span>{demo.schedule}</span>
                        <span>{format!("{} min", demo.minutes)}</span>
                    </div>
                </li>
            }
        })
        .collect_view();

    view! {
        <section class="section page-header">
            <h1>"Demo classes"</h1>
            <p>"Sit in on a live session before you enroll. Demo classes are free and open to everyone."</p>
        </section>
        <section class="section">
            <ul class="demo-list">{rows}</ul>
        </section>
    }
}
