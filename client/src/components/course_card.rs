//! Card summarizing one catalog course.

use leptos::prelude::*;

use crate::content::Course;

#[component]
pub fn CourseCard(course: Course) -> impl IntoView {
    view! {
        <article class="card">
            <span class="card__tag">{course.level.label()}</span>
            <h3>{course.title}</h3>
            <p>{course.summary}</p>
            <p class="card__meta">{format!("{} weeks", course.weeks)}</p>
        </article>
    }
}
