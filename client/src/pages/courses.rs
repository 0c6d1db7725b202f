//! Course catalog page.

use leptos::prelude::*;

use crate::components::course_card::CourseCard;
use crate::content::COURSES;

#[component]
pub fn CoursesPage() -> impl IntoView {
    let cards = COURSES
        .iter()
        .map(|course| view! { <CourseCard course=*course/> })
        .collect_view();

    view! {
        <section class="section page-header">
            <h1>"Courses"</h1>
            <p>"Structured programs from first steps to advanced practice."</p>
        </section>
        <section class="section">
            <div class="card-grid">{cards}</div>
        </section>
    }
}
