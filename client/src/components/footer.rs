//! Site footer.

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div>
                    <p class="footer__brand">"Academy"</p>
                    <p class="muted">"Practical courses in software, data and cloud."</p>
                </div>
                <div>
                    <p class="footer__heading">"Contact"</p>
                    <p class="muted">"hello@academy.example"</p>
                </div>
            </div>
            <p class="footer__copyright">"© 2026 Academy. All rights reserved."</p>
        </footer>
    }
}
