#![cfg(not(feature = "hydrate"))]

use super::*;

// =============================================================
// Initial page
// =============================================================

#[test]
fn initial_page_defaults_to_home_without_query() {
    assert_eq!(initial_page(None), Page::Home);
}

#[test]
fn initial_page_resolves_known_slugs() {
    assert_eq!(initial_page(Some("courses")), Page::Courses);
    assert_eq!(initial_page(Some(" Demo ")), Page::Demo);
    assert_eq!(initial_page(Some("mylearning")), Page::MyLearning);
}

#[test]
fn initial_page_sends_unknown_slugs_home() {
    assert_eq!(initial_page(Some("settings")), Page::Home);
    assert_eq!(initial_page(Some("")), Page::Home);
}

// =============================================================
// Logout callback
// =============================================================

#[test]
fn logout_without_client_returns_home() {
    let selector = PageSelector::new(Page::MyLearning);
    logout_callback(None, selector).run(());
    assert_eq!(selector.current_untracked(), Page::Home);
}

#[test]
fn logout_with_client_outside_browser_returns_home() {
    let client = SupabaseClient::new(SupabaseConfig::new("https://abcd.supabase.co", "anon").unwrap());
    let selector = PageSelector::new(Page::Courses);
    logout_callback(Some(client), selector).run(());
    assert_eq!(selector.current_untracked(), Page::Home);
}

#[test]
fn logout_callback_can_run_repeatedly() {
    let selector = PageSelector::new(Page::About);
    let on_logout = logout_callback(None, selector);
    on_logout.run(());
    selector.navigate(Page::Demo);
    on_logout.run(());
    assert_eq!(selector.current_untracked(), Page::Home);
}
