use super::*;

// =============================================================
// Page
// =============================================================

#[test]
fn page_default_is_home() {
    assert_eq!(Page::default(), Page::Home);
}

#[test]
fn page_variants_are_distinct() {
    for (i, a) in Page::ALL.iter().enumerate() {
        for (j, b) in Page::ALL.iter().enumerate() {
            if i == j {
                assert_eq!(a, b);
            } else {
                assert_ne!(a, b);
                assert_ne!(a.slug(), b.slug());
            }
        }
    }
}

#[test]
fn slugs_parse_back_to_their_page() {
    for page in Page::ALL {
        assert_eq!(page.slug().parse::<Page>(), Ok(page));
    }
}

#[test]
fn parse_is_case_and_whitespace_tolerant() {
    assert_eq!(" MyLearning ".parse::<Page>(), Ok(Page::MyLearning));
}

#[test]
fn parse_rejects_unknown_slug() {
    assert_eq!("settings".parse::<Page>(), Err(UnknownPage("settings".to_owned())));
}

#[test]
fn resolve_falls_back_to_home() {
    assert_eq!(Page::resolve("settings"), Page::Home);
    assert_eq!(Page::resolve(""), Page::Home);
    assert_eq!(Page::resolve("demo"), Page::Demo);
}

#[test]
fn primary_nav_excludes_auth_pages() {
    let nav: Vec<Page> = Page::ALL.into_iter().filter(|p| p.is_primary_nav()).collect();
    assert_eq!(
        nav,
        vec![Page::Home, Page::About, Page::Courses, Page::Demo, Page::MyLearning]
    );
}

// =============================================================
// PageSelector
// =============================================================

#[test]
fn selector_default_is_home() {
    assert_eq!(PageSelector::default().current_untracked(), Page::Home);
}

#[test]
fn navigate_replaces_current_page() {
    let selector = PageSelector::new(Page::Home);
    selector.navigate(Page::Courses);
    assert_eq!(selector.current_untracked(), Page::Courses);
    assert_eq!(selector.signal().get_untracked(), Page::Courses);
}

#[test]
fn navigate_callback_sets_requested_page() {
    let selector = PageSelector::new(Page::Home);
    selector.navigate_callback().run(Page::Register);
    assert_eq!(selector.current_untracked(), Page::Register);
}

#[test]
fn home_callback_returns_home() {
    let selector = PageSelector::new(Page::Login);
    selector.home_callback().run(());
    assert_eq!(selector.current_untracked(), Page::Home);
}
