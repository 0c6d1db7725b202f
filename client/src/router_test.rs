use super::*;

#[test]
fn every_page_routes_to_its_own_component() {
    let selector = PageSelector::default();
    for page in Page::ALL {
        assert_eq!(route(page, selector).page(), page);
    }
}

#[test]
fn content_pages_take_no_props() {
    let selector = PageSelector::default();
    assert!(matches!(route(Page::About, selector), RoutedPage::About));
    assert!(matches!(route(Page::Courses, selector), RoutedPage::Courses));
    assert!(matches!(route(Page::Demo, selector), RoutedPage::Demo));
    assert!(matches!(route(Page::MyLearning, selector), RoutedPage::MyLearning));
}

#[test]
fn home_receives_navigation_callback() {
    let selector = PageSelector::new(Page::Home);
    let RoutedPage::Home { on_navigate } = route(Page::Home, selector) else {
        panic!("home did not route to HomePage");
    };
    on_navigate.run(Page::Demo);
    assert_eq!(selector.current_untracked(), Page::Demo);
}

#[test]
fn login_success_returns_home() {
    let selector = PageSelector::new(Page::Login);
    let RoutedPage::Login { on_success, .. } = route(selector.current_untracked(), selector) else {
        panic!("login did not route to LoginPage");
    };
    on_success.run(());
    assert_eq!(selector.current_untracked(), Page::Home);
}

#[test]
fn login_can_navigate_to_register() {
    let selector = PageSelector::new(Page::Login);
    let RoutedPage::Login { on_navigate, .. } = route(Page::Login, selector) else {
        panic!("login did not route to LoginPage");
    };
    on_navigate.run(Page::Register);
    assert_eq!(selector.current_untracked(), Page::Register);
}

#[test]
fn register_success_returns_home() {
    let selector = PageSelector::new(Page::Register);
    let RoutedPage::Register { on_success, .. } = route(Page::Register, selector) else {
        panic!("register did not route to RegisterPage");
    };
    on_success.run(());
    assert_eq!(selector.current_untracked(), Page::Home);
}

#[test]
fn navigating_home_to_courses_routes_courses() {
    let selector = PageSelector::new(Page::Home);
    selector.navigate(Page::Courses);
    assert!(matches!(route(selector.current_untracked(), selector), RoutedPage::Courses));
}

#[test]
fn unknown_slug_routes_home() {
    let selector = PageSelector::default();
    assert!(matches!(route_slug("settings", selector), RoutedPage::Home { .. }));
    assert!(matches!(route_slug("register", selector), RoutedPage::Register { .. }));
}
