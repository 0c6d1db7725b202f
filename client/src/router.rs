//! Page router: maps the selected [`Page`] to the page component and the
//! props that page needs.
//!
//! DESIGN
//! ======
//! Routing is split in two steps so it can be tested without a DOM:
//! [`route`] is a pure, total match producing a [`RoutedPage`] with its
//! callbacks attached, and [`RoutedPage::render`] turns that into a view.

#[cfg(test)]
#[path = "router_test.rs"]
mod router_test;

use leptos::prelude::*;

use crate::pages::about::AboutPage;
use crate::pages::courses::CoursesPage;
use crate::pages::demo::DemoClassesPage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::my_courses::MyCoursesPage;
use crate::pages::register::RegisterPage;
use crate::state::page::{Page, PageSelector};

/// A page component selection with its required props.
#[derive(Clone, Copy)]
pub enum RoutedPage {
    Home { on_navigate: Callback<Page> },
    About,
    Courses,
    Demo,
    MyLearning,
    Login { on_navigate: Callback<Page>, on_success: Callback<()> },
    Register { on_navigate: Callback<Page>, on_success: Callback<()> },
}

/// Select the component for `page`.
pub fn route(page: Page, selector: PageSelector) -> RoutedPage {
    match page {
        Page::Home => RoutedPage::Home { on_navigate: selector.navigate_callback() },
        Page::About => RoutedPage::About,
        Page::Courses => RoutedPage::Courses,
        Page::Demo => RoutedPage::Demo,
        Page::MyLearning => RoutedPage::MyLearning,
        Page::Login => RoutedPage::Login {
            on_navigate: selector.navigate_callback(),
            on_success: selector.home_callback(),
        },
        Page::Register => RoutedPage::Register {
            on_navigate: selector.navigate_callback(),
            on_success: selector.home_callback(),
        },
    }
}

/// Route a raw page token; unknown tokens render the home page.
pub fn route_slug(slug: &str, selector: PageSelector) -> RoutedPage {
    route(Page::resolve(slug), selector)
}

impl RoutedPage {
    pub fn page(&self) -> Page {
        match self {
            Self::Home { .. } => Page::Home,
            Self::About => Page::About,
            Self::Courses => Page::Courses,
            Self::Demo => Page::Demo,
            Self::MyLearning => Page::MyLearning,
            Self::Login { .. } => Page::Login,
            Self::Register { .. } => Page::Register,
        }
    }

    pub fn render(self) -> AnyView {
        match self {
            Self::Home { on_navigate } => view! { <HomePage on_navigate/> }.into_any(),
            Self::About => view! { <AboutPage/> }.into_any(),
            Self::Courses => view! { <CoursesPage/> }.into_any(),
            Self::Demo => view! { <DemoClassesPage/> }.into_any(),
            Self::MyLearning => view! { <MyCoursesPage/> }.into_any(),
            Self::Login { on_navigate, on_success } => {
                view! { <LoginPage on_navigate on_login_success=on_success/> }.into_any()
            }
            Self::Register { on_navigate, on_success } => {
                view! { <RegisterPage on_navigate on_register_success=on_success/> }.into_any()
            }
        }
    }
}
