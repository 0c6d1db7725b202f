//! Page identifiers and the in-memory page selector.
//!
//! DESIGN
//! ======
//! Navigation is a single reactive slot, not URL routing: every page and
//! the navigation bar request transitions through the selector's callback,
//! and the router renders whatever the slot holds.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use std::str::FromStr;

use leptos::prelude::*;

use crate::util::scroll;

/// Top-level views of the site.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Page {
    #[default]
    Home,
    About,
    Courses,
    Demo,
    MyLearning,
    Login,
    Register,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Courses,
        Page::Demo,
        Page::MyLearning,
        Page::Login,
        Page::Register,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Courses => "courses",
            Self::Demo => "demo",
            Self::MyLearning => "mylearning",
            Self::Login => "login",
            Self::Register => "register",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About Us",
            Self::Courses => "Courses",
            Self::Demo => "Demo Classes",
            Self::MyLearning => "My Courses",
            Self::Login => "Login",
            Self::Register => "Register",
        }
    }

    /// Pages listed as links in the navigation bar.
    pub fn is_primary_nav(self) -> bool {
        !matches!(self, Self::Login | Self::Register)
    }

    /// Parse a slug, falling back to [`Page::Home`] for anything unknown.
    pub fn resolve(slug: &str) -> Self {
        slug.parse().unwrap_or_default()
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown page {0:?}")]
pub struct UnknownPage(pub String);

impl FromStr for Page {
    type Err = UnknownPage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Page::ALL
            .into_iter()
            .find(|page| page.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownPage(s.to_owned()))
    }
}

/// The single mutable "current page" slot owned by the app shell.
#[derive(Clone, Copy, Debug)]
pub struct PageSelector {
    current: RwSignal<Page>,
}

impl Default for PageSelector {
    fn default() -> Self {
        Self::new(Page::default())
    }
}

impl PageSelector {
    pub fn new(initial: Page) -> Self {
        Self { current: RwSignal::new(initial) }
    }

    /// Tracked read; re-runs the calling effect or view on change.
    pub fn current(&self) -> Page {
        self.current.get()
    }

    pub fn current_untracked(&self) -> Page {
        self.current.get_untracked()
    }

    pub fn signal(&self) -> Signal<Page> {
        self.current.into()
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate {} -> {page}", self.current.get_untracked());
        self.current.set(page);
        scroll::to_top();
    }

    /// Callback handed to pages and the navigation bar.
    pub fn navigate_callback(&self) -> Callback<Page> {
        let selector = *self;
        Callback::new(move |page: Page| selector.navigate(page))
    }

    /// Login/registration success callback: return to the home page.
    pub fn home_callback(&self) -> Callback<()> {
        let selector = *self;
        Callback::new(move |()| selector.navigate(Page::Home))
    }
}
