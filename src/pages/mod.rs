//! Static pages served by the `frontend` binary.
//!
//! Pages are registered in [`ROUTES`] by path; the router is built from
//! that table, so adding a page means adding a variant and a row.

mod about;
mod index;
mod layout;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Index,
    About,
}

/// Path to page table. Order is the order of the navigation bar.
pub const ROUTES: &[(&str, Page)] = &[("/", Page::Index), ("/about", Page::About)];

impl Page {
    pub fn from_path(path: &str) -> Option<Self> {
        ROUTES
            .iter()
            .find(|(route, _)| *route == path)
            .map(|(_, page)| *page)
    }

    pub fn path(self) -> &'static str {
        match self {
            Page::Index => "/",
            Page::About => "/about",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Page::Index => "Workflow Example",
            Page::About => about::HEADING,
        }
    }

    fn nav_label(self) -> &'static str {
        match self {
            Page::Index => "Home",
            Page::About => "About",
        }
    }

    /// Full HTML document for this page. Pure; same output on every call.
    pub fn render(self) -> String {
        let content = match self {
            Page::Index => index::content(),
            Page::About => about::content(),
        };
        layout::document(self.title(), &content)
    }
}

pub fn render_not_found(path: &str) -> String {
    let content = layout::section("Not Found", &format!("No page exists at {path}."));
    layout::document("Not Found", &content)
}
