use super::layout;

pub const HEADING: &str = "About";
pub const DESCRIPTION: &str = "This is the about page.";

pub fn content() -> String {
    layout::section(HEADING, DESCRIPTION)
}
