use super::layout;

pub const HEADING: &str = "Welcome to Workflow Example";
pub const DESCRIPTION: &str =
    "This is a monorepo template with React, TanStack Router, Hono, and Prisma.";

pub fn content() -> String {
    layout::section(HEADING, DESCRIPTION)
}
