use html_escape::{encode_double_quoted_attribute, encode_text};

use super::ROUTES;

const SITE_NAME: &str = "Workflow Example";

/// Heading plus one paragraph, the shape every page body takes.
pub fn section(heading: &str, description: &str) -> String {
    format!(
        r#"<div class="space-y-4">
  <h1 class="text-4xl font-bold">{heading}</h1>
  <p class="text-muted-foreground">{description}</p>
</div>"#,
        heading = encode_text(heading),
        description = encode_text(description),
    )
}

/// Wraps already-rendered `main` markup in the shared document shell.
pub fn document(title: &str, main: &str) -> String {
    let nav_links = ROUTES
        .iter()
        .map(|(path, page)| {
            format!(
                r#"<a href="{href}" class="hover:underline">{label}</a>"#,
                href = encode_double_quoted_attribute(path),
                label = encode_text(page.nav_label()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n      ");

    let full_title = if title == SITE_NAME {
        SITE_NAME.to_string()
    } else {
        format!("{title} | {SITE_NAME}")
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{title}</title>
</head>
<body>
  <header class="border-b">
    <nav class="container mx-auto flex gap-4 p-4">
      {nav_links}
    </nav>
  </header>
  <main class="container mx-auto p-4">
{main}
  </main>
</body>
</html>
"#,
        title = encode_text(&full_title),
    )
}
