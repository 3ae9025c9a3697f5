use crate::EnvRecord;
use std::{fs, path::Path};

/// Render a markdown table of every variable `T` reads
pub fn render_markdown<T: EnvRecord>() -> String {
    let mut md = String::new();

    md.push_str("## Environment Variables\n\n");
    md.push_str("| Variable | Field | Description |\n");
    md.push_str("|----------|-------|-------------|\n");
    for spec in T::FIELDS {
        let description = if spec.description.is_empty() {
            "-"
        } else {
            spec.description
        };
        md.push_str(&format!(
            "| {} | {} | {} |\n",
            spec.key, spec.field, description
        ));
    }

    md
}

/// Write the table from [`render_markdown`] to `path`
///
/// # Example
/// ```no_run
/// use envbind::{docs, EnvRecord};
///
/// #[derive(EnvRecord)]
/// struct Vars {
///     #[field(env = "APP_ENV", doc = "Deployment stage")]
///     environment: String,
/// }
///
/// docs::write_docs::<Vars>("ENVIRONMENT.md").unwrap();
/// ```
pub fn write_docs<T: EnvRecord>(path: impl AsRef<Path>) -> std::io::Result<()> {
    fs::write(path, render_markdown::<T>())
}
