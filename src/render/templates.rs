//! Template sources.
//!
//! Every template the page needs is compiled into the binary. A template
//! directory may shadow any of them by name; names it lacks fall back to the
//! embedded copy.
//!
//! Override files are looked up by name plus one of [`TEMPLATE_EXTENSIONS`],
//! in priority order, so `hero` resolves to `hero.html.j2` before `hero.j2`.

use std::path::{Path, PathBuf};

/// Recognized override extensions, highest priority first.
pub const TEMPLATE_EXTENSIONS: &[&str] = &[".html.j2", ".j2", ".html"];

/// The embedded template set as `(name, source)` pairs.
pub const EMBEDDED: &[(&str, &str)] = &[
    ("page", include_str!("../../templates/page.html.j2")),
    ("nav", include_str!("../../templates/nav.html.j2")),
    ("menu", include_str!("../../templates/menu.html.j2")),
    ("hero", include_str!("../../templates/hero.html.j2")),
    ("projects", include_str!("../../templates/projects.html.j2")),
    ("experience", include_str!("../../templates/experience.html.j2")),
    ("contact", include_str!("../../templates/contact.html.j2")),
    ("footer", include_str!("../../templates/footer.html.j2")),
];

/// Looks up an embedded template.
pub fn embedded(name: &str) -> Option<&'static str> {
    EMBEDDED
        .iter()
        .find(|(embedded_name, _)| *embedded_name == name)
        .map(|(_, source)| *source)
}

/// Finds the override file for `name` in `dir`, if any.
///
/// Names that try to leave the directory never resolve.
pub fn find_override(dir: &Path, name: &str) -> Option<PathBuf> {
    if name.is_empty() || name.contains("..") || Path::new(name).is_absolute() {
        return None;
    }
    TEMPLATE_EXTENSIONS
        .iter()
        .map(|ext| dir.join(format!("{name}{ext}")))
        .find(|candidate| candidate.is_file())
}
