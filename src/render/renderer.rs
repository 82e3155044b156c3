//! Pre-compiled page renderer.

use std::path::{Path, PathBuf};

use log::debug;
use minijinja::{AutoEscape, Environment, Error, ErrorKind};
use serde::Serialize;

use super::context::PageContext;
use super::filters::register_filters;
use super::templates::{embedded, find_override};

/// Renders the portfolio page and its partials.
///
/// Templates resolve in this order:
///
/// 1. templates added with [`Renderer::add_template`]
/// 2. a file in the override directory, if one is configured
/// 3. the embedded set
///
/// Output is HTML-escaped.
///
/// # Example
///
/// ```rust
/// use folio::render::Renderer;
///
/// let mut renderer = Renderer::new();
/// renderer.add_template("greeting", "<p>{{ who }}</p>").unwrap();
///
/// let html = renderer
///     .render("greeting", &minijinja::context! { who => "Tom & Jerry" })
///     .unwrap();
/// assert_eq!(html, "<p>Tom &amp; Jerry</p>");
/// ```
#[derive(Debug)]
pub struct Renderer {
    env: Environment<'static>,
    template_dir: Option<PathBuf>,
}

impl Renderer {
    /// Creates a renderer over the embedded templates only.
    pub fn new() -> Self {
        Self::with_template_dir(None)
    }

    /// Creates a renderer whose templates may be shadowed by files in `dir`.
    pub fn with_template_dir(dir: Option<PathBuf>) -> Self {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        register_filters(&mut env);

        let loader_dir = dir.clone();
        env.set_loader(move |name| load(loader_dir.as_deref(), name));

        Self {
            env,
            template_dir: dir,
        }
    }

    pub fn template_dir(&self) -> Option<&Path> {
        self.template_dir.as_deref()
    }

    /// Registers a named template ahead of every other source.
    ///
    /// The template is compiled immediately; errors are returned if syntax is invalid.
    pub fn add_template(&mut self, name: &str, source: &str) -> Result<(), Error> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())
    }

    /// Renders a template with the given data.
    ///
    /// # Errors
    ///
    /// Returns an error if the template is unknown, fails to compile, or
    /// fails to render.
    pub fn render<T: Serialize>(&self, name: &str, data: &T) -> Result<String, Error> {
        let tmpl = self.env.get_template(name)?;
        tmpl.render(data)
    }

    /// Renders the whole page.
    pub fn render_page(&self, context: &PageContext<'_>) -> Result<String, Error> {
        self.render("page", context)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn load(dir: Option<&Path>, name: &str) -> Result<Option<String>, Error> {
    if let Some(path) = dir.and_then(|dir| find_override(dir, name)) {
        debug!("template `{name}` loaded from {}", path.display());
        return std::fs::read_to_string(&path).map(Some).map_err(|err| {
            Error::new(
                ErrorKind::InvalidOperation,
                format!("could not read template {}", path.display()),
            )
            .with_source(err)
        });
    }
    Ok(embedded(name).map(str::to_string))
}
