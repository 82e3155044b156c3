//! The mounted portfolio page.
//!
//! [`Portfolio`] owns the document and every piece of interactive state,
//! and routes clicks the way the browser would: capture-phase listeners
//! first, then the action of whatever was clicked.

use std::time::Duration;

use log::debug;

use crate::config::Config;
use crate::contact::{ContactForm, Field, Submission, ValidationError};
use crate::content::Site;
use crate::effect::{EffectEmitter, EffectSettings};
use crate::error::Result;
use crate::event::{ClickListener, ClickTarget, PointerEvent, Propagation};
use crate::nav::Navigation;
use crate::notice::Toaster;
use crate::render::{PageContext, Renderer};
use crate::storage::{FileStorage, MemoryStorage, Storage};
use crate::surface::Document;
use crate::theme::{AppearanceMode, ThemeController};

/// A single-page portfolio with its interactive state.
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use folio::{ClickTarget, MemoryStorage, PointerEvent, Portfolio};
///
/// let mut page = Portfolio::new(Box::new(MemoryStorage::with_entry("theme", "dark")));
/// assert!(page.document().is_dark());
///
/// page.click(PointerEvent::primary(10.0, 10.0).on(ClickTarget::ThemeToggle), Duration::ZERO);
/// assert!(!page.document().is_dark());
///
/// page.advance(Duration::from_secs(1));
/// assert_eq!(page.document().element_count(), 0);
/// ```
pub struct Portfolio {
    document: Document,
    theme: ThemeController,
    effects: Option<EffectEmitter>,
    listeners: Vec<Box<dyn ClickListener>>,
    nav: Navigation,
    form: ContactForm,
    toaster: Toaster,
    site: Site,
    renderer: Renderer,
}

impl Portfolio {
    /// Mounts the built-in site with default effects.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self::mount(
            ThemeController::new(storage),
            Site::builtin(),
            EffectSettings::default(),
            Renderer::new(),
        )
    }

    /// Mounts the page described by a configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let storage: Box<dyn Storage> = match &config.storage.path {
            Some(path) => Box::new(FileStorage::new(path)),
            None => Box::new(MemoryStorage::new()),
        };
        let site = match &config.content {
            Some(path) => Site::from_yaml_file(path)?,
            None => Site::builtin(),
        };
        Ok(Self::mount(
            ThemeController::with_key(storage, config.storage.key.clone()),
            site,
            config.effects.clone(),
            Renderer::with_template_dir(config.templates.clone()),
        ))
    }

    /// Resolves and applies the appearance before anything else touches the
    /// document, then installs the click effect.
    pub fn mount(
        mut theme: ThemeController,
        site: Site,
        effects: EffectSettings,
        renderer: Renderer,
    ) -> Self {
        let mut document = Document::new();
        let mode = theme.initialize();
        theme.apply(&mut document, mode);
        let effects = EffectEmitter::install(Some(&document), effects);
        debug!("portfolio mounted in {mode} mode");

        Self {
            document,
            theme,
            effects,
            listeners: Vec::new(),
            nav: Navigation::new(),
            form: ContactForm::default(),
            toaster: Toaster::new(),
            site,
            renderer,
        }
    }

    /// Replaces the click effect, e.g. with a seeded one.
    pub fn with_effects(mut self, effects: Option<EffectEmitter>) -> Self {
        self.effects = effects;
        self
    }

    /// Registers a capture-phase listener. Listeners run after the click
    /// effect, in registration order.
    pub fn add_listener(&mut self, listener: impl ClickListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Dispatches a click.
    ///
    /// A listener returning [`Propagation::Stop`] suppresses the target's
    /// action and any later listeners.
    pub fn click(&mut self, event: PointerEvent, now: Duration) {
        if self.capture(&event, now) == Propagation::Stop {
            debug!("click on {:?} stopped during capture", event.target);
            return;
        }
        // Element actions fire for the primary button only.
        if !event.button.is_primary() {
            return;
        }
        match event.target {
            ClickTarget::Background => {}
            ClickTarget::ThemeToggle => {
                self.toggle_theme();
            }
            ClickTarget::NavLink(section) => self.nav.select(section),
            ClickTarget::MenuLink(section) => self.nav.select_from_menu(section),
            ClickTarget::OpenMenu => self.nav.open_menu(),
            ClickTarget::CloseMenu => self.nav.close_menu(),
            ClickTarget::Submit => {
                let _ = self.submit_contact();
            }
        }
    }

    fn capture(&mut self, event: &PointerEvent, now: Duration) -> Propagation {
        if let Some(effects) = self.effects.as_mut() {
            if effects.on_click(event, now, &mut self.document) == Propagation::Stop {
                return Propagation::Stop;
            }
        }
        for listener in &mut self.listeners {
            if listener.on_click(event, now, &mut self.document) == Propagation::Stop {
                return Propagation::Stop;
            }
        }
        Propagation::Continue
    }

    /// Runs every timer due at `now`.
    pub fn advance(&mut self, now: Duration) -> usize {
        match self.effects.as_mut() {
            Some(effects) => effects.advance(now, &mut self.document),
            None => 0,
        }
    }

    pub fn toggle_theme(&mut self) -> AppearanceMode {
        self.theme.toggle(&mut self.document)
    }

    pub fn set_theme(&mut self, mode: AppearanceMode) {
        self.theme.set(&mut self.document, mode);
    }

    pub fn appearance(&self) -> AppearanceMode {
        self.theme.current()
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Submits the contact form and shows the resulting notice.
    pub fn submit_contact(&mut self) -> std::result::Result<Submission, ValidationError> {
        let result = self.form.submit();
        let notice = match &result {
            Ok(submission) => submission.notice(),
            Err(err) => err.notice(),
        };
        self.toaster.show(notice);
        result
    }

    /// Renders the page as it looks right now.
    pub fn render_html(&self) -> Result<String> {
        let context = PageContext::new(
            &self.site,
            self.appearance(),
            &self.nav,
            &self.form,
            self.toaster.visible(),
        )
        .with_particles(self.document.elements());
        Ok(self.renderer.render_page(&context)?)
    }

    /// Drops the document, as when the page is closed.
    pub fn tear_down(&mut self) {
        self.document.tear_down();
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    pub fn effects(&self) -> Option<&EffectEmitter> {
        self.effects.as_ref()
    }

    pub fn navigation(&self) -> &Navigation {
        &self.nav
    }

    pub fn navigation_mut(&mut self) -> &mut Navigation {
        &mut self.nav
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn toaster(&self) -> &Toaster {
        &self.toaster
    }

    pub fn toaster_mut(&mut self) -> &mut Toaster {
        &mut self.toaster
    }

    pub fn site(&self) -> &Site {
        &self.site
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }
}

impl std::fmt::Debug for Portfolio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Portfolio")
            .field("document", &self.document)
            .field("theme", &self.theme)
            .field("effects", &self.effects)
            .field("listeners", &self.listeners.len())
            .field("nav", &self.nav)
            .field("form", &self.form)
            .field("toaster", &self.toaster)
            .field("site", &self.site)
            .field("renderer", &self.renderer)
            .finish()
    }
}
