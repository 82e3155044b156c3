//! # Folio - a headless single-page portfolio
//!
//! Folio models the interactive state of a personal portfolio page and
//! renders it to HTML. The page content (hero, skills, projects,
//! experience) is static; what changes is:
//!
//! - the light/dark appearance, persisted across visits
//! - the active navigation section and the mobile menu
//! - the contact form and the notice it raises on submit
//! - short-lived decorative particles spawned by every primary click
//!
//! ## Quick Start
//!
//! ```rust
//! use std::time::Duration;
//! use folio::{ClickTarget, MemoryStorage, PointerEvent, Portfolio, Section};
//!
//! let mut page = Portfolio::new(Box::new(MemoryStorage::with_entry("theme", "light")));
//!
//! page.click(
//!     PointerEvent::primary(120.0, 40.0).on(ClickTarget::NavLink(Section::Projects)),
//!     Duration::ZERO,
//! );
//! assert_eq!(page.navigation().active(), Section::Projects);
//!
//! let html = page.render_html().unwrap();
//! assert!(html.contains(r#"data-theme="light""#));
//! ```
//!
//! ## Time
//!
//! Nothing in the crate reads a clock or sleeps. Every operation that
//! schedules work takes `now` as a [`Duration`](std::time::Duration) since
//! page load, and [`Portfolio::advance`] fires whatever has come due.
//!
//! ## Appearance
//!
//! [`ThemeController`] resolves the startup mode from storage, then the
//! platform preference, then light. The platform query can be replaced
//! process-wide with [`set_preference_detector`], which tests use to pin
//! the result.
//!
//! ```rust
//! use folio::{AppearanceMode, Document, MemoryStorage, ThemeController};
//!
//! let mut controller = ThemeController::new(Box::new(MemoryStorage::with_entry("theme", "dark")));
//! let mut document = Document::new();
//! let mode = controller.initialize();
//! controller.apply(&mut document, mode);
//! assert!(document.is_dark());
//! ```

pub mod config;
pub mod contact;
pub mod content;
pub mod effect;
mod error;
pub mod event;
pub mod motion;
pub mod nav;
pub mod notice;
mod page;
pub mod render;
pub mod storage;
pub mod surface;
pub mod theme;
mod util;

pub use config::{Config, ConfigError};
pub use contact::{ContactForm, Field, Submission, ValidationError};
pub use content::Site;
pub use effect::{EffectEmitter, EffectSettings};
pub use error::{Error, Result};
pub use event::{ClickTarget, PointerButton, PointerEvent, Propagation};
pub use nav::{Navigation, Section};
pub use notice::{Notice, NoticeVariant, Toaster};
pub use page::Portfolio;
pub use storage::{DisabledStorage, FileStorage, MemoryStorage, Storage, StorageError};
pub use surface::{Document, Surface};
pub use theme::{
    set_preference_detector, AppearanceMode, AppearanceSignal, ThemeController,
};
pub use util::{pad_to_width, rgb_to_ansi256, truncate_to_width};
