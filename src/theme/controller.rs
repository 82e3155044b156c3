//! Appearance resolution, application and persistence.

use log::{debug, info, warn};

use super::detect::detect_preference;
use super::mode::AppearanceMode;
use super::signal::AppearanceSignal;
use crate::storage::Storage;
use crate::surface::{Surface, DARK_CLASS};

/// Storage key holding the persisted appearance.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Root attribute mirroring the current appearance.
pub const THEME_ATTR: &str = "data-theme";

/// Owns the appearance signal and its persistence.
///
/// Resolution at startup is persisted value, then platform preference, then
/// light. Every storage or platform failure degrades to that order silently.
///
/// # Example
///
/// ```rust
/// use folio::{AppearanceMode, Document, MemoryStorage, ThemeController};
///
/// let storage = MemoryStorage::with_entry("theme", "dark");
/// let mut controller = ThemeController::new(Box::new(storage));
/// let mut document = Document::new();
///
/// let mode = controller.initialize();
/// controller.apply(&mut document, mode);
/// assert!(document.is_dark());
///
/// controller.toggle(&mut document);
/// assert_eq!(controller.current(), AppearanceMode::Light);
/// assert!(!document.is_dark());
/// ```
pub struct ThemeController {
    storage: Box<dyn Storage>,
    key: String,
    signal: AppearanceSignal,
}

impl ThemeController {
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self::with_key(storage, THEME_STORAGE_KEY)
    }

    /// Uses a non-default storage key.
    pub fn with_key(storage: Box<dyn Storage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            signal: AppearanceSignal::new(AppearanceMode::default()),
        }
    }

    /// Resolves the startup appearance and stores it in the signal.
    ///
    /// Does not touch any surface, so the caller can apply it before the
    /// first paint.
    pub fn initialize(&mut self) -> AppearanceMode {
        let mode = self.resolve();
        self.signal.set(mode);
        mode
    }

    fn resolve(&self) -> AppearanceMode {
        match self.storage.get(&self.key) {
            // An empty value counts as nothing persisted.
            Ok(Some(saved)) if saved.is_empty() => {}
            Ok(Some(saved)) => {
                debug!("appearance restored from storage: {saved}");
                return AppearanceMode::from_persisted(&saved);
            }
            Ok(None) => {}
            Err(err) => {
                warn!("appearance storage read failed, using defaults: {err}");
                return AppearanceMode::Light;
            }
        }

        match detect_preference() {
            Some(mode) => {
                debug!("appearance taken from platform preference: {mode}");
                mode
            }
            None => AppearanceMode::Light,
        }
    }

    /// Marks the surface dark or not-dark.
    pub fn apply(&self, surface: &mut dyn Surface, mode: AppearanceMode) {
        surface.set_root_class(DARK_CLASS, mode.is_dark());
        surface.set_root_attr(THEME_ATTR, mode.as_str());
    }

    /// Writes the mode to storage. Failures are logged and dropped.
    pub fn persist(&mut self, mode: AppearanceMode) {
        if let Err(err) = self.storage.set(&self.key, mode.as_str()) {
            warn!("appearance not persisted: {err}");
        }
    }

    /// Flips the current mode, applies it, then persists it.
    pub fn toggle(&mut self, surface: &mut dyn Surface) -> AppearanceMode {
        let next = self.current().flipped();
        self.set(surface, next);
        next
    }

    /// Applies and persists an explicit mode.
    pub fn set(&mut self, surface: &mut dyn Surface, mode: AppearanceMode) {
        self.apply(surface, mode);
        self.persist(mode);
        info!("appearance set to {mode}");
        self.signal.set(mode);
    }

    pub fn current(&self) -> AppearanceMode {
        self.signal.get()
    }

    /// A shared handle readers can subscribe to.
    pub fn signal(&self) -> AppearanceSignal {
        self.signal.clone()
    }

    /// Registers a listener for appearance changes.
    pub fn subscribe(&self, listener: impl Fn(AppearanceMode) + 'static) {
        self.signal.subscribe(listener);
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("key", &self.key)
            .field("signal", &self.signal)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{DisabledStorage, MemoryStorage, StorageError};
    use crate::surface::Document;
    use crate::theme::detect::{
        no_preference, reset_preference_detector, set_preference_detector,
    };
    use serial_test::serial;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Reads succeed, writes fail.
    struct ReadOnly(MemoryStorage);

    impl Storage for ReadOnly {
        fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get(key)
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable {
                reason: "quota exceeded".into(),
            })
        }
    }

    #[test]
    #[serial]
    fn test_persisted_dark_beats_platform_light() {
        set_preference_detector(|| Some(AppearanceMode::Light));
        let mut controller =
            ThemeController::new(Box::new(MemoryStorage::with_entry("theme", "dark")));
        assert_eq!(controller.initialize(), AppearanceMode::Dark);
        reset_preference_detector();
    }

    #[test]
    #[serial]
    fn test_persisted_light_beats_platform_dark() {
        set_preference_detector(|| Some(AppearanceMode::Dark));
        let mut controller =
            ThemeController::new(Box::new(MemoryStorage::with_entry("theme", "light")));
        assert_eq!(controller.initialize(), AppearanceMode::Light);
        reset_preference_detector();
    }

    #[test]
    #[serial]
    fn test_platform_used_when_nothing_persisted() {
        set_preference_detector(|| Some(AppearanceMode::Dark));
        let mut controller = ThemeController::new(Box::new(MemoryStorage::new()));
        assert_eq!(controller.initialize(), AppearanceMode::Dark);
        reset_preference_detector();
    }

    #[test]
    #[serial]
    fn test_platform_used_when_persisted_value_is_empty() {
        set_preference_detector(|| Some(AppearanceMode::Dark));
        let mut controller = ThemeController::new(Box::new(MemoryStorage::with_entry("theme", "")));
        assert_eq!(controller.initialize(), AppearanceMode::Dark);
        reset_preference_detector();
    }

    #[test]
    #[serial]
    fn test_light_when_nothing_available() {
        set_preference_detector(no_preference);
        let mut controller = ThemeController::new(Box::new(MemoryStorage::new()));
        assert_eq!(controller.initialize(), AppearanceMode::Light);
        reset_preference_detector();
    }

    #[test]
    #[serial]
    fn test_storage_failure_falls_back_to_light() {
        set_preference_detector(|| Some(AppearanceMode::Dark));
        let mut controller = ThemeController::new(Box::new(DisabledStorage));
        assert_eq!(controller.initialize(), AppearanceMode::Light);
        reset_preference_detector();
    }

    #[test]
    fn test_initialize_does_not_touch_surface() {
        let mut controller =
            ThemeController::new(Box::new(MemoryStorage::with_entry("theme", "dark")));
        let document = Document::new();
        controller.initialize();
        assert!(!document.is_dark());
        assert!(document.root_attr(THEME_ATTR).is_none());
    }

    #[test]
    fn test_toggle_applies_then_persists() {
        let storage = Rc::new(RefCell::new(MemoryStorage::new()));

        struct Shared(Rc<RefCell<MemoryStorage>>);
        impl Storage for Shared {
            fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
                self.0.borrow().get(key)
            }
            fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
                self.0.borrow_mut().set(key, value)
            }
        }

        let mut controller = ThemeController::new(Box::new(Shared(storage.clone())));
        let mut document = Document::new();

        assert_eq!(controller.toggle(&mut document), AppearanceMode::Dark);
        assert!(document.is_dark());
        assert_eq!(document.root_attr(THEME_ATTR), Some("dark"));
        assert_eq!(storage.borrow().get("theme").unwrap().as_deref(), Some("dark"));

        controller.toggle(&mut document);
        assert!(!document.is_dark());
        assert_eq!(storage.borrow().get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_persist_failure_is_silent() {
        let mut controller = ThemeController::new(Box::new(ReadOnly(MemoryStorage::new())));
        let mut document = Document::new();
        assert_eq!(controller.toggle(&mut document), AppearanceMode::Dark);
        assert!(document.is_dark());
    }

    #[test]
    fn test_subscribers_notified_on_toggle() {
        let mut controller = ThemeController::new(Box::new(MemoryStorage::new()));
        let mut document = Document::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        controller.subscribe(move |mode| sink.borrow_mut().push(mode));

        controller.toggle(&mut document);
        controller.toggle(&mut document);

        assert_eq!(
            *seen.borrow(),
            vec![AppearanceMode::Dark, AppearanceMode::Light]
        );
    }

    #[test]
    fn test_custom_key() {
        let storage = MemoryStorage::with_entry("ui.mode", "dark");
        let mut controller = ThemeController::with_key(Box::new(storage), "ui.mode");
        assert_eq!(controller.initialize(), AppearanceMode::Dark);
    }
}
