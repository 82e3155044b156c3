//! Platform appearance preference detection.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::mode::AppearanceMode;

/// Reports the platform's preferred appearance, or `None` when the platform
/// cannot answer (headless sessions, sandboxed renderers).
pub type PreferenceDetector = fn() -> Option<AppearanceMode>;

static PREFERENCE_DETECTOR: Lazy<Mutex<PreferenceDetector>> =
    Lazy::new(|| Mutex::new(os_preference_detector));

/// Overrides the detector used to query the platform preference.
///
/// This is useful for testing or when you want to force a specific mode.
pub fn set_preference_detector(detector: PreferenceDetector) {
    let mut guard = PREFERENCE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the OS-backed detector.
pub fn reset_preference_detector() {
    set_preference_detector(os_preference_detector);
}

/// Queries the active detector.
pub fn detect_preference() -> Option<AppearanceMode> {
    let detector = PREFERENCE_DETECTOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

/// A detector for contexts with no platform to ask.
pub fn no_preference() -> Option<AppearanceMode> {
    None
}

fn os_preference_detector() -> Option<AppearanceMode> {
    match detect_os_theme() {
        OsThemeMode::Dark => Some(AppearanceMode::Dark),
        OsThemeMode::Light => Some(AppearanceMode::Light),
    }
}
