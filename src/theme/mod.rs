//! Light/dark appearance for the page.
//!
//! This module provides:
//!
//! - [`AppearanceMode`]: Light or dark
//! - [`ThemeController`]: Startup resolution, apply, persist and toggle
//! - [`AppearanceSignal`]: Observable holder readers subscribe to
//! - [`set_preference_detector`]: Override for the platform preference query
//!
//! The controller never reports an error to its caller. Storage and platform
//! failures resolve to light mode.

mod controller;
mod detect;
mod mode;
mod signal;

pub use controller::{ThemeController, THEME_ATTR, THEME_STORAGE_KEY};
pub use detect::{
    detect_preference, no_preference, reset_preference_detector, set_preference_detector,
    PreferenceDetector,
};
pub use mode::AppearanceMode;
pub use signal::AppearanceSignal;
