//! Pointer events and click dispatch vocabulary.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::nav::Section;
use crate::surface::Surface;

/// Which pointer button was pressed, numbered as in DOM `MouseEvent.button`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Secondary,
    Back,
    Forward,
}

impl PointerButton {
    pub fn from_index(index: u16) -> Option<Self> {
        match index {
            0 => Some(PointerButton::Primary),
            1 => Some(PointerButton::Auxiliary),
            2 => Some(PointerButton::Secondary),
            3 => Some(PointerButton::Back),
            4 => Some(PointerButton::Forward),
            _ => None,
        }
    }

    pub fn is_primary(self) -> bool {
        matches!(self, PointerButton::Primary)
    }
}

/// The control under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "section", rename_all = "snake_case")]
pub enum ClickTarget {
    /// Anything without its own behavior.
    Background,
    ThemeToggle,
    /// A link in the desktop navigation bar.
    NavLink(Section),
    /// A link inside the mobile menu.
    MenuLink(Section),
    OpenMenu,
    CloseMenu,
    /// The contact form's submit button.
    Submit,
}

/// A click at viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub button: PointerButton,
    pub x: f64,
    pub y: f64,
    pub target: ClickTarget,
}

impl PointerEvent {
    pub fn new(button: PointerButton, x: f64, y: f64, target: ClickTarget) -> Self {
        Self {
            button,
            x,
            y,
            target,
        }
    }

    /// A primary-button click on the page background.
    pub fn primary(x: f64, y: f64) -> Self {
        Self::new(PointerButton::Primary, x, y, ClickTarget::Background)
    }

    pub fn on(mut self, target: ClickTarget) -> Self {
        self.target = target;
        self
    }
}

/// Whether dispatch continues after a listener ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    Stop,
}

/// A document-level listener run in the capture phase, before the target.
pub trait ClickListener {
    fn on_click(
        &mut self,
        event: &PointerEvent,
        now: Duration,
        surface: &mut dyn Surface,
    ) -> Propagation;
}
