//! The rendering surface: the document root plus free-floating elements.
//!
//! [`Surface`] is the boundary the theme controller and the click effect
//! write to. [`Document`] is the in-memory implementation the page model
//! owns; it keeps enough state to be rendered to HTML or inspected in tests.

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use serde::Serialize;

use crate::motion::{Transform, Transition};

/// Class marking the document root as dark.
pub const DARK_CLASS: &str = "dark";

/// Identifies an attached element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ElementId(pub u64);

/// An RGBA color as written in CSS `rgba()` notation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Rgba {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// Inline style of a free-floating element.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementStyle {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    pub background: Rgba,
    pub opacity: f64,
    pub transform: Transform,
    pub transition: Option<Transition>,
}

impl ElementStyle {
    /// Serializes to an inline `style` attribute value.
    pub fn to_css(&self) -> String {
        let mut css = format!(
            "position: fixed; left: {:.1}px; top: {:.1}px; width: {}px; height: {}px; \
             background: {}; opacity: {}; transform: {}",
            self.left,
            self.top,
            self.width,
            self.height,
            self.background,
            self.opacity,
            self.transform.to_css(),
        );
        if let Some(transition) = &self.transition {
            css.push_str("; transition: ");
            css.push_str(&transition.to_css());
        }
        css
    }
}

/// A decorative element attached to the surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Element {
    pub class: String,
    pub style: ElementStyle,
    /// Time the element was attached.
    #[serde(with = "crate::motion::millis")]
    pub attached_at: Duration,
}

/// Something that can show the page.
pub trait Surface {
    /// Adds or removes a class on the document root.
    fn set_root_class(&mut self, class: &str, enabled: bool);

    /// Sets an attribute on the document root.
    fn set_root_attr(&mut self, name: &str, value: &str);

    /// Attaches an element. Returns `None` when the surface is gone.
    fn attach(&mut self, element: Element) -> Option<ElementId>;

    /// Replaces an element's style. Returns `false` if it is not attached.
    fn restyle(&mut self, id: ElementId, style: ElementStyle) -> bool;

    /// Detaches an element. Returns `false` if it was already gone.
    fn detach(&mut self, id: ElementId) -> bool;
}

/// In-memory document.
#[derive(Debug, Clone, Default)]
pub struct Document {
    root_classes: BTreeSet<String>,
    root_attrs: BTreeMap<String, String>,
    elements: BTreeMap<ElementId, Element>,
    next_id: u64,
    torn_down: bool,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_dark(&self) -> bool {
        self.root_classes.contains(DARK_CLASS)
    }

    pub fn root_classes(&self) -> impl Iterator<Item = &str> {
        self.root_classes.iter().map(String::as_str)
    }

    pub fn root_attr(&self, name: &str) -> Option<&str> {
        self.root_attrs.get(name).map(String::as_str)
    }

    pub fn element(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    pub fn elements(&self) -> impl Iterator<Item = (ElementId, &Element)> {
        self.elements.iter().map(|(id, el)| (*id, el))
    }

    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Drops every element and refuses new ones. Later detaches are no-ops.
    pub fn tear_down(&mut self) {
        self.elements.clear();
        self.torn_down = true;
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }
}

impl Surface for Document {
    fn set_root_class(&mut self, class: &str, enabled: bool) {
        if enabled {
            self.root_classes.insert(class.to_string());
        } else {
            self.root_classes.remove(class);
        }
    }

    fn set_root_attr(&mut self, name: &str, value: &str) {
        self.root_attrs.insert(name.to_string(), value.to_string());
    }

    fn attach(&mut self, element: Element) -> Option<ElementId> {
        if self.torn_down {
            return None;
        }
        let id = ElementId(self.next_id);
        self.next_id += 1;
        self.elements.insert(id, element);
        Some(id)
    }

    fn restyle(&mut self, id: ElementId, style: ElementStyle) -> bool {
        match self.elements.get_mut(&id) {
            Some(element) => {
                element.style = style;
                true
            }
            None => false,
        }
    }

    fn detach(&mut self, id: ElementId) -> bool {
        self.elements.remove(&id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dot() -> Element {
        Element {
            class: "dot".into(),
            style: ElementStyle {
                left: 5.0,
                top: 6.0,
                width: 10.0,
                height: 10.0,
                background: Rgba::new(255, 0, 0, 0.7),
                opacity: 1.0,
                transform: Transform::IDENTITY,
                transition: None,
            },
            attached_at: Duration::ZERO,
        }
    }

    #[test]
    fn test_root_class_toggles() {
        let mut doc = Document::new();
        doc.set_root_class(DARK_CLASS, true);
        assert!(doc.is_dark());
        doc.set_root_class(DARK_CLASS, false);
        assert!(!doc.is_dark());
        assert_eq!(doc.root_classes().count(), 0);
    }

    #[test]
    fn test_attach_assigns_distinct_ids() {
        let mut doc = Document::new();
        let a = doc.attach(dot()).unwrap();
        let b = doc.attach(dot()).unwrap();
        assert_ne!(a, b);
        assert_eq!(doc.element_count(), 2);
    }

    #[test]
    fn test_detach_twice_is_noop() {
        let mut doc = Document::new();
        let id = doc.attach(dot()).unwrap();
        assert!(doc.detach(id));
        assert!(!doc.detach(id));
    }

    #[test]
    fn test_torn_down_refuses_elements() {
        let mut doc = Document::new();
        let id = doc.attach(dot()).unwrap();
        doc.tear_down();
        assert_eq!(doc.element_count(), 0);
        assert!(!doc.detach(id));
        assert!(doc.attach(dot()).is_none());
    }

    #[test]
    fn test_style_css() {
        let css = dot().style.to_css();
        assert!(css.starts_with("position: fixed; left: 5.0px; top: 6.0px"));
        assert!(css.contains("background: rgba(255, 0, 0, 0.7)"));
        assert!(!css.contains("transition"));
    }
}
