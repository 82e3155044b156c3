//! Transient toast notices.

use console::Style;
use serde::Serialize;

use crate::util::{pad_to_width, truncate_to_width};

/// How a notice is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeVariant {
    #[default]
    Default,
    Destructive,
}

/// A short user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: NoticeVariant,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: NoticeVariant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            variant: NoticeVariant::Destructive,
            ..Self::new(title, description)
        }
    }

    pub fn is_destructive(&self) -> bool {
        self.variant == NoticeVariant::Destructive
    }

    /// Draws the notice as a boxed terminal message at most `width` columns wide.
    pub fn to_terminal(&self, width: usize) -> String {
        let inner = width.saturating_sub(4).max(1);
        let accent = match self.variant {
            NoticeVariant::Default => Style::new().green(),
            NoticeVariant::Destructive => Style::new().red(),
        };
        let border = accent.apply_to(format!("+{}+", "-".repeat(inner + 2)));

        let title = pad_to_width(&truncate_to_width(&self.title, inner), inner);
        let description = pad_to_width(&truncate_to_width(&self.description, inner), inner);

        format!(
            "{border}\n| {} |\n| {} |\n{border}",
            accent.clone().bold().apply_to(title),
            description,
        )
    }
}

/// Holds the notices currently on screen.
///
/// Only the newest `limit` notices are kept; with the default limit of one,
/// each new notice replaces the previous.
#[derive(Debug, Clone)]
pub struct Toaster {
    limit: usize,
    visible: Vec<Notice>,
}

impl Toaster {
    pub fn new() -> Self {
        Self::with_limit(1)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: limit.max(1),
            visible: Vec::new(),
        }
    }

    /// Shows a notice, evicting the oldest past the limit.
    pub fn show(&mut self, notice: Notice) {
        self.visible.insert(0, notice);
        self.visible.truncate(self.limit);
    }

    /// Newest first.
    pub fn visible(&self) -> &[Notice] {
        &self.visible
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.visible.first()
    }

    pub fn dismiss_all(&mut self) {
        self.visible.clear();
    }

    /// Removes the notice at `index` (newest is 0).
    pub fn dismiss(&mut self, index: usize) -> Option<Notice> {
        (index < self.visible.len()).then(|| self.visible.remove(index))
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limit_keeps_one() {
        let mut toaster = Toaster::new();
        toaster.show(Notice::new("first", "a"));
        toaster.show(Notice::new("second", "b"));
        assert_eq!(toaster.visible().len(), 1);
        assert_eq!(toaster.latest().unwrap().title, "second");
    }

    #[test]
    fn test_larger_limit_orders_newest_first() {
        let mut toaster = Toaster::with_limit(2);
        toaster.show(Notice::new("a", ""));
        toaster.show(Notice::new("b", ""));
        toaster.show(Notice::new("c", ""));
        let titles: Vec<_> = toaster.visible().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b"]);
    }

    #[test]
    fn test_dismiss() {
        let mut toaster = Toaster::new();
        toaster.show(Notice::destructive("oops", "bad"));
        assert!(toaster.dismiss(3).is_none());
        assert!(toaster.dismiss(0).unwrap().is_destructive());
        assert!(toaster.visible().is_empty());
    }

    #[test]
    fn test_terminal_box_fits_width() {
        console::set_colors_enabled(false);
        let notice = Notice::new(
            "Message Sent!",
            "Thank you for reaching out. I'll get back to you soon.",
        );
        let out = notice.to_terminal(30);
        for line in out.lines() {
            assert_eq!(unicode_width::UnicodeWidthStr::width(line), 30, "{line:?}");
        }
        assert!(out.contains("Message Sent!"));
        assert!(out.contains('…'));
    }
}
