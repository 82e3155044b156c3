//! In-page navigation: the highlighted section and the mobile menu.

use serde::{Deserialize, Serialize};

/// An anchored section of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    About,
    Projects,
    Experience,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::About,
        Section::Projects,
        Section::Experience,
        Section::Contact,
    ];

    /// Anchor id, also the link text before capitalization.
    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Projects => "projects",
            Section::Experience => "experience",
            Section::Contact => "contact",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().trim_start_matches('#').to_ascii_lowercase();
        Section::ALL
            .into_iter()
            .find(|section| section.id() == wanted)
            .ok_or_else(|| format!("unknown section `{s}`"))
    }
}

/// Navigation state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    active: Section,
    menu_open: bool,
}

impl Navigation {
    pub fn new() -> Self {
        Self {
            active: Section::About,
            menu_open: false,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn is_active(&self, section: Section) -> bool {
        self.active == section
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// A desktop nav link was followed.
    pub fn select(&mut self, section: Section) {
        self.active = section;
    }

    /// A mobile menu link was followed; the menu closes behind it.
    pub fn select_from_menu(&mut self, section: Section) {
        self.active = section;
        self.menu_open = false;
    }

    pub fn open_menu(&mut self) {
        self.menu_open = true;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::new()
    }
}
