//! Static portfolio content.
//!
//! The page shows one [`Site`]: personal details, projects, skills and
//! experience. The built-in site lives in [`Site::builtin`]; a YAML file
//! with the same shape can replace it.

mod data;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::nav::Section;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Social {
    pub github: String,
    pub linkedin: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub email: String,
    pub social: Social,
    #[serde(default = "default_navigation")]
    pub navigation: Vec<Section>,
    /// Year printed in the footer notice.
    #[serde(default = "default_copyright_year")]
    pub copyright_year: u16,
}

fn default_navigation() -> Vec<Section> {
    Section::ALL.to_vec()
}

fn default_copyright_year() -> u16 {
    2025
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Production,
    Active,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Production => "production",
            ProjectStatus::Active => "active",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub tools: Vec<String>,
    pub github: String,
    pub status: ProjectStatus,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub category: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
    #[serde(default)]
    pub achievements: Vec<String>,
}

/// Skills sharing a category, for one showcase card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

/// Everything the page displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    pub personal: Personal,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

impl Site {
    /// The bundled portfolio.
    pub fn builtin() -> Self {
        data::builtin()
    }

    /// Reads a site from a YAML file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: Some(path.to_path_buf()),
                source,
            },
            other => other,
        })
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(raw).map_err(|source| ConfigError::Parse { path: None, source })
    }

    /// Groups skills by category, categories in first-seen order.
    pub fn skills_by_category(&self) -> Vec<SkillGroup> {
        let mut groups: Vec<SkillGroup> = Vec::new();
        for skill in &self.skills {
            match groups.iter_mut().find(|g| g.category == skill.category) {
                Some(group) => group.skills.push(skill.name.clone()),
                None => groups.push(SkillGroup {
                    category: skill.category.clone(),
                    skills: vec![skill.name.clone()],
                }),
            }
        }
        groups
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::builtin()
    }
}
