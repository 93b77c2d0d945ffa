// SPDX-License-Identifier: MPL-2.0
//! Portfolio content embedded at build time from `assets/portfolio.toml`.

use crate::error::{Error, Result};
use rust_embed::RustEmbed;
use serde::Deserialize;
use std::fmt;

const CONTENT_FILE: &str = "portfolio.toml";

#[derive(RustEmbed)]
#[folder = "assets/"]
struct Asset;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Owner {
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub location: String,
    /// Headlines cycled by the hero typewriter.
    #[serde(default)]
    pub phrases: Vec<String>,
}

impl Default for Owner {
    fn default() -> Self {
        Self {
            name: "Portfolio".to_string(),
            role: String::new(),
            tagline: String::new(),
            email: String::new(),
            location: String::new(),
            phrases: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct About {
    #[serde(default)]
    pub paragraphs: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    /// Proficiency in percent.
    pub level: u8,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// An option of a select field: submitted value and displayed label.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Everything the page displays.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Portfolio {
    #[serde(default)]
    pub owner: Owner,
    #[serde(default)]
    pub about: About,
    #[serde(default)]
    pub stats: Vec<Stat>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub project_types: Vec<Choice>,
    #[serde(default)]
    pub timelines: Vec<Choice>,
}

impl Portfolio {
    /// Loads the embedded content.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] if the file is missing or malformed.
    pub fn load() -> Result<Self> {
        let file = Asset::get(CONTENT_FILE)
            .ok_or_else(|| Error::Content(format!("{CONTENT_FILE} is not embedded")))?;
        let raw = String::from_utf8_lossy(file.data.as_ref());
        Self::parse(&raw)
    }

    /// Parses portfolio content from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Content`] on malformed TOML or out-of-range values.
    pub fn parse(raw: &str) -> Result<Self> {
        let portfolio: Portfolio =
            toml::from_str(raw).map_err(|err| Error::Content(err.to_string()))?;

        if let Some(skill) = portfolio.skills.iter().find(|skill| skill.level > 100) {
            return Err(Error::Content(format!(
                "skill level of {} exceeds 100",
                skill.name
            )));
        }
        Ok(portfolio)
    }

    /// Label of a select value, falling back to the raw value.
    #[must_use]
    pub fn choice_label<'a>(choices: &'a [Choice], value: &'a str) -> &'a str {
        choices
            .iter()
            .find(|choice| choice.value == value)
            .map_or(value, |choice| choice.label.as_str())
    }
}
