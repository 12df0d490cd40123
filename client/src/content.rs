//! Page content: profile, projects and contact links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Content is inert display data. It ships as JSON embedded at compile time
//! and is only deserialized, never validated or transformed, before the
//! page renders it.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid site content: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    pub location: String,
    pub bio: String,
    pub avatar: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub stack: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub url: String,
}

/// Outbound contact URLs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    pub whatsapp: String,
    pub facebook: String,
    pub linkedin: String,
    pub email: String,
}

/// Short titled blurb in the about section.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocusArea {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub profile: Profile,
    #[serde(default)]
    pub about: String,
    #[serde(default)]
    pub focus_areas: Vec<FocusArea>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub projects: Vec<Project>,
    pub contacts: Contacts,
}

impl SiteContent {
    /// Parse content from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] when the JSON does not match the schema.
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Content bundled with the crate.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::Parse`] when the bundled JSON is malformed.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }

    /// Footer copyright line for `year`.
    #[must_use]
    pub fn copyright_notice(&self, year: i32) -> String {
        format!("© {year} {}. All rights reserved.", self.profile.name)
    }

    /// Bundled content, or empty content when it cannot be parsed.
    #[must_use]
    pub fn load() -> Self {
        Self::bundled().unwrap_or_else(|e| {
            leptos::logging::warn!("{e}; rendering without site content");
            Self::default()
        })
    }
}

/// Calendar year in UTC, read from the clock of whichever side renders.
#[must_use]
pub fn current_year() -> i32 {
    Utc::now().year()
}
