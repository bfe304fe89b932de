// SPDX-FileCopyrightText: 2025 GoDigitalPro
//
// SPDX-License-Identifier: Apache-2.0

//! Site configuration — parsed from `site.yaml` at the project root.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::Author;

/// Top-level site configuration.
///
/// ```yaml
/// site:
///   title: "GoDigitalPro"
///   origin: "https://www.godigitalpro.in"
///   tagline: "Digital marketing, explained"
///
/// nav:
///   - label: "Blog"
///     href: "/blog"
///   - label: "Tools"
///     href: "/tools"
///
/// content_dir: "content"
/// static_dir: "static"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    pub site: SiteMeta,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default = "default_content_dir")]
    pub content_dir: String,
    #[serde(default)]
    pub static_dir: Option<String>,
    /// Fallback byline for records without an author of their own
    #[serde(default)]
    pub default_author: Option<Author>,
}

/// Site-wide metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub title: String,
    /// Absolute origin for canonical URLs (e.g., "https://www.godigitalpro.in")
    pub origin: String,
    #[serde(default)]
    pub tagline: Option<String>,
}

/// One entry in the site header navigation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

fn default_content_dir() -> String {
    "content".to_string()
}

impl SiteConfig {
    /// Load and parse a site config file.
    pub fn load(path: &Path) -> Result<SiteConfig> {
        let raw = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&raw).map_err(|e| Error::InvalidConfig {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }
}
