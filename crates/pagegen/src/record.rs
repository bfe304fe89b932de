// SPDX-FileCopyrightText: 2025 GoDigitalPro
//
// SPDX-License-Identifier: Apache-2.0

//! Content records — the typed description of one page.
//!
//! Each page is a YAML file: metadata (identity, dates, SEO fields) plus an
//! ordered list of body sections. Records are authored once and never
//! mutated at runtime; the build consumes them read-only.
//!
//! Sections carry an explicit `kind` tag so the renderer dispatches
//! exhaustively. An unrecognized `kind` deserializes to `Section::Unknown`,
//! which renders as an absent block instead of failing the page.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::seo::SchemaObject;

/// One page: metadata plus ordered body sections.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentRecord {
    pub metadata: PageMetadata,
    #[serde(default)]
    pub sections: Vec<Section>,
}

/// Page identity, dates, and SEO fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMetadata {
    /// Visible page title (hero heading)
    pub title: String,
    /// `<title>` override; falls back to `title`
    #[serde(default)]
    pub seo_title: Option<String>,
    /// Meta description / listing blurb
    #[serde(default)]
    pub description: String,
    /// URL slug, unique across the corpus
    pub slug: String,
    /// Canonical path override; defaults to "/{category}/{slug}"
    #[serde(default)]
    pub canonical_path: Option<String>,
    pub published: NaiveDate,
    #[serde(default)]
    pub updated: Option<NaiveDate>,
    /// Grouping key: "blog", "tools", ...
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
    #[serde(default)]
    pub cover_alt: Option<String>,
    #[serde(default)]
    pub author: Option<Author>,
    /// JSON-LD objects embedded in the page head, in order
    #[serde(default)]
    pub structured_data: Vec<SchemaObject>,
    /// Drafts load and validate but are skipped at build time
    #[serde(default)]
    pub draft: bool,
    /// Layout name: "article", "review", or anything else for the default
    #[serde(default = "default_layout")]
    pub layout: String,
}

/// Page author byline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub profile_url: Option<String>,
}

fn default_category() -> String {
    "blog".to_string()
}

fn default_layout() -> String {
    "article".to_string()
}

impl PageMetadata {
    /// Title used in `<title>` and social meta.
    pub fn seo_title(&self) -> &str {
        self.seo_title.as_deref().unwrap_or(&self.title)
    }

    /// Site-relative canonical path, with exactly one leading slash.
    pub fn canonical_path(&self) -> String {
        match &self.canonical_path {
            Some(path) => format!("/{}", path.trim_start_matches('/')),
            None => format!("/{}/{}", self.category, self.slug),
        }
    }

    /// Most recent content date, for sitemap `lastmod`.
    pub fn last_modified(&self) -> NaiveDate {
        self.updated.unwrap_or(self.published)
    }
}

/// One typed block of page content, dispatched on `kind`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Section {
    /// Markdown-formatted body text, one item per block
    Paragraphs {
        #[serde(default)]
        items: Vec<String>,
    },
    /// Checkmarked bullet list
    Checklist {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        items: Vec<String>,
    },
    /// Feature/step cards
    Plays {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        items: Vec<Play>,
    },
    /// Collapsible question/answer list
    Faq {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        items: Vec<FaqItem>,
    },
    /// Pricing tiers for tool-review pages
    Pricing {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        tiers: Vec<PricingTier>,
    },
    /// Competing-tool links for tool-review pages
    Alternatives {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        items: Vec<Alternative>,
    },
    /// Unrecognized `kind` — renders nothing
    #[serde(other)]
    Unknown,
}

/// One feature/step card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Play {
    pub title: String,
    pub detail: String,
}

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
    /// Render this item expanded by default
    #[serde(default)]
    pub open: bool,
}

/// One pricing tier row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricingTier {
    pub name: String,
    pub price: String,
    #[serde(default)]
    pub detail: Option<String>,
}

/// One alternative-tool entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alternative {
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub blurb: Option<String>,
}

impl ContentRecord {
    /// Parse one record from YAML text.
    pub fn from_yaml(source: &str, path: &str) -> Result<ContentRecord> {
        serde_yaml::from_str(source).map_err(|e| Error::InvalidRecord {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }
}

/// Load every `.yaml`/`.yml` record under `dir`, in filename order.
///
/// Filename order keeps route expansion and sitemap output deterministic
/// across platforms.
pub fn load_records(dir: &Path) -> Result<Vec<ContentRecord>> {
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| {
            matches!(
                path.extension().and_then(|ext| ext.to_str()),
                Some("yaml") | Some("yml")
            )
        })
        .collect();
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in &paths {
        let raw = std::fs::read_to_string(path)?;
        records.push(ContentRecord::from_yaml(&raw, &path.display().to_string())?);
    }
    diagnostics::log_info!("Loaded {count} content records", count: records.len());
    Ok(records)
}
