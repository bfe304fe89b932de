// SPDX-FileCopyrightText: 2025 GoDigitalPro
//
// SPDX-License-Identifier: Apache-2.0

//! Route expansion — turns the content corpus into a flat list of
//! `PageJob`s, one per output HTML file.
//!
//! Each non-draft record produces one page. On top of those, every category
//! gets a listing page and the site root gets a home index. Slug uniqueness
//! is enforced here: a duplicate is a content error that fails the build.

use chrono::NaiveDate;
use std::collections::BTreeMap;

use crate::config::SiteConfig;
use crate::error::{Error, Result};
use crate::record::ContentRecord;
use crate::seo::canonical_url;

/// One page to generate — the flattened output of route expansion.
#[derive(Debug, Clone)]
pub struct PageJob {
    /// Output path relative to dist/ (e.g., "tools/kinsta/index.html")
    pub output_path: String,
    /// Absolute canonical URL
    pub canonical: String,
    /// Breadcrumb trail: (label, url)
    pub breadcrumbs: Vec<(String, String)>,
    pub kind: PageKind,
}

/// What a page job renders.
#[derive(Debug, Clone)]
pub enum PageKind {
    Record(ContentRecord),
    Index(IndexPage),
}

/// A listing page: the home index or one category index.
#[derive(Debug, Clone)]
pub struct IndexPage {
    pub title: String,
    pub description: String,
    pub entries: Vec<IndexEntry>,
}

/// One row in a listing page, newest first.
#[derive(Debug, Clone)]
pub struct IndexEntry {
    pub title: String,
    pub description: String,
    /// Site-relative link
    pub href: String,
    pub published: NaiveDate,
}

/// Expand the content corpus into page jobs: home index first, then
/// category indexes, then one page per non-draft record.
pub fn expand_pages(config: &SiteConfig, records: &[ContentRecord]) -> Result<Vec<PageJob>> {
    check_unique_slugs(records)?;

    let origin = &config.site.origin;
    let home_crumb = ("Home".to_string(), canonical_url(origin, "/"));

    let live: Vec<&ContentRecord> = records
        .iter()
        .filter(|record| {
            if record.metadata.draft {
                diagnostics::log_info!(
                    "Skipping draft {slug}",
                    slug: record.metadata.slug.as_str()
                );
            }
            !record.metadata.draft
        })
        .collect();

    let mut jobs = Vec::with_capacity(live.len() + 2);

    // Home index
    jobs.push(PageJob {
        output_path: "index.html".to_string(),
        canonical: canonical_url(origin, "/"),
        breadcrumbs: vec![home_crumb.clone()],
        kind: PageKind::Index(IndexPage {
            title: config.site.title.clone(),
            description: config.site.tagline.clone().unwrap_or_default(),
            entries: index_entries(&live),
        }),
    });

    // Category indexes, in category order
    let mut by_category: BTreeMap<&str, Vec<&ContentRecord>> = BTreeMap::new();
    for record in &live {
        by_category
            .entry(record.metadata.category.as_str())
            .or_default()
            .push(*record);
    }
    for (category, members) in &by_category {
        let path = format!("/{}", category);
        let url = canonical_url(origin, &path);
        jobs.push(PageJob {
            output_path: format!("{}/index.html", category),
            canonical: url.clone(),
            breadcrumbs: vec![home_crumb.clone(), (title_case(category), url)],
            kind: PageKind::Index(IndexPage {
                title: title_case(category),
                description: format!("Everything filed under {}.", category),
                entries: index_entries(members),
            }),
        });
    }

    // Record pages, in corpus order
    for record in &live {
        let path = record.metadata.canonical_path();
        let canonical = canonical_url(origin, &path);
        let category = &record.metadata.category;

        let breadcrumbs = vec![
            home_crumb.clone(),
            (
                title_case(category),
                canonical_url(origin, &format!("/{}", category)),
            ),
            (record.metadata.title.clone(), canonical.clone()),
        ];

        let trimmed = path.trim_matches('/');
        let output_path = if trimmed.is_empty() {
            "index.html".to_string()
        } else {
            format!("{}/index.html", trimmed)
        };

        jobs.push(PageJob {
            output_path,
            canonical,
            breadcrumbs,
            kind: PageKind::Record((*record).clone()),
        });
    }

    Ok(jobs)
}

/// Fail on the first slug used by two records. Drafts count: a draft
/// colliding with a live page is still an authoring error.
fn check_unique_slugs(records: &[ContentRecord]) -> Result<()> {
    let mut seen: BTreeMap<&str, &str> = BTreeMap::new();
    for record in records {
        let slug = record.metadata.slug.as_str();
        if let Some(first) = seen.insert(slug, record.metadata.title.as_str()) {
            return Err(Error::DuplicateSlug {
                slug: slug.to_string(),
                first: first.to_string(),
                second: record.metadata.title.clone(),
            });
        }
    }
    Ok(())
}

/// Listing rows for a set of records, newest first (title breaks ties).
fn index_entries(records: &[&ContentRecord]) -> Vec<IndexEntry> {
    let mut entries: Vec<IndexEntry> = records
        .iter()
        .map(|record| IndexEntry {
            title: record.metadata.title.clone(),
            description: record.metadata.description.clone(),
            href: record.metadata.canonical_path(),
            published: record.metadata.published,
        })
        .collect();
    entries.sort_by(|a, b| b.published.cmp(&a.published).then(a.title.cmp(&b.title)));
    entries
}

/// Uppercase the first character, for breadcrumb and index-page labels.
fn title_case(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, SiteMeta};
    use crate::record::ContentRecord;

    fn test_config() -> SiteConfig {
        SiteConfig {
            site: SiteMeta {
                title: "GoDigitalPro".to_string(),
                origin: "https://www.godigitalpro.in".to_string(),
                tagline: Some("Digital marketing, explained".to_string()),
            },
            nav: vec![],
            content_dir: "content".to_string(),
            static_dir: None,
            default_author: None,
        }
    }

    fn record(title: &str, slug: &str, category: &str, published: &str) -> ContentRecord {
        let yaml = format!(
            r#"
metadata:
  title: "{title}"
  slug: "{slug}"
  category: "{category}"
  published: {published}
"#
        );
        ContentRecord::from_yaml(&yaml, "test.yaml").expect("record")
    }

    #[test]
    fn test_expand_record_pages() {
        let records = vec![
            record("Kinsta Review", "kinsta", "tools", "2025-03-10"),
            record("Meta Andromeda Update", "meta-andromeda-update", "blog", "2025-05-01"),
        ];
        let jobs = expand_pages(&test_config(), &records).expect("expand");

        // home + blog index + tools index + 2 record pages
        assert_eq!(jobs.len(), 5);
        assert_eq!(jobs[0].output_path, "index.html");

        let paths: Vec<_> = jobs.iter().map(|j| j.output_path.as_str()).collect();
        assert!(paths.contains(&"blog/index.html"));
        assert!(paths.contains(&"tools/index.html"));
        assert!(paths.contains(&"tools/kinsta/index.html"));
        assert!(paths.contains(&"blog/meta-andromeda-update/index.html"));
    }

    #[test]
    fn test_record_canonical_and_breadcrumbs() {
        let records = vec![record("Kinsta Review", "kinsta", "tools", "2025-03-10")];
        let jobs = expand_pages(&test_config(), &records).expect("expand");

        let job = jobs
            .iter()
            .find(|j| j.output_path == "tools/kinsta/index.html")
            .expect("kinsta job");
        assert_eq!(job.canonical, "https://www.godigitalpro.in/tools/kinsta");

        // Home > Tools > Kinsta Review
        assert_eq!(job.breadcrumbs.len(), 3);
        assert_eq!(job.breadcrumbs[0].0, "Home");
        assert_eq!(job.breadcrumbs[1].0, "Tools");
        assert_eq!(job.breadcrumbs[1].1, "https://www.godigitalpro.in/tools");
        assert_eq!(job.breadcrumbs[2].0, "Kinsta Review");
    }

    #[test]
    fn test_drafts_are_skipped() {
        let yaml = r#"
metadata:
  title: "Unfinished"
  slug: "unfinished"
  published: 2025-07-01
  draft: true
"#;
        let records = vec![ContentRecord::from_yaml(yaml, "draft.yaml").expect("record")];
        let jobs = expand_pages(&test_config(), &records).expect("expand");

        // Only the home index; no category page for a category with no live pages
        assert_eq!(jobs.len(), 1);
        assert_eq!(jobs[0].output_path, "index.html");
    }

    #[test]
    fn test_duplicate_slug_fails() {
        let records = vec![
            record("First", "kinsta", "tools", "2025-01-01"),
            record("Second", "kinsta", "blog", "2025-02-01"),
        ];
        let err = expand_pages(&test_config(), &records).expect_err("duplicate");
        let message = err.to_string();
        assert!(message.contains("kinsta"));
        assert!(message.contains("First"));
        assert!(message.contains("Second"));
    }

    #[test]
    fn test_index_entries_newest_first() {
        let records = vec![
            record("Older", "older", "blog", "2025-01-01"),
            record("Newer", "newer", "blog", "2025-06-01"),
        ];
        let jobs = expand_pages(&test_config(), &records).expect("expand");

        let PageKind::Index(ref home) = jobs[0].kind else {
            panic!("expected home index");
        };
        assert_eq!(home.entries.len(), 2);
        assert_eq!(home.entries[0].title, "Newer");
        assert_eq!(home.entries[1].title, "Older");
        assert_eq!(home.entries[0].href, "/blog/newer");
    }
}
