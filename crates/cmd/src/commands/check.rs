use std::path::Path;

use anyhow::Result;
use pagegen::record::{ContentRecord, Section};
use pagegen::routes::expand_pages;
use pagegen::seo::SchemaObject;

use crate::common::load_site;

/// Validate the corpus without writing output.
///
/// Slug collisions are hard errors (same failure the build would hit).
/// Everything else is a lint warning: content review catches these, the
/// build does not.
pub fn check_command(site_path: &Path) -> Result<()> {
    let (config, records) = load_site(site_path)?;

    // Slug uniqueness is the build-time contract; reuse the build's check
    expand_pages(&config, &records)?;

    let mut warnings = 0;
    for record in &records {
        for warning in lint_record(record) {
            println!("⚠️  {}: {}", record.metadata.slug, warning);
            warnings += 1;
        }
    }

    if warnings == 0 {
        println!("✅ {} records, no problems found", records.len());
    } else {
        println!("{} records, {} warning(s)", records.len(), warnings);
    }
    Ok(())
}

/// Authoring lints for one record.
fn lint_record(record: &ContentRecord) -> Vec<String> {
    let mut warnings = Vec::new();
    let meta = &record.metadata;

    if let Some(updated) = meta.updated
        && updated < meta.published
    {
        warnings.push(format!(
            "updated date {} is before published date {}",
            updated, meta.published
        ));
    }

    if meta.description.is_empty() {
        warnings.push("missing meta description".to_string());
    }

    if meta.cover_image.is_some() && meta.cover_alt.is_none() {
        warnings.push("cover_image without cover_alt".to_string());
    }

    warnings.extend(faq_schema_mismatches(record));
    warnings
}

/// Every FAQ entry in a `FAQPage` schema must also appear verbatim in a
/// visible faq section, or crawlers see content the reader cannot.
fn faq_schema_mismatches(record: &ContentRecord) -> Vec<String> {
    let visible: Vec<(&str, &str)> = record
        .sections
        .iter()
        .filter_map(|section| match section {
            Section::Faq { items, .. } => Some(items),
            _ => None,
        })
        .flatten()
        .map(|item| (item.question.as_str(), item.answer.as_str()))
        .collect();

    let mut warnings = Vec::new();
    for schema in &record.metadata.structured_data {
        let SchemaObject::FaqPage(faq) = schema else {
            continue;
        };
        for question in &faq.main_entity {
            let matched = visible.contains(&(
                question.name.as_str(),
                question.accepted_answer.text.as_str(),
            ));
            if !matched {
                warnings.push(format!(
                    "FAQPage schema entry '{}' has no matching visible faq item",
                    question.name
                ));
            }
        }
    }
    warnings
}
