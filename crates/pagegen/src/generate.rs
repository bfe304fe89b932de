// SPDX-FileCopyrightText: 2025 GoDigitalPro
//
// SPDX-License-Identifier: Apache-2.0

//! Site generation — the build pipeline.
//!
//! 1. Expands the content corpus into page jobs
//! 2. Renders each job: sections → HTML → layout (with SEO head)
//! 3. Writes the complete site plus sitemap.xml to the output directory
//! 4. Copies static assets verbatim, if configured

use std::fs;
use std::path::Path;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::layouts::{LayoutContext, apply_layout};
use crate::record::ContentRecord;
use crate::routes::{PageJob, PageKind, expand_pages};
use crate::sections::{render_index, render_sections};
use crate::seo::{SchemaObject, breadcrumb_json_ld};
use crate::sitemap::sitemap_xml;

/// Generate the complete static site.
pub fn generate_site(
    config: &SiteConfig,
    records: &[ContentRecord],
    output_dir: &Path,
) -> Result<()> {
    let jobs = expand_pages(config, records)?;
    diagnostics::log_info!("Route expansion: {count} pages to generate", count: jobs.len());

    for job in &jobs {
        let html = render_job(config, job);
        let out_path = output_dir.join(&job.output_path);
        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&out_path, html.as_bytes())?;
        diagnostics::log_debug!("wrote {path}", path: job.output_path.as_str());
    }

    fs::write(output_dir.join("sitemap.xml"), sitemap_xml(&jobs))?;

    if let Some(static_dir) = &config.static_dir {
        let source = Path::new(static_dir);
        if source.is_dir() {
            copy_static(source, output_dir)?;
        } else {
            diagnostics::log_warn!("Static dir {dir} not found, skipping", dir: static_dir.as_str());
        }
    }

    diagnostics::log_info!("Site generation complete: {count} pages", count: jobs.len());
    Ok(())
}

/// Render one page job to a full HTML document.
pub fn render_job(config: &SiteConfig, job: &PageJob) -> String {
    match &job.kind {
        PageKind::Record(record) => {
            let content = render_sections(&record.sections).into_string();

            // Breadcrumbs first, then whatever the author supplied, in order
            let mut schemas: Vec<SchemaObject> = vec![breadcrumb_json_ld(&job.breadcrumbs)];
            schemas.extend(record.metadata.structured_data.iter().cloned());

            apply_layout(
                &record.metadata.layout,
                &LayoutContext {
                    title: record.metadata.seo_title(),
                    description: &record.metadata.description,
                    canonical: &job.canonical,
                    site: config,
                    content: &content,
                    breadcrumbs: &job.breadcrumbs,
                    meta: Some(&record.metadata),
                    schemas: &schemas,
                },
            )
        }

        PageKind::Index(index) => {
            let content = render_index(index).into_string();
            let schemas = vec![breadcrumb_json_ld(&job.breadcrumbs)];

            apply_layout(
                "default",
                &LayoutContext {
                    title: &index.title,
                    description: &index.description,
                    canonical: &job.canonical,
                    site: config,
                    content: &content,
                    breadcrumbs: &job.breadcrumbs,
                    meta: None,
                    schemas: &schemas,
                },
            )
        }
    }
}

/// Copy a static asset tree into the output directory, verbatim.
fn copy_static(source: &Path, dest: &Path) -> Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let target = dest.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_static(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)?;
        }
    }
    Ok(())
}
