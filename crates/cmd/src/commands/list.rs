use std::path::Path;

use anyhow::Result;

use crate::common::load_site;

pub fn list_command(site_path: &Path) -> Result<()> {
    let (_config, records) = load_site(site_path)?;

    println!("{:<28} {:<10} {:<12} {}", "SLUG", "CATEGORY", "PUBLISHED", "STATUS");
    for record in &records {
        let meta = &record.metadata;
        println!(
            "{:<28} {:<10} {:<12} {}",
            meta.slug,
            meta.category,
            meta.published,
            if meta.draft { "draft" } else { "live" }
        );
    }
    println!("{} record(s)", records.len());
    Ok(())
}
