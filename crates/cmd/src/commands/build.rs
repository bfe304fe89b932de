use std::path::Path;

use anyhow::Result;
use pagegen::generate::generate_site;

use crate::common::load_site;

pub fn build_command(site_path: &Path, output_dir: &Path) -> Result<()> {
    let (config, records) = load_site(site_path)?;

    println!(
        "Building {} ({} records) into {}",
        config.site.title,
        records.len(),
        output_dir.display()
    );

    generate_site(&config, &records, output_dir)?;

    let drafts = records.iter().filter(|r| r.metadata.draft).count();
    if drafts > 0 {
        println!("Skipped {} draft(s)", drafts);
    }
    println!("✅ Site written to {}", output_dir.display());
    Ok(())
}
