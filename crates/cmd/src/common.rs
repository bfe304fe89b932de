use std::path::Path;

use anyhow::{Context, Result};
use pagegen::{ContentRecord, SiteConfig, load_records};

/// Load the site config and every content record it points at.
///
/// `content_dir` and `static_dir` in the config are resolved relative to
/// the config file's own directory, so `press --site path/to/site.yaml`
/// works from anywhere.
pub fn load_site(site_path: &Path) -> Result<(SiteConfig, Vec<ContentRecord>)> {
    let mut config = SiteConfig::load(site_path)
        .with_context(|| format!("cannot load site config {}", site_path.display()))?;

    let base = site_path.parent().unwrap_or_else(|| Path::new("."));
    let content_dir = base.join(&config.content_dir);
    let records = load_records(&content_dir)
        .with_context(|| format!("cannot load content from {}", content_dir.display()))?;

    if let Some(static_dir) = &config.static_dir {
        config.static_dir = Some(base.join(static_dir).display().to_string());
    }

    Ok((config, records))
}
