// SPDX-FileCopyrightText: 2025 GoDigitalPro
//
// SPDX-License-Identifier: Apache-2.0

//! sitemap.xml generation.
//!
//! One `<url>` entry per page job, in route-expansion order. Record pages
//! carry `lastmod` from their most recent content date; listing pages have
//! no stable date and omit it.

use crate::routes::{PageJob, PageKind};

/// Render the sitemap for a set of page jobs.
pub fn sitemap_xml(jobs: &[PageJob]) -> String {
    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );

    for job in jobs {
        xml.push_str("  <url>\n");
        xml.push_str(&format!("    <loc>{}</loc>\n", xml_escape(&job.canonical)));
        if let PageKind::Record(record) = &job.kind {
            xml.push_str(&format!(
                "    <lastmod>{}</lastmod>\n",
                record.metadata.last_modified()
            ));
        }
        xml.push_str("  </url>\n");
    }

    xml.push_str("</urlset>\n");
    xml
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SiteConfig, SiteMeta};
    use crate::record::ContentRecord;
    use crate::routes::expand_pages;

    fn jobs() -> Vec<PageJob> {
        let config = SiteConfig {
            site: SiteMeta {
                title: "GoDigitalPro".to_string(),
                origin: "https://www.godigitalpro.in".to_string(),
                tagline: None,
            },
            nav: vec![],
            content_dir: "content".to_string(),
            static_dir: None,
            default_author: None,
        };
        let yaml = r#"
metadata:
  title: "Kinsta Review"
  slug: "kinsta"
  category: "tools"
  published: 2025-03-10
  updated: 2025-06-02
"#;
        let records = vec![ContentRecord::from_yaml(yaml, "kinsta.yaml").expect("record")];
        expand_pages(&config, &records).expect("expand")
    }

    #[test]
    fn test_sitemap_lists_every_page() {
        let xml = sitemap_xml(&jobs());
        assert!(xml.starts_with("<?xml version=\"1.0\""));
        assert_eq!(xml.matches("<url>").count(), 3); // home + tools index + kinsta
        assert!(xml.contains("<loc>https://www.godigitalpro.in/tools/kinsta</loc>"));
        assert!(xml.ends_with("</urlset>\n"));
    }

    #[test]
    fn test_lastmod_only_on_record_pages() {
        let xml = sitemap_xml(&jobs());
        assert_eq!(xml.matches("<lastmod>").count(), 1);
        assert!(xml.contains("<lastmod>2025-06-02</lastmod>"));
    }

    #[test]
    fn test_xml_escape() {
        assert_eq!(xml_escape("a&b"), "a&amp;b");
        assert_eq!(xml_escape("<x>"), "&lt;x&gt;");
    }
}
