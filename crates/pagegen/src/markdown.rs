// SPDX-FileCopyrightText: 2025 GoDigitalPro
//
// SPDX-License-Identifier: Apache-2.0

//! Markdown rendering for body text.
//!
//! Paragraph items in content records are authored as Markdown so inline
//! links and emphasis survive without a bespoke rich-text model. Uses
//! pulldown-cmark with GFM extensions (tables, strikethrough), and injects
//! `id` anchors on headings so long-form posts get linkable sections.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd, html::push_html};

/// Render markdown to HTML.
pub fn render_markdown(content: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TABLES;
    let parser = Parser::new_ext(content, options);

    let events = inject_heading_anchors(parser);

    let mut html = String::with_capacity(content.len() * 2);
    push_html(&mut html, events.into_iter());
    html
}

/// Slugify text for use as an HTML id attribute.
///
/// Lowercases, replaces non-alphanumeric runs with hyphens, strips
/// leading/trailing hyphens.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut prev_hyphen = true; // suppress leading hyphen
    for ch in text.chars() {
        if ch.is_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
            prev_hyphen = false;
        } else if !prev_hyphen {
            slug.push('-');
            prev_hyphen = true;
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Walk the pulldown-cmark event stream and inject `id` attributes on
/// headings, plus a clickable `#` anchor link on h2 and below.
fn inject_heading_anchors<'a>(parser: Parser<'a>) -> Vec<Event<'a>> {
    let mut events: Vec<Event<'a>> = Vec::new();
    let mut in_heading: Option<pulldown_cmark::HeadingLevel> = None;
    let mut heading_text = String::new();
    let mut heading_events: Vec<Event<'a>> = Vec::new();

    for event in parser {
        match &event {
            Event::Start(Tag::Heading { level, .. }) => {
                in_heading = Some(*level);
                heading_text.clear();
                heading_events.clear();
                heading_events.push(event);
            }
            Event::End(TagEnd::Heading(level)) if in_heading == Some(*level) => {
                let slug = slugify(&heading_text);
                let level_num = *level as usize;

                if !slug.is_empty() {
                    events.push(Event::Html(
                        format!("<h{} id=\"{}\">", level_num, slug).into(),
                    ));
                    // Inner events (text, inline code), minus the buffered Start
                    for e in heading_events.drain(..).skip(1) {
                        events.push(e);
                    }
                    // Anchor link (h2+ only — h1 is the page title)
                    if level_num >= 2 {
                        events.push(Event::Html(
                            format!(
                                " <a class=\"anchor\" href=\"#{}\" aria-hidden=\"true\">#</a>",
                                slug
                            )
                            .into(),
                        ));
                    }
                    events.push(Event::Html(format!("</h{}>", level_num).into()));
                } else {
                    events.extend(heading_events.drain(..));
                    events.push(event);
                }
                in_heading = None;
            }
            Event::Text(text) if in_heading.is_some() => {
                heading_text.push_str(text);
                heading_events.push(event);
            }
            Event::Code(code) if in_heading.is_some() => {
                heading_text.push_str(code);
                heading_events.push(event);
            }
            _ if in_heading.is_some() => {
                heading_events.push(event);
            }
            _ => {
                events.push(event);
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_markdown_basic() {
        let html = render_markdown("Some **bold** text with a [link](https://example.com).");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains(r#"<a href="https://example.com">link</a>"#));
    }

    #[test]
    fn test_render_markdown_table() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn test_heading_anchors() {
        let html = render_markdown("## Campaign Budgets\n\nSome text.\n");
        assert!(
            html.contains(r#"<h2 id="campaign-budgets">"#),
            "Expected id on h2, got: {}",
            html
        );
        assert!(
            html.contains(r##"href="#campaign-budgets""##),
            "Expected anchor link, got: {}",
            html
        );
        assert!(html.contains("Some text"), "Body text missing");
    }

    #[test]
    fn test_heading_anchors_h1_has_no_link() {
        let html = render_markdown("# Main Title\n");
        assert!(html.contains(r#"<h1 id="main-title">"#));
        assert!(!html.contains("class=\"anchor\""));
    }

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("Meta Andromeda Update"), "meta-andromeda-update");
        assert_eq!(slugify("  Leading & Trailing  "), "leading-trailing");
        assert_eq!(slugify("CamelCase123"), "camelcase123");
    }
}
