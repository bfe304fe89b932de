// SPDX-FileCopyrightText: 2025 GoDigitalPro
//
// SPDX-License-Identifier: Apache-2.0

//! Maud HTML layouts.
//!
//! Layouts wrap rendered section content in a complete HTML document with
//! the SEO head block (title, description, canonical link, social meta,
//! JSON-LD). Selected by the record's `layout` field: article|review, with
//! anything else falling back to the default listing layout.

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::config::SiteConfig;
use crate::record::{Author, PageMetadata};
use crate::seo::{SchemaObject, canonical_url, json_ld_script, page_title};

/// Generator version baked into output as `<meta name="generator">`.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Context passed to layout functions.
pub struct LayoutContext<'a> {
    /// Page title (before the site suffix)
    pub title: &'a str,
    /// Meta description (empty string renders no tag)
    pub description: &'a str,
    /// Absolute canonical URL for this page
    pub canonical: &'a str,
    pub site: &'a SiteConfig,
    /// Rendered section HTML
    pub content: &'a str,
    /// Breadcrumb trail: (label, url)
    pub breadcrumbs: &'a [(String, String)],
    /// Record metadata; None for listing pages
    pub meta: Option<&'a PageMetadata>,
    /// JSON-LD objects for the head, in order
    pub schemas: &'a [SchemaObject],
}

/// Apply a named layout to rendered content.
pub fn apply_layout(name: &str, ctx: &LayoutContext) -> String {
    let markup = match name {
        "article" => article_layout(ctx),
        "review" => review_layout(ctx),
        _ => default_layout(ctx),
    };
    markup.into_string()
}

/// Shared `<head>` block: identity meta, canonical link, OpenGraph/Twitter
/// cards, and one JSON-LD script per schema object.
fn head(ctx: &LayoutContext) -> Markup {
    let cover = ctx
        .meta
        .and_then(|meta| meta.cover_image.as_deref())
        .map(|image| absolute(&ctx.site.site.origin, image));
    let og_type = if ctx.meta.is_some() { "article" } else { "website" };

    html! {
        head {
            meta charset="utf-8";
            meta name="viewport" content="width=device-width, initial-scale=1";
            meta name="generator" content=(format!("press v{}", VERSION));
            title { (page_title(ctx.title, &ctx.site.site.title)) }
            @if !ctx.description.is_empty() {
                meta name="description" content=(ctx.description);
            }
            link rel="canonical" href=(ctx.canonical);
            link rel="stylesheet" href="/style.css";

            meta property="og:site_name" content=(ctx.site.site.title);
            meta property="og:type" content=(og_type);
            meta property="og:title" content=(ctx.title);
            meta property="og:url" content=(ctx.canonical);
            @if !ctx.description.is_empty() {
                meta property="og:description" content=(ctx.description);
            }
            @if let Some(cover) = &cover {
                meta property="og:image" content=(cover);
                meta name="twitter:card" content="summary_large_image";
            } @else {
                meta name="twitter:card" content="summary";
            }

            @for schema in ctx.schemas {
                (json_ld_script(schema))
            }
        }
    }
}

/// Site header with nav, shared by every layout.
fn header(ctx: &LayoutContext) -> Markup {
    html! {
        header class="site-header" {
            a class="site-title" href="/" { (ctx.site.site.title) }
            @if !ctx.site.nav.is_empty() {
                nav {
                    @for link in &ctx.site.nav {
                        a href=(link.href) { (link.label) }
                    }
                }
            }
        }
    }
}

/// Visible breadcrumb trail; hidden on the home page (single crumb).
fn breadcrumb_nav(ctx: &LayoutContext) -> Markup {
    html! {
        @if ctx.breadcrumbs.len() > 1 {
            nav class="breadcrumbs" aria-label="Breadcrumb" {
                @for (i, (label, url)) in ctx.breadcrumbs.iter().enumerate() {
                    @if i > 0 { span class="sep" { " › " } }
                    a href=(url) { (label) }
                }
            }
        }
    }
}

fn footer(ctx: &LayoutContext) -> Markup {
    html! {
        footer class="site-footer" {
            p {
                (ctx.site.site.title)
                @if let Some(tagline) = &ctx.site.site.tagline {
                    " · " (tagline)
                }
            }
        }
    }
}

fn byline(author: Option<&Author>, meta: &PageMetadata) -> Markup {
    html! {
        p class="byline" {
            @if let Some(author) = author {
                @if let Some(url) = &author.profile_url {
                    a rel="author" href=(url) { (author.name) }
                } @else {
                    span { (author.name) }
                }
                " · "
            }
            time datetime=(meta.published.to_string()) {
                (meta.published.format("%B %-d, %Y").to_string())
            }
            @if let Some(updated) = meta.updated {
                " · Updated "
                time datetime=(updated.to_string()) {
                    (updated.format("%B %-d, %Y").to_string())
                }
            }
        }
    }
}

/// Layout for long-form posts: hero with cover image and byline.
fn article_layout(ctx: &LayoutContext) -> Markup {
    let author = ctx
        .meta
        .and_then(|meta| meta.author.as_ref())
        .or(ctx.site.default_author.as_ref());

    html! {
        (DOCTYPE)
        html lang="en" {
            (head(ctx))
            body {
                (header(ctx))
                (breadcrumb_nav(ctx))
                main class="article-page" {
                    article {
                        @if let Some(meta) = ctx.meta {
                            div class="hero" {
                                h1 { (meta.title) }
                                (byline(author, meta))
                                @if let Some(image) = &meta.cover_image {
                                    img src=(image) alt=(meta.cover_alt.as_deref().unwrap_or(""));
                                }
                            }
                        }
                        (PreEscaped(ctx.content))
                    }
                }
                (footer(ctx))
            }
        }
    }
}

/// Layout for tool-review pages: category badge, lead paragraph.
fn review_layout(ctx: &LayoutContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(ctx))
            body {
                (header(ctx))
                (breadcrumb_nav(ctx))
                main class="review-page" {
                    article {
                        @if let Some(meta) = ctx.meta {
                            div class="hero" {
                                span class="badge" { (meta.category) }
                                h1 { (meta.title) }
                                @if !meta.description.is_empty() {
                                    p class="lead" { (meta.description) }
                                }
                            }
                        }
                        (PreEscaped(ctx.content))
                    }
                }
                (footer(ctx))
            }
        }
    }
}

/// Default layout for listing pages (home, category indexes).
fn default_layout(ctx: &LayoutContext) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            (head(ctx))
            body {
                (header(ctx))
                (breadcrumb_nav(ctx))
                main class="listing-page" {
                    h1 { (ctx.title) }
                    @if !ctx.description.is_empty() {
                        p class="lead" { (ctx.description) }
                    }
                    (PreEscaped(ctx.content))
                }
                (footer(ctx))
            }
        }
    }
}

/// Absolutize a site-relative image path; full URLs pass through.
fn absolute(origin: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        canonical_url(origin, path)
    }
}
