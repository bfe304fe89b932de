// SPDX-FileCopyrightText: 2025 GoDigitalPro
//
// SPDX-License-Identifier: Apache-2.0

//! Section renderers — one maud fragment per section kind.
//!
//! `render_sections` is a stateless fold over a record's sections in array
//! order. A section the renderer does not recognize produces nothing: one
//! malformed block must never take down the page.

use maud::{Markup, PreEscaped, html};

use crate::accordion::Accordion;
use crate::markdown::render_markdown;
use crate::record::Section;
use crate::routes::IndexPage;

/// Render every section in order.
pub fn render_sections(sections: &[Section]) -> Markup {
    html! {
        @for section in sections {
            (render_section(section))
        }
    }
}

/// Dispatch one section to its renderer.
pub fn render_section(section: &Section) -> Markup {
    match section {
        Section::Paragraphs { items } => html! {
            @for text in items {
                (PreEscaped(render_markdown(text)))
            }
        },

        Section::Checklist { title, items } => html! {
            @if !items.is_empty() {
                section class="checklist" {
                    @if let Some(title) = title {
                        h2 { (title) }
                    }
                    ul {
                        @for item in items {
                            li {
                                span class="check" aria-hidden="true" { "✓" }
                                " " (item)
                            }
                        }
                    }
                }
            }
        },

        Section::Plays { title, items } => html! {
            @if !items.is_empty() {
                section class="plays" {
                    @if let Some(title) = title {
                        h2 { (title) }
                    }
                    div class="play-grid" {
                        @for play in items {
                            article class="play" {
                                h3 { (play.title) }
                                p { (play.detail) }
                            }
                        }
                    }
                }
            }
        },

        Section::Faq { title, items } => html! {
            @if !items.is_empty() {
                section class="faq" {
                    @if let Some(title) = title {
                        h2 { (title) }
                    }
                    @for item in items {
                        (Accordion::from_item(item).render())
                    }
                }
            }
        },

        Section::Pricing { title, tiers } => html! {
            @if !tiers.is_empty() {
                section class="pricing" {
                    @if let Some(title) = title {
                        h2 { (title) }
                    }
                    table {
                        thead {
                            tr {
                                th { "Plan" }
                                th { "Price" }
                                th { "Details" }
                            }
                        }
                        tbody {
                            @for tier in tiers {
                                tr {
                                    td { (tier.name) }
                                    td { (tier.price) }
                                    td {
                                        @if let Some(detail) = &tier.detail {
                                            (detail)
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        },

        Section::Alternatives { title, items } => html! {
            @if !items.is_empty() {
                section class="alternatives" {
                    @if let Some(title) = title {
                        h2 { (title) }
                    }
                    ul {
                        @for alt in items {
                            li {
                                a href=(alt.url) { (alt.name) }
                                @if let Some(blurb) = &alt.blurb {
                                    " — " (blurb)
                                }
                            }
                        }
                    }
                }
            }
        },

        Section::Unknown => {
            diagnostics::log_warn!("Skipping section with unknown kind");
            html! {}
        }
    }
}

/// Render a listing page body (home and per-category indexes).
pub fn render_index(index: &IndexPage) -> Markup {
    html! {
        @if !index.entries.is_empty() {
            ul class="page-list" {
                @for entry in &index.entries {
                    li {
                        a href=(entry.href) { (entry.title) }
                        @if !entry.description.is_empty() {
                            p { (entry.description) }
                        }
                        time datetime=(entry.published.to_string()) {
                            (entry.published.format("%B %-d, %Y").to_string())
                        }
                    }
                }
            }
        }
    }
}
