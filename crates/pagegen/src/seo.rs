// SPDX-FileCopyrightText: 2025 GoDigitalPro
//
// SPDX-License-Identifier: Apache-2.0

//! SEO builders — canonical URLs and schema.org JSON-LD.
//!
//! Everything here is a pure function over in-memory data: no I/O, no
//! validation. Field spellings (`@context`, `@type`, `mainEntity`,
//! `acceptedAnswer`, `itemListElement`) are the externally mandated
//! schema.org vocabulary and must not be renamed.

use maud::{Markup, PreEscaped, html};
use serde::{Deserialize, Serialize};

use crate::record::FaqItem;

const SCHEMA_ORG: &str = "https://schema.org";

fn schema_context() -> String {
    SCHEMA_ORG.to_string()
}

// ─── Canonical URLs ──────────────────────────────────────────────────────────

/// Join a site origin and a relative path with exactly one separating slash.
///
/// This is a join, not a validator: malformed paths pass through as-is.
/// An empty path yields the bare origin. No trailing slash is added.
pub fn canonical_url(origin: &str, path: &str) -> String {
    let origin = origin.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if path.is_empty() {
        origin.to_string()
    } else {
        format!("{}/{}", origin, path)
    }
}

/// Compose the `<title>` text: page title, em-dash, site title.
pub fn page_title(page: &str, site: &str) -> String {
    format!("{} — {}", page, site)
}

// ─── JSON-LD shapes ──────────────────────────────────────────────────────────

/// A schema.org JSON-LD fragment, tagged by `@type`.
///
/// Authors may supply these directly in a record's `structured_data`; the
/// build adds a `BreadcrumbList` of its own per page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum SchemaObject {
    Product(ProductSchema),
    #[serde(rename = "FAQPage")]
    FaqPage(FaqPageSchema),
    BreadcrumbList(BreadcrumbListSchema),
}

/// `Product` schema for tool-review pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductSchema {
    #[serde(rename = "@context", default = "schema_context")]
    pub context: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    #[serde(
        rename = "aggregateRating",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub aggregate_rating: Option<AggregateRating>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offers: Option<Offer>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(rename = "@type", default = "brand_tag")]
    pub schema_type: String,
    pub name: String,
}

fn brand_tag() -> String {
    "Brand".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRating {
    #[serde(rename = "@type", default = "rating_tag")]
    pub schema_type: String,
    #[serde(rename = "ratingValue")]
    pub rating_value: f64,
    #[serde(rename = "reviewCount")]
    pub review_count: u32,
}

fn rating_tag() -> String {
    "AggregateRating".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    #[serde(rename = "@type", default = "offer_tag")]
    pub schema_type: String,
    pub price: String,
    #[serde(rename = "priceCurrency")]
    pub price_currency: String,
}

fn offer_tag() -> String {
    "Offer".to_string()
}

/// `FAQPage` schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaqPageSchema {
    #[serde(rename = "@context", default = "schema_context")]
    pub context: String,
    #[serde(rename = "mainEntity", default)]
    pub main_entity: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    #[serde(rename = "@type", default = "question_tag")]
    pub schema_type: String,
    pub name: String,
    #[serde(rename = "acceptedAnswer")]
    pub accepted_answer: Answer,
}

fn question_tag() -> String {
    "Question".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "@type", default = "answer_tag")]
    pub schema_type: String,
    pub text: String,
}

fn answer_tag() -> String {
    "Answer".to_string()
}

/// `BreadcrumbList` schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreadcrumbListSchema {
    #[serde(rename = "@context", default = "schema_context")]
    pub context: String,
    #[serde(rename = "itemListElement", default)]
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    #[serde(rename = "@type", default = "list_item_tag")]
    pub schema_type: String,
    pub position: usize,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

fn list_item_tag() -> String {
    "ListItem".to_string()
}

// ─── Builders ────────────────────────────────────────────────────────────────

/// Build a `FAQPage` schema from question/answer pairs.
///
/// Order-preserving. An empty input yields `mainEntity: []`, never an error:
/// a missing FAQ block is cosmetic and must not break rendering.
pub fn faq_json_ld(items: &[FaqItem]) -> SchemaObject {
    SchemaObject::FaqPage(FaqPageSchema {
        context: schema_context(),
        main_entity: items
            .iter()
            .map(|item| Question {
                schema_type: question_tag(),
                name: item.question.clone(),
                accepted_answer: Answer {
                    schema_type: answer_tag(),
                    text: item.answer.clone(),
                },
            })
            .collect(),
    })
}

/// Build a `BreadcrumbList` schema from an ordered `(name, url)` trail.
///
/// Positions are 1-based per schema.org.
pub fn breadcrumb_json_ld(trail: &[(String, String)]) -> SchemaObject {
    SchemaObject::BreadcrumbList(BreadcrumbListSchema {
        context: schema_context(),
        item_list_element: trail
            .iter()
            .enumerate()
            .map(|(i, (name, url))| ListItem {
                schema_type: list_item_tag(),
                position: i + 1,
                name: name.clone(),
                item: Some(url.clone()),
            })
            .collect(),
    })
}

/// Render one schema object as an embedded JSON-LD script block.
pub fn json_ld_script(schema: &SchemaObject) -> Markup {
    let json = serde_json::to_string(schema).unwrap_or_default();
    html! {
        script type="application/ld+json" { (PreEscaped(json)) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn canonical_url_single_slash() {
        let origin = "https://www.godigitalpro.in";
        assert_eq!(
            canonical_url(origin, "/tools/kinsta"),
            "https://www.godigitalpro.in/tools/kinsta"
        );
        assert_eq!(
            canonical_url(origin, "tools/kinsta"),
            "https://www.godigitalpro.in/tools/kinsta"
        );
        assert_eq!(
            canonical_url("https://www.godigitalpro.in/", "/tools/kinsta"),
            "https://www.godigitalpro.in/tools/kinsta"
        );
    }

    #[test]
    fn canonical_url_is_deterministic() {
        let origin = "https://www.godigitalpro.in";
        let first = canonical_url(origin, "/blog/meta-andromeda-update");
        let second = canonical_url(origin, "/blog/meta-andromeda-update");
        assert_eq!(first, second);
    }

    #[test]
    fn canonical_url_empty_path_is_bare_origin() {
        assert_eq!(
            canonical_url("https://www.godigitalpro.in", "/"),
            "https://www.godigitalpro.in"
        );
        assert_eq!(
            canonical_url("https://www.godigitalpro.in", ""),
            "https://www.godigitalpro.in"
        );
    }

    #[test]
    fn faq_json_ld_exact_shape() {
        let items = vec![FaqItem {
            question: "What is X?".to_string(),
            answer: "X is a tool.".to_string(),
            open: false,
        }];
        let schema = faq_json_ld(&items);
        let value = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(
            value,
            json!({
                "@context": "https://schema.org",
                "@type": "FAQPage",
                "mainEntity": [{
                    "@type": "Question",
                    "name": "What is X?",
                    "acceptedAnswer": {
                        "@type": "Answer",
                        "text": "X is a tool."
                    }
                }]
            })
        );
    }

    #[test]
    fn faq_json_ld_preserves_length_and_order() {
        let items: Vec<FaqItem> = (0..5)
            .map(|i| FaqItem {
                question: format!("Q{}", i),
                answer: format!("A{}", i),
                open: false,
            })
            .collect();
        let SchemaObject::FaqPage(faq) = faq_json_ld(&items) else {
            panic!("expected FAQPage");
        };
        assert_eq!(faq.main_entity.len(), 5);
        for (i, question) in faq.main_entity.iter().enumerate() {
            assert_eq!(question.name, format!("Q{}", i));
            assert_eq!(question.accepted_answer.text, format!("A{}", i));
        }
    }

    #[test]
    fn faq_json_ld_empty_is_well_formed() {
        let schema = faq_json_ld(&[]);
        let value = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(value["@type"], "FAQPage");
        assert_eq!(value["mainEntity"], json!([]));
    }

    #[test]
    fn breadcrumb_positions_are_one_based() {
        let trail = vec![
            ("Home".to_string(), "https://example.com".to_string()),
            ("Tools".to_string(), "https://example.com/tools".to_string()),
            (
                "Kinsta".to_string(),
                "https://example.com/tools/kinsta".to_string(),
            ),
        ];
        let value = serde_json::to_value(breadcrumb_json_ld(&trail)).expect("serialize");
        assert_eq!(value["@type"], "BreadcrumbList");
        let items = value["itemListElement"].as_array().expect("array");
        assert_eq!(items.len(), 3);
        assert_eq!(items[0]["position"], 1);
        assert_eq!(items[0]["name"], "Home");
        assert_eq!(items[2]["position"], 3);
        assert_eq!(items[2]["item"], "https://example.com/tools/kinsta");
    }

    #[test]
    fn product_schema_round_trips_from_yaml() {
        let yaml = r#"
"@type": Product
name: "Kinsta"
description: "Managed WordPress hosting"
brand:
  name: "Kinsta Inc."
aggregateRating:
  ratingValue: 4.6
  reviewCount: 212
offers:
  price: "35.00"
  priceCurrency: "USD"
"#;
        let schema: SchemaObject = serde_yaml::from_str(yaml).expect("parse");
        let SchemaObject::Product(ref product) = schema else {
            panic!("expected Product");
        };
        assert_eq!(product.name, "Kinsta");
        assert_eq!(product.context, "https://schema.org");

        let value = serde_json::to_value(&schema).expect("serialize");
        assert_eq!(value["@type"], "Product");
        assert_eq!(value["brand"]["@type"], "Brand");
        assert_eq!(value["aggregateRating"]["ratingValue"], 4.6);
        assert_eq!(value["offers"]["priceCurrency"], "USD");
    }

    #[test]
    fn json_ld_script_wraps_schema() {
        let html = json_ld_script(&faq_json_ld(&[])).into_string();
        assert!(html.starts_with(r#"<script type="application/ld+json">"#));
        assert!(html.contains(r#""@type":"FAQPage""#));
        assert!(html.ends_with("</script>"));
    }
}
