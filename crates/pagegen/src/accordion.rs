// SPDX-FileCopyrightText: 2025 GoDigitalPro
//
// SPDX-License-Identifier: Apache-2.0

//! FAQ accordion widget.
//!
//! Each question/answer pair owns one two-state value: collapsed or
//! expanded. `toggle` flips it; no transition is ever blocked and there is
//! no terminal state. Instances never share state — toggling one never
//! affects a sibling.
//!
//! Rendering targets `<details>`/`<summary>`, so in the output page the
//! expanded flag becomes the `open` attribute and the browser owns the
//! per-element toggle from there. State dies with the element; nothing
//! persists across reloads.

use maud::{Markup, PreEscaped, html};

use crate::markdown::render_markdown;
use crate::record::FaqItem;

/// Expansion state of one accordion instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccordionState {
    #[default]
    Collapsed,
    Expanded,
}

impl AccordionState {
    /// Flip between the two states.
    pub fn toggle(&mut self) {
        *self = match self {
            AccordionState::Collapsed => AccordionState::Expanded,
            AccordionState::Expanded => AccordionState::Collapsed,
        };
    }

    pub fn is_expanded(self) -> bool {
        self == AccordionState::Expanded
    }
}

/// One rendered FAQ entry with its own expansion state.
#[derive(Debug, Clone)]
pub struct Accordion {
    question: String,
    answer: String,
    state: AccordionState,
}

impl Accordion {
    /// Build from a FAQ item; `open: true` items start expanded.
    pub fn from_item(item: &FaqItem) -> Accordion {
        Accordion {
            question: item.question.clone(),
            answer: item.answer.clone(),
            state: if item.open {
                AccordionState::Expanded
            } else {
                AccordionState::Collapsed
            },
        }
    }

    pub fn toggle(&mut self) {
        self.state.toggle();
    }

    pub fn is_expanded(&self) -> bool {
        self.state.is_expanded()
    }

    /// Render as a `<details>` block; expanded instances carry `open`.
    pub fn render(&self) -> Markup {
        html! {
            details class="faq-item" open[self.state.is_expanded()] {
                summary class="faq-question" { (self.question) }
                div class="faq-answer" {
                    (PreEscaped(render_markdown(&self.answer)))
                }
            }
        }
    }
}
