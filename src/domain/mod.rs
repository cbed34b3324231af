// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core card composition rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so the whole
//! interaction model can be tested without a rendering environment.
//!
//! # Modules
//!
//! - [`card`]: The editable card record ([`CardState`](card::CardState)), its
//!   value objects ([`FontSize`](card::FontSize), [`PhotoScale`](card::PhotoScale),
//!   [`TemplateIndex`](card::TemplateIndex)) and the [`GestureSink`](card::GestureSink)
//! - [`error`]: Domain error types ([`ComposerError`](error::ComposerError))
//! - [`permission`]: Media library permission state machine

pub mod card;
pub mod error;
pub mod permission;
