// SPDX-License-Identifier: MPL-2.0
//! `card_composer` is a single-screen greeting card editor built with the Iced
//! GUI framework.
//!
//! Pick one of five birthday templates, type a message and style it, place a
//! photo from your library with drag and pinch gestures, and drop a heart
//! sticker on the card. The interface is localized with Fluent and reads its
//! defaults from a TOML settings file.
//!
//! The crate is layered:
//!
//! - [`domain`]: the card record and its rules, free of UI types
//! - [`application`]: use cases and the ports to platform services
//! - [`infrastructure`]: native adapters for those ports
//! - [`media`]: template rendering and photo decoding
//! - [`ui`] and [`app`]: the Iced presentation layer

#![doc(html_root_url = "https://docs.rs/card_composer/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod icon;
pub mod infrastructure;
pub mod media;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
