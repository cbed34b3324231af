// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! UI code follows the Elm-style "state down, messages up" pattern: screens
//! own their state, turn messages into state changes and report side effects
//! to the application root as events.
//!
//! # Screens
//!
//! - [`composer`] - Card composer: preview, template strip and controls
//!
//! # Shared Infrastructure
//!
//! - [`state`] - UI-only state (photo spring animation)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management
//! - [`notifications`] - Toast notification system for user feedback

pub mod composer;
pub mod design_tokens;
pub mod notifications;
pub mod state;
pub mod styles;
pub mod theming;
