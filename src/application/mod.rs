// SPDX-License-Identifier: MPL-2.0
//! Application layer - Use cases and orchestration.
//!
//! This module contains the application layer of the Clean Architecture:
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//! - [`composer`]: Use cases driving the picker and permission collaborators
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Infrastructure layer implements application layer ports
//! - Presentation layer uses application layer services
//!
//! # Example
//!
//! ```ignore
//! use card_composer::application::{composer, port::PickOptions};
//! use card_composer::domain::card::CardState;
//! use card_composer::infrastructure::RfdMediaPicker;
//!
//! let picker = RfdMediaPicker::new();
//! let mut card = CardState::default();
//! let attached = composer::pick_image(&picker, PickOptions::default(), &mut card).await;
//! ```

pub mod composer;
pub mod port;
