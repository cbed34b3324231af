// SPDX-License-Identifier: MPL-2.0
//! Card domain types.
//!
//! This module contains the card record and its value objects, independent
//! of any presentation framework.

pub mod gesture;
pub mod newtypes;
pub mod resource;
pub mod state;
pub mod style;

// Re-export commonly used types
pub use gesture::GestureSink;
pub use newtypes::{FontSize, Offset, PhotoScale, TemplateIndex, TEMPLATE_COUNT};
pub use resource::{PickOutcome, ResourceHandle};
pub use state::{CardDefaults, CardState, DEFAULT_GREETING};
pub use style::{Decoration, FontColor, FontFamily};
