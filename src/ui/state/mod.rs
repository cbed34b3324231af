// SPDX-License-Identifier: MPL-2.0
//! UI-only state that is not part of the card itself.

pub mod spring;

pub use spring::{PhotoSpring, SpringTransform};
