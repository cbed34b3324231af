// SPDX-License-Identifier: MPL-2.0
//! Gesture event sink.
//!
//! Gesture recognizers (mouse, touch, wheel) only ever talk to this trait, so
//! the card logic never depends on how a platform recognizes gestures.

/// Receiver of continuous photo gestures.
///
/// Both callbacks carry absolute values for the current gesture: the total
/// translation since the gesture started and the total scale factor. They are
/// called on every gesture update with no debouncing.
pub trait GestureSink {
    /// Pan gesture update with the translation since the gesture started.
    fn on_drag_move(&mut self, dx: f32, dy: f32);

    /// Pinch gesture update with the current scale factor.
    fn on_pinch_update(&mut self, scale: f32);
}
