// SPDX-License-Identifier: MPL-2.0
//! Critically damped spring used to smooth the displayed photo transform.
//!
//! The card state always holds the latest gesture values. The preview does not
//! jump to them; it follows them through this spring, advanced by the frame
//! subscription until every axis has settled.

use crate::domain::card::{Offset, PhotoScale};
use crate::ui::design_tokens::motion;
use std::time::Duration;

/// Displayed photo transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringTransform {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl SpringTransform {
    #[must_use]
    pub fn new(offset: Offset, scale: PhotoScale) -> Self {
        Self {
            x: offset.x,
            y: offset.y,
            scale: scale.value(),
        }
    }
}

impl Default for SpringTransform {
    fn default() -> Self {
        Self::new(Offset::ZERO, PhotoScale::default())
    }
}

/// One animated value.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Axis {
    value: f32,
    velocity: f32,
    target: f32,
}

impl Axis {
    fn at_rest(value: f32) -> Self {
        Self {
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Advances by `dt` seconds using the closed-form critically damped
    /// solution, so large frame gaps never overshoot.
    fn step(&mut self, omega: f32, dt: f32) {
        let delta = self.value - self.target;
        let decay = (-omega * dt).exp();
        let slope = self.velocity + omega * delta;

        self.value = self.target + (delta + slope * dt) * decay;
        self.velocity = (self.velocity - slope * omega * dt) * decay;
    }

    fn is_settled(&self, tolerance: f32) -> bool {
        (self.value - self.target).abs() < tolerance && self.velocity.abs() < tolerance
    }

    fn snap(&mut self) {
        self.value = self.target;
        self.velocity = 0.0;
    }
}

/// Spring state for the photo layer.
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoSpring {
    x: Axis,
    y: Axis,
    scale: Axis,
}

impl PhotoSpring {
    /// Creates a spring at rest on the given transform.
    #[must_use]
    pub fn new(offset: Offset, scale: PhotoScale) -> Self {
        Self {
            x: Axis::at_rest(offset.x),
            y: Axis::at_rest(offset.y),
            scale: Axis::at_rest(scale.value()),
        }
    }

    /// Moves the target; the current value keeps its position and velocity.
    pub fn set_target(&mut self, offset: Offset, scale: PhotoScale) {
        self.x.target = offset.x;
        self.y.target = offset.y;
        self.scale.target = scale.value();
    }

    /// Advances the animation. Axes that reach the settle tolerance snap to
    /// their target so the frame subscription can stop.
    pub fn step(&mut self, dt: Duration) {
        let dt = dt.as_secs_f32();
        if dt <= 0.0 {
            return;
        }

        for axis in [&mut self.x, &mut self.y] {
            axis.step(motion::SPRING_STIFFNESS, dt);
            if axis.is_settled(motion::SETTLE_DISTANCE) {
                axis.snap();
            }
        }

        self.scale.step(motion::SPRING_STIFFNESS, dt);
        if self.scale.is_settled(motion::SETTLE_SCALE) {
            self.scale.snap();
        }
    }

    /// Returns true once every axis rests on its target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.x.value == self.x.target
            && self.y.value == self.y.target
            && self.scale.value == self.scale.target
            && self.x.velocity == 0.0
            && self.y.velocity == 0.0
            && self.scale.velocity == 0.0
    }

    /// Transform to draw this frame.
    #[must_use]
    pub fn current(&self) -> SpringTransform {
        SpringTransform {
            x: self.x.value,
            y: self.y.value,
            scale: self.scale.value,
        }
    }

    /// Transform the spring is heading to.
    #[must_use]
    pub fn target(&self) -> SpringTransform {
        SpringTransform {
            x: self.x.target,
            y: self.y.target,
            scale: self.scale.target,
        }
    }
}

impl Default for PhotoSpring {
    fn default() -> Self {
        Self::new(Offset::ZERO, PhotoScale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, SPRING_EPSILON};

    const FRAME: Duration = Duration::from_millis(motion::FRAME_MILLIS);

    fn scale(value: f32) -> PhotoScale {
        PhotoScale::new(value).expect("finite scale")
    }

    #[test]
    fn new_spring_is_settled() {
        let spring = PhotoSpring::default();
        assert!(spring.is_settled());
        assert_eq!(spring.current(), SpringTransform::default());
    }

    #[test]
    fn moving_the_target_unsettles() {
        let mut spring = PhotoSpring::default();
        spring.set_target(Offset::new(40.0, -20.0), scale(2.0));

        assert!(!spring.is_settled());
        assert_eq!(spring.current(), SpringTransform::default());
        assert_eq!(spring.target().x, 40.0);
    }

    #[test]
    fn converges_and_settles() {
        let mut spring = PhotoSpring::default();
        spring.set_target(Offset::new(40.0, -20.0), scale(2.0));

        for _ in 0..240 {
            spring.step(FRAME);
            if spring.is_settled() {
                break;
            }
        }

        assert!(spring.is_settled());
        assert_eq!(spring.current(), spring.target());
    }

    #[test]
    fn progresses_monotonically_without_overshoot() {
        let mut spring = PhotoSpring::default();
        spring.set_target(Offset::new(100.0, 0.0), PhotoScale::default());

        let mut previous = 0.0;
        for _ in 0..60 {
            spring.step(FRAME);
            let x = spring.current().x;
            assert!(x >= previous);
            assert!(x <= 100.0);
            previous = x;
        }
    }

    #[test]
    fn large_frame_gap_lands_close_to_target() {
        let mut spring = PhotoSpring::default();
        spring.set_target(Offset::new(50.0, 50.0), PhotoScale::default());
        spring.step(Duration::from_secs(5));

        assert_abs_diff_eq!(spring.current().x, 50.0, epsilon = SPRING_EPSILON);
        assert_abs_diff_eq!(spring.current().y, 50.0, epsilon = SPRING_EPSILON);
    }

    #[test]
    fn zero_dt_does_nothing() {
        let mut spring = PhotoSpring::default();
        spring.set_target(Offset::new(10.0, 10.0), PhotoScale::default());
        let before = spring.clone();
        spring.step(Duration::ZERO);
        assert_eq!(spring, before);
    }

    #[test]
    fn retargeting_mid_flight_keeps_momentum() {
        let mut spring = PhotoSpring::default();
        spring.set_target(Offset::new(100.0, 0.0), PhotoScale::default());
        spring.step(FRAME);
        spring.step(FRAME);
        let moving = spring.current().x;

        spring.set_target(Offset::new(moving, 0.0), PhotoScale::default());
        spring.step(FRAME);

        assert!(spring.current().x > moving);
    }
}
