// SPDX-License-Identifier: MPL-2.0
//! Photo layer of the preview: draws the attached photo and recognizes the
//! pan and pinch gestures performed on it.
//!
//! Recognized gestures:
//! - left mouse drag or one finger: [`GestureMessage::DragMove`] with the
//!   translation since the press,
//! - two fingers: [`GestureMessage::PinchUpdate`] with the finger distance
//!   relative to the distance when the second finger landed (or, when both
//!   landed on the same spot, the first distance measured after that),
//! - mouse wheel over the photo: [`GestureMessage::PinchUpdate`] with the
//!   current scale multiplied by 1.1 per line.
//!
//! Every update is published as soon as it happens.

use super::messages::{GestureMessage, Message};
use crate::media::ImageData;
use crate::ui::design_tokens::sizing;
use crate::ui::state::SpringTransform;
use iced::mouse::{self, ScrollDelta};
use iced::widget::canvas::{self, Frame, Geometry};
use iced::widget::Action;
use iced::{touch, Point, Rectangle, Renderer, Size, Theme};

/// Zoom factor applied per wheel line.
const WHEEL_STEP: f32 = 1.1;

/// Pixel deltas (touchpads) are converted to lines with this ratio.
const PIXELS_PER_LINE: f32 = 60.0;

/// Canvas program drawing the photo at its animated transform.
pub struct PhotoLayer<'a> {
    pub photo: &'a ImageData,
    /// Transform currently displayed (spring output).
    pub transform: SpringTransform,
    /// Scale stored in the card, base of wheel zooming.
    pub scale: f32,
}

/// What the photo layer does with an input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Recognized {
    /// The event belongs to a gesture but changes nothing yet.
    Capture,
    Gesture(GestureMessage),
}

impl Recognized {
    fn into_action(self) -> Action<Message> {
        match self {
            Recognized::Capture => Action::capture(),
            Recognized::Gesture(message) => {
                Action::publish(Message::Gesture(message)).and_capture()
            }
        }
    }
}

/// Gesture tracking kept by the canvas between events.
#[derive(Debug, Default)]
pub struct GestureState {
    drag_origin: Option<Point>,
    fingers: Vec<(touch::Finger, Point)>,
    pinch_origin: Option<f32>,
}

impl GestureState {
    fn is_dragging(&self) -> bool {
        self.drag_origin.is_some()
    }

    fn finger_position(&mut self, id: touch::Finger) -> Option<&mut Point> {
        self.fingers
            .iter_mut()
            .find(|(finger, _)| *finger == id)
            .map(|(_, position)| position)
    }

    fn finger_distance(&self) -> Option<f32> {
        match self.fingers.as_slice() {
            [(_, a), (_, b)] => Some(a.distance(*b)),
            _ => None,
        }
    }

    fn reset(&mut self) {
        *self = Self::default();
    }
}

impl PhotoLayer<'_> {
    fn hits_photo(&self, bounds: Rectangle, position: Point) -> bool {
        let rect = photo_rect(bounds.size(), self.photo.aspect_ratio(), self.transform);
        rect.contains(Point::new(position.x - bounds.x, position.y - bounds.y))
    }

    fn handle_mouse(
        &self,
        state: &mut GestureState,
        event: &mouse::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Recognized> {
        match event {
            mouse::Event::ButtonPressed(mouse::Button::Left) => {
                let position = cursor.position()?;
                if !self.hits_photo(bounds, position) {
                    return None;
                }
                state.drag_origin = Some(position);
                Some(Recognized::Capture)
            }
            mouse::Event::CursorMoved { position } => {
                let origin = state.drag_origin?;
                let (dx, dy) = translation(origin, *position);
                Some(Recognized::Gesture(GestureMessage::DragMove { dx, dy }))
            }
            mouse::Event::ButtonReleased(mouse::Button::Left) => {
                state.drag_origin.take()?;
                Some(Recognized::Capture)
            }
            mouse::Event::WheelScrolled { delta } => {
                let position = cursor.position()?;
                if !self.hits_photo(bounds, position) {
                    return None;
                }
                let scale = wheel_scale(self.scale, *delta);
                Some(Recognized::Gesture(GestureMessage::PinchUpdate { scale }))
            }
            _ => None,
        }
    }

    fn handle_touch(
        &self,
        state: &mut GestureState,
        event: &touch::Event,
        bounds: Rectangle,
    ) -> Option<Recognized> {
        match *event {
            touch::Event::FingerPressed { id, position } => match state.fingers.len() {
                0 if self.hits_photo(bounds, position) => {
                    state.fingers.push((id, position));
                    state.drag_origin = Some(position);
                    Some(Recognized::Capture)
                }
                1 => {
                    // Second finger turns the pan into a pinch.
                    state.fingers.push((id, position));
                    state.drag_origin = None;
                    state.pinch_origin = state.finger_distance();
                    Some(Recognized::Capture)
                }
                _ => None,
            },
            touch::Event::FingerMoved { id, position } => {
                *state.finger_position(id)? = position;

                if let Some(origin) = state.pinch_origin {
                    let current = state.finger_distance()?;
                    match pinch_ratio(origin, current) {
                        Some(scale) => {
                            Some(Recognized::Gesture(GestureMessage::PinchUpdate { scale }))
                        }
                        None => {
                            // Fingers landed on the same spot; measure from here.
                            state.pinch_origin = Some(current);
                            Some(Recognized::Capture)
                        }
                    }
                } else {
                    let origin = state.drag_origin?;
                    let (dx, dy) = translation(origin, position);
                    Some(Recognized::Gesture(GestureMessage::DragMove { dx, dy }))
                }
            }
            touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. } => {
                let tracked = state.fingers.iter().any(|(finger, _)| *finger == id);
                if !tracked {
                    return None;
                }
                // Lifting any finger ends the gesture; the remaining finger
                // does not start a new pan until it is pressed again.
                state.reset();
                Some(Recognized::Capture)
            }
        }
    }
}

impl PhotoLayer<'_> {
    /// Feeds one input event to the gesture recognizer.
    pub fn recognize(
        &self,
        state: &mut GestureState,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Recognized> {
        match event {
            iced::Event::Mouse(mouse_event) => self.handle_mouse(state, mouse_event, bounds, cursor),
            iced::Event::Touch(touch_event) => self.handle_touch(state, touch_event, bounds),
            _ => None,
        }
    }
}

impl canvas::Program<Message> for PhotoLayer<'_> {
    type State = GestureState;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        self.recognize(state, event, bounds, cursor)
            .map(Recognized::into_action)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let rect = photo_rect(bounds.size(), self.photo.aspect_ratio(), self.transform);

        if rect.width > 0.0 && rect.height > 0.0 {
            frame.draw_image(rect, canvas::Image::new(self.photo.handle.clone()));
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_dragging() {
            return mouse::Interaction::Grabbing;
        }

        match cursor.position() {
            Some(position) if self.hits_photo(bounds, position) => mouse::Interaction::Grab,
            _ => mouse::Interaction::default(),
        }
    }
}

/// Size of a photo with `aspect` fitted into a `side`×`side` box.
#[must_use]
pub fn fitted_size(aspect: f32, side: f32) -> Size {
    if !aspect.is_finite() || aspect <= 0.0 {
        return Size::new(side, side);
    }

    if aspect >= 1.0 {
        Size::new(side, side / aspect)
    } else {
        Size::new(side * aspect, side)
    }
}

/// Where the photo is drawn inside an `area`, relative to the area origin.
///
/// The photo is centered, shifted by the transform translation and sized to
/// the photo box times the transform scale.
#[must_use]
pub fn photo_rect(area: Size, aspect: f32, transform: SpringTransform) -> Rectangle {
    let base = fitted_size(aspect, sizing::PHOTO_BOX);
    let size = Size::new(
        base.width * transform.scale.max(0.0),
        base.height * transform.scale.max(0.0),
    );
    let center = Point::new(
        area.width / 2.0 + transform.x,
        area.height / 2.0 + transform.y,
    );

    Rectangle::new(
        Point::new(center.x - size.width / 2.0, center.y - size.height / 2.0),
        size,
    )
}

/// Translation from the gesture origin to the current pointer position.
#[must_use]
pub fn translation(origin: Point, current: Point) -> (f32, f32) {
    (current.x - origin.x, current.y - origin.y)
}

/// Pinch factor, or `None` while the fingers started on the same spot.
#[must_use]
pub fn pinch_ratio(origin_distance: f32, current_distance: f32) -> Option<f32> {
    if origin_distance <= f32::EPSILON {
        return None;
    }
    Some(current_distance / origin_distance)
}

/// Scale after a wheel step over the photo.
#[must_use]
pub fn wheel_scale(current: f32, delta: ScrollDelta) -> f32 {
    let lines = match delta {
        ScrollDelta::Lines { y, .. } => y,
        ScrollDelta::Pixels { y, .. } => y / PIXELS_PER_LINE,
    };
    current * WHEEL_STEP.powf(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_relative_eq;

    fn area() -> Size {
        Size::new(320.0, 540.0)
    }

    #[test]
    fn landscape_photo_fills_box_width() {
        let size = fitted_size(4.0 / 3.0, 120.0);
        assert_relative_eq!(size.width, 120.0);
        assert_relative_eq!(size.height, 90.0);
    }

    #[test]
    fn portrait_photo_fills_box_height() {
        let size = fitted_size(0.5, 120.0);
        assert_relative_eq!(size.width, 60.0);
        assert_relative_eq!(size.height, 120.0);
    }

    #[test]
    fn degenerate_aspect_falls_back_to_square() {
        assert_eq!(fitted_size(0.0, 120.0), Size::new(120.0, 120.0));
        assert_eq!(fitted_size(f32::NAN, 120.0), Size::new(120.0, 120.0));
    }

    #[test]
    fn untransformed_photo_is_centered() {
        let rect = photo_rect(area(), 1.0, SpringTransform::default());
        assert_relative_eq!(rect.center_x(), 160.0);
        assert_relative_eq!(rect.center_y(), 270.0);
        assert_relative_eq!(rect.width, sizing::PHOTO_BOX);
    }

    #[test]
    fn transform_moves_and_scales_photo() {
        let transform = SpringTransform {
            x: 10.0,
            y: -20.0,
            scale: 2.0,
        };
        let rect = photo_rect(area(), 1.0, transform);
        assert_relative_eq!(rect.center_x(), 170.0);
        assert_relative_eq!(rect.center_y(), 250.0);
        assert_relative_eq!(rect.width, sizing::PHOTO_BOX * 2.0);
    }

    #[test]
    fn translation_is_measured_from_the_press() {
        let origin = Point::new(100.0, 100.0);
        assert_eq!(translation(origin, Point::new(105.0, 105.0)), (5.0, 5.0));
        assert_eq!(translation(origin, Point::new(110.0, 97.0)), (10.0, -3.0));
    }

    #[test]
    fn pinch_ratio_compares_to_initial_distance() {
        assert_eq!(pinch_ratio(100.0, 150.0), Some(1.5));
        assert_eq!(pinch_ratio(100.0, 50.0), Some(0.5));
        assert_eq!(pinch_ratio(0.0, 50.0), None);
    }

    #[test]
    fn wheel_lines_multiply_scale() {
        let up = wheel_scale(1.0, ScrollDelta::Lines { x: 0.0, y: 1.0 });
        let down = wheel_scale(1.0, ScrollDelta::Lines { x: 0.0, y: -1.0 });
        assert_relative_eq!(up, 1.1);
        assert_relative_eq!(down, 1.0 / 1.1);
    }

    #[test]
    fn wheel_pixels_are_converted_to_lines() {
        let scale = wheel_scale(
            2.0,
            ScrollDelta::Pixels {
                x: 0.0,
                y: PIXELS_PER_LINE,
            },
        );
        assert_relative_eq!(scale, 2.2);
    }

    /// Drives a [`PhotoLayer`] over a square photo centered in [`area`],
    /// i.e. covering x 100..220 and y 210..330.
    struct Harness {
        photo: ImageData,
        state: GestureState,
        cursor: Point,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                photo: ImageData::from_rgba(2, 2, vec![0; 16]),
                state: GestureState::default(),
                cursor: Point::ORIGIN,
            }
        }

        fn send(&mut self, event: iced::Event) -> Option<Recognized> {
            let layer = PhotoLayer {
                photo: &self.photo,
                transform: SpringTransform::default(),
                scale: 1.0,
            };
            let bounds = Rectangle::new(Point::ORIGIN, area());
            layer.recognize(
                &mut self.state,
                &event,
                bounds,
                mouse::Cursor::Available(self.cursor),
            )
        }

        fn press(&mut self, x: f32, y: f32) -> Option<Recognized> {
            self.cursor = Point::new(x, y);
            self.send(iced::Event::Mouse(mouse::Event::ButtonPressed(
                mouse::Button::Left,
            )))
        }

        fn move_to(&mut self, x: f32, y: f32) -> Option<Recognized> {
            self.cursor = Point::new(x, y);
            self.send(iced::Event::Mouse(mouse::Event::CursorMoved {
                position: self.cursor,
            }))
        }

        fn release(&mut self) -> Option<Recognized> {
            self.send(iced::Event::Mouse(mouse::Event::ButtonReleased(
                mouse::Button::Left,
            )))
        }

        fn wheel_at(&mut self, x: f32, y: f32, lines: f32) -> Option<Recognized> {
            self.cursor = Point::new(x, y);
            self.send(iced::Event::Mouse(mouse::Event::WheelScrolled {
                delta: ScrollDelta::Lines { x: 0.0, y: lines },
            }))
        }

        fn finger_down(&mut self, id: u64, x: f32, y: f32) -> Option<Recognized> {
            self.send(iced::Event::Touch(touch::Event::FingerPressed {
                id: touch::Finger(id),
                position: Point::new(x, y),
            }))
        }

        fn finger_move(&mut self, id: u64, x: f32, y: f32) -> Option<Recognized> {
            self.send(iced::Event::Touch(touch::Event::FingerMoved {
                id: touch::Finger(id),
                position: Point::new(x, y),
            }))
        }

        fn finger_up(&mut self, id: u64, x: f32, y: f32) -> Option<Recognized> {
            self.send(iced::Event::Touch(touch::Event::FingerLifted {
                id: touch::Finger(id),
                position: Point::new(x, y),
            }))
        }
    }

    fn drag(dx: f32, dy: f32) -> Option<Recognized> {
        Some(Recognized::Gesture(GestureMessage::DragMove { dx, dy }))
    }

    fn pinch(scale: f32) -> Option<Recognized> {
        Some(Recognized::Gesture(GestureMessage::PinchUpdate { scale }))
    }

    #[test]
    fn press_outside_the_photo_is_ignored() {
        let mut harness = Harness::new();

        assert_eq!(harness.press(10.0, 10.0), None);
        assert_eq!(harness.move_to(40.0, 40.0), None);
        assert_eq!(harness.release(), None);
    }

    #[test]
    fn mouse_drag_reports_translation_since_the_press() {
        let mut harness = Harness::new();

        assert_eq!(harness.press(160.0, 270.0), Some(Recognized::Capture));
        assert!(harness.state.is_dragging());
        assert_eq!(harness.move_to(165.0, 275.0), drag(5.0, 5.0));
        assert_eq!(harness.move_to(170.0, 267.0), drag(10.0, -3.0));
        assert_eq!(harness.release(), Some(Recognized::Capture));

        assert_eq!(harness.move_to(200.0, 300.0), None);
    }

    #[test]
    fn drag_continues_off_the_photo() {
        let mut harness = Harness::new();
        harness.press(110.0, 220.0);

        assert_eq!(harness.move_to(10.0, 20.0), drag(-100.0, -200.0));
    }

    #[test]
    fn wheel_zooms_only_over_the_photo() {
        let mut harness = Harness::new();

        let Some(Recognized::Gesture(GestureMessage::PinchUpdate { scale })) =
            harness.wheel_at(160.0, 270.0, 1.0)
        else {
            panic!("wheel over the photo should zoom");
        };
        assert_relative_eq!(scale, WHEEL_STEP);

        assert_eq!(harness.wheel_at(10.0, 10.0, 1.0), None);
    }

    #[test]
    fn one_finger_pans() {
        let mut harness = Harness::new();

        assert_eq!(harness.finger_down(1, 160.0, 270.0), Some(Recognized::Capture));
        assert_eq!(harness.finger_move(1, 150.0, 290.0), drag(-10.0, 20.0));
    }

    #[test]
    fn first_finger_outside_the_photo_is_ignored() {
        let mut harness = Harness::new();

        assert_eq!(harness.finger_down(1, 10.0, 10.0), None);
        assert_eq!(harness.finger_move(1, 20.0, 20.0), None);
    }

    #[test]
    fn second_finger_switches_pan_to_pinch() {
        let mut harness = Harness::new();
        harness.finger_down(1, 160.0, 270.0);
        harness.finger_move(1, 165.0, 270.0);

        assert_eq!(harness.finger_down(2, 200.0, 270.0), Some(Recognized::Capture));
        assert!(!harness.state.is_dragging());
        assert_eq!(harness.finger_move(2, 235.0, 270.0), pinch(2.0));
        assert_eq!(harness.finger_move(1, 200.0, 270.0), pinch(1.0));
    }

    #[test]
    fn lifting_a_finger_ends_the_gesture() {
        let mut harness = Harness::new();
        harness.finger_down(1, 160.0, 270.0);
        harness.finger_down(2, 200.0, 270.0);

        assert_eq!(harness.finger_up(1, 160.0, 270.0), Some(Recognized::Capture));
        assert_eq!(harness.finger_move(2, 220.0, 270.0), None);
        assert_eq!(harness.finger_up(2, 220.0, 270.0), None);
    }

    #[test]
    fn third_finger_is_ignored() {
        let mut harness = Harness::new();
        harness.finger_down(1, 160.0, 270.0);
        harness.finger_down(2, 200.0, 270.0);

        assert_eq!(harness.finger_down(3, 180.0, 300.0), None);
        assert_eq!(harness.finger_move(2, 240.0, 270.0), pinch(2.0));
    }

    #[test]
    fn pinch_from_a_single_spot_measures_from_the_first_spread() {
        let mut harness = Harness::new();
        harness.finger_down(1, 160.0, 270.0);
        harness.finger_down(2, 160.0, 270.0);

        assert_eq!(harness.finger_move(2, 200.0, 270.0), Some(Recognized::Capture));
        assert_eq!(harness.finger_move(2, 240.0, 270.0), pinch(2.0));
        assert_eq!(harness.finger_move(2, 180.0, 270.0), pinch(0.5));
    }

    #[test]
    fn canvas_update_captures_recognized_events() {
        let photo = ImageData::from_rgba(2, 2, vec![0; 16]);
        let layer = PhotoLayer {
            photo: &photo,
            transform: SpringTransform::default(),
            scale: 1.0,
        };
        let bounds = Rectangle::new(Point::ORIGIN, area());
        let mut state = GestureState::default();
        let press = iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left));

        let outside = mouse::Cursor::Available(Point::new(5.0, 5.0));
        let inside = mouse::Cursor::Available(Point::new(160.0, 270.0));
        assert!(canvas::Program::update(&layer, &mut state, &press, bounds, outside).is_none());
        assert!(canvas::Program::update(&layer, &mut state, &press, bounds, inside).is_some());
    }

    #[test]
    fn gesture_state_tracks_two_fingers() {
        let mut state = GestureState::default();
        state.fingers.push((touch::Finger(1), Point::new(0.0, 0.0)));
        assert_eq!(state.finger_distance(), None);

        state.fingers.push((touch::Finger(2), Point::new(30.0, 40.0)));
        assert_eq!(state.finger_distance(), Some(50.0));

        state.reset();
        assert!(state.fingers.is_empty());
        assert!(!state.is_dragging());
    }
}
