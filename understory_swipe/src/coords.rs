// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coordinate tracker: touch-down bookkeeping and bounded horizontal translation.
//!
//! ## Usage
//!
//! 1) Once the draggable view has real layout bounds, call
//!    [`CoordsTracker::on_attached_to_window`] to capture its resting translation.
//! 2) On each down event, call [`CoordsTracker::action_down`] with the pointer position.
//! 3) On move events, use [`CoordsTracker::travelled`] or [`CoordsTracker::is_moving`]
//!    to classify the gesture, and [`CoordsTracker::move_view`] to translate the view.
//! 4) Call [`CoordsTracker::bring_to_original_position`] to snap the view back.
//!
//! A tracker that never saw a down event reports a zero delta for every position.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_swipe::coords::CoordsTracker;
//! use understory_swipe::host::DraggableView;
//!
//! struct Front { x: f64 }
//! impl DraggableView for Front {
//!     fn width(&self) -> f64 { 200.0 }
//!     fn translation_x(&self) -> f64 { self.x }
//!     fn set_translation_x(&mut self, x: f64) { self.x = x; }
//! }
//!
//! let mut front = Front { x: 0.0 };
//! let mut coords = CoordsTracker::default();
//! coords.on_attached_to_window(&front);
//!
//! coords.action_down(Point::new(100.0, 40.0));
//! assert!(coords.is_moving(Point::new(70.0, 45.0)));
//!
//! // Translation is clamped to the container width.
//! assert!(coords.move_view(&mut front, Point::new(-400.0, 40.0), 300.0));
//! assert_eq!(front.x, -300.0);
//!
//! coords.bring_to_original_position(&mut front);
//! assert_eq!(front.x, 0.0);
//! ```

use kurbo::{Point, Vec2};

use crate::host::DraggableView;

/// Tracks the touch-down point of the current gesture and the draggable
/// view's resting translation.
#[derive(Debug, Clone, Default, Copy)]
pub struct CoordsTracker {
    origin: Option<Point>,
    resting_x: f64,
}

impl CoordsTracker {
    /// Captures the view's resting translation.
    ///
    /// Call once the view has valid layout bounds and before any gesture is
    /// processed. Until then the resting translation is `0.0`.
    pub fn on_attached_to_window(&mut self, view: &impl DraggableView) {
        self.resting_x = view.translation_x();
    }

    /// Records the origin of a new gesture, replacing any previous one.
    pub fn action_down(&mut self, pos: Point) {
        self.origin = Some(pos);
    }

    /// Forgets the current origin.
    pub fn clear(&mut self) {
        self.origin = None;
    }

    /// Origin of the current gesture, if a down event has been seen.
    #[must_use]
    pub fn origin(&self) -> Option<Point> {
        self.origin
    }

    /// Resting translation captured by [`Self::on_attached_to_window`].
    #[must_use]
    pub fn resting_x(&self) -> f64 {
        self.resting_x
    }

    /// Offset of `pos` from the gesture origin, or zero without an origin.
    #[must_use]
    pub fn travelled(&self, pos: Point) -> Vec2 {
        self.origin.map_or(Vec2::ZERO, |origin| pos - origin)
    }

    /// Returns `true` if the gesture so far is more horizontal than vertical.
    #[must_use]
    pub fn is_moving(&self, pos: Point) -> bool {
        let delta = self.travelled(pos);
        delta.x * delta.x > delta.y * delta.y
    }

    /// Translates `view` by the horizontal distance travelled since the
    /// origin, measured from its resting translation.
    ///
    /// The result is clamped so the view never moves more than
    /// `container_width` away from rest. Returns `false`, leaving the view
    /// untouched, when the clamped translation equals the current one.
    pub fn move_view(
        &self,
        view: &mut impl DraggableView,
        pos: Point,
        container_width: f64,
    ) -> bool {
        let travelled_x = self.travelled(pos).x;
        if travelled_x.is_nan() {
            return false;
        }
        // `max` maps a NaN width to zero.
        let limit = container_width.max(0.0);
        let (min, max) = (self.resting_x - limit, self.resting_x + limit);
        // A non-finite resting translation can yield NaN bounds.
        if min.is_nan() || max.is_nan() {
            return false;
        }
        let target = (self.resting_x + travelled_x).clamp(min, max);
        if target.is_nan() || target == view.translation_x() {
            return false;
        }
        view.set_translation_x(target);
        true
    }

    /// Restores the resting translation. Idempotent.
    pub fn bring_to_original_position(&self, view: &mut impl DraggableView) {
        view.set_translation_x(self.resting_x);
    }
}
