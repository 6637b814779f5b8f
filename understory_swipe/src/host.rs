// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Capabilities the gesture core needs from the container that embeds it.
//!
//! The core never sees a concrete widget type. A container implements
//! [`SwipeHost`] (and exposes its front element through [`DraggableView`]),
//! hands itself to [`DragHelper::new`](crate::gesture::DragHelper::new), and
//! receives callbacks for the outcomes of each gesture.
//!
//! Callbacks are leaf calls: the helper is mutably borrowed while it invokes
//! them, so a host cannot feed events back into the helper from inside one.

/// The front element a user drags horizontally.
pub trait DraggableView {
    /// Current measured width.
    ///
    /// Read at release time, so a view that is resized between gestures is
    /// judged against its new width.
    fn width(&self) -> f64;

    /// Current horizontal translation.
    fn translation_x(&self) -> f64;

    /// Sets the horizontal translation.
    fn set_translation_x(&mut self, x: f64);
}

/// The container a [`DragHelper`](crate::gesture::DragHelper) drives.
pub trait SwipeHost {
    /// The draggable element type.
    type View: DraggableView;

    /// The element being dragged.
    fn draggable_view(&self) -> &Self::View;

    /// Mutable access to the element being dragged.
    fn draggable_view_mut(&mut self) -> &mut Self::View;

    /// Width of the container.
    ///
    /// The draggable view is never translated further than this from its
    /// resting position.
    fn container_width(&self) -> f64;

    /// Asks ancestors to stop intercepting the current gesture.
    fn prevent_parent_from_intercepting_touches(&mut self);

    /// A release committed a swipe toward negative x.
    fn swiped_to_left(&mut self);

    /// A release committed a swipe toward positive x.
    fn swiped_to_right(&mut self);

    /// The draggable view was translated; `travelled_x` is the signed
    /// distance from the touch-down point.
    fn on_move(&mut self, travelled_x: f64) {
        let _ = travelled_x;
    }

    /// The draggable view was returned to its resting position.
    fn on_reset(&mut self) {}
}
