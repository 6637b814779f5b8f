// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Touch events consumed by the gesture core.
//!
//! Only the primary pointer is modelled. Positions are in the coordinate
//! space of the container that owns the draggable view.

use kurbo::Point;

/// Lifecycle phase of a touch event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// The pointer went down; a new gesture starts.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer was lifted.
    Up,
    /// The gesture was taken away (for example by an ancestor) before release.
    Cancel,
}

/// A single touch event.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TouchEvent {
    /// Lifecycle phase.
    pub action: TouchAction,
    /// Current pointer position.
    pub pos: Point,
}

impl TouchEvent {
    /// Creates an event from its parts.
    #[must_use]
    pub const fn new(action: TouchAction, pos: Point) -> Self {
        Self { action, pos }
    }

    /// A [`TouchAction::Down`] at `(x, y)`.
    #[must_use]
    pub const fn down(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Down, Point::new(x, y))
    }

    /// A [`TouchAction::Move`] to `(x, y)`.
    #[must_use]
    pub const fn move_to(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Move, Point::new(x, y))
    }

    /// A [`TouchAction::Up`] at `(x, y)`.
    #[must_use]
    pub const fn up(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Up, Point::new(x, y))
    }

    /// A [`TouchAction::Cancel`] at `(x, y)`.
    #[must_use]
    pub const fn cancel(x: f64, y: f64) -> Self {
        Self::new(TouchAction::Cancel, Point::new(x, y))
    }
}
