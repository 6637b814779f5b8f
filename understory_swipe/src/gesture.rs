// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture state machine: classify a touch stream as a tap, a vertical
//! scroll, a horizontal drag, or a committed swipe.
//!
//! ## States
//!
//! | State | Move | Up | Cancel |
//! |---|---|---|---|
//! | [`Still`](GestureState::Still) | mostly vertical: `ScrollingVertically`; view moved: `DraggingHorizontally` | - | - |
//! | [`ScrollingVertically`](GestureState::ScrollingVertically) | - | reset | reset |
//! | [`DraggingHorizontally`](GestureState::DraggingHorizontally) | move view | past threshold: `SwipedAway`, else reset | reset |
//! | [`SwipedAway`](GestureState::SwipedAway) | - | - | - |
//! | [`Blocked`](GestureState::Blocked) | - | - | - |
//!
//! "Reset" returns the view to its resting position and the machine to
//! `Still`. A cancelled gesture never commits a swipe.
//!
//! ## Dispatch
//!
//! The container forwards each event twice, as the host toolkit does:
//!
//! - [`DragHelper::on_intercept_touch_event`] while deciding whether to take
//!   the gesture from its children. This only records the origin and answers
//!   whether the gesture is horizontal; it never changes state.
//! - [`DragHelper::on_touch_event`] once the container handles the gesture.
//!   After every move the helper asks the host to keep ancestors from
//!   intercepting while a horizontal drag is underway.
//!
//! ## Minimal example
//!
//! ```
//! use understory_swipe::event::TouchEvent;
//! use understory_swipe::gesture::{DragHelper, GestureState};
//! use understory_swipe::host::{DraggableView, SwipeHost};
//! use understory_swipe::layout::SwipeConfig;
//!
//! #[derive(Default)]
//! struct Front { x: f64 }
//! impl DraggableView for Front {
//!     fn width(&self) -> f64 { 200.0 }
//!     fn translation_x(&self) -> f64 { self.x }
//!     fn set_translation_x(&mut self, x: f64) { self.x = x; }
//! }
//!
//! #[derive(Default)]
//! struct Row { front: Front, swiped_left: u32 }
//! impl SwipeHost for Row {
//!     type View = Front;
//!     fn draggable_view(&self) -> &Front { &self.front }
//!     fn draggable_view_mut(&mut self) -> &mut Front { &mut self.front }
//!     fn container_width(&self) -> f64 { 200.0 }
//!     fn prevent_parent_from_intercepting_touches(&mut self) {}
//!     fn swiped_to_left(&mut self) { self.swiped_left += 1; }
//!     fn swiped_to_right(&mut self) {}
//! }
//!
//! let mut helper = DragHelper::new(Row::default(), SwipeConfig::default());
//! helper.on_attached_to_window();
//!
//! helper.on_touch_event(&TouchEvent::down(0.0, 0.0));
//! helper.on_touch_event(&TouchEvent::move_to(-150.0, 0.0));
//! assert_eq!(helper.state(), GestureState::DraggingHorizontally);
//! assert_eq!(helper.host().front.x, -150.0);
//!
//! helper.on_touch_event(&TouchEvent::up(-150.0, 0.0));
//! assert_eq!(helper.state(), GestureState::SwipedAway);
//! assert_eq!(helper.host().swiped_left, 1);
//! ```

use kurbo::Point;
use tracing::{debug, trace};

use crate::coords::CoordsTracker;
use crate::direction::{AllowedDirection, SwipeDirection};
use crate::event::{TouchAction, TouchEvent};
use crate::host::{DraggableView, SwipeHost};
use crate::layout::SwipeConfig;

/// The single active state of a [`DragHelper`].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// At rest, waiting to classify the next gesture.
    #[default]
    Still,
    /// The view follows the pointer horizontally.
    DraggingHorizontally,
    /// The gesture was classified as a vertical scroll and belongs to an ancestor.
    ScrollingVertically,
    /// A swipe was committed; gestures are ignored until reset.
    SwipedAway,
    /// Gestures are ignored until unblocked.
    Blocked,
}

impl GestureState {
    /// Returns `true` if ancestors must stop intercepting the current gesture.
    #[must_use]
    pub fn should_prevent_parent_from_intercepting_touches(self) -> bool {
        matches!(self, Self::DraggingHorizontally)
    }
}

/// Drives a [`SwipeHost`] from a stream of touch events.
#[derive(Debug)]
pub struct DragHelper<H> {
    host: H,
    config: SwipeConfig,
    pending_direction: Option<AllowedDirection>,
    coords: CoordsTracker,
    state: GestureState,
    last_swipe: Option<SwipeDirection>,
}

impl<H: SwipeHost> DragHelper<H> {
    /// Creates a helper that owns `host` for its whole lifetime.
    pub fn new(host: H, config: SwipeConfig) -> Self {
        Self {
            host,
            config,
            pending_direction: None,
            coords: CoordsTracker::default(),
            state: GestureState::Still,
            last_swipe: None,
        }
    }

    /// Captures the draggable view's resting position.
    ///
    /// Call once the view has valid layout bounds, before the first gesture.
    pub fn on_attached_to_window(&mut self) {
        self.coords.on_attached_to_window(self.host.draggable_view());
    }

    /// Handles an event the container has claimed.
    ///
    /// Always returns `true` so the container keeps receiving the gesture.
    pub fn on_touch_event(&mut self, event: &TouchEvent) -> bool {
        match event.action {
            TouchAction::Down => self.action_down(event.pos),
            TouchAction::Move => {
                self.action_move(event.pos);
                if self.state.should_prevent_parent_from_intercepting_touches() {
                    self.host.prevent_parent_from_intercepting_touches();
                }
            }
            TouchAction::Up => {
                self.action_up(event.pos);
                self.coords.clear();
            }
            TouchAction::Cancel => {
                self.action_cancel();
                self.coords.clear();
            }
        }
        true
    }

    /// Decides whether the container should take the gesture from its children.
    ///
    /// Returns `true` on a move that is more horizontal than vertical. Never
    /// changes [`GestureState`].
    pub fn on_intercept_touch_event(&mut self, event: &TouchEvent) -> bool {
        match event.action {
            TouchAction::Down => {
                self.action_down(event.pos);
                false
            }
            TouchAction::Move => self.coords.is_moving(event.pos),
            TouchAction::Up | TouchAction::Cancel => {
                self.coords.clear();
                false
            }
        }
    }

    /// Blocks (`true`) or unblocks (`false`) gesture processing.
    ///
    /// Unblocking always lands in [`GestureState::Still`].
    pub fn set_block_swipes(&mut self, block: bool) {
        if block {
            self.set_state(GestureState::Blocked);
        } else {
            self.last_swipe = None;
            self.set_state(GestureState::Still);
        }
    }

    /// Returns the view to its resting position and the machine to
    /// [`GestureState::Still`], then notifies [`SwipeHost::on_reset`].
    pub fn on_reset(&mut self) {
        self.coords
            .bring_to_original_position(self.host.draggable_view_mut());
        self.last_swipe = None;
        self.set_state(GestureState::Still);
        self.host.on_reset();
    }

    /// Marks the view as swiped away without a gesture.
    pub fn swiped_away(&mut self) {
        self.set_state(GestureState::SwipedAway);
    }

    /// Changes the allowed drag direction.
    ///
    /// While a gesture is in progress the change is deferred to the next
    /// down event.
    pub fn set_allowed_direction(&mut self, direction: AllowedDirection) {
        if self.coords.origin().is_some() {
            self.pending_direction = Some(direction);
        } else {
            self.pending_direction = None;
            self.config.allowed_direction = direction;
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Direction of the last committed swipe, until the next reset or unblock.
    #[must_use]
    pub fn last_swipe(&self) -> Option<SwipeDirection> {
        self.last_swipe
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Coordinate tracker for the current gesture.
    #[must_use]
    pub fn coords(&self) -> &CoordsTracker {
        &self.coords
    }

    /// The driven host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the driven host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Consumes the helper, returning the host.
    pub fn into_host(self) -> H {
        self.host
    }

    fn set_state(&mut self, next: GestureState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "gesture state changed");
        }
        self.state = next;
    }

    fn action_down(&mut self, pos: Point) {
        self.coords.action_down(pos);
        if let Some(direction) = self.pending_direction.take() {
            debug!(?direction, "applying deferred swipe direction");
            self.config.allowed_direction = direction;
        }
    }

    fn action_move(&mut self, pos: Point) {
        match self.state {
            GestureState::Still => {
                let travelled = self.coords.travelled(pos);
                // Ties count as vertical; a zero delta is still a tap.
                if travelled.y != 0.0 && travelled.y * travelled.y >= travelled.x * travelled.x {
                    self.set_state(GestureState::ScrollingVertically);
                } else if self.move_view(pos) {
                    self.set_state(GestureState::DraggingHorizontally);
                }
            }
            GestureState::DraggingHorizontally => {
                self.move_view(pos);
            }
            GestureState::ScrollingVertically
            | GestureState::SwipedAway
            | GestureState::Blocked => {}
        }
    }

    fn action_up(&mut self, pos: Point) {
        match self.state {
            GestureState::ScrollingVertically => self.on_reset(),
            GestureState::DraggingHorizontally => match self.committed_swipe(pos) {
                Some(direction) => self.commit(direction),
                None => self.on_reset(),
            },
            GestureState::Still | GestureState::SwipedAway | GestureState::Blocked => {}
        }
    }

    fn action_cancel(&mut self) {
        match self.state {
            GestureState::ScrollingVertically | GestureState::DraggingHorizontally => {
                self.on_reset();
            }
            GestureState::Still | GestureState::SwipedAway | GestureState::Blocked => {}
        }
    }

    /// Moves the draggable view toward `pos` if the direction policy allows.
    ///
    /// Returns `true` if the view moved.
    fn move_view(&mut self, pos: Point) -> bool {
        let travelled_x = self.coords.travelled(pos).x;
        if !self.config.allowed_direction.is_drag_valid(travelled_x) {
            return false;
        }
        let container_width = self.host.container_width();
        if self
            .coords
            .move_view(self.host.draggable_view_mut(), pos, container_width)
        {
            trace!(travelled_x, "draggable view moved");
            self.host.on_move(travelled_x);
            true
        } else {
            false
        }
    }

    /// Direction of the swipe a release at `pos` commits, if any.
    fn committed_swipe(&self, pos: Point) -> Option<SwipeDirection> {
        let travelled_x = self.coords.travelled(pos).x;
        let policy = self.config.allowed_direction;
        if !policy.is_drag_valid(travelled_x) {
            return None;
        }
        let direction = SwipeDirection::from_travelled(travelled_x)?;
        let min_distance =
            self.host.draggable_view().width() * self.config.swipe_confirmed_threshold;
        let reached = match direction {
            SwipeDirection::Left => travelled_x <= -min_distance,
            SwipeDirection::Right => travelled_x >= min_distance,
        };
        (reached && policy.allows(direction)).then_some(direction)
    }

    fn commit(&mut self, direction: SwipeDirection) {
        debug!(?direction, "swipe committed");
        self.last_swipe = Some(direction);
        self.set_state(GestureState::SwipedAway);
        match direction {
            SwipeDirection::Left => self.host.swiped_to_left(),
            SwipeDirection::Right => self.host.swiped_to_right(),
        }
    }
}
