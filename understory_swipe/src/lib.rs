// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Swipe: a host-agnostic gesture core for swipeable list rows.
//!
//! A swipe layout stacks a draggable front view over one or two backgrounds.
//! Dragging the front view horizontally reveals a background; releasing it far
//! enough commits a swipe, anything shorter snaps it back. Vertical gestures
//! are left to an ancestor scroller.
//!
//! The crate is split into small pieces:
//!
//! - [`event`]: touch events (`Down`, `Move`, `Up`, `Cancel`) with a position.
//! - [`direction`]: the policy deciding which drag directions are accepted.
//! - [`coords`]: touch-down bookkeeping and bounded horizontal translation.
//! - [`gesture`]: the state machine classifying each touch stream.
//! - [`host`]: the traits a container implements to be driven by the state machine.
//! - [`layout`]: validation of the container composition and the resulting [`SwipeConfig`].
//!
//! ## Design Philosophy
//!
//! The crate does not assume any particular UI framework or widget type. A
//! container implements [`SwipeHost`], forwards its touch events, and reacts
//! to the callbacks. Rendering and animation stay with the container.
//!
//! ## Usage
//!
//! ```rust
//! use understory_swipe::{
//!     DragHelper, DraggableView, GestureState, SwipeHost, SwipeLayoutConfig, TouchEvent,
//! };
//!
//! #[derive(Default)]
//! struct Front { x: f64 }
//! impl DraggableView for Front {
//!     fn width(&self) -> f64 { 320.0 }
//!     fn translation_x(&self) -> f64 { self.x }
//!     fn set_translation_x(&mut self, x: f64) { self.x = x; }
//! }
//!
//! #[derive(Default)]
//! struct Row { front: Front, locked: bool, archived: bool }
//! impl SwipeHost for Row {
//!     type View = Front;
//!     fn draggable_view(&self) -> &Front { &self.front }
//!     fn draggable_view_mut(&mut self) -> &mut Front { &mut self.front }
//!     fn container_width(&self) -> f64 { 320.0 }
//!     fn prevent_parent_from_intercepting_touches(&mut self) { self.locked = true; }
//!     fn swiped_to_left(&mut self) {}
//!     fn swiped_to_right(&mut self) { self.archived = true; }
//! }
//!
//! // Three children: left background, right background, front view.
//! let config = SwipeLayoutConfig::new(3).build().unwrap();
//! let mut helper = DragHelper::new(Row::default(), config);
//! helper.on_attached_to_window();
//!
//! // The list asks first whether the row wants the gesture.
//! assert!(!helper.on_intercept_touch_event(&TouchEvent::down(10.0, 40.0)));
//! assert!(helper.on_intercept_touch_event(&TouchEvent::move_to(40.0, 42.0)));
//!
//! // Then the row handles it.
//! helper.on_touch_event(&TouchEvent::move_to(40.0, 42.0));
//! assert_eq!(helper.state(), GestureState::DraggingHorizontally);
//! assert!(helper.host().locked);
//!
//! helper.on_touch_event(&TouchEvent::move_to(200.0, 45.0));
//! helper.on_touch_event(&TouchEvent::up(200.0, 45.0));
//! assert_eq!(helper.state(), GestureState::SwipedAway);
//! assert!(helper.host().archived);
//! ```
//!
//! ## Features
//!
//! - `std` (default): build Kurbo with `std`.
//! - `libm`: build Kurbo with `libm` for `no_std` targets.
//!
//! State transitions are reported through [`tracing`] at `debug` level.
//!
//! This crate is `no_std` compatible.

#![no_std]

#[cfg(test)]
extern crate alloc;

pub mod coords;
pub mod direction;
pub mod event;
pub mod gesture;
pub mod host;
pub mod layout;

pub use direction::{AllowedDirection, SwipeDirection};
pub use event::{TouchAction, TouchEvent};
pub use gesture::{DragHelper, GestureState};
pub use host::{DraggableView, SwipeHost};
pub use layout::{LayoutError, LayoutErrorKind, SwipeConfig, SwipeLayoutConfig};
