// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direction policy: which horizontal drags a swipe layout accepts.
//!
//! A layout with backgrounds on both sides accepts drags either way. A layout
//! with a single background only makes sense when dragged toward it, so the
//! other direction is rejected both while dragging and when deciding whether
//! a release commits a swipe.
//!
//! ```
//! use understory_swipe::direction::{AllowedDirection, SwipeDirection};
//!
//! let policy = AllowedDirection::Left;
//! assert!(policy.is_drag_valid(-12.0));
//! assert!(!policy.is_drag_valid(12.0));
//! assert_eq!(SwipeDirection::from_travelled(-12.0), Some(SwipeDirection::Left));
//! ```

/// Horizontal drag directions a swipe layout accepts.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum AllowedDirection {
    /// Only drags toward negative x.
    Left,
    /// Only drags toward positive x.
    Right,
    /// Drags in either direction.
    #[default]
    Both,
}

impl AllowedDirection {
    /// Returns `true` if a drag that has travelled `travelled_x` from its
    /// touch-down point is allowed to move the draggable view.
    ///
    /// A zero delta is valid for every policy. `NaN` is never valid.
    #[must_use]
    pub fn is_drag_valid(self, travelled_x: f64) -> bool {
        match self {
            Self::Left => travelled_x <= 0.0,
            Self::Right => travelled_x >= 0.0,
            Self::Both => !travelled_x.is_nan(),
        }
    }

    /// Returns `true` if a swipe toward `direction` may be committed.
    #[must_use]
    pub fn allows(self, direction: SwipeDirection) -> bool {
        matches!(
            (self, direction),
            (Self::Both, _)
                | (Self::Left, SwipeDirection::Left)
                | (Self::Right, SwipeDirection::Right)
        )
    }
}

/// The side a committed swipe went to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SwipeDirection {
    /// Swiped toward negative x.
    Left,
    /// Swiped toward positive x.
    Right,
}

impl SwipeDirection {
    /// Classifies a signed horizontal travel.
    ///
    /// Returns `None` for zero or `NaN`.
    #[must_use]
    pub fn from_travelled(travelled_x: f64) -> Option<Self> {
        if travelled_x < 0.0 {
            Some(Self::Left)
        } else if travelled_x > 0.0 {
            Some(Self::Right)
        } else {
            None
        }
    }
}
