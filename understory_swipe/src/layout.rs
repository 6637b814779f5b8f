// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe layout composition: validate how a container was assembled and
//! derive the gesture configuration from it.
//!
//! A swipe layout stacks up to three children. The last one is the draggable
//! front view; the others are backgrounds revealed by dragging it away.
//!
//! | Children | Meaning | Direction |
//! |---|---|---|
//! | 1 | front only | explicit, or [`AllowedDirection::Both`] |
//! | 2 | one background, front | must be explicit |
//! | 3 | left background, right background, front | explicit, or [`AllowedDirection::Both`] |
//!
//! With a single background the layout cannot tell which side it sits on, so
//! the direction has to be given.
//!
//! ```
//! use understory_swipe::direction::AllowedDirection;
//! use understory_swipe::layout::{LayoutErrorKind, SwipeLayoutConfig};
//!
//! let config = SwipeLayoutConfig::new(3).build().unwrap();
//! assert_eq!(config.allowed_direction, AllowedDirection::Both);
//!
//! let err = SwipeLayoutConfig::new(2).build().unwrap_err();
//! assert_eq!(err.kind, LayoutErrorKind::MissingDirection);
//!
//! let config = SwipeLayoutConfig::new(2)
//!     .with_direction(AllowedDirection::Left)
//!     .build()
//!     .unwrap();
//! assert_eq!(config.allowed_direction, AllowedDirection::Left);
//! ```

use core::fmt;

use crate::direction::AllowedDirection;

/// Default fraction of the draggable view's width a drag must travel to
/// commit a swipe.
pub const DEFAULT_SWIPE_CONFIRMED_THRESHOLD: f64 = 0.5;

/// Gesture configuration consumed by [`DragHelper`](crate::gesture::DragHelper).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeConfig {
    /// Directions the draggable view may be dragged and swiped in.
    pub allowed_direction: AllowedDirection,
    /// Fraction of the draggable view's width, in `[0, 1]`, a release must
    /// be past to commit a swipe.
    pub swipe_confirmed_threshold: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            allowed_direction: AllowedDirection::Both,
            swipe_confirmed_threshold: DEFAULT_SWIPE_CONFIRMED_THRESHOLD,
        }
    }
}

impl SwipeConfig {
    /// Creates a configuration with the default threshold.
    #[must_use]
    pub fn new(allowed_direction: AllowedDirection) -> Self {
        Self {
            allowed_direction,
            ..Self::default()
        }
    }

    /// Sets the commit threshold.
    ///
    /// Values are clamped into `[0, 1]`; `NaN` selects
    /// [`DEFAULT_SWIPE_CONFIRMED_THRESHOLD`].
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.swipe_confirmed_threshold = sanitize_threshold(threshold);
        self
    }
}

fn sanitize_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_SWIPE_CONFIRMED_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// How a swipe layout was assembled, before validation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SwipeLayoutConfig {
    /// Number of children in the layout, front view included.
    pub child_count: usize,
    /// Explicitly configured direction, if any.
    pub allowed_direction: Option<AllowedDirection>,
    /// Commit threshold; see [`SwipeConfig::with_threshold`].
    pub swipe_confirmed_threshold: f64,
}

impl SwipeLayoutConfig {
    /// Describes a layout with `child_count` children and no explicit direction.
    #[must_use]
    pub fn new(child_count: usize) -> Self {
        Self {
            child_count,
            allowed_direction: None,
            swipe_confirmed_threshold: DEFAULT_SWIPE_CONFIRMED_THRESHOLD,
        }
    }

    /// Sets an explicit direction.
    #[must_use]
    pub fn with_direction(mut self, direction: AllowedDirection) -> Self {
        self.allowed_direction = Some(direction);
        self
    }

    /// Sets the commit threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.swipe_confirmed_threshold = threshold;
        self
    }

    /// Validates the composition and resolves the gesture configuration.
    pub fn build(&self) -> Result<SwipeConfig, LayoutError> {
        let allowed_direction = match (self.child_count, self.allowed_direction) {
            (1 | 3, direction) => direction.unwrap_or_default(),
            (2, Some(direction)) => direction,
            (2, None) => {
                return Err(LayoutError {
                    kind: LayoutErrorKind::MissingDirection,
                    child_count: 2,
                });
            }
            (child_count, _) => {
                return Err(LayoutError {
                    kind: LayoutErrorKind::UnsupportedChildCount,
                    child_count,
                });
            }
        };
        let config =
            SwipeConfig::new(allowed_direction).with_threshold(self.swipe_confirmed_threshold);
        tracing::debug!(
            child_count = self.child_count,
            direction = ?config.allowed_direction,
            threshold = config.swipe_confirmed_threshold,
            "swipe layout resolved"
        );
        Ok(config)
    }
}

/// Why a swipe layout was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LayoutErrorKind {
    /// The layout must have one, two or three children.
    UnsupportedChildCount,
    /// A layout with two children needs an explicit direction.
    MissingDirection,
}

/// Error returned when a swipe layout is not built properly.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LayoutError {
    /// Classification of the problem.
    pub kind: LayoutErrorKind,
    /// Number of children the layout was composed with.
    pub child_count: usize,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LayoutErrorKind::UnsupportedChildCount => write!(
                f,
                "swipe layout must have one, two or three children, found {}",
                self.child_count
            ),
            LayoutErrorKind::MissingDirection => write!(
                f,
                "swipe layout with {} children needs an explicit swipe direction",
                self.child_count
            ),
        }
    }
}

impl core::error::Error for LayoutError {}
