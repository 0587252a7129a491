// SPDX-License-Identifier: MPL-2.0
//! Toolkit-independent core of the pull-to-refresh control.
//!
//! Layout probes report [`GeometrySample`]s, the [`OffsetTracker`] turns each
//! layout pass into a pull offset, and [`PullState`] maps the offset stream to
//! refreshing/frozen flags and an arrow rotation. [`IndicatorLayout`] tells
//! the view what to draw. Nothing here knows about Iced.

pub mod geometry;
pub mod indicator;
pub mod machine;
pub mod rotation;
pub mod threshold;
pub mod tracker;

pub use geometry::{compute_offset, GeometryBatch, GeometrySample, ProbeBounds, ProbeRole};
pub use indicator::{IndicatorGlyph, IndicatorLayout};
pub use machine::{PullState, PullTransition, RefreshPhase};
pub use rotation::IndicatorRotation;
pub use threshold::Threshold;
pub use tracker::{OffsetTracker, Schedule};
