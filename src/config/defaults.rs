// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Threshold**: Pull distance that commits to a refresh
//! - **Gesture**: Overscroll resistance, spring-back and release timing
//! - **Demo**: Simulated refresh duration for the cat-of-the-day screen

// ==========================================================================
// Threshold Defaults
// ==========================================================================

/// Default pull distance (pixels) at which a refresh starts.
pub const DEFAULT_THRESHOLD_PX: f32 = 80.0;

/// Smallest threshold accepted from the CLI or settings file.
pub const MIN_THRESHOLD_PX: f32 = 20.0;

/// Largest threshold accepted from the CLI or settings file.
pub const MAX_THRESHOLD_PX: f32 = 400.0;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Fraction of the raw drag distance applied to the overscroll stretch.
pub const PULL_RESISTANCE: f32 = 0.55;

/// Maximum stretch, as a multiple of the threshold.
pub const MAX_STRETCH_FACTOR: f32 = 2.0;

/// Pixels per wheel "line" when the platform reports line deltas.
pub const WHEEL_LINE_PX: f32 = 40.0;

/// Idle time after the last wheel movement before the stretch springs back.
pub const RELEASE_DELAY_MS: u64 = 140;

/// Fraction of the remaining stretch removed on each animation tick.
pub const SPRING_DAMPING: f32 = 0.22;

/// Stretch below this many pixels snaps to rest.
pub const SETTLE_EPSILON_PX: f32 = 0.5;

/// Animation tick interval (about 60 fps).
pub const ANIMATION_INTERVAL_MS: u64 = 16;

/// Spinner rotation per animation tick, in radians.
pub const SPINNER_STEP_RADIANS: f32 = 0.12;

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Default duration of the simulated refresh (milliseconds).
pub const DEFAULT_SIMULATED_DURATION_MS: u64 = 1500;

/// Minimum simulated refresh duration (milliseconds).
pub const MIN_SIMULATED_DURATION_MS: u64 = 100;

/// Maximum simulated refresh duration (milliseconds).
pub const MAX_SIMULATED_DURATION_MS: u64 = 30_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_THRESHOLD_PX > 0.0);
    assert!(MIN_THRESHOLD_PX <= DEFAULT_THRESHOLD_PX);
    assert!(DEFAULT_THRESHOLD_PX <= MAX_THRESHOLD_PX);

    assert!(PULL_RESISTANCE > 0.0 && PULL_RESISTANCE <= 1.0);
    assert!(MAX_STRETCH_FACTOR > 1.0);
    assert!(SPRING_DAMPING > 0.0 && SPRING_DAMPING < 1.0);

    assert!(MIN_SIMULATED_DURATION_MS <= DEFAULT_SIMULATED_DURATION_MS);
    assert!(DEFAULT_SIMULATED_DURATION_MS <= MAX_SIMULATED_DURATION_MS);
};
