// SPDX-License-Identifier: MPL-2.0
//! Refresh state machine driven by the pull offset stream.
//!
//! Every offset update applies the same ordered rules:
//!
//! 1. Not refreshing, and the offset crosses the threshold upward: start refreshing.
//! 2. Refreshing, and the offset crosses the threshold downward: freeze the content.
//! 3. Not refreshing: nothing is frozen.
//! 4. The arrow rotation follows the offset (and is zero while refreshing).
//! 5. The offset becomes the previous offset for the next edge detection.
//!
//! Rules 1 to 3 all read the refreshing flag as it was when the update began,
//! so a refresh started by rule 1 can never be frozen by rule 2 in the same
//! update.

use super::{IndicatorRotation, Threshold};

/// Where the control currently is in a pull/refresh cycle.
///
/// Freezing is only representable inside [`RefreshPhase::Refreshing`], so
/// content can never stay pinned once a refresh has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RefreshPhase {
    /// Content at rest.
    #[default]
    Idle,
    /// Content pulled down, no refresh running.
    Pulling,
    /// Refresh running. `frozen` pins the content at threshold depth.
    Refreshing { frozen: bool },
}

impl RefreshPhase {
    #[must_use]
    pub fn is_refreshing(self) -> bool {
        matches!(self, Self::Refreshing { .. })
    }

    #[must_use]
    pub fn is_frozen(self) -> bool {
        matches!(self, Self::Refreshing { frozen: true })
    }

    fn at_rest(offset: f32) -> Self {
        if offset > 0.0 {
            Self::Pulling
        } else {
            Self::Idle
        }
    }
}

/// Notable state changes produced by an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullTransition {
    /// The pull crossed the threshold; the owner should start refreshing.
    RefreshStarted,
    /// The content was pinned at threshold depth.
    Frozen,
    /// First offset update after the owner ended a refresh.
    Settled,
}

/// State of one pull-to-refresh control.
#[derive(Debug, Clone, PartialEq)]
pub struct PullState {
    threshold: Threshold,
    previous_offset: f32,
    current_offset: f32,
    phase: RefreshPhase,
    rotation: IndicatorRotation,
    /// Set when the owner ends a refresh, cleared by the next update.
    settling: bool,
}

impl PullState {
    #[must_use]
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            previous_offset: 0.0,
            current_offset: 0.0,
            phase: RefreshPhase::Idle,
            rotation: IndicatorRotation::ZERO,
            settling: false,
        }
    }

    #[must_use]
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    #[must_use]
    pub fn phase(&self) -> RefreshPhase {
        self.phase
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.phase.is_refreshing()
    }

    #[must_use]
    pub fn is_frozen(&self) -> bool {
        self.phase.is_frozen()
    }

    #[must_use]
    pub fn rotation(&self) -> IndicatorRotation {
        self.rotation
    }

    #[must_use]
    pub fn current_offset(&self) -> f32 {
        self.current_offset
    }

    #[must_use]
    pub fn previous_offset(&self) -> f32 {
        self.previous_offset
    }

    /// Feeds a new pull offset through the rules.
    ///
    /// Non-finite offsets are treated as zero.
    pub fn apply_offset(&mut self, offset: f32) -> Option<PullTransition> {
        let offset = if offset.is_finite() { offset } else { 0.0 };
        let threshold = self.threshold.value();
        let previous = self.previous_offset;
        let was_refreshing = self.phase.is_refreshing();
        let mut transition = self.settling.then_some(PullTransition::Settled);
        self.settling = false;

        self.current_offset = offset;

        if !was_refreshing && offset > threshold && previous <= threshold {
            self.phase = RefreshPhase::Refreshing { frozen: false };
            transition = Some(PullTransition::RefreshStarted);
        }

        if was_refreshing && previous > threshold && offset <= threshold {
            if let RefreshPhase::Refreshing { frozen } = &mut self.phase {
                if !*frozen {
                    *frozen = true;
                    transition = Some(PullTransition::Frozen);
                }
            }
        }

        if !was_refreshing && !self.phase.is_refreshing() {
            self.phase = RefreshPhase::at_rest(offset);
        }

        self.rotation = if self.phase.is_refreshing() {
            IndicatorRotation::ZERO
        } else {
            IndicatorRotation::for_offset(offset, self.threshold)
        };

        self.previous_offset = offset;
        transition
    }

    /// Owner side of the two-way `refreshing` binding.
    ///
    /// Writing `true` starts a refresh without a pull (no
    /// [`PullTransition::RefreshStarted`] is reported). Writing `false` ends
    /// the running refresh and releases any frozen content. Returns whether
    /// the flag changed.
    pub fn set_refreshing(&mut self, refreshing: bool) -> bool {
        match (refreshing, self.phase.is_refreshing()) {
            (true, false) => {
                self.phase = RefreshPhase::Refreshing { frozen: false };
                self.rotation = IndicatorRotation::ZERO;
                true
            }
            (false, true) => {
                self.phase = RefreshPhase::at_rest(self.current_offset);
                self.settling = true;
                true
            }
            _ => false,
        }
    }
}

impl Default for PullState {
    fn default() -> Self {
        Self::new(Threshold::default())
    }
}
