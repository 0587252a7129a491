// SPDX-License-Identifier: MPL-2.0
//! Offset tracker: turns layout reports into a queue of pull offsets.
//!
//! Offsets are never applied inside the layout report that produced them.
//! [`OffsetTracker::schedule`] only queues; the owner drains the queue on the
//! next tick, in the order the layout passes happened.

use super::geometry::{compute_offset, GeometryBatch};
use std::collections::VecDeque;

/// Outcome of scheduling a geometry batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// First offset queued since the last drain; the owner must schedule a flush.
    Flush,
    /// Queued behind offsets that already have a flush pending.
    Queued,
    /// Batch is not newer than the last accepted one and was dropped.
    Stale,
}

#[derive(Debug, Clone, Default)]
pub struct OffsetTracker {
    pending: VecDeque<f32>,
    last_pass: Option<u64>,
}

impl OffsetTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the offset of `batch` and queues it for the next flush.
    pub fn schedule(&mut self, batch: &GeometryBatch) -> Schedule {
        if self.last_pass.is_some_and(|last| batch.pass <= last) {
            log::trace!(
                "dropping stale geometry pass {} (last accepted {:?})",
                batch.pass,
                self.last_pass
            );
            return Schedule::Stale;
        }

        self.last_pass = Some(batch.pass);
        let needs_flush = self.pending.is_empty();
        self.pending.push_back(compute_offset(&batch.samples));

        if needs_flush {
            Schedule::Flush
        } else {
            Schedule::Queued
        }
    }

    /// Removes queued offsets, oldest first.
    pub fn drain(&mut self) -> impl Iterator<Item = f32> + '_ {
        self.pending.drain(..)
    }

    /// Number of offsets waiting for a flush.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn last_pass(&self) -> Option<u64> {
        self.last_pass
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::refresh::geometry::GeometrySample;
    use crate::test_utils::assert_offsets_eq;

    fn batch(pass: u64, moving: f32) -> GeometryBatch {
        GeometryBatch::new(
            pass,
            vec![
                GeometrySample::fixed(100.0, 0.0),
                GeometrySample::moving(100.0 + moving, 0.0),
            ],
        )
    }

    #[test]
    fn scheduling_does_not_apply_immediately() {
        let mut tracker = OffsetTracker::new();
        assert_eq!(tracker.schedule(&batch(1, 42.0)), Schedule::Flush);
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn only_first_batch_per_tick_requests_a_flush() {
        let mut tracker = OffsetTracker::new();
        assert_eq!(tracker.schedule(&batch(1, 1.0)), Schedule::Flush);
        assert_eq!(tracker.schedule(&batch(2, 2.0)), Schedule::Queued);
        assert_eq!(tracker.schedule(&batch(3, 3.0)), Schedule::Queued);

        let _ = tracker.drain().count();
        assert_eq!(tracker.schedule(&batch(4, 4.0)), Schedule::Flush);
    }

    #[test]
    fn drain_preserves_layout_order() {
        let mut tracker = OffsetTracker::new();
        for (pass, offset) in [(1, 10.0), (2, 30.0), (3, 20.0)] {
            tracker.schedule(&batch(pass, offset));
        }

        let drained: Vec<f32> = tracker.drain().collect();
        assert_offsets_eq(&drained, &[10.0, 30.0, 20.0]);
        assert_eq!(tracker.pending(), 0);
    }

    #[test]
    fn stale_passes_are_dropped() {
        let mut tracker = OffsetTracker::new();
        tracker.schedule(&batch(5, 50.0));

        assert_eq!(tracker.schedule(&batch(4, 40.0)), Schedule::Stale);
        assert_eq!(tracker.schedule(&batch(5, 55.0)), Schedule::Stale);
        assert_eq!(tracker.last_pass(), Some(5));

        let drained: Vec<f32> = tracker.drain().collect();
        assert_offsets_eq(&drained, &[50.0]);
    }

    #[test]
    fn stale_check_survives_drain() {
        let mut tracker = OffsetTracker::new();
        tracker.schedule(&batch(9, 1.0));
        let _ = tracker.drain().count();
        assert_eq!(tracker.schedule(&batch(3, 1.0)), Schedule::Stale);
        assert_eq!(tracker.pending(), 0);
    }
}
