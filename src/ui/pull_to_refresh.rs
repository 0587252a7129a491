// SPDX-License-Identifier: MPL-2.0
//! Pull-to-refresh scroll container.
//!
//! Wraps arbitrary content in a vertical scrollable with a refresh indicator
//! above it. Pulling past the top edge (wheel or touch) stretches the content
//! down; crossing the threshold emits [`Effect::RefreshRequested`] and the
//! owner reports completion through [`State::set_refreshing`].
//!
//! Every layout change produces a [`GeometryBatch`] from two probes: the top
//! of the viewport (fixed) and the top of the content (moving). Batches are
//! queued in an [`OffsetTracker`] and applied to the [`PullState`] on the
//! following [`Message::FlushOffsets`], never inside the message that
//! reported them.

use crate::config::{
    ANIMATION_INTERVAL_MS, MAX_STRETCH_FACTOR, PULL_RESISTANCE, RELEASE_DELAY_MS,
    SETTLE_EPSILON_PX, SPINNER_STEP_RADIANS, SPRING_DAMPING,
};
use crate::refresh::{
    GeometryBatch, GeometrySample, IndicatorGlyph, IndicatorLayout, OffsetTracker, PullState,
    PullTransition, Schedule, Threshold,
};
use crate::ui::design_tokens::sizing;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::{animated_spinner, pull_surface, AnimatedSpinner, ArrowGlyph, PullGesture};
use iced::alignment::{Horizontal, Vertical};
use iced::widget::scrollable::{AbsoluteOffset, Viewport};
use iced::widget::{Column, Container, Scrollable};
use iced::{time, Element, Length, Padding, Rectangle, Subscription, Task};
use std::time::{Duration, Instant};

/// Scroll offsets below this count as "at the top".
const TOP_EPSILON_PX: f32 = 0.5;

/// Messages emitted by the container.
#[derive(Debug, Clone)]
pub enum Message {
    /// The scrollable moved or was resized.
    ViewportChanged {
        bounds: Rectangle,
        offset: AbsoluteOffset,
    },
    Gesture(PullGesture),
    /// Apply the offsets queued since the last flush.
    FlushOffsets,
    AnimationTick(Instant),
}

/// Side effects the owner should perform after handling a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The user pulled past the threshold; start the refresh work.
    RefreshRequested,
}

/// Environment information required to render the container.
pub struct ViewContext {
    pub colors: ColorScheme,
}

/// Complete container state.
#[derive(Debug, Clone)]
pub struct State {
    pull: PullState,
    tracker: OffsetTracker,
    next_pass: u64,
    viewport_top: f32,
    scroll_y: f32,
    /// Overscroll applied on top of the scroll position, in pixels.
    stretch: f32,
    finger_down: bool,
    /// Earliest time a wheel-driven stretch may spring back.
    release_at: Option<Instant>,
    spinner_rotation: f32,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Threshold::default())
    }
}

impl State {
    #[must_use]
    pub fn new(threshold: Threshold) -> Self {
        Self {
            pull: PullState::new(threshold),
            tracker: OffsetTracker::new(),
            next_pass: 0,
            viewport_top: 0.0,
            scroll_y: 0.0,
            stretch: 0.0,
            finger_down: false,
            release_at: None,
            spinner_rotation: 0.0,
        }
    }

    #[must_use]
    pub fn pull(&self) -> &PullState {
        &self.pull
    }

    #[must_use]
    pub fn is_refreshing(&self) -> bool {
        self.pull.is_refreshing()
    }

    #[must_use]
    pub fn stretch(&self) -> f32 {
        self.stretch
    }

    /// Offsets reported but not yet applied.
    #[must_use]
    pub fn pending_offsets(&self) -> usize {
        self.tracker.pending()
    }

    #[must_use]
    pub fn indicator(&self) -> IndicatorLayout {
        IndicatorLayout::resolve(&self.pull)
    }

    /// Owner side of the `refreshing` binding.
    ///
    /// Setting `true` shows the spinner without a pull. Setting `false` ends
    /// the refresh, releases pinned content and schedules a fresh geometry
    /// report so the indicator settles.
    pub fn set_refreshing(&mut self, refreshing: bool) -> Task<Message> {
        if !self.pull.set_refreshing(refreshing) {
            return Task::none();
        }
        log::debug!("refreshing set to {refreshing} by owner");
        if refreshing {
            Task::none()
        } else {
            self.report_geometry()
        }
    }

    /// Shows the spinner for a refresh the owner started itself.
    pub fn begin_refresh(&mut self) -> Task<Message> {
        self.set_refreshing(true)
    }

    /// Ends the running refresh.
    pub fn finish_refresh(&mut self) -> Task<Message> {
        self.set_refreshing(false)
    }

    pub fn update(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::ViewportChanged { bounds, offset } => {
                self.viewport_top = bounds.y;
                self.scroll_y = offset.y;
                (Effect::None, self.report_geometry())
            }
            Message::Gesture(gesture) => (Effect::None, self.handle_gesture(gesture)),
            Message::FlushOffsets => (self.flush(), Task::none()),
            Message::AnimationTick(now) => (Effect::None, self.animate(now)),
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if self.pull.is_refreshing() || self.stretch > 0.0 {
            time::every(Duration::from_millis(ANIMATION_INTERVAL_MS)).map(Message::AnimationTick)
        } else {
            Subscription::none()
        }
    }

    pub fn view<'a>(
        &'a self,
        ctx: ViewContext,
        content: impl Into<Element<'a, Message>>,
    ) -> Element<'a, Message> {
        let layout = self.indicator();
        let (band, extra_top) = self.band_heights();

        let glyph = match layout.glyph {
            IndicatorGlyph::Spinner => {
                AnimatedSpinner::new(ctx.colors.indicator, self.spinner_rotation).into_element()
            }
            IndicatorGlyph::Arrow(rotation) => {
                ArrowGlyph::new(ctx.colors.indicator, rotation).into_element()
            }
        };

        // Glyph rests centered in a fully revealed band.
        let glyph_gap = ((layout.band_height - sizing::INDICATOR_GLYPH) / 2.0).max(0.0);
        let indicator = Container::new(glyph)
            .width(Length::Fill)
            .height(Length::Fixed(band))
            .align_x(Horizontal::Center)
            .align_y(Vertical::Bottom)
            .padding(Padding {
                bottom: glyph_gap,
                ..Padding::ZERO
            })
            .clip(true);

        let body = Container::new(content).width(Length::Fill).padding(Padding {
            top: extra_top,
            ..Padding::ZERO
        });

        // The band is part of the scrolled content, so a pinned spinner
        // scrolls away with the content.
        let scrolled = Column::new().width(Length::Fill).push(indicator).push(body);

        let scrollable = Scrollable::new(scrolled)
            .width(Length::Fill)
            .height(Length::Fill)
            .on_scroll(|viewport: Viewport| Message::ViewportChanged {
                bounds: viewport.bounds(),
                offset: viewport.absolute_offset(),
            });

        pull_surface(scrollable, Message::Gesture)
            .armed(self.scroll_y <= TOP_EPSILON_PX)
            .stretched(self.stretch > 0.0)
            .into()
    }

    /// Height of the indicator band at the top of the scrolled content, and
    /// the padding between the band and the content.
    fn band_heights(&self) -> (f32, f32) {
        let layout = self.indicator();
        let band = layout.visible_band(self.stretch);
        let extra_top = (layout.content_top(self.stretch) - band).max(0.0);
        (band, extra_top)
    }

    fn handle_gesture(&mut self, gesture: PullGesture) -> Task<Message> {
        match gesture {
            PullGesture::Wheel(delta) => {
                self.finger_down = false;
                self.release_at = Some(Instant::now() + Duration::from_millis(RELEASE_DELAY_MS));
                self.stretch_by(delta)
            }
            PullGesture::Drag(delta) => {
                self.finger_down = true;
                self.release_at = None;
                self.stretch_by(delta)
            }
            PullGesture::Release => {
                self.finger_down = false;
                self.release_at = None;
                Task::none()
            }
        }
    }

    fn stretch_by(&mut self, delta: f32) -> Task<Message> {
        let max = self.pull.threshold().value() * MAX_STRETCH_FACTOR;
        let applied = if delta > 0.0 {
            delta * PULL_RESISTANCE
        } else {
            delta
        };
        let stretch = (self.stretch + applied).clamp(0.0, max);
        if stretch == self.stretch {
            return Task::none();
        }
        self.stretch = stretch;
        self.report_geometry()
    }

    fn animate(&mut self, now: Instant) -> Task<Message> {
        if self.pull.is_refreshing() {
            self.spinner_rotation =
                animated_spinner::advance(self.spinner_rotation, SPINNER_STEP_RADIANS);
        }

        let released = !self.finger_down && self.release_at.is_none_or(|at| now >= at);
        if self.stretch <= 0.0 || !released {
            return Task::none();
        }

        self.release_at = None;
        self.stretch = spring_back(self.stretch);
        self.report_geometry()
    }

    /// Reports both probes for a new layout pass.
    fn report_geometry(&mut self) -> Task<Message> {
        self.next_pass += 1;
        let batch = GeometryBatch::new(
            self.next_pass,
            vec![
                GeometrySample::fixed(self.viewport_top, 0.0),
                GeometrySample::moving(self.viewport_top - self.scroll_y + self.stretch, 0.0),
            ],
        );

        match self.tracker.schedule(&batch) {
            Schedule::Flush => Task::done(Message::FlushOffsets),
            Schedule::Queued | Schedule::Stale => Task::none(),
        }
    }

    fn flush(&mut self) -> Effect {
        let mut effect = Effect::None;
        let offsets: Vec<f32> = self.tracker.drain().collect();

        for offset in offsets {
            match self.pull.apply_offset(offset) {
                Some(PullTransition::RefreshStarted) => {
                    log::debug!("pull crossed {:?} at {offset}", self.pull.threshold());
                    effect = Effect::RefreshRequested;
                }
                Some(PullTransition::Frozen) => log::trace!("content pinned at {offset}"),
                Some(PullTransition::Settled) => log::trace!("indicator settled at {offset}"),
                None => {}
            }
        }

        effect
    }
}

/// One damping step of the spring-back animation.
fn spring_back(stretch: f32) -> f32 {
    let next = stretch * (1.0 - SPRING_DAMPING);
    if next < SETTLE_EPSILON_PX {
        0.0
    } else {
        next
    }
}
