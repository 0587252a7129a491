// SPDX-License-Identifier: MPL-2.0
//! Spinner shown in the indicator band while a refresh runs.

use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, path::Arc, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Radians, Rectangle, Renderer, Theme};
use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Length of the visible arc.
const ARC_SWEEP: f32 = PI * 0.75;

/// Canvas program drawing a partial ring rotated by `rotation` radians.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation: normalize_angle(rotation),
            color,
            size: sizing::INDICATOR_GLYPH,
        }
    }

    #[must_use]
    pub fn size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

/// Advances a spinner angle by `step`, wrapping to `[0, 2π)`.
#[must_use]
pub fn advance(angle: f32, step: f32) -> f32 {
    normalize_angle(angle + step)
}

fn normalize_angle(angle: f32) -> f32 {
    if angle.is_finite() {
        angle.rem_euclid(TAU)
    } else {
        0.0
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius =
                    frame.width().min(frame.height()) / 2.0 - sizing::INDICATOR_STROKE;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default()
                        .with_width(sizing::INDICATOR_STROKE)
                        .with_color(Color {
                            a: opacity::TRACK,
                            ..self.color
                        }),
                );

                // Start at twelve o'clock.
                let start = self.rotation - FRAC_PI_2;
                let arc = Path::new(|builder| {
                    builder.arc(Arc {
                        center,
                        radius,
                        start_angle: Radians(start),
                        end_angle: Radians(start + ARC_SWEEP),
                    });
                });
                frame.stroke(
                    &arc,
                    Stroke::default()
                        .with_width(sizing::INDICATOR_STROKE)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}
