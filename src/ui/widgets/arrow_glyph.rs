// SPDX-License-Identifier: MPL-2.0
//! Pull arrow drawn in the indicator band.
//!
//! The arrow points down at rest and turns to point up as the pull nears
//! the threshold.

use crate::refresh::IndicatorRotation;
use crate::ui::design_tokens::{opacity, sizing};
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme, Vector};

pub struct ArrowGlyph {
    cache: Cache,
    rotation: IndicatorRotation,
    color: Color,
    size: f32,
}

impl ArrowGlyph {
    #[must_use]
    pub fn new(color: Color, rotation: IndicatorRotation) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::INDICATOR_GLYPH,
        }
    }

    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }

    /// Stroke color: faded until the arrow starts turning.
    fn stroke_color(&self) -> Color {
        let alpha = if self.rotation == IndicatorRotation::ZERO {
            opacity::ARROW_IDLE
        } else {
            opacity::OPAQUE
        };
        Color {
            a: self.color.a * alpha,
            ..self.color
        }
    }
}

impl<Message> canvas::Program<Message> for ArrowGlyph {
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
                let half = frame.width().min(frame.height()) / 2.0 - sizing::INDICATOR_STROKE;
                let head = half * 0.55;
                let center = frame.center();

                frame.with_save(|frame| {
                    frame.translate(Vector::new(center.x, center.y));
                    frame.rotate(self.rotation.radians());

                    // Drawn pointing down around the origin.
                    let arrow = Path::new(|builder| {
                        builder.move_to(Point::new(0.0, -half));
                        builder.line_to(Point::new(0.0, half));
                        builder.move_to(Point::new(-head, half - head));
                        builder.line_to(Point::new(0.0, half));
                        builder.line_to(Point::new(head, half - head));
                    });

                    frame.stroke(
                        &arrow,
                        Stroke::default()
                            .with_width(sizing::INDICATOR_STROKE)
                            .with_color(self.stroke_color())
                            .with_line_cap(canvas::LineCap::Round)
                            .with_line_join(canvas::LineJoin::Round),
                    );
                });
            });

        vec![geometry]
    }
}
