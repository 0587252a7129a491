// SPDX-License-Identifier: MPL-2.0
//! A wrapper widget that turns overscroll at the top of a scrollable into
//! pull gestures.
//!
//! Desktop scrollables stop dead at offset zero, so there is nothing to pull.
//! `PullSurface` sits around the scrollable and, while the content is scrolled
//! to the top (`armed`), intercepts upward wheel movement and downward finger
//! drags before the scrollable sees them. While the content is stretched it
//! also takes the movement back the other way, so the stretch collapses before
//! the content starts scrolling again.

use crate::config::WHEEL_LINE_PX;
use iced::advanced::layout::{self, Layout};
use iced::advanced::mouse;
use iced::advanced::overlay;
use iced::advanced::renderer;
use iced::advanced::widget::{self, tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::touch;
use iced::{Element, Event, Length, Point, Rectangle, Size};

/// Raw overscroll input reported by [`PullSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PullGesture {
    /// Wheel movement in pixels; positive pulls the content down.
    Wheel(f32),
    /// Finger drag in pixels; positive pulls the content down.
    Drag(f32),
    /// The finger driving a drag was lifted or lost.
    Release,
}

/// A widget that wraps a scrollable and reports overscroll at its top edge.
pub struct PullSurface<'a, Message, Theme, Renderer> {
    content: Element<'a, Message, Theme, Renderer>,
    armed: bool,
    stretched: bool,
    on_gesture: Box<dyn Fn(PullGesture) -> Message + 'a>,
}

impl<'a, Message, Theme, Renderer> PullSurface<'a, Message, Theme, Renderer> {
    pub fn new(
        content: impl Into<Element<'a, Message, Theme, Renderer>>,
        on_gesture: impl Fn(PullGesture) -> Message + 'a,
    ) -> Self {
        Self {
            content: content.into(),
            armed: false,
            stretched: false,
            on_gesture: Box::new(on_gesture),
        }
    }

    /// Whether the wrapped content is scrolled to its top edge.
    #[must_use]
    pub fn armed(mut self, armed: bool) -> Self {
        self.armed = armed;
        self
    }

    /// Whether the content is currently pulled past its top edge.
    #[must_use]
    pub fn stretched(mut self, stretched: bool) -> Self {
        self.stretched = stretched;
        self
    }
}

/// Finger currently driving a drag.
#[derive(Debug, Clone, Copy, Default)]
struct DragState {
    finger: Option<(touch::Finger, f32)>,
}

impl<Message, Theme, Renderer> Widget<Message, Theme, Renderer>
    for PullSurface<'_, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    fn tag(&self) -> tree::Tag {
        tree::Tag::of::<DragState>()
    }

    fn state(&self) -> tree::State {
        tree::State::new(DragState::default())
    }

    fn size(&self) -> Size<Length> {
        self.content.as_widget().size()
    }

    fn layout(
        &mut self,
        tree: &mut widget::Tree,
        renderer: &Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        self.content
            .as_widget_mut()
            .layout(&mut tree.children[0], renderer, limits)
    }

    fn children(&self) -> Vec<widget::Tree> {
        vec![widget::Tree::new(&self.content)]
    }

    fn diff(&self, tree: &mut widget::Tree) {
        tree.diff_children(&[&self.content]);
    }

    fn draw(
        &self,
        tree: &widget::Tree,
        renderer: &mut Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        self.content.as_widget().draw(
            &tree.children[0],
            renderer,
            theme,
            style,
            layout,
            cursor,
            viewport,
        );
    }

    fn update(
        &mut self,
        tree: &mut widget::Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        renderer: &Renderer,
        clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        viewport: &Rectangle,
    ) {
        let bounds = layout.bounds();
        let drag = tree.state.downcast_mut::<DragState>();

        let gesture = match event {
            Event::Mouse(mouse::Event::WheelScrolled { delta }) if cursor.is_over(bounds) => {
                wheel_pull_delta(*delta, self.armed, self.stretched).map(PullGesture::Wheel)
            }
            Event::Touch(touch::Event::FingerPressed { id, position })
                if bounds.contains(*position) =>
            {
                drag.finger = Some((*id, position.y));
                None
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                finger_pull_delta(drag, *id, *position, self.armed, self.stretched)
                    .map(PullGesture::Drag)
            }
            Event::Touch(
                touch::Event::FingerLifted { id, .. } | touch::Event::FingerLost { id, .. },
            ) if drag.finger.is_some_and(|(finger, _)| finger == *id) => {
                drag.finger = None;
                self.stretched.then_some(PullGesture::Release)
            }
            _ => None,
        };

        if let Some(gesture) = gesture {
            shell.publish((self.on_gesture)(gesture));
            shell.capture_event();
            return;
        }

        self.content.as_widget_mut().update(
            &mut tree.children[0],
            event,
            layout,
            cursor,
            renderer,
            clipboard,
            shell,
            viewport,
        );
    }

    fn mouse_interaction(
        &self,
        tree: &widget::Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
        renderer: &Renderer,
    ) -> mouse::Interaction {
        self.content.as_widget().mouse_interaction(
            &tree.children[0],
            layout,
            cursor,
            viewport,
            renderer,
        )
    }

    fn operate(
        &mut self,
        tree: &mut widget::Tree,
        layout: Layout<'_>,
        renderer: &Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        self.content
            .as_widget_mut()
            .operate(&mut tree.children[0], layout, renderer, operation);
    }

    fn overlay<'b>(
        &'b mut self,
        tree: &'b mut widget::Tree,
        layout: Layout<'b>,
        renderer: &Renderer,
        viewport: &Rectangle,
        translation: iced::Vector,
    ) -> Option<overlay::Element<'b, Message, Theme, Renderer>> {
        self.content.as_widget_mut().overlay(
            &mut tree.children[0],
            layout,
            renderer,
            viewport,
            translation,
        )
    }
}

impl<'a, Message, Theme, Renderer> From<PullSurface<'a, Message, Theme, Renderer>>
    for Element<'a, Message, Theme, Renderer>
where
    Message: 'a,
    Theme: 'a,
    Renderer: renderer::Renderer + 'a,
{
    fn from(surface: PullSurface<'a, Message, Theme, Renderer>) -> Self {
        Self::new(surface)
    }
}

/// Helper function to create a pull surface.
pub fn pull_surface<'a, Message, Theme, Renderer>(
    content: impl Into<Element<'a, Message, Theme, Renderer>>,
    on_gesture: impl Fn(PullGesture) -> Message + 'a,
) -> PullSurface<'a, Message, Theme, Renderer>
where
    Renderer: renderer::Renderer,
{
    PullSurface::new(content, on_gesture)
}

/// Vertical wheel movement to take as pull, in pixels.
///
/// Positive wheel `y` scrolls toward the top. It becomes pull while the
/// content is at the top; movement the other way only counts while the
/// content is still stretched.
fn wheel_pull_delta(delta: mouse::ScrollDelta, armed: bool, stretched: bool) -> Option<f32> {
    let y = match delta {
        mouse::ScrollDelta::Lines { y, .. } => y * WHEEL_LINE_PX,
        mouse::ScrollDelta::Pixels { y, .. } => y,
    };
    claim(y, armed, stretched)
}

fn finger_pull_delta(
    drag: &mut DragState,
    id: touch::Finger,
    position: Point,
    armed: bool,
    stretched: bool,
) -> Option<f32> {
    let (finger, last_y) = drag.finger?;
    if finger != id {
        return None;
    }
    drag.finger = Some((finger, position.y));
    claim(position.y - last_y, armed, stretched)
}

fn claim(dy: f32, armed: bool, stretched: bool) -> Option<f32> {
    if !dy.is_finite() || dy == 0.0 {
        return None;
    }
    if stretched || (armed && dy > 0.0) {
        Some(dy)
    } else {
        None
    }
}
