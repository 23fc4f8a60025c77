//! Rating bar primitive
//!
//! A row of unrated icons with a row of rated icons drawn over it. The rated
//! row is clipped to `rating / max_rating` of the widget width, which gives
//! partial star fills without any per-icon logic.
//!
//! # Design
//!
//! The widget never stores or changes the rating. Drag and tap input is turned
//! into a candidate value and published through `on_change`; the owner decides
//! whether to feed it back on the next view. Only the pointer tracker lives in
//! the widget tree.
//!
//! Dragging reports continuous values. Tapping rounds up to whole stars.

pub mod geometry;
pub mod gesture;

use iced::advanced::layout::{self, Layout};
use iced::advanced::renderer;
use iced::advanced::widget::{self, Tree, Widget};
use iced::advanced::{Clipboard, Shell};
use iced::mouse;
use iced::touch;
use iced::{Element, Event, Length, Point, Rectangle, Size, Theme};

use crate::ui::widgets::star_row::{self, StarMetrics};
use gesture::{Gesture, Pointer, Recognizers, Tracker};

/// Default number of icon slots
pub const DEFAULT_MAX_RATING: u32 = 5;

type ContentFn<'a, Message> = Box<dyn Fn(u32) -> Element<'a, Message> + 'a>;

/// Content for one layer of the rating bar
enum Content<'a, Message> {
    /// Built-in star row
    Stars,
    /// Caller supplied renderer, given `max_rating`
    Custom(ContentFn<'a, Message>),
}

/// Builder for a rating bar
pub struct Rating<'a, Message> {
    rating: f32,
    max_rating: u32,
    recognizers: Recognizers,
    on_change: Option<Box<dyn Fn(f32) -> Message + 'a>>,
    on_complete: Option<Message>,
    unrated: Content<'a, Message>,
    rated: Content<'a, Message>,
    metrics: StarMetrics,
    width: Length,
    height: Length,
}

impl<'a, Message> Rating<'a, Message> {
    /// Creates a rating bar showing `rating`
    pub fn new(rating: f32) -> Self {
        Self {
            rating,
            max_rating: DEFAULT_MAX_RATING,
            recognizers: Recognizers::default(),
            on_change: None,
            on_complete: None,
            unrated: Content::Stars,
            rated: Content::Stars,
            metrics: StarMetrics::default(),
            width: Length::Shrink,
            height: Length::Shrink,
        }
    }

    /// Sets the number of icon slots
    pub fn max_rating(mut self, max_rating: u32) -> Self {
        self.max_rating = max_rating;
        self
    }

    /// Enables or disables drag input
    pub fn dragging(mut self, enabled: bool) -> Self {
        self.recognizers.dragging = enabled;
        self
    }

    /// Enables or disables tap input
    pub fn tapping(mut self, enabled: bool) -> Self {
        self.recognizers.tapping = enabled;
        self
    }

    /// Sets the message produced for a new candidate rating
    ///
    /// Called on every drag move and once per tap.
    pub fn on_change<F>(mut self, on_change: F) -> Self
    where
        F: Fn(f32) -> Message + 'a,
    {
        self.on_change = Some(Box::new(on_change));
        self
    }

    /// Sets the message produced when a drag is released or a tap lands
    pub fn on_complete(mut self, on_complete: Message) -> Self {
        self.on_complete = Some(on_complete);
        self
    }

    /// Replaces the unrated layer
    pub fn unrated_content<F>(mut self, content: F) -> Self
    where
        F: Fn(u32) -> Element<'a, Message> + 'a,
    {
        self.unrated = Content::Custom(Box::new(content));
        self
    }

    /// Replaces the rated layer
    pub fn rated_content<F>(mut self, content: F) -> Self
    where
        F: Fn(u32) -> Element<'a, Message> + 'a,
    {
        self.rated = Content::Custom(Box::new(content));
        self
    }

    /// Sets the icon size of the built-in star rows
    pub fn star_size(mut self, size: f32) -> Self {
        self.metrics.size = size;
        self
    }

    /// Sets the gap between icons of the built-in star rows
    pub fn spacing(mut self, spacing: f32) -> Self {
        self.metrics.spacing = spacing;
        self
    }

    pub fn width(mut self, width: impl Into<Length>) -> Self {
        self.width = width.into();
        self
    }

    pub fn height(mut self, height: impl Into<Length>) -> Self {
        self.height = height.into();
        self
    }
}

/// The materialized widget: both layers built for the current view
struct RatingBar<'a, Message> {
    rating: f32,
    max_rating: u32,
    recognizers: Recognizers,
    on_change: Option<Box<dyn Fn(f32) -> Message + 'a>>,
    on_complete: Option<Message>,
    /// `[unrated, rated]`
    layers: [Element<'a, Message>; 2],
    width: Length,
    height: Length,
}

impl<'a, Message: 'a> From<Rating<'a, Message>> for RatingBar<'a, Message> {
    fn from(rating: Rating<'a, Message>) -> Self {
        debug_assert!(rating.max_rating > 0, "max_rating must be at least 1");

        let max_rating = rating.max_rating;
        let metrics = rating.metrics;

        let unrated = match rating.unrated {
            Content::Stars => star_row::unrated(max_rating, metrics),
            Content::Custom(content) => content(max_rating),
        };
        let rated = match rating.rated {
            Content::Stars => star_row::rated(max_rating, metrics),
            Content::Custom(content) => content(max_rating),
        };

        Self {
            rating: rating.rating,
            max_rating,
            recognizers: rating.recognizers,
            on_change: rating.on_change,
            on_complete: rating.on_complete,
            layers: [unrated, rated],
            width: rating.width,
            height: rating.height,
        }
    }
}

impl<Message> RatingBar<'_, Message>
where
    Message: Clone,
{
    fn publish_change(&self, new_rating: f32, shell: &mut Shell<'_, Message>) {
        if let Some(on_change) = &self.on_change {
            shell.publish(on_change(new_rating));
        }
    }

    fn publish_complete(&self, shell: &mut Shell<'_, Message>) {
        if let Some(on_complete) = self.on_complete.clone() {
            shell.publish(on_complete);
        }
    }

    /// Turn a recognized gesture into messages, using the width at event time
    fn dispatch(&self, gesture: Gesture, bounds: Rectangle, shell: &mut Shell<'_, Message>) {
        tracing::trace!(?gesture, width = bounds.width, "rating gesture");

        match gesture {
            Gesture::DragMoved(x) => {
                let new_rating = geometry::drag_rating(x, bounds.width, self.max_rating);
                self.publish_change(new_rating, shell);
            }
            Gesture::DragEnded => self.publish_complete(shell),
            Gesture::Tapped(x) => {
                let new_rating = geometry::tap_rating(x, bounds.width, self.max_rating);
                self.publish_change(new_rating, shell);
                self.publish_complete(shell);
            }
        }
    }
}

/// Stage of a pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Pressed,
    Moved,
    Released,
    Lost,
}

/// Classify an input event by phase and pointer, with its position if known
fn pointer_input(event: &Event, cursor: mouse::Cursor) -> Option<(Phase, Pointer, Option<Point>)> {
    let from_cursor = |phase| Some((phase, Pointer::Mouse, cursor.land().position()));
    let from_finger = |phase, id: &touch::Finger, position: &Point| {
        Some((phase, Pointer::Finger(*id), Some(*position)))
    };

    match event {
        Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => from_cursor(Phase::Pressed),
        Event::Mouse(mouse::Event::CursorMoved { .. }) => from_cursor(Phase::Moved),
        Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            from_cursor(Phase::Released)
        }
        Event::Touch(touch::Event::FingerPressed { id, position }) => {
            from_finger(Phase::Pressed, id, position)
        }
        Event::Touch(touch::Event::FingerMoved { id, position }) => {
            from_finger(Phase::Moved, id, position)
        }
        Event::Touch(touch::Event::FingerLifted { id, position }) => {
            from_finger(Phase::Released, id, position)
        }
        Event::Touch(touch::Event::FingerLost { id, position }) => {
            from_finger(Phase::Lost, id, position)
        }
        _ => None,
    }
}

impl<Message> Widget<Message, Theme, iced::Renderer> for RatingBar<'_, Message>
where
    Message: Clone,
{
    fn tag(&self) -> widget::tree::Tag {
        widget::tree::Tag::of::<Tracker>()
    }

    fn state(&self) -> widget::tree::State {
        widget::tree::State::new(Tracker::default())
    }

    fn children(&self) -> Vec<Tree> {
        self.layers.iter().map(Tree::new).collect()
    }

    fn diff(&self, tree: &mut Tree) {
        tree.diff_children(&self.layers);
    }

    fn size(&self) -> Size<Length> {
        Size::new(self.width, self.height)
    }

    fn layout(
        &mut self,
        tree: &mut Tree,
        renderer: &iced::Renderer,
        limits: &layout::Limits,
    ) -> layout::Node {
        let limits = limits.width(self.width).height(self.height);

        let nodes: Vec<layout::Node> = self
            .layers
            .iter_mut()
            .zip(tree.children.iter_mut())
            .map(|(layer, tree)| layer.as_widget_mut().layout(tree, renderer, &limits))
            .collect();

        let content = nodes.iter().fold(Size::ZERO, |size, node| {
            let node_size = node.size();
            Size::new(size.width.max(node_size.width), size.height.max(node_size.height))
        });
        let size = limits.resolve(self.width, self.height, content);

        // Center each layer so the rated icons sit on top of the unrated ones
        let nodes = nodes
            .into_iter()
            .map(|node| {
                let offset = geometry::centered(size, node.size());
                node.move_to(offset)
            })
            .collect();

        layout::Node::with_children(size, nodes)
    }

    fn update(
        &mut self,
        tree: &mut Tree,
        event: &Event,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _renderer: &iced::Renderer,
        _clipboard: &mut dyn Clipboard,
        shell: &mut Shell<'_, Message>,
        _viewport: &Rectangle,
    ) {
        let Some((phase, pointer, position)) = pointer_input(event, cursor) else {
            return;
        };

        let tracker = tree.state.downcast_mut::<Tracker>();
        let bounds = layout.bounds();
        let x = position.map(|position| position.x - bounds.x);

        match phase {
            Phase::Pressed => {
                if let (Some(position), Some(x)) = (position, x) {
                    if bounds.contains(position) && tracker.press(pointer, x, self.recognizers) {
                        shell.capture_event();
                    }
                }
            }
            Phase::Moved => {
                if let Some(x) = x {
                    if let Some(gesture) = tracker.moved(pointer, x, self.recognizers) {
                        self.dispatch(gesture, bounds, shell);
                        shell.capture_event();
                    }
                }
            }
            Phase::Released => {
                if tracker.owner() == Some(pointer) {
                    let inside = position.is_some_and(|position| bounds.contains(position));

                    if let Some(gesture) =
                        tracker.release(pointer, x.unwrap_or(0.0), inside, self.recognizers)
                    {
                        self.dispatch(gesture, bounds, shell);
                    }
                    shell.capture_event();
                }
            }
            Phase::Lost => tracker.cancel(pointer),
        }
    }

    fn draw(
        &self,
        tree: &Tree,
        renderer: &mut iced::Renderer,
        theme: &Theme,
        style: &renderer::Style,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        viewport: &Rectangle,
    ) {
        use iced::advanced::Renderer as _;

        let [unrated, rated] = &self.layers;
        let mut children = layout.children();

        if let Some(child_layout) = children.next() {
            unrated.as_widget().draw(
                &tree.children[0],
                renderer,
                theme,
                style,
                child_layout,
                cursor,
                viewport,
            );
        }

        let Some(child_layout) = children.next() else {
            return;
        };

        // Fill is measured against the rated layer's own width
        if let Some(clip) =
            geometry::rated_clip(child_layout.bounds(), self.rating, self.max_rating)
        {
            renderer.with_layer(clip, |renderer| {
                rated.as_widget().draw(
                    &tree.children[1],
                    renderer,
                    theme,
                    style,
                    child_layout,
                    cursor,
                    viewport,
                );
            });
        }
    }

    fn operate(
        &mut self,
        tree: &mut Tree,
        layout: Layout<'_>,
        renderer: &iced::Renderer,
        operation: &mut dyn widget::Operation,
    ) {
        operation.container(None, layout.bounds());
        operation.traverse(&mut |operation| {
            self.layers
                .iter_mut()
                .zip(&mut tree.children)
                .zip(layout.children())
                .for_each(|((layer, tree), layout)| {
                    layer.as_widget_mut().operate(tree, layout, renderer, operation);
                });
        });
    }

    fn mouse_interaction(
        &self,
        tree: &Tree,
        layout: Layout<'_>,
        cursor: mouse::Cursor,
        _viewport: &Rectangle,
        _renderer: &iced::Renderer,
    ) -> mouse::Interaction {
        let tracker = tree.state.downcast_ref::<Tracker>();

        if tracker.is_dragging() {
            mouse::Interaction::Grabbing
        } else if self.recognizers.any() && cursor.is_over(layout.bounds()) {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

impl<'a, Message> From<Rating<'a, Message>> for Element<'a, Message>
where
    Message: Clone + 'a,
{
    fn from(rating: Rating<'a, Message>) -> Self {
        Element::new(RatingBar::from(rating))
    }
}

/// Creates a rating bar showing `rating`
pub fn rating<'a, Message>(rating: f32) -> Rating<'a, Message> {
    Rating::new(rating)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    enum Message {
        Changed(f32),
        Completed,
    }

    #[test]
    fn test_builder_defaults() {
        let bar: Rating<'_, Message> = rating(2.5);
        assert_eq!(bar.max_rating, DEFAULT_MAX_RATING);
        assert!(bar.recognizers.dragging);
        assert!(bar.recognizers.tapping);
        assert!(bar.on_change.is_none());
        assert!(bar.on_complete.is_none());
        assert_eq!(bar.metrics, StarMetrics::default());
    }

    #[test]
    fn test_builder_keeps_rating_unclamped() {
        let bar: Rating<'_, Message> = rating(9.0).max_rating(5);
        assert_eq!(bar.rating, 9.0);
    }

    #[test]
    fn test_builder_setters() {
        let bar = rating(1.0)
            .max_rating(10)
            .dragging(false)
            .tapping(false)
            .on_change(Message::Changed)
            .on_complete(Message::Completed)
            .star_size(24.0)
            .spacing(4.0);

        assert_eq!(bar.max_rating, 10);
        assert!(!bar.recognizers.any());
        assert_eq!(bar.on_change.as_ref().map(|f| f(3.0)), Some(Message::Changed(3.0)));
        assert_eq!(bar.on_complete, Some(Message::Completed));
        assert_eq!(bar.metrics.size, 24.0);
        assert_eq!(bar.metrics.spacing, 4.0);
    }

    fn publish(bar: &RatingBar<'_, Message>, gesture: Gesture, width: f32) -> Vec<Message> {
        let mut messages = Vec::new();
        let mut shell = Shell::new(&mut messages);
        let bounds = Rectangle {
            x: 30.0,
            y: 10.0,
            width,
            height: 48.0,
        };

        bar.dispatch(gesture, bounds, &mut shell);
        drop(shell);
        messages
    }

    fn wired(value: f32) -> RatingBar<'static, Message> {
        RatingBar::from(
            rating(value)
                .on_change(Message::Changed)
                .on_complete(Message::Completed),
        )
    }

    #[test]
    fn test_tap_publishes_change_then_complete() {
        let bar = wired(0.0);
        assert_eq!(
            publish(&bar, Gesture::Tapped(84.0), 200.0),
            vec![Message::Changed(3.0), Message::Completed]
        );
        assert_eq!(
            publish(&bar, Gesture::Tapped(0.0), 200.0),
            vec![Message::Changed(0.0), Message::Completed]
        );
    }

    #[test]
    fn test_drag_publishes_unrounded_value_without_completion() {
        let bar = wired(0.0);
        let messages = publish(&bar, Gesture::DragMoved(166.0), 200.0);

        assert_eq!(messages.len(), 1);
        match messages[0] {
            Message::Changed(value) => assert!((value - 4.15).abs() < 1e-4, "got {value}"),
            ref other => panic!("unexpected message {other:?}"),
        }

        assert_eq!(
            publish(&bar, Gesture::DragEnded, 200.0),
            vec![Message::Completed]
        );
    }

    #[test]
    fn test_missing_callbacks_publish_nothing() {
        let bar: RatingBar<'_, Message> = RatingBar::from(rating(2.0));
        assert!(publish(&bar, Gesture::Tapped(84.0), 200.0).is_empty());
        assert!(publish(&bar, Gesture::DragMoved(40.0), 200.0).is_empty());
        assert!(publish(&bar, Gesture::DragEnded, 200.0).is_empty());
    }

    #[test]
    fn test_pointer_input_keeps_finger_identity() {
        let cursor = mouse::Cursor::Available(Point::new(12.0, 4.0));

        let pressed = Event::Touch(touch::Event::FingerPressed {
            id: touch::Finger(3),
            position: Point::new(50.0, 8.0),
        });
        assert_eq!(
            pointer_input(&pressed, cursor),
            Some((
                Phase::Pressed,
                Pointer::Finger(touch::Finger(3)),
                Some(Point::new(50.0, 8.0))
            ))
        );

        let lost = Event::Touch(touch::Event::FingerLost {
            id: touch::Finger(3),
            position: Point::new(60.0, 8.0),
        });
        assert!(matches!(
            pointer_input(&lost, cursor),
            Some((Phase::Lost, Pointer::Finger(touch::Finger(3)), _))
        ));

        let released = Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        assert_eq!(
            pointer_input(&released, cursor),
            Some((Phase::Released, Pointer::Mouse, Some(Point::new(12.0, 4.0))))
        );

        let right = Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Right));
        assert_eq!(pointer_input(&right, cursor), None);
    }

    #[test]
    fn test_custom_content_receives_max_rating() {
        use std::cell::Cell;
        use std::rc::Rc;

        let seen = Rc::new(Cell::new(0));
        let recorder = seen.clone();

        let bar = rating(1.0)
            .max_rating(7)
            .rated_content(move |max| {
                recorder.set(max);
                iced::widget::Space::new().into()
            })
            .on_complete(Message::Completed);

        let _bar = RatingBar::from(bar);
        assert_eq!(seen.get(), 7);
    }
}
