//! Drag and tap recognition for the rating bar
//!
//! Raw press, move and release input is folded into [`Gesture`]s. Positions
//! are horizontal offsets from the widget's left edge. A gesture belongs to
//! the pointer that started it; input from any other pointer is ignored until
//! it ends.

use iced::touch;

/// Horizontal travel needed before a press turns into a drag
pub const DRAG_SLOP: f32 = 8.0;

/// Which recognizers are attached
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recognizers {
    pub dragging: bool,
    pub tapping: bool,
}

impl Recognizers {
    pub fn any(self) -> bool {
        self.dragging || self.tapping
    }
}

impl Default for Recognizers {
    fn default() -> Self {
        Self {
            dragging: true,
            tapping: true,
        }
    }
}

/// Source of pointer input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pointer {
    Mouse,
    Finger(touch::Finger),
}

/// A recognized gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// The pointer moved while dragging
    DragMoved(f32),
    /// The drag was released
    DragEnded,
    /// A press was released without turning into a drag
    Tapped(f32),
}

/// Pointer tracking state, kept in the widget tree
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tracker {
    #[default]
    Idle,
    Pressed {
        pointer: Pointer,
        origin: f32,
    },
    Dragging {
        pointer: Pointer,
    },
}

impl Tracker {
    /// Pointer that owns the current gesture
    pub fn owner(&self) -> Option<Pointer> {
        match *self {
            Tracker::Idle => None,
            Tracker::Pressed { pointer, .. } | Tracker::Dragging { pointer } => Some(pointer),
        }
    }

    /// Start tracking a press. Returns whether the press was taken.
    pub fn press(&mut self, pointer: Pointer, x: f32, recognizers: Recognizers) -> bool {
        if self.is_tracking() || !recognizers.any() {
            return false;
        }

        *self = Tracker::Pressed { pointer, origin: x };
        true
    }

    pub fn moved(&mut self, pointer: Pointer, x: f32, recognizers: Recognizers) -> Option<Gesture> {
        match *self {
            Tracker::Pressed { pointer: owner, origin }
                if owner == pointer && recognizers.dragging && (x - origin).abs() > DRAG_SLOP =>
            {
                *self = Tracker::Dragging { pointer };
                Some(Gesture::DragMoved(x))
            }
            Tracker::Dragging { pointer: owner } if owner == pointer => Some(Gesture::DragMoved(x)),
            _ => None,
        }
    }

    /// Finish the gesture. `inside` is whether the pointer is still over the widget.
    pub fn release(
        &mut self,
        pointer: Pointer,
        x: f32,
        inside: bool,
        recognizers: Recognizers,
    ) -> Option<Gesture> {
        if self.owner() != Some(pointer) {
            return None;
        }

        match std::mem::take(self) {
            Tracker::Dragging { .. } => Some(Gesture::DragEnded),
            Tracker::Pressed { .. } if recognizers.tapping && inside => Some(Gesture::Tapped(x)),
            _ => None,
        }
    }

    /// Drop the gesture without reporting anything
    pub fn cancel(&mut self, pointer: Pointer) {
        if self.owner() == Some(pointer) {
            *self = Tracker::Idle;
        }
    }

    pub fn is_tracking(&self) -> bool {
        !matches!(self, Tracker::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Tracker::Dragging { .. })
    }
}
