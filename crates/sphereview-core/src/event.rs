//! Viewport input events delivered by the host.

/// The kind of a viewport mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MouseEventKind {
    /// The pointer moved.
    #[default]
    Move,
    /// A button was pressed.
    Press,
    /// A button was released.
    Release,
    /// The scroll wheel turned.
    Wheel,
}

/// Mouse buttons held while an event was generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MouseButtons {
    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

/// A single discrete mouse event in viewport pixel coordinates.
///
/// `last_x`/`last_y` carry the previous pointer sample so handlers can
/// compute drag deltas without keeping their own history.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseEvent {
    pub kind: MouseEventKind,
    pub x: i32,
    pub y: i32,
    pub last_x: i32,
    pub last_y: i32,
    pub buttons: MouseButtons,
    /// Wheel rotation; positive away from the user. Zero for non-wheel events.
    pub wheel_delta: i32,
}

impl MouseEvent {
    /// A pointer move from `(last_x, last_y)` to `(x, y)` with the given buttons held.
    #[must_use]
    pub fn moved(last_x: i32, last_y: i32, x: i32, y: i32, buttons: MouseButtons) -> Self {
        Self {
            kind: MouseEventKind::Move,
            x,
            y,
            last_x,
            last_y,
            buttons,
            ..Default::default()
        }
    }

    /// A left-button drag step by `(dx, dy)` starting at the origin.
    #[must_use]
    pub fn left_drag(dx: i32, dy: i32) -> Self {
        Self::moved(
            0,
            0,
            dx,
            dy,
            MouseButtons {
                left: true,
                ..Default::default()
            },
        )
    }

    /// A wheel event at rest.
    #[must_use]
    pub fn wheel(delta: i32) -> Self {
        Self {
            kind: MouseEventKind::Wheel,
            wheel_delta: delta,
            ..Default::default()
        }
    }

    /// Pointer delta since the previous sample, saturating at the `i32` range.
    #[must_use]
    pub fn delta(&self) -> (i32, i32) {
        (
            self.x.saturating_sub(self.last_x),
            self.y.saturating_sub(self.last_y),
        )
    }

    /// Whether the left button is held.
    #[must_use]
    pub fn left(&self) -> bool {
        self.buttons.left
    }
}

/// Cursor affordance a controller asks the host to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorShape {
    /// The host's normal pointer.
    #[default]
    Default,
    /// Rotation in 3D.
    Rotate3D,
}
