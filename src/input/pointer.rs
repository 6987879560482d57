//! Pointer source adapter - unified mouse/touch input.
//!
//! Collapses platform mouse and touch events into a single logical
//! `{x, y}` pointer so the rest of the engine is input-device-agnostic.
//! A mouse press is accepted only for the primary button; a touch press
//! only when at least one touch point is present. Additional simultaneous
//! touches are discarded; the first active touch point is the pointer.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

impl PointerButton {
    /// The primary button is the only one that starts a drag.
    pub fn is_primary(self) -> bool {
        matches!(self, Self::Left)
    }
}

/// A platform pointer-down event, mouse or touch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerPress {
    Mouse { position: Point, button: PointerButton },
    Touch { points: Vec<Point> },
}

/// A platform pointer-move event, mouse or touch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PointerMotion {
    Mouse { position: Point },
    Touch { points: Vec<Point> },
}

/// What the host should do with the platform event after the session
/// has seen it.
///
/// `Claimed` means the gesture was accepted: the host must prevent the
/// event's default action and stop its propagation so the drag is not
/// also interpreted as a scroll, a text selection, or a click-through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Claimed,
    Ignored,
}

impl Disposition {
    pub fn is_claimed(self) -> bool {
        matches!(self, Self::Claimed)
    }
}

/// Extract the logical pointer from a press event, applying the accept
/// policy. `None` means the event does not start a gesture.
pub fn press_point(press: &PointerPress) -> Option<Point> {
    match press {
        PointerPress::Mouse { position, button } if button.is_primary() => Some(*position),
        PointerPress::Mouse { .. } => None,
        PointerPress::Touch { points } => points.first().copied(),
    }
}

/// Extract the logical pointer from a move event.
pub fn motion_point(motion: &PointerMotion) -> Option<Point> {
    match motion {
        PointerMotion::Mouse { position } => Some(*position),
        PointerMotion::Touch { points } => points.first().copied(),
    }
}
