//! Drag state machine for a single placed item.
//!
//! An explicit enum rather than scattered boolean flags, making
//! impossible states unrepresentable: the grab offset, the live position,
//! and the listener registration exist exactly while a gesture is in
//! progress.
//!
//! ## State Transitions
//!
//! ```text
//! Idle -> Dragging    (accepted press on a draggable item)
//! Dragging -> Idle    (release commits once; detach/drop commits nothing)
//! ```
//!
//! Commit is terminal for a gesture but transient as a state: the session
//! resets to `Idle` in the same transition, so `Dragging` is the only
//! non-idle variant.

use kurbo::Vec2;

use crate::input::listeners::ListenerGuard;
use crate::types::Position;

/// Per-item drag state.
#[derive(Debug, Default)]
pub enum DragState {
    /// No gesture in progress
    #[default]
    Idle,

    /// Gesture accepted, global listeners held, live position tracked
    Dragging {
        /// Vector from the item's on-screen top-left to the press point,
        /// held constant for the whole gesture
        grab_offset: Vec2,
        /// Last computed normalized position; drives rendering only and
        /// is never written to the registry mid-drag
        live: Position,
        /// Listener registration, released when this state is dropped
        guard: ListenerGuard,
    },
}

impl DragState {
    /// Returns true if no gesture is in progress
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// Returns true if a gesture is in progress
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Get the grab offset, if dragging
    pub fn grab_offset(&self) -> Option<Vec2> {
        match self {
            Self::Dragging { grab_offset, .. } => Some(*grab_offset),
            _ => None,
        }
    }

    /// Get the live position, if dragging
    pub fn live_position(&self) -> Option<Position> {
        match self {
            Self::Dragging { live, .. } => Some(*live),
            _ => None,
        }
    }

    /// Update the live position during a drag
    pub fn set_live(&mut self, position: Position) {
        if let Self::Dragging { live, .. } = self {
            *live = position;
        }
    }

    /// Reset to Idle, dropping any held listener registration
    pub fn reset(&mut self) {
        *self = Self::Idle;
    }
}
