//! Pointer input handling for the canvas surface.
//!
//! Implements the drag interaction pipeline: normalizing mouse and touch
//! into a single logical pointer, translating device pixels into the
//! normalized placement space, and driving the per-item drag state
//! machine through its gesture lifecycle.
//!
//! ## Architecture
//!
//! Each placed item gets one [`session::DragSession`] bound to the shared
//! surface handle and listener registry. A session is inert until an
//! accepted press on its item; it then holds the global pointer listeners
//! for the duration of the gesture and commits exactly one final position
//! on release.
//!
//! ## Modules
//!
//! - `pointer` - Mouse/touch normalization and press gating
//! - `coords` - Device-pixel to placement-space translation
//! - `state` - Drag state machine enum and query methods
//! - `session` - Per-item gesture lifecycle and commit
//! - `listeners` - Scoped acquisition of global pointer listeners

pub mod coords;
pub mod listeners;
pub mod pointer;
pub mod session;
pub mod state;

pub use session::DragSession;
pub use state::DragState;
