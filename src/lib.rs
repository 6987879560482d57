//! Canvas placement engine for free-form home-screen items.
//!
//! Lets a host view place decorative "stickers" and functional "widgets"
//! anywhere on a responsive surface, drag them with mouse or touch, and
//! persist their positions as resolution-independent percentages of the
//! surface rectangle.
//!
//! ## Architecture
//!
//! The engine is deliberately headless: it owns the drag state machine,
//! the coordinate math, and the commit contract, while the host owns
//! rendering, storage, and layout. The host feeds normalized pointer
//! events into per-item [`DragSession`]s and receives exactly one
//! position commit per completed gesture.
//!
//! ## Modules
//!
//! - `input` - Pointer normalization, coordinate translation, and the
//!   per-item drag state machine
//! - `types` - Placed items, ids, and the normalized placement position
//! - `registry` - The ordered item collection and its commit contract
//! - `surface` - The live-measured container rectangle
//! - `engine` - Host-facing facade for mounting sessions
//! - `persist` - JSON export/import of the placed-item records

pub mod constants;
pub mod engine;
pub mod input;
pub mod perf;
pub mod persist;
pub mod registry;
pub mod surface;
pub mod types;

pub use engine::PlacementEngine;
pub use input::session::DragSession;
pub use input::state::DragState;
pub use registry::CanvasRegistry;
pub use surface::SurfaceHandle;
pub use types::{ItemId, ItemKind, PlacedItem, Position};
