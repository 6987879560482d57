//! Engine-wide constants.
//!
//! Centralizes footprint defaults and tolerances so sizing policy lives
//! in one place instead of being scattered through the drag code.

// ============================================================================
// Item Footprints
// ============================================================================

/// Edge length of a sticker at scale 1.0, in device pixels
pub const STICKER_BASE_EDGE: f64 = 64.0;

/// Default sticker scale
pub const DEFAULT_STICKER_SCALE: f64 = 1.0;

/// Footprint of a sticky-note widget (width, height) in device pixels
pub const NOTE_FOOTPRINT: (f64, f64) = (180.0, 180.0);

/// Footprint of a weather widget (width, height) in device pixels
pub const WEATHER_FOOTPRINT: (f64, f64) = (220.0, 120.0);

/// Footprint for widget variants without a dedicated entry
pub const DEFAULT_WIDGET_FOOTPRINT: (f64, f64) = (160.0, 160.0);

// ============================================================================
// Placement Space
// ============================================================================

/// Tolerance below which two placement positions are considered equal.
///
/// Used to suppress redundant live-position updates during a drag; a move
/// that lands on the same normalized position produces no repaint signal.
pub const POSITION_EPSILON: f64 = 1e-9;

// ============================================================================
// Instrumentation
// ============================================================================

/// Scoped-timer threshold above which a scope is logged at debug level
pub const SLOW_SCOPE_MS: f64 = 4.0;
