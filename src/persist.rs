//! Persistence of placed-item records.
//!
//! The host owns where state lives; the engine owns the shape: a JSON
//! array of `{id, typeId, position, kind, size?, data?}` records that
//! round-trips through export/import of application state.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::registry::CanvasRegistry;
use crate::types::PlacedItem;

/// Errors that can occur while persisting canvas state
#[derive(Error, Debug)]
pub enum PersistError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error from serde_json
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for persistence operations
pub type PersistResult<T> = Result<T, PersistError>;

/// Serialize the registry to the exported JSON record array.
pub fn export_state(registry: &CanvasRegistry) -> PersistResult<String> {
    Ok(serde_json::to_string_pretty(registry.items())?)
}

/// Parse an exported record array back into items.
pub fn import_state(json: &str) -> PersistResult<Vec<PlacedItem>> {
    Ok(serde_json::from_str(json)?)
}

/// Write the registry to a file.
pub fn save_to_file(registry: &CanvasRegistry, path: &Path) -> PersistResult<()> {
    fs::write(path, export_state(registry)?)?;
    debug!(path = %path.display(), items = registry.len(), "canvas state saved");
    Ok(())
}

/// Load a registry from a file written by [`save_to_file`].
pub fn load_from_file(path: &Path) -> PersistResult<CanvasRegistry> {
    let json = fs::read_to_string(path)?;
    let items = import_state(&json)?;
    debug!(path = %path.display(), items = items.len(), "canvas state loaded");
    Ok(CanvasRegistry::from_items(items))
}
