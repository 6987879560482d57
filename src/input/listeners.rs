//! Scoped acquisition of the global pointer listeners.
//!
//! The document-level pointer-move/up subscription is the only shared
//! mutable resource in the engine. It is acquired exactly at the
//! Idle -> Dragging transition and released on every exit path, including
//! session drop mid-drag, by binding the registration's lifetime to an
//! RAII guard held inside the Dragging state.

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::types::ItemId;

#[derive(Default)]
struct ListenerStats {
    registrations: u64,
    releases: u64,
    active: Vec<ItemId>,
}

/// Shared registry tracking which sessions currently hold the global
/// pointer listeners.
///
/// Acquisition always succeeds: exclusivity comes from the pointer
/// adapter collapsing every gesture to one logical pointer, not from a
/// lock. Two genuinely simultaneous multi-touch drags on different items
/// may both register; which wins conflicting layout reads is undefined.
#[derive(Clone, Default)]
pub struct ListenerRegistry {
    inner: Arc<Mutex<ListenerStats>>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the global pointer listeners for one drag gesture.
    pub fn acquire(&self, item: ItemId) -> ListenerGuard {
        let mut stats = self.inner.lock();
        stats.registrations += 1;
        stats.active.push(item);
        debug!(item = %item, "global pointer listeners registered");
        ListenerGuard {
            inner: self.inner.clone(),
            item,
        }
    }

    /// Total registrations across all gestures.
    pub fn registrations(&self) -> u64 {
        self.inner.lock().registrations
    }

    /// Total releases across all gestures.
    pub fn releases(&self) -> u64 {
        self.inner.lock().releases
    }

    /// Number of sessions currently holding listeners.
    pub fn active(&self) -> usize {
        self.inner.lock().active.len()
    }
}

/// RAII handle for one gesture's listener registration.
pub struct ListenerGuard {
    inner: Arc<Mutex<ListenerStats>>,
    item: ItemId,
}

impl Drop for ListenerGuard {
    fn drop(&mut self) {
        let mut stats = self.inner.lock();
        stats.releases += 1;
        if let Some(idx) = stats.active.iter().position(|id| *id == self.item) {
            stats.active.swap_remove(idx);
        }
        debug!(item = %self.item, "global pointer listeners released");
    }
}

impl fmt::Debug for ListenerGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListenerGuard").field("item", &self.item).finish()
    }
}
