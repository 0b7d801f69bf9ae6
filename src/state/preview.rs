//! Preview Registry - Single active hover-preview slot
//!
//! At most one preview plays at a time across the application. The registry
//! owns that slot explicitly — no module-level singleton — and announces
//! changes on its [`EventBus`], so other previews can pause themselves when a
//! new one starts.
//!
//! # Example
//!
//! ```ignore
//! use glitch_tui::{EventBus, PreviewRegistry};
//!
//! let bus = EventBus::new();
//! let previews = PreviewRegistry::new(bus.clone());
//!
//! previews.set_active("reel-1");
//! assert!(previews.is_active("reel-1"));
//!
//! previews.set_active("reel-2"); // reel-1 listeners see themselves displaced
//! previews.clear("reel-2");
//! assert_eq!(previews.active(), None);
//! ```

use std::sync::{Arc, Mutex};

use super::events::{EventBus, UiEvent};

struct RegistryInner {
    active: Mutex<Option<String>>,
}

/// Process-lifetime registry of the currently active preview.
#[derive(Clone)]
pub struct PreviewRegistry {
    inner: Arc<RegistryInner>,
    bus: EventBus,
}

impl PreviewRegistry {
    pub fn new(bus: EventBus) -> Self {
        Self {
            inner: Arc::new(RegistryInner {
                active: Mutex::new(None),
            }),
            bus,
        }
    }

    /// Make `id` the active preview, displacing any previous one.
    ///
    /// Emits [`UiEvent::PreviewStarted`]; listeners for a displaced preview
    /// are expected to pause themselves when they see a different id start.
    pub fn set_active(&self, id: &str) {
        let mut slot = self
            .inner
            .active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if slot.as_deref() == Some(id) {
            return;
        }
        *slot = Some(id.to_string());
        drop(slot);

        self.bus.emit(UiEvent::PreviewStarted { id: id.to_string() });
    }

    /// Clear the slot if `id` is the active preview.
    ///
    /// Returns whether anything was cleared. A stale clear (some other
    /// preview became active in the meantime) is a no-op.
    pub fn clear(&self, id: &str) -> bool {
        let mut slot = self
            .inner
            .active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if slot.as_deref() != Some(id) {
            return false;
        }
        *slot = None;
        drop(slot);

        self.bus.emit(UiEvent::PreviewCleared { id: id.to_string() });
        true
    }

    /// Whether `id` is the active preview.
    pub fn is_active(&self, id: &str) -> bool {
        self.inner
            .active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .as_deref()
            == Some(id)
    }

    /// The active preview id, if any.
    pub fn active(&self) -> Option<String> {
        self.inner
            .active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

// =============================================================================
// TESTS
// =============================================================================
