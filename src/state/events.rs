//! UI Event Bus - Broadcast channel with a fixed vocabulary
//!
//! Decouples UI scripts that would otherwise reach into each other: a menu
//! announces that it opened, the preview registry announces which preview
//! became active, and anyone interested subscribes. Semantics are broadcast —
//! every listener sees every event, with no ordering guarantee among
//! listeners and no consumption.
//!
//! The bus is an explicit object: construct one per application and pass it
//! to the components that need it. There is no implicit global channel.
//!
//! # Example
//!
//! ```ignore
//! use glitch_tui::{EventBus, UiEvent};
//!
//! let bus = EventBus::new();
//! let unsubscribe = bus.subscribe(|event| {
//!     if let UiEvent::MenuOpened = event {
//!         // pause whatever should not run under the menu
//!     }
//! });
//!
//! bus.emit(UiEvent::MenuOpened);
//! unsubscribe();
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::types::Cleanup;

/// The fixed event vocabulary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UiEvent {
    /// The navigation menu was opened.
    MenuOpened,
    /// The navigation menu was closed.
    MenuClosed,
    /// A hover preview became the active one.
    PreviewStarted { id: String },
    /// The active hover preview was cleared.
    PreviewCleared { id: String },
}

type Listener = Arc<dyn Fn(&UiEvent) + Send + Sync>;

struct BusInner {
    listeners: Mutex<Vec<(u64, Listener)>>,
    next_id: AtomicU64,
}

/// Broadcast event bus. Clones share the same listener set.
#[derive(Clone)]
pub struct EventBus {
    inner: Arc<BusInner>,
}

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(BusInner {
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Register a listener for every event. Returns its unsubscribe closure.
    pub fn subscribe(&self, listener: impl Fn(&UiEvent) + Send + Sync + 'static) -> Cleanup {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((id, Arc::new(listener)));

        let inner = self.inner.clone();
        Box::new(move || {
            inner
                .listeners
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner())
                .retain(|(listener_id, _)| *listener_id != id);
        })
    }

    /// Broadcast `event` to all current listeners.
    ///
    /// Listeners run on the emitting thread, outside the registry lock, so a
    /// listener may itself subscribe or emit.
    pub fn emit(&self, event: UiEvent) {
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in snapshot {
            listener(&event);
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
