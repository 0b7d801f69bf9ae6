//! Text Element - Shared mutable text slot for animated content
//!
//! The animation engine treats its target as "something whose displayed text
//! can be read and overwritten". `TextElement` is that seam: a cheap cloneable
//! handle around shared text that timer workers write from background threads
//! and presenters read from wherever they render.
//!
//! # Pattern
//!
//! - Text lives behind a `Mutex`; a version counter bumps on every write so
//!   pollers can detect changes without comparing strings
//! - A thread-local `Signal<String>` mirror is synced on read, so reactive
//!   consumers on the render thread can track the text like any other signal
//! - `WeakTextElement` lets long-lived workers observe element liveness
//!   without keeping it alive
//!
//! # Example
//!
//! ```ignore
//! use glitch_tui::TextElement;
//!
//! let el = TextElement::new("FILM DIRECTOR");
//! el.set_text("WRITER");
//! assert_eq!(el.text(), "WRITER");
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Weak};

use spark_signals::{Signal, signal};

// =============================================================================
// ELEMENT
// =============================================================================

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(0);

struct ElementInner {
    id: u64,
    text: Mutex<String>,
    version: AtomicU64,
    active_transitions: AtomicUsize,
}

/// Handle to a shared text slot. Clones refer to the same slot.
#[derive(Clone)]
pub struct TextElement {
    inner: Arc<ElementInner>,
}

/// Non-owning handle to a [`TextElement`].
#[derive(Clone)]
pub struct WeakTextElement {
    inner: Weak<ElementInner>,
}

thread_local! {
    /// Per-thread signal mirrors, keyed by element id.
    static TEXT_SIGNALS: RefCell<HashMap<u64, Signal<String>>> = RefCell::new(HashMap::new());
}

impl TextElement {
    /// Create a new element displaying `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(ElementInner {
                id: NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed),
                text: Mutex::new(initial.into()),
                version: AtomicU64::new(0),
                active_transitions: AtomicUsize::new(0),
            }),
        }
    }

    /// Stable id of the underlying slot (shared by clones).
    pub fn id(&self) -> u64 {
        self.inner.id
    }

    /// Read the currently displayed text.
    ///
    /// Also syncs this thread's signal mirror, so a signal obtained from
    /// [`text_signal`] observes the value after any read on that thread.
    pub fn text(&self) -> String {
        let text = self
            .inner
            .text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        let id = self.inner.id;
        TEXT_SIGNALS.with(|signals| {
            if let Some(sig) = signals.borrow().get(&id) {
                if sig.get() != text {
                    sig.set(text.clone());
                }
            }
        });

        text
    }

    /// Overwrite the displayed text.
    pub fn set_text(&self, text: impl Into<String>) {
        let mut slot = self
            .inner
            .text
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = text.into();
        drop(slot);
        self.inner.version.fetch_add(1, Ordering::Release);
    }

    /// Number of writes since creation. Bumps on every `set_text`.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }

    /// Number of scramble transitions currently running on this element.
    pub fn active_transitions(&self) -> usize {
        self.inner.active_transitions.load(Ordering::SeqCst)
    }

    /// Downgrade to a non-owning handle.
    pub fn downgrade(&self) -> WeakTextElement {
        WeakTextElement {
            inner: Arc::downgrade(&self.inner),
        }
    }

    pub(crate) fn transition_started(&self) {
        self.inner.active_transitions.fetch_add(1, Ordering::SeqCst);
    }

    pub(crate) fn transition_finished(&self) {
        self.inner.active_transitions.fetch_sub(1, Ordering::SeqCst);
    }
}

impl WeakTextElement {
    /// Upgrade back to a strong handle, if the element is still alive.
    pub fn upgrade(&self) -> Option<TextElement> {
        self.inner.upgrade().map(|inner| TextElement { inner })
    }
}

impl std::fmt::Debug for TextElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextElement")
            .field("id", &self.inner.id)
            .field("text", &self.text())
            .finish()
    }
}

// =============================================================================
// SIGNAL MIRROR
// =============================================================================

/// Get this thread's reactive mirror of an element's text.
///
/// The signal is created on first use and synced whenever `element.text()` is
/// read on this thread. Workers writing from other threads do not push into
/// it directly; read the element (e.g. once per render frame) to refresh.
pub fn text_signal(element: &TextElement) -> Signal<String> {
    let id = element.id();
    let sig = TEXT_SIGNALS.with(|signals| {
        signals
            .borrow_mut()
            .entry(id)
            .or_insert_with(|| signal(String::new()))
            .clone()
    });
    // Prime it with the current value.
    let _ = element.text();
    sig
}

/// Drop all signal mirrors created on this thread (for testing).
pub fn reset_element_signals() {
    TEXT_SIGNALS.with(|signals| signals.borrow_mut().clear());
}

// =============================================================================
// TESTS
// =============================================================================
