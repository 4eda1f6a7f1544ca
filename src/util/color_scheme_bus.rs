//! In-process "color scheme changed" broadcast.
//!
//! SYSTEM CONTEXT
//! ==============
//! Independently mounted components (code blocks, comment widgets, charts)
//! react to theme switches without sharing a parent. Rust listeners
//! subscribe here; in the browser every publish is also mirrored as a
//! window `colorSchemeChange` event for scripts outside the app.

#[cfg(test)]
#[path = "color_scheme_bus_test.rs"]
mod color_scheme_bus_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// DOM event name mirrored on every publish.
pub const COLOR_SCHEME_CHANGE_EVENT: &str = "colorSchemeChange";

type Listener = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct Inner {
    next_id: AtomicU64,
    listeners: Mutex<Vec<(u64, Listener)>>,
}

/// Cloneable handle to a shared listener list.
#[derive(Clone, Default)]
pub struct ColorSchemeBus {
    inner: Arc<Inner>,
}

impl ColorSchemeBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `listener`; it stays active until the returned handle is dropped.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        Subscription { id, bus: Arc::downgrade(&self.inner) }
    }

    /// Notify every live listener once. Returns how many were called.
    pub fn publish(&self) -> usize {
        // Snapshot so listeners may (un)subscribe while being notified.
        let snapshot: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, l)| Arc::clone(l))
            .collect();
        for listener in &snapshot {
            listener();
        }
        dispatch_dom_event();
        snapshot.len()
    }

    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Handle returned by [`ColorSchemeBus::subscribe`]. Dropping it unsubscribes.
pub struct Subscription {
    id: u64,
    bus: std::sync::Weak<Inner>,
}

impl Subscription {
    pub fn unsubscribe(self) {
        drop(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(inner) = self.bus.upgrade() else {
            return;
        };
        let removed = {
            let mut listeners = inner.listeners.lock().unwrap_or_else(PoisonError::into_inner);
            listeners
                .iter()
                .position(|(id, _)| *id == self.id)
                .map(|pos| listeners.remove(pos))
        };
        // Released outside the lock: the listener may own other subscriptions.
        drop(removed);
    }
}

fn dispatch_dom_event() {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        match web_sys::Event::new(COLOR_SCHEME_CHANGE_EVENT) {
            Ok(event) => {
                let _ = window.dispatch_event(&event);
            }
            Err(e) => log::warn!("failed to create {COLOR_SCHEME_CHANGE_EVENT} event: {e:?}"),
        }
    }
}
