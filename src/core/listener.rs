//! Document-level interaction listener registry.
//!
//! A host owns one [`InteractionHub`]. Each widget registers exactly one
//! listener for its lifetime and gets a [`Subscription`] back; dropping or
//! disposing the subscription deregisters it. Outside-interaction handling
//! is gated on the subscription still being live.

use std::cell::RefCell;
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

use crate::tlog_debug;

#[derive(Debug, Default)]
struct HubState {
    next_id: u64,
    listeners: BTreeSet<u64>,
}

#[derive(Debug, Clone, Default)]
pub struct InteractionHub {
    inner: Rc<RefCell<HubState>>,
}

impl InteractionHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        let mut state = self.inner.borrow_mut();
        state.next_id += 1;
        let id = state.next_id;
        state.listeners.insert(id);
        tlog_debug!("Interaction listener {} registered", id);
        Subscription {
            id,
            hub: Rc::downgrade(&self.inner),
        }
    }

    /// Number of live listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

/// Disposal handle for one registered listener.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    hub: Weak<RefCell<HubState>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// True while the hub exists and still holds this listener.
    pub fn is_active(&self) -> bool {
        self.hub
            .upgrade()
            .map(|hub| hub.borrow().listeners.contains(&self.id))
            .unwrap_or(false)
    }

    pub fn dispose(self) {
        // Drop does the work.
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(hub) = self.hub.upgrade() {
            if hub.borrow_mut().listeners.remove(&self.id) {
                tlog_debug!("Interaction listener {} removed", self.id);
            }
        }
    }
}
