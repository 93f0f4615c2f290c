//! Open/closed state of the selection list overlay.
//!
//! The overlay content is always built; only this flag changes, so list
//! highlights survive closing and reopening.

use std::sync::atomic::{AtomicU64, Ordering};

use super::field::Field;
use super::listener::Subscription;
use crate::tlog_debug;

static NODE_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Identity of a presentation node, used for boundary membership tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u64);

impl NodeId {
    pub fn next() -> Self {
        NodeId(NODE_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// The widget's boundary: any target whose ancestry includes `root`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Boundary {
    root: NodeId,
}

impl Boundary {
    pub fn new(root: NodeId) -> Self {
        Self { root }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// `ancestry` lists the interaction target and its ancestors.
    pub fn contains(&self, ancestry: &[NodeId]) -> bool {
        ancestry.contains(&self.root)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Open,
}

#[derive(Debug)]
pub struct Overlay {
    state: OverlayState,
    /// `showDropdown`; when false the overlay never opens.
    enabled: bool,
    boundary: Boundary,
    subscription: Option<Subscription>,
}

impl Overlay {
    pub fn new(enabled: bool, boundary: Boundary, subscription: Subscription) -> Self {
        Self {
            state: OverlayState::Closed,
            enabled,
            boundary,
            subscription: Some(subscription),
        }
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OverlayState::Open
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn is_listening(&self) -> bool {
        self.subscription
            .as_ref()
            .map(Subscription::is_active)
            .unwrap_or(false)
    }

    /// Returns true when the state changed.
    pub fn open(&mut self) -> bool {
        if !self.enabled || self.is_open() {
            return false;
        }
        tlog_debug!("Overlay opened");
        self.state = OverlayState::Open;
        true
    }

    /// Returns true when the state changed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        tlog_debug!("Overlay closed");
        self.state = OverlayState::Closed;
        true
    }

    pub fn on_focus_in(&mut self) -> bool {
        self.open()
    }

    /// Pointer interaction anywhere in the host. Inside the boundary opens,
    /// outside closes. Outside interactions are only seen while the
    /// document-level listener is registered.
    pub fn on_interaction(&mut self, ancestry: &[NodeId]) -> bool {
        if self.boundary.contains(ancestry) {
            self.open()
        } else if self.is_listening() {
            self.close()
        } else {
            false
        }
    }

    /// Enter closes the overlay only while the meridiem field has focus.
    pub fn on_enter(&mut self, focus: Option<Field>) -> bool {
        if focus == Some(Field::Meridiem) {
            self.close()
        } else {
            false
        }
    }

    /// Deregister the document-level listener. Idempotent.
    pub fn teardown(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.dispose();
        }
        self.state = OverlayState::Closed;
    }
}
