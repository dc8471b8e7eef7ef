//! Narrow bridge to the host UI framework's reactive variable store.
//!
//! DESIGN
//! ======
//! Controllers only ever push named booleans (`publish(name, value)`). The
//! store behind it can be a plain map, a Leptos signal that templates read
//! from, or the page's `ftd.set_bool_for_all` (see `util::browser`).

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use leptos::prelude::{RwSignal, Update};

#[cfg(test)]
#[path = "bridge_test.rs"]
mod bridge_test;

/// Broadcast a named boolean to everything rendering off the host store.
pub trait HostBridge {
    fn publish(&mut self, name: &str, value: bool);
}

/// Snapshot of every boolean published so far.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HostVariables {
    values: BTreeMap<String, bool>,
    publishes: usize,
}

impl HostVariables {
    pub fn get(&self, name: &str) -> Option<bool> {
        self.values.get(name).copied()
    }

    /// Total number of `publish` calls received, including repeats.
    pub fn publishes(&self) -> usize {
        self.publishes
    }

    fn record(&mut self, name: &str, value: bool) {
        self.values.insert(name.to_owned(), value);
        self.publishes += 1;
    }
}

impl HostBridge for HostVariables {
    fn publish(&mut self, name: &str, value: bool) {
        self.record(name, value);
    }
}

impl HostBridge for RwSignal<HostVariables> {
    fn publish(&mut self, name: &str, value: bool) {
        self.update(|vars| vars.record(name, value));
    }
}

/// Publishes queued for delivery after the controller borrow is released.
///
/// Clones share one queue. Callbacks into the host store may re-enter the
/// runtime, so they must not run while a controller is mutably borrowed.
#[derive(Clone, Debug, Default)]
pub struct PendingPublishes {
    queue: Rc<RefCell<Vec<(String, bool)>>>,
}

impl PendingPublishes {
    /// Take everything queued so far, oldest first.
    pub fn drain(&self) -> Vec<(String, bool)> {
        std::mem::take(&mut *self.queue.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.queue.borrow().is_empty()
    }
}

impl HostBridge for PendingPublishes {
    fn publish(&mut self, name: &str, value: bool) {
        self.queue.borrow_mut().push((name.to_owned(), value));
    }
}
