//! Process-wide frame callback registry.
//!
//! Components register a per-frame callback and get back a [`Registration`].
//! Dropping the registration unregisters the callback, so a component that
//! goes away cannot leave per-frame work behind. The frontend drives
//! [`FrameScheduler::advance`] from `requestAnimationFrame`; tests drive it by
//! hand.

use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::{Rc, Weak};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    /// Seconds since the scheduler was created.
    pub now_sec: f64,
    /// Seconds since the previous frame.
    pub dt_sec: f64,
}

pub type FrameCallback = Box<dyn FnMut(FrameTime)>;

enum Slot {
    Idle(FrameCallback),
    // Taken out while it runs so callbacks may use the scheduler re-entrantly.
    Running,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    now_sec: f64,
    order: Vec<u64>,
    slots: FnvHashMap<u64, Slot>,
}

#[derive(Clone, Default)]
pub struct FrameScheduler {
    inner: Rc<RefCell<Registry>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_frame(&self, callback: impl FnMut(FrameTime) + 'static) -> Registration {
        let mut reg = self.inner.borrow_mut();
        let id = reg.next_id;
        reg.next_id += 1;
        reg.order.push(id);
        reg.slots.insert(id, Slot::Idle(Box::new(callback)));
        Registration {
            id,
            registry: Rc::downgrade(&self.inner),
        }
    }

    /// Run one frame: every callback registered before this call, in
    /// registration order. Callbacks added during the frame first run on the
    /// next one; callbacks cancelled during the frame are skipped.
    pub fn advance(&self, dt_sec: f64) {
        let dt_sec = dt_sec.max(0.0);
        let (ids, time) = {
            let mut reg = self.inner.borrow_mut();
            reg.now_sec += dt_sec;
            (
                reg.order.clone(),
                FrameTime {
                    now_sec: reg.now_sec,
                    dt_sec,
                },
            )
        };
        for id in ids {
            let callback = {
                let mut reg = self.inner.borrow_mut();
                match reg.slots.get_mut(&id) {
                    Some(slot) if matches!(slot, Slot::Idle(_)) => {
                        match std::mem::replace(slot, Slot::Running) {
                            Slot::Idle(cb) => Some(cb),
                            Slot::Running => None,
                        }
                    }
                    _ => None,
                }
            };
            let Some(mut callback) = callback else {
                continue;
            };
            callback(time);
            let leftover = {
                let mut reg = self.inner.borrow_mut();
                match reg.slots.get_mut(&id) {
                    Some(slot) => {
                        *slot = Slot::Idle(callback);
                        None
                    }
                    // Unregistered while running.
                    None => Some(callback),
                }
            };
            // Dropped outside the borrow: captured registrations unregister on drop.
            drop(leftover);
        }
    }

    pub fn active_count(&self) -> usize {
        self.inner.borrow().order.len()
    }

    pub fn now_sec(&self) -> f64 {
        self.inner.borrow().now_sec
    }
}

/// Owned handle of a frame callback. Unregisters on drop.
#[must_use = "dropping a Registration immediately unregisters its callback"]
pub struct Registration {
    id: u64,
    registry: Weak<RefCell<Registry>>,
}

impl Registration {
    pub fn is_active(&self) -> bool {
        self.registry
            .upgrade()
            .map(|r| r.borrow().slots.contains_key(&self.id))
            .unwrap_or(false)
    }

    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for Registration {
    fn drop(&mut self) {
        let Some(registry) = self.registry.upgrade() else {
            return;
        };
        let removed = {
            let mut reg = registry.borrow_mut();
            reg.order.retain(|id| *id != self.id);
            reg.slots.remove(&self.id)
        };
        drop(removed);
    }
}

impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("id", &self.id)
            .field("active", &self.is_active())
            .finish()
    }
}
