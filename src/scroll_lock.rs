//! Page scroll lock shared by the mobile drawer and the modals.
//!
//! Every open surface holds a [`ScrollLockGuard`]. The body only becomes
//! scrollable again once the last guard is dropped, so closing one surface
//! never releases a lock another still needs.

use std::cell::Cell;
use std::rc::Rc;

use log::{debug, warn};

type Apply = Rc<dyn Fn(bool)>;

#[derive(Clone)]
pub struct ScrollLock {
    holders: Rc<Cell<usize>>,
    apply: Apply,
}

impl PartialEq for ScrollLock {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.holders, &other.holders)
    }
}

impl ScrollLock {
    /// `apply(true)` is called when the first holder arrives and
    /// `apply(false)` when the last one leaves.
    pub fn new(apply: impl Fn(bool) + 'static) -> Self {
        Self {
            holders: Rc::new(Cell::new(0)),
            apply: Rc::new(apply),
        }
    }

    /// Lock backed by `document.body.style.overflow`.
    pub fn for_body() -> Self {
        Self::new(set_body_overflow_hidden)
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let count = self.holders.get() + 1;
        self.holders.set(count);
        if count == 1 {
            debug!("scroll lock engaged");
            (self.apply)(true);
        }
        ScrollLockGuard { lock: self.clone() }
    }

    #[cfg(test)]
    pub fn is_locked(&self) -> bool {
        self.holders.get() > 0
    }

    fn release(&self) {
        let count = self.holders.get().saturating_sub(1);
        self.holders.set(count);
        if count == 0 {
            debug!("scroll lock released");
            (self.apply)(false);
        }
    }
}

pub struct ScrollLockGuard {
    lock: ScrollLock,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        self.lock.release();
    }
}

/// Keeps `slot` holding a guard exactly while `open` is true.
pub fn hold_while(open: bool, lock: &ScrollLock, slot: &mut Option<ScrollLockGuard>) {
    if open {
        slot.get_or_insert_with(|| lock.acquire());
    } else {
        slot.take();
    }
}

fn set_body_overflow_hidden(hidden: bool) {
    let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    else {
        warn!("no document body to lock");
        return;
    };
    let value = if hidden { "hidden" } else { "" };
    if body.style().set_property("overflow", value).is_err() {
        warn!("failed to set body overflow");
    }
}
