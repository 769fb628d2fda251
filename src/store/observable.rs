// SPDX-License-Identifier: MPL-2.0
//! Single-threaded observable cell.
//!
//! An [`Observable`] owns a value and a list of subscribers. Writers go through
//! [`Observable::set`] or [`Observable::update`]; subscribers are notified after
//! the value changes, never when a write leaves it equal. Clones share the same
//! cell, so a reader can hold a handle and subscribe instead of polling.
//!
//! All mutation happens on the UI thread; the cell is deliberately `!Send`.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Callback<T> = Rc<dyn Fn(&T)>;

struct Inner<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    next_id: Cell<u64>,
    subscribers: RefCell<Vec<(u64, Callback<T>)>>,
}

/// Shared, observable value.
pub struct Observable<T> {
    inner: Rc<Inner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.inner.value.borrow())
            .field("version", &self.inner.version.get())
            .field("subscribers", &self.inner.subscribers.borrow().len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                value: RefCell::new(value),
                version: Cell::new(0),
                next_id: Cell::new(0),
                subscribers: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Returns a copy of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Runs `f` against the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Replaces the value. Returns `true` and notifies subscribers if it changed.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.inner.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value;
        }
        self.inner.version.set(self.inner.version.get() + 1);
        self.notify();
        true
    }

    /// Mutates the value in place. Subscribers are notified only if the
    /// result differs from the previous value.
    pub fn update(&self, f: impl FnOnce(&mut T)) -> bool {
        let mut next = self.get();
        f(&mut next);
        self.set(next)
    }

    /// Number of changes applied since creation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Registers `callback` to run after every change. The callback stays
    /// registered until the returned [`Subscription`] is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner
            .subscribers
            .borrow_mut()
            .push((id, Rc::new(callback)));

        let weak: Weak<Inner<T>> = Rc::downgrade(&self.inner);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(inner) = weak.upgrade() {
                    inner
                        .subscribers
                        .borrow_mut()
                        .retain(|(existing, _)| *existing != id);
                }
            })),
        }
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.subscribers.borrow().len()
    }

    fn notify(&self) {
        // Snapshot so callbacks may subscribe, unsubscribe or read the cell.
        let callbacks: Vec<Callback<T>> = self
            .inner
            .subscribers
            .borrow()
            .iter()
            .map(|(_, cb)| Rc::clone(cb))
            .collect();
        let value = self.get();
        for callback in callbacks {
            callback(&value);
        }
    }
}

/// RAII handle for an [`Observable`] subscription.
#[must_use = "dropping the subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Keeps the callback registered for the lifetime of the cell.
    pub fn detach(mut self) {
        self.unsubscribe = None;
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_notifies_only_on_change() {
        let cell = Observable::new(1);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let _sub = cell.subscribe(move |v| sink.borrow_mut().push(*v));

        assert!(cell.set(2));
        assert!(!cell.set(2));
        assert!(cell.set(3));

        assert_eq!(*seen.borrow(), vec![2, 3]);
        assert_eq!(cell.version(), 2);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let cell = Observable::new("a".to_string());
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let sub = cell.subscribe(move |_| counter.set(counter.get() + 1));

        cell.set("b".into());
        assert_eq!(cell.subscriber_count(), 1);
        drop(sub);
        assert_eq!(cell.subscriber_count(), 0);
        cell.set("c".into());

        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn detached_subscription_survives_handle_drop() {
        let cell = Observable::new(0u8);
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        cell.subscribe(move |_| counter.set(counter.get() + 1))
            .detach();

        cell.set(1);
        cell.set(2);
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn clones_share_state() {
        let a = Observable::new(Some(5));
        let b = a.clone();
        b.set(None);
        assert_eq!(a.get(), None);
        assert_eq!(a.version(), 1);
    }

    #[test]
    fn update_mutates_in_place() {
        let cell = Observable::new(vec![1, 2]);
        assert!(cell.update(|v| v.push(3)));
        assert!(!cell.update(|_| {}));
        cell.with(|v| assert_eq!(v.as_slice(), &[1, 2, 3]));
    }

    #[test]
    fn callback_can_read_the_cell() {
        let cell = Observable::new(10);
        let reader = cell.clone();
        let seen = Rc::new(Cell::new(0));
        let sink = Rc::clone(&seen);
        let _sub = cell.subscribe(move |_| sink.set(reader.get()));

        cell.set(11);
        assert_eq!(seen.get(), 11);
    }
}
