// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-threaded observable values.
//!
//! A [`Signal`] owns a value and is the only way to change it. Any number of
//! read-only [`Observable`] handles can be handed to the host; they read the
//! current value and register change callbacks.
//!
//! ```rust
//! use core::cell::Cell;
//! use std::rc::Rc;
//! use understory_disclosure::Signal;
//!
//! let open = Signal::new(false);
//! let seen = Rc::new(Cell::new(0));
//!
//! let observer = open.observe();
//! let counter = seen.clone();
//! observer.subscribe(move |_| counter.set(counter.get() + 1));
//!
//! assert!(open.set(true));
//! assert!(!open.set(true)); // unchanged values do not notify
//! assert!(observer.get());
//! assert_eq!(seen.get(), 1);
//! ```

use alloc::boxed::Box;
use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

/// Handle returned by [`Observable::subscribe`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Callback<T> = Box<dyn FnMut(&T)>;

struct Shared<T> {
    value: T,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Callback<T>)>,
    notifying: bool,
    /// Unsubscribed while their callbacks were checked out for delivery.
    removed: Vec<SubscriptionId>,
}

/// Writable side of an observable value.
pub struct Signal<T> {
    shared: Rc<RefCell<Shared<T>>>,
}

/// Read-only, cloneable view of a [`Signal`].
pub struct Observable<T> {
    shared: Rc<RefCell<Shared<T>>>,
}

impl<T: Clone + PartialEq> Signal<T> {
    /// Create a signal holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            shared: Rc::new(RefCell::new(Shared {
                value,
                next_id: 0,
                subscribers: Vec::new(),
                notifying: false,
                removed: Vec::new(),
            })),
        }
    }

    /// Current value.
    pub fn get(&self) -> T {
        self.shared.borrow().value.clone()
    }

    /// Replace the value, notifying subscribers when it changed.
    ///
    /// Returns whether the value changed. Callbacks may read the value and may
    /// subscribe or unsubscribe, but must not set it.
    pub fn set(&self, value: T) -> bool {
        let mut callbacks = {
            let mut shared = self.shared.borrow_mut();
            if shared.value == value {
                return false;
            }
            shared.value = value.clone();
            shared.notifying = true;
            core::mem::take(&mut shared.subscribers)
        };
        for (_, callback) in &mut callbacks {
            callback(&value);
        }
        let mut shared = self.shared.borrow_mut();
        shared.notifying = false;
        let removed = core::mem::take(&mut shared.removed);
        callbacks.retain(|(id, _)| !removed.contains(id));
        // Keep subscriptions added during notification after the existing ones.
        callbacks.append(&mut shared.subscribers);
        shared.subscribers = callbacks;
        true
    }

    /// A read-only handle for the host.
    pub fn observe(&self) -> Observable<T> {
        Observable {
            shared: self.shared.clone(),
        }
    }
}

impl<T: Clone> Observable<T> {
    /// Current value.
    pub fn get(&self) -> T {
        self.shared.borrow().value.clone()
    }

    /// Call `f` with the current value without cloning it.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.shared.borrow().value)
    }

    /// Call `callback` after every change.
    pub fn subscribe(&self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        let mut shared = self.shared.borrow_mut();
        let id = SubscriptionId(shared.next_id);
        shared.next_id += 1;
        shared.subscribers.push((id, Box::new(callback)));
        id
    }

    /// Remove a callback. Returns whether it was registered.
    ///
    /// A callback removed while a change is being delivered is still called for
    /// that change.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut shared = self.shared.borrow_mut();
        let before = shared.subscribers.len();
        shared.subscribers.retain(|(sid, _)| *sid != id);
        if shared.subscribers.len() != before {
            return true;
        }
        if shared.notifying && id.0 < shared.next_id && !shared.removed.contains(&id) {
            shared.removed.push(id);
            return true;
        }
        false
    }
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("Signal")
            .field("value", &shared.value)
            .field("subscribers", &shared.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let shared = self.shared.borrow();
        f.debug_struct("Observable")
            .field("value", &shared.value)
            .field("subscribers", &shared.subscribers.len())
            .finish_non_exhaustive()
    }
}
