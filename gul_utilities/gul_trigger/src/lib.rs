// Copyright 2015-2023 Swim Inc.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! # Blocking Boolean Trigger
//!
//! This crate provides [`Trigger`], a boolean flag that can be shared between threads. One thread
//! sets or clears the flag and any number of other threads can block until it becomes `true`,
//! optionally bounded by a timeout or a deadline.
//!
//! The flag is level-triggered: once set it stays `true` until it is explicitly reset, and waking
//! up does not consume it.
//!
//! ```
//! use std::sync::Arc;
//! use std::thread;
//! use gul_trigger::Trigger;
//!
//! let trigger = Arc::new(Trigger::default());
//! let waiter = {
//!     let trigger = trigger.clone();
//!     thread::spawn(move || trigger.wait())
//! };
//! trigger.fire();
//! waiter.join().unwrap();
//! assert!(trigger.get());
//! ```


use std::fmt::{Debug, Formatter};
use std::time::{Duration, Instant, SystemTime};

use parking_lot::{Condvar, Mutex};
use static_assertions::{assert_impl_all, assert_not_impl_any};
use tracing::trace;

/// A boolean flag, guarded by a mutex, that threads can block on until it becomes `true`.
///
/// A trigger is not [`Clone`]. To share one between threads, wrap it in an
/// [`Arc`](std::sync::Arc) or borrow it into a scoped thread.
#[derive(Default)]
pub struct Trigger {
    state: Mutex<bool>,
    cvar: Condvar,
}

assert_impl_all!(Trigger: Send, Sync);
assert_not_impl_any!(Trigger: Clone, Copy);

impl Trigger {
    /// Create a trigger with the given initial state.
    pub fn new(initial: bool) -> Self {
        Trigger {
            state: Mutex::new(initial),
            cvar: Condvar::new(),
        }
    }

    /// The current state of the trigger.
    pub fn get(&self) -> bool {
        *self.state.lock()
    }

    /// Set the state of the trigger and wake every thread that is waiting on it.
    ///
    /// Waiters are notified whether or not the state changed. Those that observe `false` will
    /// go back to waiting.
    pub fn set(&self, value: bool) {
        {
            let mut guard = self.state.lock();
            *guard = value;
        }
        trace!(value, "Trigger state set.");
        self.cvar.notify_all();
    }

    /// Set the trigger to `true`.
    pub fn fire(&self) {
        self.set(true);
    }

    /// Set the trigger to `false`.
    pub fn reset(&self) {
        self.set(false);
    }

    /// Block the current thread until the trigger is `true`.
    ///
    /// The state is not reset when this returns.
    pub fn wait(&self) {
        let mut guard = self.state.lock();
        self.cvar.wait_while(&mut guard, |state| !*state);
    }

    /// Block the current thread until the trigger is `true` or until `timeout` has elapsed,
    /// measured on the monotonic clock. Returns whether the trigger was observed to be `true`.
    ///
    /// A zero timeout checks the state without blocking.
    pub fn wait_for(&self, timeout: Duration) -> bool {
        match Instant::now().checked_add(timeout) {
            Some(deadline) => self.wait_deadline(deadline),
            None => {
                self.wait();
                true
            }
        }
    }

    /// Block the current thread until the trigger is `true` or until the monotonic clock reaches
    /// `deadline`. Returns whether the trigger was observed to be `true`.
    pub fn wait_deadline(&self, deadline: Instant) -> bool {
        let mut guard = self.state.lock();
        while !*guard {
            let now = Instant::now();
            if now >= deadline {
                trace!("Timed out waiting for trigger.");
                return false;
            }
            self.cvar.wait_for(&mut guard, deadline - now);
        }
        true
    }

    /// Block the current thread until the trigger is `true` or until the system clock reaches
    /// `deadline`. Returns whether the trigger was observed to be `true`.
    ///
    /// The system clock is read again after every wake-up so adjustments to it move the point
    /// at which this gives up.
    pub fn wait_until(&self, deadline: SystemTime) -> bool {
        let mut guard = self.state.lock();
        while !*guard {
            match deadline.duration_since(SystemTime::now()) {
                Ok(remaining) if !remaining.is_zero() => {
                    self.cvar.wait_for(&mut guard, remaining);
                }
                _ => {
                    trace!("Deadline passed waiting for trigger.");
                    return false;
                }
            }
        }
        true
    }
}

impl Debug for Trigger {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Trigger")
            .field("state", &self.get())
            .finish()
    }
}

impl From<bool> for Trigger {
    fn from(initial: bool) -> Self {
        Trigger::new(initial)
    }
}

impl From<&Trigger> for bool {
    fn from(trigger: &Trigger) -> Self {
        trigger.get()
    }
}

impl PartialEq for Trigger {
    fn eq(&self, other: &Self) -> bool {
        // The locks are taken one at a time so comparing a trigger with itself cannot deadlock.
        let this = self.get();
        this == other.get()
    }
}

impl Eq for Trigger {}

impl PartialEq<bool> for Trigger {
    fn eq(&self, other: &bool) -> bool {
        self.get() == *other
    }
}

impl PartialEq<Trigger> for bool {
    fn eq(&self, other: &Trigger) -> bool {
        *self == other.get()
    }
}
