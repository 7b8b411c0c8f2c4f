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

use crate::{sleep, sleep_interruptible, tic, toc};
use gul_test_util::run_after;
use gul_trigger::Trigger;
use std::sync::Arc;
use std::time::Duration;

const DELAY: Duration = Duration::from_millis(50);

#[test]
fn toc_is_monotonic() {
    let t0 = tic();
    let first = toc(t0);
    let second = toc(t0);
    assert!(second >= first);
}

#[test]
fn sleep_waits_at_least_duration() {
    let t0 = tic();
    sleep(DELAY);
    assert!(toc(t0) >= DELAY);
}

#[test]
fn uninterrupted_sleep_completes() {
    let interrupt = Trigger::default();
    let t0 = tic();
    assert!(sleep_interruptible(DELAY, &interrupt));
    assert!(toc(t0) >= DELAY);
}

#[test]
fn sleep_interrupted_by_trigger() {
    let interrupt = Arc::new(Trigger::default());
    let handle = {
        let interrupt = interrupt.clone();
        run_after(DELAY, move || interrupt.fire())
    };

    let t0 = tic();
    assert!(!sleep_interruptible(Duration::from_secs(5), &interrupt));
    let elapsed = toc(t0);
    assert!(elapsed >= DELAY);
    assert!(elapsed < Duration::from_secs(5));
    assert!(handle.join().is_ok());
}

#[test]
fn sleep_with_fired_trigger_returns_immediately() {
    let interrupt = Trigger::new(true);
    let t0 = tic();
    assert!(!sleep_interruptible(Duration::from_secs(5), &interrupt));
    assert!(toc(t0) < Duration::from_secs(5));
}
