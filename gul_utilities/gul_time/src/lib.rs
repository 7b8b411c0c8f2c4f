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

//! Helpers for measuring elapsed time and for sleeping. All measurements use the monotonic
//! clock.

#[cfg(test)]
mod tests;

use std::thread;
use std::time::{Duration, Instant};

use gul_trigger::Trigger;
use tracing::debug;

/// Start a stopwatch. Pass the result to [`toc`] to find out how much time has elapsed.
pub fn tic() -> Instant {
    Instant::now()
}

/// The time elapsed since `t0`, which was usually produced by [`tic`].
pub fn toc(t0: Instant) -> Duration {
    t0.elapsed()
}

/// Sleep the current thread for `duration`.
pub fn sleep(duration: Duration) {
    thread::sleep(duration)
}

/// Sleep the current thread for `duration` unless `interrupt` is, or becomes, `true`.
///
/// Returns `true` if the full duration elapsed and `false` if the sleep was interrupted.
pub fn sleep_interruptible(duration: Duration, interrupt: &Trigger) -> bool {
    let completed = !interrupt.wait_for(duration);
    if !completed {
        debug!(?duration, "Sleep interrupted.");
    }
    completed
}
