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

use std::sync::Once;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::Level;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Add a tracing subscriber for the given directives to see their trace messages.
///
/// # Arguments
///
/// * `directives`             - The trace targets that you want to see messages from.
///
/// Directives that cannot be parsed are ignored.
pub fn init_trace(directives: Vec<&str>) {
    INIT.call_once(|| {
        let filter = directives
            .into_iter()
            .filter_map(|directive| directive.parse().ok())
            .fold(EnvFilter::from_default_env(), EnvFilter::add_directive);

        let _ = tracing_subscriber::fmt()
            .with_max_level(Level::TRACE)
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Run `f` on a new thread once `delay` has elapsed.
pub fn run_after<F, T>(delay: Duration, f: F) -> JoinHandle<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    thread::spawn(move || {
        thread::sleep(delay);
        f()
    })
}
