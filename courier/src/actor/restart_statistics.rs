/*
 * Copyright (c) 2024. Govcraft
 *
 * Licensed under either of
 *   * Apache License, Version 2.0 (the "License");
 *     you may not use this file except in compliance with the License.
 *     You may obtain a copy of the License at http://www.apache.org/licenses/LICENSE-2.0
 *   * MIT license: http://opensource.org/licenses/MIT
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the applicable License for the specific language governing permissions and
 * limitations under that License.
 */

//! Per-child failure history used by supervisor strategies.

use std::time::{Duration, Instant};

/// Failure timestamps of one supervised child.
#[derive(Debug, Clone, Default)]
pub struct RestartStatistics {
    failures: Vec<Instant>,
}

impl RestartStatistics {
    /// Records a failure happening now.
    pub fn fail(&mut self) {
        self.failures.push(Instant::now());
    }

    /// Total failures recorded.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Failures recorded within the last `window`.
    ///
    /// Entries older than the window are pruned as a side effect.
    pub fn failures_within(&mut self, window: Duration) -> usize {
        let now = Instant::now();
        self.failures
            .retain(|at| now.saturating_duration_since(*at) <= window);
        self.failures.len()
    }

    pub fn reset(&mut self) {
        self.failures.clear();
    }
}
