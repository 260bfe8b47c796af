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

//! Supervisor strategies applied by guardians to failed children.
//!
//! A strategy is a plain value. Equal values share one guardian per actor system,
//! which is why the type is `Hash + Eq`.
//!
//! ```rust,ignore
//! use courier::prelude::*;
//!
//! let props = Props::from_producer(Worker::default)
//!     .with_guardian(SupervisorStrategy::one_for_one(3, Duration::from_secs(10)));
//! ```

use std::time::Duration;

use crate::actor::RestartStatistics;

/// How a guardian responds to a failing child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SupervisorStrategy {
    /// Restart the failed child unless it failed more than `max_retries` times
    /// within `within`; stop it otherwise. A zero `within` counts every failure
    /// ever recorded.
    OneForOne {
        /// Restarts tolerated inside the window.
        max_retries: u32,
        /// Sliding window for counting failures.
        within: Duration,
    },
    /// Always restart.
    AlwaysRestart,
    /// Never restart; a failed child is stopped.
    StopOnFailure,
}

impl Default for SupervisorStrategy {
    fn default() -> Self {
        Self::one_for_one(10, Duration::from_secs(10))
    }
}

/// What a guardian tells a failed child to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupervisorDirective {
    /// Replace the actor instance and continue.
    Restart,
    /// Halt the child.
    Stop,
}

impl SupervisorStrategy {
    #[must_use]
    pub const fn one_for_one(max_retries: u32, within: Duration) -> Self {
        Self::OneForOne {
            max_retries,
            within,
        }
    }

    /// Records the failure in `stats` and decides the child's fate.
    pub fn decide(&self, stats: &mut RestartStatistics) -> SupervisorDirective {
        match self {
            Self::AlwaysRestart => SupervisorDirective::Restart,
            Self::StopOnFailure => SupervisorDirective::Stop,
            Self::OneForOne {
                max_retries,
                within,
            } => {
                stats.fail();
                let failures = if within.is_zero() {
                    stats.failure_count()
                } else {
                    stats.failures_within(*within)
                };
                if failures > *max_retries as usize {
                    SupervisorDirective::Stop
                } else {
                    SupervisorDirective::Restart
                }
            }
        }
    }
}
