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

//! Shared supervisors, one per distinct [`SupervisorStrategy`].

use std::sync::Arc;

use dashmap::DashMap;
use tracing::{debug, instrument, trace, warn};

use crate::actor::{Pid, RestartStatistics, SupervisorDirective, SupervisorStrategy};
use crate::common::ProcessRegistry;
use crate::message::{MessageHandle, SystemSignal};
use crate::traits::Process;

/// Lazily created guardians keyed by strategy.
///
/// Entries are created at most once per distinct strategy and live as long as
/// the owning actor system.
#[derive(Debug)]
pub struct Guardians {
    prefix: String,
    guardians: DashMap<SupervisorStrategy, Pid>,
}

impl Guardians {
    pub(crate) fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            guardians: DashMap::new(),
        }
    }

    /// Returns the guardian for `strategy`, creating and registering it on first use.
    ///
    /// Concurrent callers with equal strategies all receive the same [`Pid`].
    #[instrument(skip(self, registry))]
    pub fn get_or_create(&self, registry: &ProcessRegistry, strategy: SupervisorStrategy) -> Pid {
        self.guardians
            .entry(strategy)
            .or_insert_with(|| {
                let pid = registry.add_with_prefix(
                    &self.prefix,
                    Arc::new(GuardianProcess::new(strategy)),
                );
                debug!(guardian = %pid, "Created guardian");
                pid
            })
            .value()
            .clone()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.guardians.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.guardians.is_empty()
    }
}

/// Supervisor process applying one strategy to all of its children.
#[derive(Debug)]
pub(crate) struct GuardianProcess {
    strategy: SupervisorStrategy,
    stats: DashMap<Pid, RestartStatistics>,
}

impl GuardianProcess {
    fn new(strategy: SupervisorStrategy) -> Self {
        Self {
            strategy,
            stats: DashMap::new(),
        }
    }
}

impl Process for GuardianProcess {
    fn send_user_message(&self, pid: &Pid, message: MessageHandle) {
        warn!(guardian = %pid, message = message.type_name(), "Guardians do not accept user messages");
    }

    fn send_system_message(&self, pid: &Pid, signal: SystemSignal) {
        match signal {
            SystemSignal::Failure { who, reason } => {
                let directive = {
                    let mut stats = self.stats.entry(who.clone()).or_default();
                    self.strategy.decide(stats.value_mut())
                };
                debug!(guardian = %pid, child = %who, reason = %reason, ?directive, "Child failed");
                match directive {
                    SupervisorDirective::Restart => who.send_system_message(SystemSignal::Restart),
                    SupervisorDirective::Stop => who.send_system_message(SystemSignal::Stop),
                }
            }
            SystemSignal::Terminated { who } => {
                trace!(guardian = %pid, child = %who, "Child terminated");
                self.stats.remove(&who);
            }
            other => trace!(guardian = %pid, signal = ?other, "Ignoring signal"),
        }
    }
}
