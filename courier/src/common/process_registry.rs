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

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::{instrument, trace};

use crate::actor::Pid;
use crate::message::SpawnError;
use crate::traits::Process;

/// Name generation and name-to-process lookup for one actor system.
#[derive(Debug, Default)]
pub struct ProcessRegistry {
    sequence: AtomicU64,
    processes: DashMap<String, Pid>,
}

impl ProcessRegistry {
    /// Returns a name never returned before by this registry, e.g. `$7`.
    pub fn next_id(&self) -> String {
        let n = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        format!("${n}")
    }

    /// Registers `process` under `name`.
    ///
    /// # Errors
    ///
    /// [`SpawnError::DuplicateName`] if a live process already holds `name`.
    #[instrument(skip(self, process))]
    pub fn add(&self, name: &str, process: Arc<dyn Process>) -> Result<Pid, SpawnError> {
        match self.processes.entry(name.to_string()) {
            Entry::Occupied(_) => Err(SpawnError::DuplicateName(name.to_string())),
            Entry::Vacant(slot) => {
                let pid = Pid::new(name, process);
                slot.insert(pid.clone());
                trace!(pid = %pid, "Registered process");
                Ok(pid)
            }
        }
    }

    /// Registers `process` under `prefix` plus a generated id, retrying until the
    /// name is free.
    pub fn add_with_prefix(&self, prefix: &str, process: Arc<dyn Process>) -> Pid {
        loop {
            let name = format!("{prefix}{}", self.next_id());
            if let Ok(pid) = self.add(&name, process.clone()) {
                return pid;
            }
        }
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<Pid> {
        self.processes.get(name).map(|entry| entry.value().clone())
    }

    /// Deregisters `pid`, freeing its name.
    pub fn remove(&self, pid: &Pid) {
        if self.processes.remove(pid.id()).is_some() {
            trace!(pid = %pid, "Removed process");
        }
    }

    /// Number of live registered processes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }
}
