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

use std::fmt::{Debug, Display, Formatter};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::message::{MessageHandle, SystemSignal};
use crate::traits::Process;

/// The address of exactly one process.
///
/// A `Pid` is cheap to clone and is passed by value. It carries the process
/// handle it resolves to, so sending never consults the registry. Equality and
/// hashing are based solely on the registered id.
#[derive(Clone)]
pub struct Pid {
    id: Arc<str>,
    process: Arc<dyn Process>,
}

impl Pid {
    pub(crate) fn new(id: &str, process: Arc<dyn Process>) -> Self {
        Self {
            id: Arc::from(id),
            process,
        }
    }

    /// The name this process was registered under.
    #[inline]
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resolves the process handle behind this address.
    #[inline]
    #[must_use]
    pub fn process(&self) -> &Arc<dyn Process> {
        &self.process
    }

    /// Queues a user message on the process.
    #[inline]
    pub fn send_user_message(&self, message: MessageHandle) {
        self.process.send_user_message(self, message);
    }

    /// Delivers a system signal to the process.
    #[inline]
    pub fn send_system_message(&self, signal: SystemSignal) {
        self.process.send_system_message(self, signal);
    }
}

impl PartialEq for Pid {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Pid {}

impl Hash for Pid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Debug for Pid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Pid").field(&&*self.id).finish()
    }
}

impl Display for Pid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.id)
    }
}
