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

use std::fmt::Debug;

use crate::actor::Pid;
use crate::message::{MessageHandle, SystemSignal};

/// The handle a [`Pid`] resolves to: whatever accepts deliveries for that address.
///
/// Actors, futures and guardians are all processes. Every method is synchronous and
/// must not block; delivery to a process that can no longer accept messages is
/// dropped silently.
pub trait Process: Send + Sync + Debug {
    /// Queues an ordinary message behind previously queued ones.
    fn send_user_message(&self, pid: &Pid, message: MessageHandle);

    /// Delivers a control signal ahead of queued user messages.
    fn send_system_message(&self, pid: &Pid, signal: SystemSignal);

    /// Halts the process immediately.
    fn stop(&self, pid: &Pid) {
        self.send_system_message(pid, SystemSignal::Stop);
    }
}
