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

/// Control signals delivered on a process's system channel.
///
/// System signals never queue behind user messages: an actor's mailbox loop polls
/// its system channel first. The graceful counterpart of [`SystemSignal::Stop`] is
/// the [`PoisonPill`](crate::message::PoisonPill) user message.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SystemSignal {
    /// Halt immediately. User messages still queued are never delivered.
    Stop,
    /// Subscribe `watcher` to a single [`SystemSignal::Terminated`] notification.
    ///
    /// A watch sent to a process that has already halted is answered right away.
    Watch {
        /// Receiver of the termination notification.
        watcher: Pid,
    },
    /// Cancel an earlier [`SystemSignal::Watch`].
    Unwatch {
        /// The watcher to remove.
        watcher: Pid,
    },
    /// `who` has fully halted and been removed from the registry.
    Terminated {
        /// The halted process.
        who: Pid,
    },
    /// A child failed while handling a message and is suspended awaiting a directive.
    Failure {
        /// The failed child.
        who: Pid,
        /// Rendered error or panic message.
        reason: String,
    },
    /// Supervisor directive: discard the actor instance and start a fresh one.
    Restart,
    /// Supervisor directive: keep the current instance and continue processing.
    Resume,
}
