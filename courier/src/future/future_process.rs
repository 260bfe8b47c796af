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

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::trace;

use crate::actor::Pid;
use crate::future::FutureState;
use crate::message::{unwrap_envelope, MessageHandle, SystemSignal, Terminated};
use crate::traits::Process;

/// Write side of a future: whatever reaches its pid tries to resolve it.
#[derive(Debug)]
pub(crate) struct FutureProcess {
    cell: watch::Sender<FutureState>,
    /// Cancelled by the single winning write.
    done: CancellationToken,
}

impl FutureProcess {
    pub(crate) fn new(cell: watch::Sender<FutureState>, done: CancellationToken) -> Self {
        Self { cell, done }
    }

    /// Moves the cell out of `Pending`. Returns `false` if another outcome won first.
    pub(crate) fn complete(&self, pid: &Pid, outcome: FutureState) -> bool {
        let won = self.cell.send_if_modified(|state| {
            if state.is_pending() {
                *state = outcome;
                true
            } else {
                false
            }
        });
        if won {
            self.done.cancel();
            trace!(future = %pid, "Future resolved");
        } else {
            trace!(future = %pid, "Future already resolved, outcome dropped");
        }
        won
    }
}

impl Process for FutureProcess {
    fn send_user_message(&self, pid: &Pid, message: MessageHandle) {
        let (_, message, _) = unwrap_envelope(message);
        self.complete(pid, FutureState::Resolved(message));
    }

    fn send_system_message(&self, pid: &Pid, signal: SystemSignal) {
        match signal {
            SystemSignal::Terminated { who } => {
                self.complete(pid, FutureState::Resolved(MessageHandle::new(Terminated { who })));
            }
            SystemSignal::Stop => {
                self.complete(pid, FutureState::Cancelled);
            }
            other => trace!(future = %pid, signal = ?other, "Ignoring signal"),
        }
    }
}
