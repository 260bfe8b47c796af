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

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument, trace};

use crate::actor::Pid;
use crate::common::ActorSystem;
use crate::future::future_process::FutureProcess;
use crate::message::{FutureError, MessageHandle};

/// Where a future stands. Every state but `Pending` is terminal.
#[derive(Debug, Clone, Default)]
pub enum FutureState {
    /// Nothing has resolved the future yet.
    #[default]
    Pending,
    /// The first message delivered to the future's pid.
    Resolved(MessageHandle),
    /// The timeout elapsed first.
    TimedOut,
    /// The actor system shut down first.
    Cancelled,
}

impl FutureState {
    #[inline]
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    #[inline]
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_timed_out(&self) -> bool {
        matches!(self, Self::TimedOut)
    }

    #[inline]
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// The reply, if resolved.
    #[must_use]
    pub const fn message(&self) -> Option<&MessageHandle> {
        match self {
            Self::Resolved(message) => Some(message),
            _ => None,
        }
    }

    /// Converts a terminal state into a `Result`.
    ///
    /// # Errors
    ///
    /// [`FutureError::Timeout`] for `TimedOut`, [`FutureError::Cancelled`] for
    /// `Cancelled` and [`FutureError::Pending`] for `Pending`.
    pub fn into_result(self) -> Result<MessageHandle, FutureError> {
        match self {
            Self::Resolved(message) => Ok(message),
            Self::TimedOut => Err(FutureError::Timeout),
            Self::Cancelled => Err(FutureError::Cancelled),
            Self::Pending => Err(FutureError::Pending),
        }
    }
}

/// A one-shot reply slot with a deadline.
///
/// Created by [`request_future`](crate::traits::SenderContext::request_future),
/// [`stop_future`](crate::traits::StopperContext::stop_future) and
/// [`poison_future`](crate::traits::StopperContext::poison_future), or directly
/// with [`ActorFuture::new`]. Creation never blocks; waiting is a separate step.
#[derive(Debug)]
pub struct ActorFuture {
    system: ActorSystem,
    pid: Pid,
    state: watch::Receiver<FutureState>,
}

impl ActorFuture {
    /// Registers a fresh future process and starts its timer.
    ///
    /// Must be called from within a Tokio runtime.
    #[instrument(skip(system))]
    pub fn new(system: &ActorSystem, timeout: Duration) -> Self {
        let (cell, state) = watch::channel(FutureState::Pending);
        let done = CancellationToken::new();
        let process = Arc::new(FutureProcess::new(cell, done.clone()));
        let pid = system
            .registry()
            .add_with_prefix(&system.config().defaults.future_name_prefix, process.clone());
        trace!(future = %pid, "Future created");

        let shutdown = system.cancellation_token().clone();
        let owner = system.clone();
        let timer_pid = pid.clone();
        system.tracker().spawn(async move {
            tokio::select! {
                () = done.cancelled() => {}
                () = shutdown.cancelled() => {
                    process.complete(&timer_pid, FutureState::Cancelled);
                }
                () = tokio::time::sleep(timeout) => {
                    process.complete(&timer_pid, FutureState::TimedOut);
                }
            }
            owner.registry().remove(&timer_pid);
        });

        Self {
            system: system.clone(),
            pid,
            state,
        }
    }

    /// The private address replies must be sent to.
    #[inline]
    #[must_use]
    pub const fn pid(&self) -> &Pid {
        &self.pid
    }

    /// The current state, without waiting.
    #[must_use]
    pub fn try_state(&self) -> FutureState {
        self.state.borrow().clone()
    }

    /// Waits until the future leaves `Pending`.
    pub async fn result(&mut self) -> FutureState {
        match self.state.wait_for(|state| !state.is_pending()).await {
            Ok(state) => (*state).clone(),
            // The write side only goes away once the future can no longer resolve.
            Err(_) => FutureState::Cancelled,
        }
    }

    /// Blocking counterpart of [`result`](Self::result).
    ///
    /// Intended for threads outside the runtime (or `spawn_blocking`); calling it
    /// on a runtime worker can starve the timer that would resolve it.
    pub fn blocking_result(&mut self) -> FutureState {
        futures::executor::block_on(self.result())
    }

    /// Forwards the reply to `target` once it arrives. Timeouts and cancellations
    /// are logged and not forwarded. The forwarding task belongs to the system,
    /// so [`ActorSystem::shutdown`] waits for it.
    pub fn pipe_to(mut self, target: Pid) {
        let tracker = self.system.tracker().clone();
        tracker.spawn(async move {
            match self.result().await {
                FutureState::Resolved(message) => target.send_user_message(message),
                other => debug!(future = %self.pid, target = %target, state = ?other, "Nothing to pipe"),
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::PoisonPill;
    use crate::test_support::InboxProcess;

    #[test]
    fn into_result_maps_terminal_states() {
        let message = MessageHandle::new(PoisonPill);
        let resolved = FutureState::Resolved(message.clone())
            .into_result()
            .expect("resolved");
        assert!(resolved.ptr_eq(&message));
        assert_eq!(
            FutureState::TimedOut.into_result().unwrap_err(),
            FutureError::Timeout
        );
        assert_eq!(
            FutureState::Cancelled.into_result().unwrap_err(),
            FutureError::Cancelled
        );
        assert_eq!(
            FutureState::Pending.into_result().unwrap_err(),
            FutureError::Pending
        );
    }

    #[tokio::test]
    async fn shutdown_waits_for_piped_forwards() {
        let system = ActorSystem::default();
        let inbox = Arc::new(InboxProcess::default());
        let sink = system.registry().add_with_prefix("sink", inbox.clone());
        let future = ActorFuture::new(&system, Duration::from_secs(30));
        let pid = future.pid().clone();

        future.pipe_to(sink);
        pid.send_user_message(MessageHandle::new(String::from("forwarded")));
        system.shutdown().await;

        let received = inbox.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(
            received[0].downcast_ref::<String>(),
            Some(&String::from("forwarded"))
        );
    }

    #[tokio::test]
    async fn first_writer_wins() {
        let system = ActorSystem::default();
        let mut future = ActorFuture::new(&system, Duration::from_secs(5));
        let pid = future.pid().clone();

        pid.send_user_message(MessageHandle::new(String::from("first")));
        pid.send_user_message(MessageHandle::new(String::from("second")));

        let state = future.result().await;
        assert_eq!(
            state.message().and_then(|m| m.downcast_ref::<String>()),
            Some(&String::from("first"))
        );
    }
}
