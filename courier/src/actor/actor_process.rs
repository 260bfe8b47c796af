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

//! The in-process mailbox behind every actor spawned with the default procedure.
//!
//! Each actor owns two unbounded Tokio channels: a FIFO mailbox for user messages
//! and a system channel for [`SystemSignal`]s. The actor's task polls the system
//! channel first, which is what lets [`SystemSignal::Stop`] overtake queued user
//! messages while a [`PoisonPill`] waits its turn.

use std::any::Any;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::SendError;
use tracing::{debug, error, instrument, trace, warn};

use crate::actor::{ActorContext, Pid, Props};
use crate::common::{ActorSystem, ParentRef};
use crate::message::{
    MessageEnvelope, MessageHandle, PoisonPill, Restarting, SpawnError, Started, Stopped,
    SystemSignal, Terminated,
};
use crate::traits::{Actor, Process};

/// Delivery side of an actor's mailbox.
#[derive(Debug)]
pub(crate) struct ActorProcess {
    mailbox: mpsc::UnboundedSender<MessageHandle>,
    signals: mpsc::UnboundedSender<SystemSignal>,
}

impl Process for ActorProcess {
    fn send_user_message(&self, pid: &Pid, message: MessageHandle) {
        if self.mailbox.send(message).is_err() {
            trace!(pid = %pid, "Mailbox closed, user message dropped");
        }
    }

    fn send_system_message(&self, pid: &Pid, signal: SystemSignal) {
        if let Err(SendError(signal)) = self.signals.send(signal) {
            answer_after_halt(pid, signal);
        }
    }
}

/// A watch that reaches a halted actor is answered on the spot.
fn answer_after_halt(pid: &Pid, signal: SystemSignal) {
    match signal {
        SystemSignal::Watch { watcher } => {
            trace!(pid = %pid, watcher = %watcher, "Watch on halted actor, notifying watcher");
            watcher.send_system_message(SystemSignal::Terminated { who: pid.clone() });
        }
        other => trace!(pid = %pid, signal = ?other, "System channel closed, signal dropped"),
    }
}

impl ActorProcess {
    /// Default spawn procedure: registers the mailbox under `name` and starts the
    /// actor task on the system's tracker.
    pub(crate) fn spawn(
        system: &ActorSystem,
        name: &str,
        props: &Props,
        parent: Option<ParentRef>,
    ) -> Result<Pid, SpawnError> {
        let actor = props
            .produce()
            .ok_or_else(|| SpawnError::InvalidProps("no actor producer configured".to_string()))?;

        let (mailbox, mailbox_rx) = mpsc::unbounded_channel();
        let (signals, signals_rx) = mpsc::unbounded_channel();
        // The receiver is alive, so this cannot fail.
        let _ = mailbox.send(MessageHandle::new(Started));

        let pid = system
            .registry()
            .add(name, Arc::new(Self { mailbox, signals }))?;
        debug!(pid = %pid, parent = ?parent, "Spawned actor");

        let cell = ActorCell {
            system: system.clone(),
            pid: pid.clone(),
            parent,
            props: props.clone(),
            actor,
            mailbox: mailbox_rx,
            signals: signals_rx,
            watchers: Vec::new(),
            suspended: false,
        };
        system.tracker().spawn(cell.run());
        Ok(pid)
    }
}

enum Flow {
    Continue,
    Halt,
}

/// Receiving side of the mailbox plus the live actor instance.
struct ActorCell {
    system: ActorSystem,
    pid: Pid,
    parent: Option<ParentRef>,
    props: Props,
    actor: Box<dyn Actor>,
    mailbox: mpsc::UnboundedReceiver<MessageHandle>,
    signals: mpsc::UnboundedReceiver<SystemSignal>,
    watchers: Vec<Pid>,
    /// Set while a supervisor decides what to do after a failure.
    suspended: bool,
}

impl ActorCell {
    #[instrument(name = "actor", skip(self), fields(pid = %self.pid))]
    async fn run(mut self) {
        let shutdown = self.system.cancellation_token().clone();
        loop {
            let flow = tokio::select! {
                biased;
                () = shutdown.cancelled() => Flow::Halt,
                signal = self.signals.recv() => match signal {
                    Some(signal) => self.handle_signal(signal).await,
                    None => Flow::Halt,
                },
                message = self.mailbox.recv(), if !self.suspended => match message {
                    Some(message) => self.handle_message(message).await,
                    None => Flow::Halt,
                },
            };
            if matches!(flow, Flow::Halt) {
                break;
            }
        }
        self.halt().await;
    }

    async fn handle_signal(&mut self, signal: SystemSignal) -> Flow {
        trace!(signal = ?signal, "System signal");
        match signal {
            SystemSignal::Stop => return Flow::Halt,
            SystemSignal::Watch { watcher } => {
                if !self.watchers.contains(&watcher) {
                    self.watchers.push(watcher);
                }
            }
            SystemSignal::Unwatch { watcher } => self.watchers.retain(|w| w != &watcher),
            SystemSignal::Terminated { who } => {
                let envelope = MessageEnvelope::wrap(MessageHandle::new(Terminated { who }));
                self.invoke(envelope).await;
            }
            SystemSignal::Restart => self.restart().await,
            SystemSignal::Resume => self.suspended = false,
            SystemSignal::Failure { who, reason } => {
                warn!(child = %who, reason = %reason, "Failure from a child this actor does not supervise, stopping it");
                who.send_system_message(SystemSignal::Stop);
            }
        }
        Flow::Continue
    }

    async fn handle_message(&mut self, message: MessageHandle) -> Flow {
        let envelope = MessageEnvelope::wrap(message);
        if envelope.message().is::<PoisonPill>() {
            debug!("Poison pill reached, halting");
            return Flow::Halt;
        }
        self.invoke(envelope).await;
        Flow::Continue
    }

    async fn invoke(&mut self, envelope: MessageEnvelope) {
        if let Err(reason) = self.deliver(envelope).await {
            self.fail(reason).await;
        }
    }

    /// Runs one `receive`, turning errors and panics into a failure reason.
    async fn deliver(&mut self, envelope: MessageEnvelope) -> Result<(), String> {
        trace!(message = envelope.message().type_name(), "Delivering");
        let mut ctx = ActorContext::new(
            self.system.clone(),
            self.pid.clone(),
            self.parent.clone(),
            envelope,
        );
        match AssertUnwindSafe(self.actor.receive(&mut ctx))
            .catch_unwind()
            .await
        {
            Ok(Ok(())) => Ok(()),
            Ok(Err(e)) => Err(format!("{e:#}")),
            Err(panic) => Err(panic_message(panic.as_ref())),
        }
    }

    async fn fail(&mut self, reason: String) {
        error!(reason = %reason, "Actor failed");
        match &self.parent {
            Some(parent) => {
                self.suspended = true;
                parent.send_system_message(SystemSignal::Failure {
                    who: self.pid.clone(),
                    reason,
                });
            }
            None => self.restart().await,
        }
    }

    async fn restart(&mut self) {
        debug!("Restarting actor");
        if let Err(reason) = self
            .deliver(MessageEnvelope::wrap(MessageHandle::new(Restarting)))
            .await
        {
            warn!(reason = %reason, "Outgoing instance failed while restarting");
        }
        match self.props.produce() {
            Some(actor) => self.actor = actor,
            None => warn!("Blueprint lost its producer, keeping the current instance"),
        }
        self.suspended = false;
        if let Err(reason) = self
            .deliver(MessageEnvelope::wrap(MessageHandle::new(Started)))
            .await
        {
            error!(reason = %reason, "Restarted instance failed on start");
        }
    }

    async fn halt(mut self) {
        if let Err(reason) = self
            .deliver(MessageEnvelope::wrap(MessageHandle::new(Stopped)))
            .await
        {
            warn!(reason = %reason, "Actor failed while stopping");
        }

        self.system.registry().remove(&self.pid);
        self.mailbox.close();
        self.signals.close();
        while let Ok(signal) = self.signals.try_recv() {
            if let SystemSignal::Watch { watcher } = signal {
                if !self.watchers.contains(&watcher) {
                    self.watchers.push(watcher);
                }
            }
        }

        for watcher in self.watchers.drain(..) {
            watcher.send_system_message(SystemSignal::Terminated {
                who: self.pid.clone(),
            });
        }
        if let Some(parent) = &self.parent {
            parent.send_system_message(SystemSignal::Terminated {
                who: self.pid.clone(),
            });
        }
        debug!("Actor halted");
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "actor panicked".to_string()
    }
}
