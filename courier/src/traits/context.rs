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

//! Capability sets exposed by a context.
//!
//! [`RootContext`](crate::context::RootContext) implements all of them. Sender
//! middleware receives a `&dyn SenderContext`, so these traits stay object safe:
//! messages are passed as [`MessageHandle`]s.

use std::time::Duration;

use crate::actor::{Pid, Props};
use crate::common::ActorSystem;
use crate::future::ActorFuture;
use crate::message::{MessageHandle, MessageHeader, SpawnError};

/// Read access to the context's environment.
pub trait InfoPart: Send + Sync {
    /// The actor system this context operates in.
    fn actor_system(&self) -> &ActorSystem;

    /// The message currently being handled, if any. Always `None` at the root.
    fn message(&self) -> Option<MessageHandle>;

    /// Headers configured on this context.
    fn message_header(&self) -> MessageHeader;
}

/// Sending capabilities.
pub trait SenderContext: InfoPart {
    /// Fire-and-forget delivery to `target`. No sender address is attached.
    fn send(&self, target: &Pid, message: MessageHandle);

    /// Same delivery path as [`send`](SenderContext::send).
    fn request(&self, target: &Pid, message: MessageHandle);

    /// Delivers `message` with an explicit `sender` for reply correlation.
    ///
    /// Goes straight to the target's mailbox without running the sender middleware.
    fn request_with_custom_sender(&self, target: &Pid, message: MessageHandle, sender: &Pid);

    /// Sends `message` with a fresh future as its sender and returns the future
    /// without waiting for the reply.
    fn request_future(&self, target: &Pid, message: MessageHandle, timeout: Duration)
        -> ActorFuture;
}

/// Spawning capabilities.
pub trait SpawnerContext: InfoPart {
    /// Spawns under a freshly generated, globally unique name.
    fn spawn(&self, props: &Props) -> Result<Pid, SpawnError> {
        let name = self.actor_system().registry().next_id();
        self.spawn_named(props, &name)
    }

    /// Spawns under `prefix` followed by a freshly generated unique id.
    fn spawn_prefix(&self, props: &Props, prefix: &str) -> Result<Pid, SpawnError> {
        let name = format!("{prefix}{}", self.actor_system().registry().next_id());
        self.spawn_named(props, &name)
    }

    /// Spawns under exactly `name`.
    ///
    /// # Errors
    ///
    /// [`SpawnError::DuplicateName`] when `name` is taken and
    /// [`SpawnError::InvalidProps`] when the blueprint cannot produce an actor.
    fn spawn_named(&self, props: &Props, name: &str) -> Result<Pid, SpawnError>;
}

/// Stopping capabilities.
pub trait StopperContext {
    /// Halts `pid` immediately; queued user messages may never be processed.
    fn stop(&self, pid: &Pid);

    /// [`stop`](StopperContext::stop) plus a future resolving with
    /// [`Terminated`](crate::message::Terminated) once `pid` has halted.
    fn stop_future(&self, pid: &Pid) -> ActorFuture;

    /// Enqueues a [`PoisonPill`](crate::message::PoisonPill): `pid` halts after
    /// handling everything queued before it.
    fn poison(&self, pid: &Pid);

    /// [`poison`](StopperContext::poison) plus a future resolving with
    /// [`Terminated`](crate::message::Terminated) once `pid` has halted.
    fn poison_future(&self, pid: &Pid) -> ActorFuture;
}
