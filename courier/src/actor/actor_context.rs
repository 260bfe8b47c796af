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

use tracing::trace;

use crate::actor::Pid;
use crate::common::{ActorSystem, ParentRef};
use crate::context::RootContext;
use crate::message::{MessageEnvelope, MessageHandle, MessageHeader};
use crate::traits::CourierMessage;

/// What an actor sees while handling one message.
///
/// Built fresh by the mailbox loop for every delivery. Replies go to the
/// envelope's sender, which is how a [`request_future`](crate::traits::SenderContext::request_future)
/// gets answered.
#[derive(Debug)]
pub struct ActorContext {
    system: ActorSystem,
    self_pid: Pid,
    parent: Option<ParentRef>,
    envelope: MessageEnvelope,
}

impl ActorContext {
    pub(crate) fn new(
        system: ActorSystem,
        self_pid: Pid,
        parent: Option<ParentRef>,
        envelope: MessageEnvelope,
    ) -> Self {
        Self {
            system,
            self_pid,
            parent,
            envelope,
        }
    }

    #[inline]
    #[must_use]
    pub const fn self_pid(&self) -> &Pid {
        &self.self_pid
    }

    /// The supervising guardian, if the actor was spawned with a strategy.
    #[inline]
    #[must_use]
    pub const fn parent(&self) -> Option<&ParentRef> {
        self.parent.as_ref()
    }

    #[inline]
    #[must_use]
    pub const fn system(&self) -> &ActorSystem {
        &self.system
    }

    /// The message being handled, already taken out of its envelope.
    #[inline]
    #[must_use]
    pub const fn message(&self) -> &MessageHandle {
        self.envelope.message()
    }

    /// The message being handled if it is a `T`.
    #[inline]
    #[must_use]
    pub fn message_as<T: 'static>(&self) -> Option<&T> {
        self.envelope.message().downcast_ref::<T>()
    }

    #[inline]
    #[must_use]
    pub const fn sender(&self) -> Option<&Pid> {
        self.envelope.sender()
    }

    #[inline]
    #[must_use]
    pub fn header(&self) -> MessageHeader {
        self.envelope.header().clone()
    }

    /// Replies to the sender of the current message. Dropped when there is none.
    pub fn respond(&self, message: impl CourierMessage) {
        match self.envelope.sender() {
            Some(sender) => sender.send_user_message(MessageHandle::new(message)),
            None => trace!(actor = %self.self_pid, "No sender to respond to; reply dropped"),
        }
    }

    /// Sends `message` to `target` with this actor as the sender.
    pub fn send(&self, target: &Pid, message: impl CourierMessage) {
        let envelope =
            MessageEnvelope::wrap(MessageHandle::new(message)).with_sender(self.self_pid.clone());
        target.send_user_message(MessageHandle::new(envelope));
    }

    /// A root context for the actor's system, e.g. to spawn or stop other actors.
    #[must_use]
    pub fn root(&self) -> RootContext {
        self.system.root()
    }
}
