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

use static_assertions::assert_impl_all;
use tracing::{instrument, trace};

use crate::actor::{Pid, Props};
use crate::common::{ActorSystem, SenderFn};
use crate::context::{SenderMiddleware, SenderMiddlewareChain};
use crate::future::ActorFuture;
use crate::message::{
    MessageEnvelope, MessageHandle, MessageHeader, PoisonPill, SpawnError, SystemSignal,
};
use crate::traits::{InfoPart, SenderContext, SpawnerContext, StopperContext};

/// The entry point for code that is not itself an actor.
///
/// A `RootContext` sends, spawns and stops on behalf of arbitrary callers. It
/// carries optional headers and an optional sender middleware chain; both are
/// fixed once built and shared by clones. Every operation is synchronous and
/// returns without waiting on the target, but must run inside a Tokio runtime
/// because spawning and futures start tasks.
///
/// # Examples
///
/// ```rust,ignore
/// use courier::prelude::*;
///
/// let system = ActorSystem::new();
/// let root = system.root();
/// let echo = root.spawn(&Props::from_producer(Echo::default))?;
///
/// let mut reply = root.request_future(&echo, MessageHandle::new("ping".to_string()), Duration::from_secs(1));
/// assert!(reply.result().await.is_resolved());
/// ```
#[derive(Clone, Debug)]
pub struct RootContext {
    system: ActorSystem,
    sender_middleware: Option<SenderMiddlewareChain>,
    headers: MessageHeader,
}

assert_impl_all!(RootContext: Send, Sync, Clone);

impl RootContext {
    /// Builds a context with `headers` and a chain composed from `middleware`.
    /// An empty middleware list means sends go straight to the target.
    pub fn new<I>(system: ActorSystem, headers: MessageHeader, middleware: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn SenderMiddleware>>,
    {
        Self {
            system,
            sender_middleware: compose(middleware),
            headers,
        }
    }

    /// Replaces the context's headers.
    #[must_use]
    pub fn with_headers(mut self, headers: impl Into<MessageHeader>) -> Self {
        self.headers = headers.into();
        self
    }

    /// Replaces the context's middleware chain.
    #[must_use]
    pub fn with_sender_middleware<I>(mut self, middleware: I) -> Self
    where
        I: IntoIterator<Item = Arc<dyn SenderMiddleware>>,
    {
        self.sender_middleware = compose(middleware);
        self
    }

    #[inline]
    #[must_use]
    pub const fn headers(&self) -> &MessageHeader {
        &self.headers
    }

    #[inline]
    #[must_use]
    pub const fn sender_middleware(&self) -> Option<&SenderMiddlewareChain> {
        self.sender_middleware.as_ref()
    }

    /// The middleware-aware delivery path shared by `send`, `request` and
    /// `request_future`.
    fn send_user_message(&self, target: &Pid, message: MessageHandle) {
        match &self.sender_middleware {
            Some(chain) => chain.run(self, target, MessageEnvelope::wrap(message)),
            None => target.send_user_message(message),
        }
    }

    fn watch_then(&self, pid: &Pid, signal: impl FnOnce(&Self, &Pid)) -> ActorFuture {
        let future = ActorFuture::new(&self.system, self.system.config().stop_future_timeout());
        pid.send_system_message(SystemSignal::Watch {
            watcher: future.pid().clone(),
        });
        signal(self, pid);
        future
    }
}

fn compose<I>(middleware: I) -> Option<SenderMiddlewareChain>
where
    I: IntoIterator<Item = Arc<dyn SenderMiddleware>>,
{
    let chain = SenderMiddlewareChain::new(middleware, Arc::new(deliver) as SenderFn);
    (!chain.is_empty()).then_some(chain)
}

/// Terminal step of every root chain: the envelope goes to the target's mailbox.
fn deliver(_ctx: &dyn SenderContext, target: &Pid, envelope: MessageEnvelope) {
    target.send_user_message(MessageHandle::new(envelope));
}

impl InfoPart for RootContext {
    fn actor_system(&self) -> &ActorSystem {
        &self.system
    }

    fn message(&self) -> Option<MessageHandle> {
        None
    }

    fn message_header(&self) -> MessageHeader {
        self.headers.clone()
    }
}

impl SenderContext for RootContext {
    #[instrument(skip(self, message), fields(message = message.type_name()))]
    fn send(&self, target: &Pid, message: MessageHandle) {
        self.send_user_message(target, message);
    }

    #[instrument(skip(self, message), fields(message = message.type_name()))]
    fn request(&self, target: &Pid, message: MessageHandle) {
        self.send_user_message(target, message);
    }

    #[instrument(skip(self, message), fields(message = message.type_name()))]
    fn request_with_custom_sender(&self, target: &Pid, message: MessageHandle, sender: &Pid) {
        let envelope = MessageEnvelope::wrap(message).with_sender(sender.clone());
        target.send_user_message(MessageHandle::new(envelope));
    }

    #[instrument(skip(self, message), fields(message = message.type_name()))]
    fn request_future(
        &self,
        target: &Pid,
        message: MessageHandle,
        timeout: Duration,
    ) -> ActorFuture {
        let future = ActorFuture::new(&self.system, timeout);
        let envelope = MessageEnvelope::wrap(message).with_sender(future.pid().clone());
        self.send_user_message(target, MessageHandle::new(envelope));
        future
    }
}

impl SpawnerContext for RootContext {
    #[instrument(skip(self, props))]
    fn spawn_named(&self, props: &Props, name: &str) -> Result<Pid, SpawnError> {
        let parent = props
            .guardian_strategy()
            .map(|strategy| self.system.guardians().get_or_create(self.system.registry(), strategy));
        trace!(parent = ?parent, "Resolved parent");
        props.spawn(&self.system, name, parent)
    }
}

impl StopperContext for RootContext {
    #[instrument(skip(self))]
    fn stop(&self, pid: &Pid) {
        pid.process().stop(pid);
    }

    #[instrument(skip(self))]
    fn stop_future(&self, pid: &Pid) -> ActorFuture {
        self.watch_then(pid, |ctx, pid| ctx.stop(pid))
    }

    #[instrument(skip(self))]
    fn poison(&self, pid: &Pid) {
        pid.send_user_message(MessageHandle::new(PoisonPill));
    }

    #[instrument(skip(self))]
    fn poison_future(&self, pid: &Pid) -> ActorFuture {
        self.watch_then(pid, |ctx, pid| ctx.poison(pid))
    }
}
