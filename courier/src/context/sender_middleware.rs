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

//! Interception of outgoing sends.
//!
//! A chain is an ordered list of [`SenderMiddleware`] objects wrapped around a
//! terminal delivery step. The first middleware is the outermost: it sees the
//! envelope first and regains control last. Each middleware decides whether the
//! send continues by calling [`Next::run`], or ends the send by returning.
//!
//! ```rust,ignore
//! use courier::prelude::*;
//!
//! let audit = middleware_fn(|ctx, target, envelope, next| {
//!     tracing::info!(target = %target, "sending");
//!     next.run(ctx, target, envelope);
//! });
//! let root = system.root().with_sender_middleware([audit]);
//! ```

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::actor::Pid;
use crate::common::SenderFn;
use crate::message::MessageEnvelope;
use crate::traits::SenderContext;

/// One interceptor in a sender middleware chain.
pub trait SenderMiddleware: Send + Sync + 'static {
    /// Handles one outgoing send. Call `next.run(..)` to continue the chain.
    fn send(&self, ctx: &dyn SenderContext, target: &Pid, envelope: MessageEnvelope, next: Next<'_>);
}

impl<F> SenderMiddleware for F
where
    F: Fn(&dyn SenderContext, &Pid, MessageEnvelope, Next<'_>) + Send + Sync + 'static,
{
    fn send(&self, ctx: &dyn SenderContext, target: &Pid, envelope: MessageEnvelope, next: Next<'_>) {
        self(ctx, target, envelope, next);
    }
}

/// Boxes a closure as a middleware, pinning down its argument types.
pub fn middleware_fn<F>(middleware: F) -> Arc<dyn SenderMiddleware>
where
    F: Fn(&dyn SenderContext, &Pid, MessageEnvelope, Next<'_>) + Send + Sync + 'static,
{
    Arc::new(middleware)
}

/// The rest of the chain, as seen from inside one middleware.
///
/// Consumed by [`run`](Next::run), so a middleware can continue at most once.
pub struct Next<'a> {
    remaining: &'a [Arc<dyn SenderMiddleware>],
    terminal: &'a SenderFn,
}

impl Next<'_> {
    /// Hands the envelope to the next middleware, or to the terminal step once
    /// every middleware has continued.
    pub fn run(self, ctx: &dyn SenderContext, target: &Pid, envelope: MessageEnvelope) {
        match self.remaining.split_first() {
            Some((middleware, remaining)) => middleware.send(
                ctx,
                target,
                envelope,
                Next {
                    remaining,
                    terminal: self.terminal,
                },
            ),
            None => (self.terminal)(ctx, target, envelope),
        }
    }
}

impl Debug for Next<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Next")
            .field("remaining", &self.remaining.len())
            .finish()
    }
}

/// A composed, immutable middleware chain. Cloning shares it.
#[derive(Clone)]
pub struct SenderMiddlewareChain {
    middlewares: Arc<[Arc<dyn SenderMiddleware>]>,
    terminal: SenderFn,
}

impl SenderMiddlewareChain {
    pub fn new<I>(middlewares: I, terminal: SenderFn) -> Self
    where
        I: IntoIterator<Item = Arc<dyn SenderMiddleware>>,
    {
        Self {
            middlewares: middlewares.into_iter().collect(),
            terminal,
        }
    }

    /// Runs one send through the whole chain.
    pub fn run(&self, ctx: &dyn SenderContext, target: &Pid, envelope: MessageEnvelope) {
        Next {
            remaining: &self.middlewares,
            terminal: &self.terminal,
        }
        .run(ctx, target, envelope);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.middlewares.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.middlewares.is_empty()
    }
}

impl Debug for SenderMiddlewareChain {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SenderMiddlewareChain")
            .field("middlewares", &self.middlewares.len())
            .finish_non_exhaustive()
    }
}
