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

#![forbid(unsafe_code)]

//! # Courier
//!
//! The root-context control plane of a Tokio actor runtime. Code that is not
//! itself an actor uses a [`RootContext`](context::RootContext) to send messages,
//! spawn actors under a supervision strategy, and stop them either immediately
//! or gracefully.
//!
//! ## Key Concepts
//!
//! - **Addresses (`Pid`)**: Cheap handles resolving to a process (an actor
//!   mailbox, a future or a guardian).
//! - **Envelopes (`MessageEnvelope`)**: Payload plus header and optional sender.
//!   Wrapping never nests.
//! - **Sender middleware**: Ordered interceptors around every outgoing send from
//!   a context; the first configured is the outermost.
//! - **Futures (`ActorFuture`)**: Single-assignment reply cells racing a timeout.
//! - **Guardians**: One shared supervisor per distinct `SupervisorStrategy`,
//!   created lazily and owned by the `ActorSystem`.
//! - **Stop vs. poison**: `stop` overtakes queued messages; `poison` waits
//!   behind them.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use courier::prelude::*;
//!
//! #[courier_actor]
//! struct Echo;
//!
//! #[async_trait]
//! impl Actor for Echo {
//!     async fn receive(&mut self, ctx: &mut ActorContext) -> anyhow::Result<()> {
//!         if let Some(text) = ctx.message_as::<String>() {
//!             ctx.respond(text.clone());
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let system = ActorSystem::new();
//! let root = system.root();
//! let echo = root.spawn(&Props::from_producer(Echo::default))?;
//! let mut reply = root.request_future(&echo, MessageHandle::new("hi".to_string()), Duration::from_secs(1));
//! let reply = reply.result().await.into_result()?;
//! ```

/// Addresses, blueprints, supervision and the reference actor mailbox.
pub mod actor;

/// The actor system service object, registry, guardians and configuration.
pub mod common;

/// The root context and sender middleware.
pub mod context;

/// Time-bounded reply futures.
pub mod future;

/// Message payloads, envelopes, headers and system signals.
pub mod message;

/// Core traits: messages, processes, actors and context capabilities.
pub mod traits;

/// A prelude module for conveniently importing the most commonly used items.
///
/// # Re-exports
///
/// ## Macros (from `courier-macro`)
/// *   [`courier_macro::courier_message`]: Attribute macro for defining messages.
/// *   [`courier_macro::courier_actor`]: Attribute macro for defining actors.
///
/// ## External Crates
/// *   [`async_trait::async_trait`](https://docs.rs/async-trait/latest/async_trait/attr.async_trait.html): Needed to implement [`Actor`](crate::traits::Actor).
pub mod prelude {
    // Macros from courier-macro
    pub use courier_macro::*;

    // External crate re-exports
    pub use async_trait::async_trait;

    // Core types
    pub use crate::actor::{ActorContext, Pid, Props, SupervisorStrategy};
    pub use crate::common::{ActorSystem, CourierConfig};
    pub use crate::context::{middleware_fn, Next, RootContext, SenderMiddleware};
    pub use crate::future::{ActorFuture, FutureState};
    pub use crate::message::{
        FutureError, MessageEnvelope, MessageHandle, MessageHeader, PoisonPill, Restarting,
        SpawnError, Started, Stopped, Terminated,
    };
    pub use crate::traits::{
        Actor, CourierMessage, InfoPart, SenderContext, SpawnerContext, StopperContext,
    };
}
