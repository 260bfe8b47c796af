//! Core traits establishing the contracts between the root context and the
//! processes it drives.
//!
//! # Key Traits
//!
//! *   [`CourierMessage`]: Marker trait for every mailbox payload.
//! *   [`Process`]: What a [`Pid`](crate::actor::Pid) resolves to; accepts user
//!     messages and system signals.
//! *   [`Actor`]: Receive behaviour of an actor instance.
//! *   [`InfoPart`], [`SenderContext`], [`SpawnerContext`], [`StopperContext`]:
//!     the capability sets of a context.

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

pub use actor::Actor;
pub(crate) use actor::FnActor;
pub use context::{InfoPart, SenderContext, SpawnerContext, StopperContext};
pub use courier_message::CourierMessage;
pub use process::Process;

/// Defines the [`Actor`] trait.
mod actor;
/// Defines the context capability traits.
mod context;
/// Defines the [`CourierMessage`] marker trait.
mod courier_message;
/// Defines the [`Process`] trait.
mod process;
