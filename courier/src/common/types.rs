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

//! Shared type aliases for the function values stored in blueprints and chains.

use std::sync::Arc;

use crate::actor::{Pid, Props};
use crate::common::ActorSystem;
use crate::message::{MessageEnvelope, SpawnError};
use crate::traits::{Actor, SenderContext};

/// Creates a fresh actor instance; called on spawn and on every restart.
pub type ActorProducer = Arc<dyn Fn() -> Box<dyn Actor> + Send + Sync + 'static>;

/// A custom spawn procedure: `(system, name, props, parent) -> Pid`.
pub type SpawnFn = Arc<
    dyn Fn(&ActorSystem, &str, &Props, Option<Pid>) -> Result<Pid, SpawnError>
        + Send
        + Sync
        + 'static,
>;

/// The terminal step of a sender middleware chain.
pub type SenderFn = Arc<dyn Fn(&dyn SenderContext, &Pid, MessageEnvelope) + Send + Sync + 'static>;

/// A [`Pid`] referring to a supervisor.
pub type ParentRef = Pid;
