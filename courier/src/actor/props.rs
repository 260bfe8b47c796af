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

use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use tracing::instrument;

use crate::actor::{ActorContext, ActorProcess, Pid, SupervisorStrategy};
use crate::common::{ActorProducer, ActorSystem, ParentRef, SpawnFn};
use crate::message::SpawnError;
use crate::traits::{Actor, FnActor};

/// The blueprint of an actor.
///
/// `Props` describes how to create an actor instance, which supervisor strategy
/// (if any) it runs under and, optionally, a custom spawn procedure. Cloning is
/// cheap; the blueprint itself is never mutated by spawning.
#[derive(Clone, Default)]
pub struct Props {
    producer: Option<ActorProducer>,
    guardian_strategy: Option<SupervisorStrategy>,
    spawner: Option<SpawnFn>,
}

impl Props {
    /// A blueprint whose instances are built by `producer`.
    pub fn from_producer<A, F>(producer: F) -> Self
    where
        A: Actor,
        F: Fn() -> A + Send + Sync + 'static,
    {
        Self {
            producer: Some(Arc::new(move || Box::new(producer()) as Box<dyn Actor>)),
            ..Self::default()
        }
    }

    /// A blueprint for a stateless actor defined by a synchronous closure.
    ///
    /// Each instance (including restarted ones) gets its own clone of `receive`.
    pub fn from_fn<F>(receive: F) -> Self
    where
        F: FnMut(&mut ActorContext) -> anyhow::Result<()> + Clone + Send + Sync + 'static,
    {
        Self::from_producer(move || FnActor(receive.clone()))
    }

    /// Supervises spawned instances with the guardian for `strategy`.
    #[must_use]
    pub fn with_guardian(mut self, strategy: SupervisorStrategy) -> Self {
        self.guardian_strategy = Some(strategy);
        self
    }

    /// Replaces the default spawn procedure.
    #[must_use]
    pub fn with_spawner<F>(mut self, spawner: F) -> Self
    where
        F: Fn(&ActorSystem, &str, &Props, Option<Pid>) -> Result<Pid, SpawnError>
            + Send
            + Sync
            + 'static,
    {
        self.spawner = Some(Arc::new(spawner));
        self
    }

    /// The supervisor strategy declared by this blueprint.
    #[inline]
    #[must_use]
    pub const fn guardian_strategy(&self) -> Option<SupervisorStrategy> {
        self.guardian_strategy
    }

    pub(crate) fn produce(&self) -> Option<Box<dyn Actor>> {
        self.producer.as_ref().map(|producer| producer())
    }

    /// Realizes this blueprint as a live process named `name`.
    ///
    /// # Errors
    ///
    /// [`SpawnError::DuplicateName`] if `name` is taken, [`SpawnError::InvalidProps`]
    /// if the blueprint has neither a producer nor a custom spawner.
    #[instrument(skip(self, system))]
    pub fn spawn(
        &self,
        system: &ActorSystem,
        name: &str,
        parent: Option<ParentRef>,
    ) -> Result<Pid, SpawnError> {
        match &self.spawner {
            Some(spawner) => spawner(system, name, self, parent),
            None => ActorProcess::spawn(system, name, self, parent),
        }
    }
}

impl Debug for Props {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Props")
            .field("has_producer", &self.producer.is_some())
            .field("guardian_strategy", &self.guardian_strategy)
            .field("custom_spawner", &self.spawner.is_some())
            .finish()
    }
}
