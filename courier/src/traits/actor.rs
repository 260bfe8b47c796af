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

use async_trait::async_trait;

use crate::actor::ActorContext;

/// Receive behaviour of an actor instance.
///
/// `receive` is called once per mailbox entry, strictly one at a time. Lifecycle
/// notifications ([`Started`](crate::message::Started),
/// [`Restarting`](crate::message::Restarting), [`Stopped`](crate::message::Stopped))
/// arrive through the same method. Returning an error (or panicking) reports a
/// failure to the actor's supervisor.
#[async_trait]
pub trait Actor: Send + 'static {
    /// Handles the message currently held by `ctx`.
    async fn receive(&mut self, ctx: &mut ActorContext) -> anyhow::Result<()>;
}

/// Adapts a synchronous closure into an [`Actor`].
pub(crate) struct FnActor<F>(pub(crate) F);

#[async_trait]
impl<F> Actor for FnActor<F>
where
    F: FnMut(&mut ActorContext) -> anyhow::Result<()> + Send + 'static,
{
    async fn receive(&mut self, ctx: &mut ActorContext) -> anyhow::Result<()> {
        (self.0)(ctx)
    }
}
