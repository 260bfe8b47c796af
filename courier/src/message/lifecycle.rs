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

//! User-level messages produced by the runtime itself.

use crate::actor::Pid;

/// Graceful stop: the actor halts once every message queued before it is handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoisonPill;

/// First message every actor instance receives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Started;

/// Delivered to the outgoing instance right before a restart replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Restarting;

/// Last message an actor instance receives before it halts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Stopped;

/// A watched process halted.
///
/// This is what a [`stop_future`](crate::traits::StopperContext::stop_future) or
/// [`poison_future`](crate::traits::StopperContext::poison_future) resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terminated {
    /// The process that halted.
    pub who: Pid,
}
