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

//! Time-bounded, single-assignment reply cells.
//!
//! An [`ActorFuture`] owns a private [`Pid`](crate::actor::Pid). The first
//! message delivered to that address resolves it; a timer and the actor
//! system's shutdown token race that delivery, and exactly one of the three wins.

pub use actor_future::{ActorFuture, FutureState};

mod actor_future;
mod future_process;
