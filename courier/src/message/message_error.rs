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

use thiserror::Error;

/// Reasons a spawn can fail.
///
/// Both variants originate in the spawn collaborators (the registry and the
/// blueprint) and reach the caller unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpawnError {
    /// A live process is already registered under this name.
    #[error("a process named '{0}' is already registered")]
    DuplicateName(String),
    /// The blueprint cannot produce an actor.
    #[error("invalid props: {0}")]
    InvalidProps(String),
}

/// Non-reply outcomes of an [`ActorFuture`](crate::future::ActorFuture), for callers
/// that want to use `?` via [`FutureState::into_result`](crate::future::FutureState::into_result).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FutureError {
    /// No reply arrived before the deadline.
    #[error("future timed out")]
    Timeout,
    /// The actor system shut down before a reply arrived.
    #[error("future was cancelled")]
    Cancelled,
    /// The outcome was asked for before the future resolved.
    #[error("future is still pending")]
    Pending,
}
