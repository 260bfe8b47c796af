//! Message payloads, envelopes, headers and the control signals exchanged with
//! processes.
//!
//! # Key Components
//!
//! *   [`MessageHandle`]: Shared, type-erased payload carried by every mailbox entry.
//! *   [`MessageEnvelope`]: Payload plus header and optional sender, the unit the
//!     sender middleware chain works on.
//! *   [`MessageHeader`]: Immutable key/value header view; empty by default.
//! *   [`SystemSignal`]: Out-of-band control signals (stop, watch, supervision).
//! *   [`PoisonPill`], [`Started`], [`Restarting`], [`Stopped`], [`Terminated`]:
//!     runtime-produced user messages.

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

pub use envelope::{unwrap_envelope, MessageEnvelope};
pub use header::MessageHeader;
pub use lifecycle::{PoisonPill, Restarting, Started, Stopped, Terminated};
pub use message_error::{FutureError, SpawnError};
pub use message_handle::MessageHandle;
pub use signal::SystemSignal;

mod envelope;
mod header;
mod lifecycle;
mod message_error;
mod message_handle;
mod signal;
