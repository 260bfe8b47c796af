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

//! Runtime services shared across an actor system.
//!
//! *   [`ActorSystem`]: The service object owning the registry, guardians,
//!     configuration and shutdown token.
//! *   [`ProcessRegistry`]: Name generation and lookup.
//! *   [`Guardians`]: Strategy-keyed shared supervisors.
//! *   [`CourierConfig`]: XDG/TOML configuration.

pub use actor_system::ActorSystem;
pub use config::{CourierConfig, DefaultsConfig, TimeoutConfig};
pub use guardians::Guardians;
pub use process_registry::ProcessRegistry;
pub use types::*;

mod actor_system;
mod config;
mod guardians;
mod process_registry;
mod types;
