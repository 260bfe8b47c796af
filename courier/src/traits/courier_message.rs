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

use std::any::Any;
use std::fmt::Debug;

use dyn_clone::DynClone;

/// A marker trait for every type that can travel through a mailbox.
///
/// Messages must be safe to share across threads, debuggable, clonable as trait
/// objects and downcastable back to their concrete type. A blanket implementation
/// covers every `Clone + Debug + Send + Sync + 'static` type, so deriving `Clone`
/// and `Debug` (or using `#[courier_message]`) is all a message type needs.
pub trait CourierMessage: DynClone + Any + Send + Sync + Debug {
    /// Returns the message as [`Any`] for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// The concrete type name, used in trace output.
    fn type_name(&self) -> &'static str;
}

dyn_clone::clone_trait_object!(CourierMessage);

impl<T> CourierMessage for T
where
    T: Any + Send + Sync + Debug + DynClone + 'static,
{
    #[inline]
    fn as_any(&self) -> &dyn Any {
        self
    }

    #[inline]
    fn type_name(&self) -> &'static str {
        std::any::type_name::<T>()
    }
}
