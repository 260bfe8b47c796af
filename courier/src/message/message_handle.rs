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
use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use crate::traits::CourierMessage;

/// A shared, type-erased message payload.
///
/// Handles are cheap to clone (an `Arc` bump) and compare by identity through
/// [`MessageHandle::ptr_eq`]. The concrete value is recovered with
/// [`MessageHandle::downcast_ref`].
#[derive(Clone)]
pub struct MessageHandle(Arc<dyn CourierMessage>);

impl MessageHandle {
    /// Wraps a message. Passing a `MessageHandle` returns it as is instead of nesting it.
    pub fn new<M: CourierMessage>(message: M) -> Self {
        let any: &dyn Any = &message;
        if let Some(handle) = any.downcast_ref::<MessageHandle>() {
            return handle.clone();
        }
        Self(Arc::new(message))
    }

    /// Returns a reference to the payload if it is a `T`.
    #[inline]
    #[must_use]
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        self.payload().as_any().downcast_ref::<T>()
    }

    /// Returns `true` if the payload is a `T`.
    #[inline]
    #[must_use]
    pub fn is<T: 'static>(&self) -> bool {
        self.payload().as_any().is::<T>()
    }

    /// Returns `true` if both handles point at the same payload allocation.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// The payload's concrete type name.
    #[inline]
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.payload().type_name()
    }

    // `Arc` itself implements `CourierMessage`; dispatch on the payload.
    #[inline]
    fn payload(&self) -> &dyn CourierMessage {
        &*self.0
    }
}

impl Debug for MessageHandle {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}
