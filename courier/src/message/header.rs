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

use std::collections::HashMap;
use std::sync::Arc;

use lazy_static::lazy_static;

lazy_static! {
    static ref EMPTY_HEADER: Arc<HashMap<String, String>> = Arc::new(HashMap::new());
}

/// A read-only view of message header entries.
///
/// Headers are immutable once built and shared by reference count, so cloning one
/// onto every outgoing envelope is cheap. [`MessageHeader::default`] is the shared
/// empty header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageHeader(Arc<HashMap<String, String>>);

impl Default for MessageHeader {
    fn default() -> Self {
        Self(EMPTY_HEADER.clone())
    }
}

impl From<HashMap<String, String>> for MessageHeader {
    fn from(entries: HashMap<String, String>) -> Self {
        if entries.is_empty() {
            return Self::default();
        }
        Self(Arc::new(entries))
    }
}

impl<K, V> FromIterator<(K, V)> for MessageHeader
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect::<HashMap<String, String>>()
            .into()
    }
}

impl MessageHeader {
    /// Looks up a single entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Iterates over the header keys in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Iterates over all entries in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copies the entries into an owned map.
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, String> {
        self.0.as_ref().clone()
    }
}
