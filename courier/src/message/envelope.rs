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

use crate::actor::Pid;
use crate::message::{MessageHandle, MessageHeader};

/// A message payload together with its header and optional sender address.
///
/// Envelopes are what the sender middleware chain operates on and what reply
/// correlation relies on: [`request_future`](crate::traits::SenderContext::request_future)
/// puts the future's own [`Pid`] in `sender` so the target can answer it.
///
/// An envelope is itself a message, so it can be carried inside a
/// [`MessageHandle`]. [`MessageEnvelope::wrap`] never nests one envelope in another.
#[derive(Clone, Debug)]
pub struct MessageEnvelope {
    header: MessageHeader,
    message: MessageHandle,
    sender: Option<Pid>,
}

impl MessageEnvelope {
    /// Wraps a payload in an envelope with an empty header and no sender.
    ///
    /// If `message` already carries an envelope, that envelope is returned unchanged,
    /// so `wrap(wrap(m)) == wrap(m)`.
    #[must_use]
    pub fn wrap(message: MessageHandle) -> Self {
        if let Some(envelope) = message.downcast_ref::<MessageEnvelope>() {
            return envelope.clone();
        }
        Self {
            header: MessageHeader::default(),
            message,
            sender: None,
        }
    }

    /// Replaces the sender address.
    #[must_use]
    pub fn with_sender(mut self, sender: Pid) -> Self {
        self.sender = Some(sender);
        self
    }

    /// Replaces the header.
    #[must_use]
    pub fn with_header(mut self, header: MessageHeader) -> Self {
        self.header = header;
        self
    }

    #[inline]
    #[must_use]
    pub const fn header(&self) -> &MessageHeader {
        &self.header
    }

    /// The wrapped payload.
    #[inline]
    #[must_use]
    pub const fn message(&self) -> &MessageHandle {
        &self.message
    }

    #[inline]
    #[must_use]
    pub const fn sender(&self) -> Option<&Pid> {
        self.sender.as_ref()
    }

    /// Splits the envelope into its parts.
    #[must_use]
    pub fn into_parts(self) -> (MessageHeader, MessageHandle, Option<Pid>) {
        (self.header, self.message, self.sender)
    }
}

/// Envelopes are equal when they carry the same payload allocation, equal headers
/// and the same sender.
impl PartialEq for MessageEnvelope {
    fn eq(&self, other: &Self) -> bool {
        self.message.ptr_eq(&other.message)
            && self.header == other.header
            && self.sender == other.sender
    }
}

/// Splits any mailbox entry into header, payload and sender, whether or not it was
/// sent inside an envelope.
#[must_use]
pub fn unwrap_envelope(message: MessageHandle) -> (MessageHeader, MessageHandle, Option<Pid>) {
    match message.downcast_ref::<MessageEnvelope>() {
        Some(envelope) => envelope.clone().into_parts(),
        None => (MessageHeader::default(), message, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone)]
    struct Ping;

    #[test]
    fn wrap_is_idempotent() {
        let once = MessageEnvelope::wrap(MessageHandle::new(Ping));
        let twice = MessageEnvelope::wrap(MessageHandle::new(once.clone()));
        assert_eq!(once, twice);
        assert!(twice.message().is::<Ping>());
        assert!(twice.sender().is_none());
        assert!(twice.header().is_empty());
    }

    #[test]
    fn unwrap_handles_raw_payloads() {
        let (header, message, sender) = unwrap_envelope(MessageHandle::new(Ping));
        assert!(header.is_empty());
        assert!(message.is::<Ping>());
        assert!(sender.is_none());
    }

    #[test]
    fn unwrap_opens_envelopes() {
        let header: MessageHeader = [("k", "v")].into_iter().collect();
        let envelope = MessageEnvelope::wrap(MessageHandle::new(Ping)).with_header(header);
        let (header, message, _) = unwrap_envelope(MessageHandle::new(envelope));
        assert_eq!(header.get("k"), Some("v"));
        assert!(message.is::<Ping>());
    }
}
