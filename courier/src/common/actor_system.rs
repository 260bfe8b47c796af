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

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, instrument};

use crate::common::{CourierConfig, Guardians, ProcessRegistry};
use crate::context::{RootContext, SenderMiddleware};
use crate::message::MessageHeader;

/// The runtime services shared by every context, actor and future of one system.
///
/// Cloning is cheap and yields a handle to the same system. Nothing in the
/// crate keeps process-wide state; two systems are fully independent.
#[derive(Clone, Debug)]
pub struct ActorSystem(Arc<SystemInner>);

#[derive(Debug)]
struct SystemInner {
    registry: ProcessRegistry,
    guardians: Guardians,
    config: CourierConfig,
    /// Token for coordinating shutdown across all actors and futures.
    cancellation_token: CancellationToken,
    tracker: TaskTracker,
}

impl Default for ActorSystem {
    fn default() -> Self {
        Self::with_config(CourierConfig::default())
    }
}

impl ActorSystem {
    /// Creates a system configured from the XDG config file, if any.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CourierConfig::load())
    }

    #[must_use]
    pub fn with_config(config: CourierConfig) -> Self {
        let guardians = Guardians::new(config.defaults.guardian_name_prefix.clone());
        Self(Arc::new(SystemInner {
            registry: ProcessRegistry::default(),
            guardians,
            config,
            cancellation_token: CancellationToken::new(),
            tracker: TaskTracker::new(),
        }))
    }

    /// A root context with no headers and no middleware.
    #[must_use]
    pub fn root(&self) -> RootContext {
        RootContext::new(
            self.clone(),
            MessageHeader::default(),
            Vec::<Arc<dyn SenderMiddleware>>::new(),
        )
    }

    #[inline]
    #[must_use]
    pub fn registry(&self) -> &ProcessRegistry {
        &self.0.registry
    }

    #[inline]
    #[must_use]
    pub fn guardians(&self) -> &Guardians {
        &self.0.guardians
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &CourierConfig {
        &self.0.config
    }

    /// Cancelled once [`shutdown`](Self::shutdown) begins.
    #[inline]
    #[must_use]
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.0.cancellation_token
    }

    pub(crate) fn tracker(&self) -> &TaskTracker {
        &self.0.tracker
    }

    #[must_use]
    pub fn is_shutting_down(&self) -> bool {
        self.0.cancellation_token.is_cancelled()
    }

    /// Halts every actor, cancels every pending future and waits for their tasks.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) {
        debug!(live = self.registry().len(), "Shutting down actor system");
        self.0.cancellation_token.cancel();
        self.0.tracker.close();
        self.0.tracker.wait().await;
        debug!("Actor system stopped");
    }
}
