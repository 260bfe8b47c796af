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
use std::time::Duration;

use courier::prelude::*;

use crate::setup::*;

mod setup;

/// `"ping"` to an echo actor comes back as `"pong"` well before the deadline.
#[tokio::test]
async fn test_request_future_round_trip() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();

    let echo = root.spawn(&Props::from_producer(Echo::default))?;
    let mut future = root.request_future(
        &echo,
        MessageHandle::new("ping".to_string()),
        Duration::from_secs(1),
    );
    let reply = tokio::time::timeout(Duration::from_secs(1), future.result())
        .await?
        .into_result()?;

    assert_eq!(reply.downcast_ref::<String>(), Some(&"pong".to_string()));
    Ok(())
}

/// A target that never answers leaves the future `TimedOut` once the timeout elapses.
#[tokio::test(start_paused = true)]
async fn test_silent_actor_times_out() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();

    let silent = root.spawn(&Props::from_producer(Silent::default))?;
    let started = tokio::time::Instant::now();
    let mut future = root.request_future(
        &silent,
        MessageHandle::new("ping".to_string()),
        Duration::from_secs(1),
    );
    let state = future.result().await;

    assert!(state.is_timed_out(), "expected TimedOut, got {state:?}");
    assert!(started.elapsed() >= Duration::from_secs(1));
    assert_eq!(state.into_result().unwrap_err(), FutureError::Timeout);
    Ok(())
}

#[tokio::test]
async fn test_spawn_names() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();
    let props = Props::from_producer(Silent::default);

    let generated = root.spawn(&props)?;
    let prefixed = root.spawn_prefix(&props, "worker")?;
    let named = root.spawn_named(&props, "the-one")?;

    assert!(generated.id().starts_with('$'));
    assert!(prefixed.id().starts_with("worker$"));
    assert_eq!(named.id(), "the-one");
    assert_ne!(generated, prefixed);
    assert_eq!(system.registry().get("the-one"), Some(named));
    Ok(())
}

#[tokio::test]
async fn test_spawn_named_rejects_duplicates() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();
    let props = Props::from_producer(Silent::default);

    let first = root.spawn_named(&props, "unique")?;
    let second = root.spawn_named(&props, "unique");

    assert_eq!(second, Err(SpawnError::DuplicateName("unique".to_string())));
    assert_eq!(system.registry().get("unique"), Some(first));
    Ok(())
}

#[tokio::test]
async fn test_spawn_rejects_props_without_producer() {
    initialize_tracing();
    let system = ActorSystem::default();

    let result = system.root().spawn(&Props::default());

    assert!(matches!(result, Err(SpawnError::InvalidProps(_))));
    assert!(system.registry().is_empty());
}

/// A custom spawn procedure replaces the mailbox entirely.
#[tokio::test]
async fn test_custom_spawner_is_used() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let props = Props::default().with_spawner(|system, name, _props, _parent| {
        Props::from_producer(Echo::default).spawn(system, &format!("custom-{name}"), None)
    });

    let pid = system.root().spawn_named(&props, "echo")?;

    assert_eq!(pid.id(), "custom-echo");
    Ok(())
}

#[tokio::test]
async fn test_send_and_request_preserve_order() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();
    let log = Log::default();

    let recorder = root.spawn(&Recorder::props(&log))?;
    root.send(&recorder, MessageHandle::new(1_u32));
    root.request(&recorder, MessageHandle::new(2_u32));
    root.send(&recorder, MessageHandle::new(3_u32));
    root.poison_future(&recorder).result().await;

    assert_eq!(entries(&log), ["started", "1", "2", "3", "stopped"]);
    Ok(())
}

/// The custom sender receives the reply; the root itself is never a sender.
#[tokio::test]
async fn test_request_with_custom_sender() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();

    let echo = root.spawn(&Props::from_producer(Echo::default))?;
    let mut reply_to = ActorFuture::new(&system, Duration::from_secs(1));
    root.request_with_custom_sender(
        &echo,
        MessageHandle::new("hello".to_string()),
        reply_to.pid(),
    );
    let reply = reply_to.result().await.into_result()?;

    assert_eq!(reply.downcast_ref::<String>(), Some(&"hello".to_string()));
    Ok(())
}

#[tokio::test]
async fn test_root_info() {
    initialize_tracing();
    let system = ActorSystem::default();
    let headers = HashMap::from([("tenant".to_string(), "blue".to_string())]);

    let plain = system.root();
    let configured = system.root().with_headers(headers);

    assert!(plain.message().is_none());
    assert!(plain.message_header().is_empty());
    assert!(plain.sender_middleware().is_none());
    assert_eq!(configured.message_header().get("tenant"), Some("blue"));
}
