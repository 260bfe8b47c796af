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

//! Integration tests for guardian dispatch and supervision of failing actors.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use courier::message::SystemSignal;
use courier::prelude::*;

use crate::setup::*;

mod setup;

const TIMEOUT: Duration = Duration::from_secs(2);

async fn parent_of(root: &RootContext, pid: &Pid) -> anyhow::Result<String> {
    let reply = root
        .request_future(pid, MessageHandle::new(WhoIsParent), TIMEOUT)
        .result()
        .await
        .into_result()?;
    Ok(reply
        .downcast_ref::<String>()
        .cloned()
        .unwrap_or_default())
}

/// Watches `pid` from a fresh future, without stopping it.
fn watch(system: &ActorSystem, pid: &Pid) -> ActorFuture {
    let future = ActorFuture::new(system, TIMEOUT);
    pid.send_system_message(SystemSignal::Watch {
        watcher: future.pid().clone(),
    });
    future
}

#[tokio::test]
async fn test_equal_strategies_share_a_guardian() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();
    let starts = Arc::new(AtomicUsize::new(0));
    let strategy = SupervisorStrategy::one_for_one(3, Duration::from_secs(10));

    let first = root.spawn(&Flaky::props(&starts).with_guardian(strategy))?;
    let second = root.spawn(&Flaky::props(&starts).with_guardian(strategy))?;
    let other = root.spawn(&Flaky::props(&starts).with_guardian(SupervisorStrategy::AlwaysRestart))?;
    let orphan = root.spawn(&Flaky::props(&starts))?;

    let first_parent = parent_of(&root, &first).await?;
    assert_eq!(first_parent, parent_of(&root, &second).await?);
    assert_ne!(first_parent, parent_of(&root, &other).await?);
    assert_eq!(parent_of(&root, &orphan).await?, "none");
    assert!(first_parent.starts_with("guardian$"));
    assert_eq!(system.guardians().len(), 2);
    Ok(())
}

/// Concurrent spawns with one strategy race on the guardian entry; only one is created.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_spawns_create_one_guardian() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let props = Props::from_producer(Silent::default).with_guardian(SupervisorStrategy::StopOnFailure);

    let spawns: Vec<_> = (0..32)
        .map(|_| {
            let root = system.root();
            let props = props.clone();
            tokio::spawn(async move { root.spawn(&props) })
        })
        .collect();
    for spawn in spawns {
        spawn.await??;
    }

    assert_eq!(system.guardians().len(), 1);
    let guardian = system
        .guardians()
        .get_or_create(system.registry(), SupervisorStrategy::StopOnFailure);
    assert!(system.registry().get(guardian.id()).is_some());
    Ok(())
}

/// A failing child is restarted by its guardian and keeps serving its mailbox.
#[tokio::test]
async fn test_guardian_restarts_failed_child() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();
    let starts = Arc::new(AtomicUsize::new(0));
    let props = Flaky::props(&starts).with_guardian(SupervisorStrategy::one_for_one(3, Duration::from_secs(10)));

    let flaky = root.spawn(&props)?;
    root.send(&flaky, MessageHandle::new("boom".to_string()));
    let reply = root
        .request_future(&flaky, MessageHandle::new("ping".to_string()), TIMEOUT)
        .result()
        .await
        .into_result()?;

    assert_eq!(reply.downcast_ref::<String>(), Some(&"pong".to_string()));
    assert_eq!(starts.load(Ordering::SeqCst), 2);
    Ok(())
}

/// Panics are failures too.
#[tokio::test]
async fn test_guardian_restarts_panicked_child() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();
    let starts = Arc::new(AtomicUsize::new(0));

    let flaky = root.spawn(&Flaky::props(&starts).with_guardian(SupervisorStrategy::AlwaysRestart))?;
    root.send(&flaky, MessageHandle::new("panic".to_string()));
    let state = root
        .request_future(&flaky, MessageHandle::new("ping".to_string()), TIMEOUT)
        .result()
        .await;

    assert!(state.is_resolved());
    assert_eq!(starts.load(Ordering::SeqCst), 2);
    Ok(())
}

/// Exceeding the restart budget stops the child for good.
#[tokio::test]
async fn test_restart_limit_stops_child() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();
    let starts = Arc::new(AtomicUsize::new(0));
    let props = Flaky::props(&starts).with_guardian(SupervisorStrategy::one_for_one(1, Duration::from_secs(10)));

    let flaky = root.spawn(&props)?;
    let mut terminated = watch(&system, &flaky);
    root.send(&flaky, MessageHandle::new("boom".to_string()));
    root.send(&flaky, MessageHandle::new("boom".to_string()));

    let reply = terminated.result().await.into_result()?;
    let notice = reply.downcast_ref::<Terminated>().expect("termination notice");
    assert_eq!(notice.who, flaky);
    assert_eq!(starts.load(Ordering::SeqCst), 2);
    assert!(system.registry().get(flaky.id()).is_none());
    Ok(())
}

#[tokio::test]
async fn test_stop_on_failure_strategy() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();
    let starts = Arc::new(AtomicUsize::new(0));

    let flaky = root.spawn(&Flaky::props(&starts).with_guardian(SupervisorStrategy::StopOnFailure))?;
    let mut terminated = watch(&system, &flaky);
    root.send(&flaky, MessageHandle::new("boom".to_string()));

    assert!(terminated.result().await.is_resolved());
    assert_eq!(starts.load(Ordering::SeqCst), 1);
    Ok(())
}

/// Without a guardian a failing actor restarts in place.
#[tokio::test]
async fn test_unsupervised_actor_restarts_in_place() -> anyhow::Result<()> {
    initialize_tracing();
    let system = ActorSystem::default();
    let root = system.root();
    let starts = Arc::new(AtomicUsize::new(0));

    let flaky = root.spawn(&Flaky::props(&starts))?;
    root.send(&flaky, MessageHandle::new("boom".to_string()));
    let state = root
        .request_future(&flaky, MessageHandle::new("ping".to_string()), TIMEOUT)
        .result()
        .await;

    assert!(state.is_resolved());
    assert_eq!(starts.load(Ordering::SeqCst), 2);
    assert_eq!(system.guardians().len(), 0);
    Ok(())
}

/// The default strategy can be taken from configuration.
#[tokio::test]
async fn test_configured_default_strategy() -> anyhow::Result<()> {
    initialize_tracing();
    let mut config = CourierConfig::default();
    config.defaults.default_max_retries = 0;
    let system = ActorSystem::with_config(config);
    let root = system.root();
    let starts = Arc::new(AtomicUsize::new(0));
    let strategy = system.config().default_supervisor_strategy();

    let flaky = root.spawn(&Flaky::props(&starts).with_guardian(strategy))?;
    let mut terminated = watch(&system, &flaky);
    root.send(&flaky, MessageHandle::new("boom".to_string()));

    assert!(terminated.result().await.is_resolved());
    assert_eq!(starts.load(Ordering::SeqCst), 1);
    Ok(())
}
