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

#![allow(unused)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use courier::prelude::*;

use super::messages::{Sleep, WhoIsParent};

/// Shared, ordered record of what an actor handled.
pub type Log = Arc<Mutex<Vec<String>>>;

pub fn entries(log: &Log) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Replies `"pong"` to `"ping"` and echoes any other string.
#[courier_actor]
pub struct Echo;

#[async_trait]
impl Actor for Echo {
    async fn receive(&mut self, ctx: &mut ActorContext) -> anyhow::Result<()> {
        if let Some(text) = ctx.message_as::<String>() {
            let reply = if text == "ping" { "pong".to_string() } else { text.clone() };
            ctx.respond(reply);
        }
        Ok(())
    }
}

/// Never replies.
#[courier_actor]
pub struct Silent;

#[async_trait]
impl Actor for Silent {
    async fn receive(&mut self, _ctx: &mut ActorContext) -> anyhow::Result<()> {
        Ok(())
    }
}

/// Appends every lifecycle message, `u32` and `String` it handles to a shared log.
#[courier_actor]
pub struct Recorder {
    pub log: Log,
}

impl Recorder {
    pub fn props(log: &Log) -> Props {
        let log = log.clone();
        Props::from_producer(move || Recorder { log: log.clone() })
    }
}

#[async_trait]
impl Actor for Recorder {
    async fn receive(&mut self, ctx: &mut ActorContext) -> anyhow::Result<()> {
        let entry = if ctx.message_as::<Started>().is_some() {
            "started".to_string()
        } else if ctx.message_as::<Stopped>().is_some() {
            "stopped".to_string()
        } else if let Some(n) = ctx.message_as::<u32>() {
            n.to_string()
        } else if let Some(text) = ctx.message_as::<String>() {
            text.clone()
        } else if let Some(Sleep(duration)) = ctx.message_as::<Sleep>() {
            let duration = *duration;
            tokio::time::sleep(duration).await;
            "slept".to_string()
        } else {
            return Ok(());
        };
        self.log.lock().unwrap().push(entry);
        Ok(())
    }
}

/// Fails on `"boom"`, panics on `"panic"`, answers `"ping"` and
/// [`WhoIsParent`]. Counts how many instances were started.
#[courier_actor]
pub struct Flaky {
    pub starts: Arc<AtomicUsize>,
}

impl Flaky {
    pub fn props(starts: &Arc<AtomicUsize>) -> Props {
        let starts = starts.clone();
        Props::from_producer(move || Flaky {
            starts: starts.clone(),
        })
    }
}

#[async_trait]
impl Actor for Flaky {
    async fn receive(&mut self, ctx: &mut ActorContext) -> anyhow::Result<()> {
        if ctx.message_as::<Started>().is_some() {
            self.starts.fetch_add(1, Ordering::SeqCst);
        } else if ctx.message_as::<WhoIsParent>().is_some() {
            let parent = ctx
                .parent()
                .map_or_else(|| "none".to_string(), |p| p.id().to_string());
            ctx.respond(parent);
        } else if let Some(text) = ctx.message_as::<String>() {
            match text.as_str() {
                "boom" => anyhow::bail!("boom requested"),
                "panic" => panic!("panic requested"),
                "ping" => ctx.respond("pong".to_string()),
                _ => {}
            }
        }
        Ok(())
    }
}
