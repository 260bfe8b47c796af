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

use std::time::Duration;

use courier::prelude::*;

/// Makes a [`Recorder`](super::Recorder) sleep inside `receive`, keeping it busy.
#[courier_message]
pub struct Sleep(pub Duration);

/// Asks a [`Flaky`](super::Flaky) actor for its parent's id.
#[courier_message]
pub struct WhoIsParent;
