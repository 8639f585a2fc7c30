//! Decodes taps on a brake lever into remote-control outputs.
//!
//! The brake-light line is sampled every 2 ms, debounced, and every press restarts a 1 s
//! observation window. When the window expires the number of presses selects an output:
//!
//! | Presses | Output                      |
//! |---------|-----------------------------|
//! | 1       | none                        |
//! | 2       | Output 1 for 1000 ms        |
//! | 3       | Output 2 for 1000 ms        |
//! | 4       | Output 3 for 500 ms         |
//! | 5+      | none                        |
//!
//! The decision logic lives in [`controller::Controller`], which never touches hardware.
//! [`controller::Remote`] ties it to any [`embedded_hal`] input pin, output pins and blocking delay.
//!
//! ## Crate features
//!
//! - `defmt`: Routes the library's log statements to [defmt](https://defmt.ferrous-systems.com/).
//!   Without it they compile away.
//! - `firmware`: Pulls in the RP2040 stack and builds the `brake_tap_remote` binary. Implies
//!   `defmt`. Build with `cargo fw`.
//! - `trace_cycles`: Logs the raw and debounced sample of every cycle at debug level. Very noisy!
//!
//! ## Demo
//!
//! The following is a simplified version of the binary crate (`src/main.rs`) that runs on the
//! board, with hardware initialization left out.
//!
//! ```ignore
//! #![no_std]
//! #![no_main]
//!
//! use brake_tap_remote::{components::RemoteOutputs, config::Timing, controller::Remote};
//!
//! #[entry]
//! fn main() -> ! {
//!     let (brake, [out1, out2, out3], timer) = init_board();
//!     let outputs = RemoteOutputs::init([out1, out2, out3]).unwrap();
//!     let mut remote = Remote::new(brake, outputs, timer, Timing::DEFAULT);
//!
//!     loop {
//!         remote.cycle().unwrap();
//!     }
//! }
//! ```

// Copyright 2024 The brake_tap_remote authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg), feature(doc_auto_cfg), feature(doc_cfg_hide))]

// Must come first so the logging macros are visible to every other module
#[macro_use]
mod fmt;

pub mod components;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod taps;
