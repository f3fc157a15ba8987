// SPDX-License-Identifier: MPL-2.0

//! The standard library for embedded-controller firmware.
//!
//! This crate is the only place that touches hardware directly. Peripheral
//! configurators are written on top of it as safe crates:
//!  - [`io`] provides capability handles for the memory-mapped registers,
//!  - [`arch`] and [`platform`] provide the reset trampoline and idle loop,
//!  - [`logger`] and [`console`] route the `log` facade to a console sink.

#![no_std]
#![warn(missing_docs)]

#[cfg(any(test, feature = "sim"))]
extern crate alloc;
#[cfg(any(test, feature = "sim"))]
extern crate std;

pub mod arch;
pub mod console;
mod error;
pub mod io;
pub mod logger;
pub mod platform;
pub mod prelude;
#[cfg(any(test, feature = "sim"))]
pub mod sim;

pub use self::{error::Error, prelude::Result};
