// SPDX-License-Identifier: MPL-2.0

//! The console sink.
//!
//! The controller has no console of its own. A board or a host build may
//! inject one; until then, everything printed is dropped.

use core::fmt;

use spin::Once;

static CONSOLE: Once<fn(fmt::Arguments)> = Once::new();

/// Injects the function that prints to the console.
///
/// Only the first injection takes effect.
pub fn inject_console(console: fn(fmt::Arguments)) {
    CONSOLE.call_once(|| console);
}

/// Prints `args` to the console, if there is one.
pub fn print(args: fmt::Arguments) {
    if let Some(console) = CONSOLE.get() {
        console(args);
    }
}
