// SPDX-License-Identifier: MPL-2.0

//! GPIO pin multiplexing.
//!
//! The first configurator of bring-up. It selects the LPC reset pin, sets
//! the data register of every bank and then the control byte of every pin.
//! Later configurators assume the pins are settled, so this group must be
//! applied before any other.

#![no_std]
#![deny(unsafe_code)]

mod bank;
mod table;

pub use self::{
    bank::{A, B, BANKS, C, D, E, F, G, GCR, GPIO_BASE, GpioBank, H, I, J, PinCtrl},
    table::INIT,
};

use ecstd::prelude::*;

/// Applies [`INIT`].
pub fn init<S: RegisterSpace + ?Sized>(space: &S) {
    INIT.apply(space);
}
