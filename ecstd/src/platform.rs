// SPDX-License-Identifier: MPL-2.0

//! The terminal control transfers of the firmware.

use crate::arch;

/// The two ways the firmware leaves the code that called it.
///
/// Both are divergent. Nothing placed after a call to either method runs.
pub trait Platform {
    /// Jumps to the reset vector.
    fn reset(&self) -> !;

    /// Enters the idle loop.
    fn idle(&self) -> !;
}

/// The platform of the real chip.
#[derive(Debug, Default)]
pub struct BareMetal;

impl Platform for BareMetal {
    fn reset(&self) -> ! {
        arch::reset()
    }

    fn idle(&self) -> ! {
        arch::idle()
    }
}
