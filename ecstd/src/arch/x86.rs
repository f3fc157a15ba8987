// SPDX-License-Identifier: MPL-2.0

use core::arch::asm;

use super::RESET_VECTOR;

/// Transfers control to the reset vector. Never returns.
pub fn reset() -> ! {
    // SAFETY: Jumping to the reset vector restarts the firmware from scratch.
    // Nothing of the current execution is relied upon afterwards.
    unsafe { asm!("jmp {}", in(reg) RESET_VECTOR, options(noreturn)) }
}
