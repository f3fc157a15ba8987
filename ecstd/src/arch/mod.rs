// SPDX-License-Identifier: MPL-2.0

//! Platform-specific code.
//!
//! Each architecture the firmware can be built for provides the reset
//! trampoline here.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(target_arch = "riscv64")] {
        mod riscv;
        pub use self::riscv::reset;
    } else if #[cfg(target_arch = "aarch64")] {
        mod aarch64;
        pub use self::aarch64::reset;
    } else if #[cfg(target_arch = "x86_64")] {
        mod x86;
        pub use self::x86::reset;
    }
}

/// The address execution starts from after a power-on reset.
pub const RESET_VECTOR: usize = 0;

/// Spins forever.
///
/// This is the terminal state of the firmware once bring-up is complete.
pub fn idle() -> ! {
    loop {
        core::hint::spin_loop();
    }
}
