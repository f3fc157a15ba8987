// SPDX-License-Identifier: MPL-2.0

//! The keyboard-matrix scanner.

#![no_std]
#![deny(unsafe_code)]

use ecstd::prelude::*;

/// The base address of the KBSCAN block.
pub const KBSCAN_BASE: u16 = 0x1D00;

/// Scan-out control.
pub const KSOCTRL: IoReg = IoReg::new("KSOCTRL", KBSCAN_BASE + 0x02);
/// Scan-in control.
pub const KSICTRLR: IoReg = IoReg::new("KSICTRLR", KBSCAN_BASE + 0x05);

/// The KBSCAN initialization procedure.
pub const INIT: RegisterGroup =
    RegisterGroup::new("KBSCAN", KBSCAN_BASE, &[(KSOCTRL, 0x05), (KSICTRLR, 0x04)]);

const _: () = assert!(INIT.check().is_ok(), "malformed KBSCAN table");

/// Applies [`INIT`].
pub fn init<S: RegisterSpace + ?Sized>(space: &S) {
    INIT.apply(space);
}
