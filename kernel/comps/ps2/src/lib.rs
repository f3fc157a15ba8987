// SPDX-License-Identifier: MPL-2.0

//! The three PS/2 ports.
//!
//! Bring-up does not apply this group yet; it is kept ready for when the
//! PS/2 ports are wired into the init sequence.

#![no_std]
#![deny(unsafe_code)]

use ecstd::prelude::*;

/// The base address of the PS/2 block.
pub const PS2_BASE: u16 = 0x1700;

/// Port 1 control.
pub const PSCTL1: IoReg = IoReg::new("PSCTL1", PS2_BASE);
/// Port 2 control.
pub const PSCTL2: IoReg = IoReg::new("PSCTL2", PS2_BASE + 0x01);
/// Port 3 control.
pub const PSCTL3: IoReg = IoReg::new("PSCTL3", PS2_BASE + 0x02);
/// Port 1 interrupt control.
pub const PSINT1: IoReg = IoReg::new("PSINT1", PS2_BASE + 0x04);
/// Port 2 interrupt control.
pub const PSINT2: IoReg = IoReg::new("PSINT2", PS2_BASE + 0x05);
/// Port 3 interrupt control.
pub const PSINT3: IoReg = IoReg::new("PSINT3", PS2_BASE + 0x06);

/// The PS/2 initialization procedure.
pub const INIT: RegisterGroup = RegisterGroup::new(
    "PS/2",
    PS2_BASE,
    &[
        (PSCTL1, 0x11),
        (PSCTL2, 0x41),
        (PSCTL3, 0x41),
        (PSINT1, 0x04),
        (PSINT2, 0x04),
        (PSINT3, 0x04),
    ],
);

const _: () = assert!(INIT.check().is_ok(), "malformed PS/2 table");

/// Applies [`INIT`].
pub fn init<S: RegisterSpace + ?Sized>(space: &S) {
    INIT.apply(space);
}
