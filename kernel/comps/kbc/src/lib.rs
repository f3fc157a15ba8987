// SPDX-License-Identifier: MPL-2.0

//! The host keyboard-controller interface (the legacy 0x60/0x64 ports as
//! seen from the controller side).

#![no_std]
#![deny(unsafe_code)]

use ecstd::prelude::*;

/// The base address of the KBC block.
pub const KBC_BASE: u16 = 0x1300;

/// Host interface control.
pub const KBHICR: IoReg = IoReg::new("KBHICR", KBC_BASE);
/// IRQ routing.
pub const KBIRQR: IoReg = IoReg::new("KBIRQR", KBC_BASE + 0x02);

/// The KBC initialization procedure.
pub const INIT: RegisterGroup =
    RegisterGroup::new("KBC", KBC_BASE, &[(KBIRQR, 0), (KBHICR, 0x48)]);

const _: () = assert!(INIT.check().is_ok(), "malformed KBC table");

/// Applies [`INIT`].
pub fn init<S: RegisterSpace + ?Sized>(space: &S) {
    INIT.apply(space);
}

#[cfg(test)]
mod test {
    use ecstd::sim::SimSpace;

    use super::*;

    #[test]
    fn values() {
        let space = SimSpace::new();
        space.preset(KBIRQR.addr(), 0x7F);

        init(&space);

        assert_eq!(KBIRQR.read(&space), 0);
        assert_eq!(KBHICR.read(&space), 0x48);
        assert_eq!(space.writes(), [(0x1302, 0x00), (0x1300, 0x48)]);
    }
}
