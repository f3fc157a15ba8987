// SPDX-License-Identifier: MPL-2.0

//! Power-management channels (the ACPI embedded-controller ports).

#![no_std]
#![deny(unsafe_code)]

use ecstd::prelude::*;

/// The base address of the PMC block.
pub const PMC_BASE: u16 = 0x1500;

/// Channel 1 control.
pub const PM1CTL: IoReg = IoReg::new("PM1CTL", PMC_BASE + 0x06);
/// Channel 2 control.
pub const PM2CTL: IoReg = IoReg::new("PM2CTL", PMC_BASE + 0x16);

/// The PMC initialization procedure.
pub const INIT: RegisterGroup =
    RegisterGroup::new("PMC", PMC_BASE, &[(PM1CTL, 0x41), (PM2CTL, 0x41)]);

const _: () = assert!(INIT.check().is_ok(), "malformed PMC table");

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
        // Power-on value of both channels.
        space.preset(PM1CTL.addr(), 0x40);
        space.preset(PM2CTL.addr(), 0x40);

        init(&space);

        assert_eq!(PM1CTL.read(&space), 0x41);
        assert_eq!(PM2CTL.read(&space), 0x41);
        assert_eq!(space.writes(), [(0x1506, 0x41), (0x1516, 0x41)]);
    }
}
