// SPDX-License-Identifier: MPL-2.0

//! General control: chip identification, reset sources and the
//! base-address decode.
//!
//! The reset-status register is interpreted against the pin functions, so
//! [`init`] must run after the GPIO configurator has committed them.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate alloc;

use core::fmt;

use ecstd::{Error, io::ReadOnlyAccess, prelude::*};

/// The base address of the general control block.
pub const GCTRL_BASE: u16 = 0x2000;

/// Chip ID, high byte.
pub const ECHIPID1: IoReg<ReadOnlyAccess> = IoReg::new("ECHIPID1", GCTRL_BASE);
/// Chip ID, low byte.
pub const ECHIPID2: IoReg<ReadOnlyAccess> = IoReg::new("ECHIPID2", GCTRL_BASE + 0x01);
/// Chip revision.
pub const ECHIPVER: IoReg<ReadOnlyAccess> = IoReg::new("ECHIPVER", GCTRL_BASE + 0x02);
/// Reset status and reset-source selection.
pub const RSTS: IoReg = IoReg::new("RSTS", GCTRL_BASE + 0x06);
/// Base address select.
pub const BADRSEL: IoReg = IoReg::new("BADRSEL", GCTRL_BASE + 0x0A);
/// Special control 1: CPU/LPC reset behavior.
pub const SPCTRL1: IoReg = IoReg::new("SPCTRL1", GCTRL_BASE + 0x0D);

/// The general control initialization procedure.
pub const INIT: RegisterGroup = RegisterGroup::new(
    "GCTRL",
    GCTRL_BASE,
    &[(SPCTRL1, 0x03), (BADRSEL, 0), (RSTS, 0x84)],
);

const _: () = assert!(INIT.check().is_ok(), "malformed GCTRL table");

/// Applies [`INIT`].
pub fn init<S: RegisterSpace + ?Sized>(space: &S) {
    INIT.apply(space);
}

/// The identity of the running chip.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChipInfo {
    /// The chip ID, e.g., `0x8587`.
    pub id: u16,
    /// The chip revision.
    pub version: u8,
}

impl ChipInfo {
    /// Returns the marketing name of the chip.
    pub fn name(&self) -> &'static str {
        match self.id {
            0x8587 => "IT8587E",
            0x5570 => "IT5570",
            _ => "unknown",
        }
    }
}

impl fmt::Display for ChipInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (id {:#06x}, version {:#04x})", self.name(), self.id, self.version)
    }
}

/// Identifies the chip.
///
/// Only reads registers; the configuration is never affected.
pub fn probe<S: RegisterSpace + ?Sized>(space: &S) -> Result<ChipInfo> {
    let chip = ChipInfo {
        id: u16::from_be_bytes([ECHIPID1.read(space), ECHIPID2.read(space)]),
        version: ECHIPVER.read(space),
    };
    match chip.id {
        0x8587 | 0x5570 => Ok(chip),
        id => {
            log::warn!("unsupported chip ID {:#06x}", id);
            Err(Error::Unsupported)
        }
    }
}

#[cfg(test)]
mod test {
    use alloc::format;

    use ecstd::sim::SimSpace;

    use super::*;

    fn chip(id: u16, version: u8) -> SimSpace {
        let space = SimSpace::new();
        let [hi, lo] = id.to_be_bytes();
        space.preset(ECHIPID1.addr(), hi);
        space.preset(ECHIPID2.addr(), lo);
        space.preset(ECHIPVER.addr(), version);
        space
    }

    #[test]
    fn values() {
        let space = SimSpace::new();
        space.preset(BADRSEL.addr(), 0xFF);

        init(&space);

        assert_eq!(SPCTRL1.read(&space), 0x03);
        assert_eq!(BADRSEL.read(&space), 0x00);
        assert_eq!(RSTS.read(&space), 0x84);
        assert_eq!(space.writes(), [(0x200D, 0x03), (0x200A, 0x00), (0x2006, 0x84)]);
    }

    #[test]
    fn probe_known_chips() {
        let it8587 = probe(&chip(0x8587, 0x06)).unwrap();
        assert_eq!(it8587, ChipInfo { id: 0x8587, version: 0x06 });
        assert_eq!(it8587.name(), "IT8587E");

        let it5570 = probe(&chip(0x5570, 0x01)).unwrap();
        assert_eq!(format!("{}", it5570), "IT5570 (id 0x5570, version 0x01)");
    }

    #[test]
    fn probe_rejects_unknown_chip() {
        assert_eq!(probe(&chip(0x1234, 0)), Err(Error::Unsupported));
    }

    #[test]
    fn probe_only_reads() {
        let space = chip(0x8587, 0x06);
        probe(&space).unwrap();
        assert!(space.writes().is_empty());
    }
}
