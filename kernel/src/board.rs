// SPDX-License-Identifier: MPL-2.0

//! Simulated chips for hosted builds and tests.

use ec_gctrl::{ECHIPID1, ECHIPID2, ECHIPVER, RSTS};
use ec_gpio::{G, GCR};
use ec_pmc::{PM1CTL, PM2CTL};
use ec_ps2::{PSCTL1, PSCTL2, PSCTL3};
use ecstd::sim::SimSpace;

/// A chip the firmware runs on.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Board {
    /// IT8587E/VG, F version.
    It8587E,
    /// IT5570, B version.
    It5570,
}

impl Board {
    /// Returns the chip ID reported by `ECHIPID1`/`ECHIPID2`.
    pub fn chip_id(self) -> u16 {
        match self {
            Board::It8587E => 0x8587,
            Board::It5570 => 0x5570,
        }
    }

    /// Returns the revision reported by `ECHIPVER`.
    pub fn version(self) -> u8 {
        match self {
            Board::It8587E => 0x06,
            Board::It5570 => 0x01,
        }
    }

    /// Returns the power-on value of `RSTS`.
    pub fn reset_status(self) -> u8 {
        match self {
            Board::It8587E => 0b1000_1100,
            Board::It5570 => 0b0100_1100,
        }
    }

    /// Returns a register space in the chip's power-on state.
    ///
    /// Only the registers the chip implements in the blocks bring-up touches
    /// exist; any other access panics.
    pub fn power_on(self) -> SimSpace {
        let space = SimSpace::strict();
        self.map_registers(&space);

        let [id_hi, id_lo] = self.chip_id().to_be_bytes();
        space.preset(ECHIPID1.addr(), id_hi);
        space.preset(ECHIPID2.addr(), id_lo);
        space.preset(ECHIPVER.addr(), self.version());
        space.preset(RSTS.addr(), self.reset_status());

        space.preset(GCR.addr(), 0b0000_0100);
        space.preset(G.data().addr(), 0b0000_0001);
        space.preset(PM1CTL.addr(), 0b0100_0000);
        space.preset(PM2CTL.addr(), 0b0100_0000);
        for reg in [PSCTL1, PSCTL2, PSCTL3] {
            space.preset(reg.addr(), 0b0000_0001);
        }

        space
    }

    // Offsets are the chip's register map, written out independently of the
    // component tables so that a mis-offset table entry faults.
    fn map_registers(self, space: &SimSpace) {
        // KBC
        space.map(0x1300);
        space.protect(0x1302, 0b1000_0000);
        space.protect(0x1304, 0b0000_1011);
        space.write_only(0x1306, 0xFF);
        space.write_only(0x1308, 0xFF);
        space.protect(0x130A, 0xFF);

        // PMC
        space.protect(0x1500, 0b0000_1011);
        space.write_only(0x1501, 0xFF);
        space.protect(0x1504, 0xFF);
        space.map(0x1506);
        space.map(0x1516);
        space.protect(0x1530, 0b0000_1011);

        // GPIO
        space.map(0x1600);
        space.map_range(0x1601..=0x160A);
        space.map(0x160D);
        space.map_range(0x1610..=0x165F);
        for addr in (0x1661..=0x166A).chain([0x166D]) {
            space.protect(addr, 0xFF);
        }
        space.map_range(0x1671..=0x167A);
        space.map(0x167D);
        space.map_range(0x16A0..=0x16A7);
        space.map_range(0x16E0..=0x16E2);
        space.map_range(0x16F0..=0x16FE);
        match self {
            Board::It8587E => space.write_only(0x16F8, 0b0000_0100),
            Board::It5570 => space.map_range(0x16E4..=0x16E8),
        }

        // PS/2
        space.map_range(0x1700..=0x1702);
        space.map_range(0x1704..=0x1706);
        space.protect(0x170A, 0b0011_1111);
        space.write_clear(0x170A, 0b0100_0000);

        // Keyboard scan
        space.map_range(0x1D00..=0x1D0F);
        for addr in [0x1D04, 0x1D09, 0x1D0C] {
            space.protect(addr, 0xFF);
        }

        // GCTRL
        for addr in 0x2000..=0x2002 {
            space.protect(addr, 0xFF);
        }
        match self {
            Board::It8587E => space.protect(0x2006, 0b0000_0011),
            Board::It5570 => space.write_clear(0x2006, 0b0000_0011),
        }
        space.map(0x200A);
        space.write_only(0x200B, 0xFF);
        space.map(0x200D);
        space.write_clear(0x2030, 0b0000_0001);
        space.map_range(0x2031..=0x2032);
    }
}

#[cfg(test)]
mod test {
    use ecstd::io::RegisterSpace;

    use super::*;

    #[test]
    fn power_on_state() {
        let space = Board::It8587E.power_on();
        assert_eq!(space.load(0x2000), 0x85);
        assert_eq!(space.load(0x2001), 0x87);
        assert_eq!(space.load(0x2002), 0x06);
        assert_eq!(space.load(0x1607), 0x01);
        assert_eq!(space.load(0x1506), 0x40);
        assert!(space.writes().is_empty());
    }

    #[test]
    fn reset_status_at_power_on() {
        assert_eq!(Board::It8587E.power_on().load(0x2006), 0x8C);
        assert_eq!(Board::It5570.power_on().load(0x2006), 0x4C);
    }

    #[test]
    fn reset_source_bits_differ_by_chip() {
        let it8587 = Board::It8587E.power_on();
        it8587.preset(0x2006, 0x8F);
        it8587.store(0x2006, 0x84);
        assert_eq!(it8587.load(0x2006), 0x87);

        let it5570 = Board::It5570.power_on();
        it5570.preset(0x2006, 0x4F);
        it5570.store(0x2006, 0x85);
        assert_eq!(it5570.load(0x2006), 0x86);
    }

    #[test]
    fn gpio_map_differs_by_chip() {
        assert!(Board::It5570.power_on().is_mapped(0x16E4));
        assert!(!Board::It8587E.power_on().is_mapped(0x16E4));
    }

    #[test]
    #[should_panic(expected = "unimplemented register 0x1517")]
    fn unimplemented_register_faults() {
        Board::It5570.power_on().store(0x1517, 0x41);
    }

    #[test]
    fn chip_id_is_read_only() {
        let space = Board::It5570.power_on();
        space.store(0x2000, 0x00);
        assert_eq!(space.load(0x2000), 0x55);
    }

    #[test]
    fn probe_matches_board() {
        for board in [Board::It8587E, Board::It5570] {
            let chip = ec_gctrl::probe(&board.power_on()).unwrap();
            assert_eq!(chip.id, board.chip_id());
            assert_eq!(chip.version, board.version());
        }
    }
}
