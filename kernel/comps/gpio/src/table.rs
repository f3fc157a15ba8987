// SPDX-License-Identifier: MPL-2.0

//! The GPIO initialization table.

use ecstd::prelude::*;

use crate::bank::{A, B, C, D, E, F, G, GCR, GPIO_BASE, H, I, J};

/// The GPIO initialization procedure.
pub const INIT: RegisterGroup = RegisterGroup::new("GPIO", GPIO_BASE, WRITES);

// The control bytes are board wiring and have no formula; they must stay
// bit-exact.
const WRITES: &[(IoReg, u8)] = &[
    // Enable LPC reset on GPD2
    (GCR, 0x04),
    // Data
    (A.data(), 0),
    (B.data(), 1 << 0),
    (C.data(), 0),
    (D.data(), (1 << 5) | (1 << 4) | (1 << 3)),
    (E.data(), 0),
    (F.data(), (1 << 7) | (1 << 6)),
    (G.data(), 0),
    (H.data(), 0),
    (I.data(), 0),
    (J.data(), 0),
    // Pin control
    (A.control(0), 0x80),
    (A.control(1), 0x00),
    (A.control(2), 0x00),
    (A.control(3), 0x80),
    (A.control(4), 0x40),
    (A.control(5), 0x44),
    (A.control(6), 0x44),
    (A.control(7), 0x44),

    (B.control(0), 0x44),
    (B.control(1), 0x44),
    (B.control(2), 0x84),
    (B.control(3), 0x00),
    (B.control(4), 0x00),
    (B.control(5), 0x44),
    (B.control(6), 0x84),
    (B.control(7), 0x80),

    (C.control(0), 0x80),
    (C.control(1), 0x84),
    (C.control(2), 0x84),
    (C.control(3), 0x84),
    (C.control(4), 0x44),
    (C.control(5), 0x44),
    (C.control(6), 0x40),
    (C.control(7), 0x44),

    (D.control(0), 0x84),
    (D.control(1), 0x84),
    (D.control(2), 0x00),
    (D.control(3), 0x80),
    (D.control(4), 0x80),
    (D.control(5), 0x44),
    (D.control(6), 0x80),
    (D.control(7), 0x80),

    (E.control(0), 0x44),
    (E.control(1), 0x44),
    (E.control(2), 0x80),
    (E.control(3), 0x40),
    (E.control(4), 0x42),
    (E.control(5), 0x40),
    (E.control(6), 0x44),
    (E.control(7), 0x44),

    (F.control(0), 0x80),
    (F.control(1), 0x44),
    (F.control(2), 0x84),
    (F.control(3), 0x44),
    (F.control(4), 0x80),
    (F.control(5), 0x80),
    (F.control(6), 0x00),
    (F.control(7), 0x80),

    (G.control(0), 0x44),
    (G.control(1), 0x44),
    (G.control(2), 0x40),
    (G.control(3), 0x00),
    (G.control(4), 0x00),
    (G.control(5), 0x00),
    (G.control(6), 0x44),
    (G.control(7), 0x00),

    (H.control(0), 0x00),
    (H.control(1), 0x80),
    (H.control(2), 0x44),
    (H.control(3), 0x44),
    (H.control(4), 0x80),
    (H.control(5), 0x80),
    (H.control(6), 0x80),
    (H.control(7), 0x80),

    (I.control(0), 0x00),
    (I.control(1), 0x00),
    (I.control(2), 0x80),
    (I.control(3), 0x00),
    (I.control(4), 0x00),
    (I.control(5), 0x80),
    (I.control(6), 0x80),
    (I.control(7), 0x80),

    (J.control(0), 0x82),
    (J.control(1), 0x80),
    (J.control(2), 0x40),
    (J.control(3), 0x80),
    (J.control(4), 0x44),
    (J.control(5), 0x40),
    (J.control(6), 0x44),
    (J.control(7), 0x80),
];

const _: () = assert!(INIT.check().is_ok(), "malformed GPIO table");

#[cfg(test)]
mod test {
    use ecstd::sim::SimSpace;

    use super::*;
    use crate::{BANKS, PinCtrl};

    #[test]
    fn covers_every_pin_once() {
        assert_eq!(INIT.writes().len(), 1 + BANKS.len() + BANKS.len() * 8);
        for bank in BANKS {
            for pin in 0..8 {
                let addr = bank.control(pin).addr();
                let count = INIT.writes().iter().filter(|(reg, _)| reg.addr() == addr).count();
                assert_eq!(count, 1, "GPCR{}{}", bank.name(), pin);
            }
        }
    }

    #[test]
    fn lpc_reset_is_selected_first() {
        let (first, value) = INIT.writes()[0];
        assert_eq!(first.name(), "GCR");
        assert_eq!(value, 0x04);
    }

    #[test]
    fn data_before_control() {
        let writes = INIT.writes();
        let last_data = writes.iter().rposition(|(reg, _)| reg.name().starts_with("GPDR"));
        let first_control = writes.iter().position(|(reg, _)| reg.name().starts_with("GPCR"));
        assert!(last_data.unwrap() < first_control.unwrap());
    }

    #[test]
    fn data_values() {
        let space = SimSpace::new();
        for bank in BANKS {
            space.preset(bank.data().addr(), 0xFF);
        }

        crate::init(&space);

        assert_eq!(B.data().read(&space), 0x01);
        assert_eq!(D.data().read(&space), 0x38);
        assert_eq!(F.data().read(&space), 0xC0);
        for bank in [A, C, E, G, H, I, J] {
            assert_eq!(bank.data().read(&space), 0x00, "GPDR{}", bank.name());
        }
    }

    #[test]
    fn control_values_are_exact() {
        let space = SimSpace::new();
        for bank in BANKS {
            for pin in 0..8 {
                space.preset(bank.control(pin).addr(), 0xFF);
            }
        }

        crate::init(&space);

        assert_eq!(A.control(0).read(&space), 0x80);
        assert_eq!(E.control(4).read(&space), 0x42);
        assert_eq!(J.control(0).read(&space), 0x82);
        assert_eq!(G.control(7).read(&space), 0x00);
        for (reg, value) in INIT.writes() {
            assert_eq!(reg.read(&space), *value, "{:?}", reg);
        }
    }

    #[test]
    fn gpa7_drives() {
        let space = SimSpace::new();
        crate::init(&space);
        assert!(A.pin_ctrl(&space, 7).contains(PinCtrl::OUTPUT));
    }
}
