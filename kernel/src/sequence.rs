// SPDX-License-Identifier: MPL-2.0

//! The init sequence.

use ec_gpio::PinCtrl;
use ecstd::prelude::*;

/// The GPA pin the post-init patch drives high.
pub const PATCH_PIN: usize = 7;

/// One step of bring-up.
///
/// Later stages rely on the hardware side effects of earlier ones: pin
/// functions must be committed before the reset source is selected, and
/// the patch targets a register the GPIO stage has already written.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    Gpio,
    GeneralControl,
    Kbc,
    Pmc,
    KbScan,
    /// Drives [`PATCH_PIN`] of GPIO bank A high.
    Patch,
}

impl Stage {
    /// Every stage, in execution order.
    //
    // PS/2 is not part of bring-up yet, see `ec_ps2`.
    // TODO: Add stages for INTC, PECI, PWM and SMBus once they have
    // configurators.
    pub const ORDER: [Stage; 6] = [
        Stage::Gpio,
        Stage::GeneralControl,
        Stage::Kbc,
        Stage::Pmc,
        Stage::KbScan,
        Stage::Patch,
    ];

    /// Returns the register group this stage applies, if it is table-driven.
    pub fn group(self) -> Option<&'static RegisterGroup> {
        match self {
            Stage::Gpio => Some(&ec_gpio::INIT),
            Stage::GeneralControl => Some(&ec_gctrl::INIT),
            Stage::Kbc => Some(&ec_kbc::INIT),
            Stage::Pmc => Some(&ec_pmc::INIT),
            Stage::KbScan => Some(&ec_kbscan::INIT),
            Stage::Patch => None,
        }
    }

    /// Runs the stage.
    pub fn run<S: RegisterSpace + ?Sized>(self, space: &S) {
        log::info!("stage {:?}", self);
        match self.group() {
            Some(group) => group.apply(space),
            None => post_init_patch(space),
        }
    }
}

/// Runs every stage once, in [`Stage::ORDER`].
pub fn bring_up<S: RegisterSpace + ?Sized>(space: &S) {
    for stage in Stage::ORDER {
        stage.run(space);
    }
}

const _: () = assert!(
    match ec_gpio::INIT.value_of(ec_gpio::A.control(PATCH_PIN).addr()) {
        Some(ctrl) => ctrl & PinCtrl::OUTPUT.bits() != 0,
        None => false,
    },
    "the patched pin must be an output"
);

/// Sets [`PATCH_PIN`] in the GPIO bank A data register.
///
/// This is the only read-modify-write of bring-up: the bit is added to what
/// the GPIO stage wrote, never written in its place. No other register is
/// accessed.
pub fn post_init_patch<S: RegisterSpace + ?Sized>(space: &S) {
    ec_gpio::A.data().set_bits(space, 1 << PATCH_PIN);
}
