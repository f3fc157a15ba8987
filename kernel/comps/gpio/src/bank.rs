// SPDX-License-Identifier: MPL-2.0

//! The GPIO register map.

use bitflags::bitflags;
use ecstd::prelude::*;

/// The base address of the GPIO block.
pub const GPIO_BASE: u16 = 0x1600;

/// General control register. Bit 2 routes the LPC reset to GPD2.
pub const GCR: IoReg = IoReg::new("GCR", GPIO_BASE);

bitflags! {
    /// The decoded form of a pin-control byte.
    ///
    /// A byte with neither `INPUT` nor `OUTPUT` selects the pin's alternate
    /// function.
    pub struct PinCtrl: u8 {
        const INPUT = 1 << 7;
        const OUTPUT = 1 << 6;
        const PULL_UP = 1 << 2;
        const PULL_DOWN = 1 << 1;
    }
}

/// A bank of eight GPIO pins.
#[derive(Debug)]
pub struct GpioBank {
    name: &'static str,
    data: IoReg,
    control: [IoReg; 8],
}

impl GpioBank {
    /// Returns the bank letter.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the data register, one bit per pin.
    pub const fn data(&self) -> IoReg {
        self.data
    }

    /// Returns the control register of `pin`.
    ///
    /// # Panics
    ///
    /// This method will panic if `pin` is not below 8.
    pub const fn control(&self, pin: usize) -> IoReg {
        self.control[pin]
    }

    /// Reads and decodes the control register of `pin`.
    pub fn pin_ctrl<S: RegisterSpace + ?Sized>(&self, space: &S, pin: usize) -> PinCtrl {
        PinCtrl::from_bits_truncate(self.control(pin).read(space))
    }
}

macro_rules! gpio_banks {
    ($($bank:ident: data $data:literal, control $ctrl:literal;)*) => {
        $(
            #[doc = concat!("GPIO bank ", stringify!($bank), ".")]
            pub const $bank: GpioBank = GpioBank {
                name: stringify!($bank),
                data: IoReg::new(concat!("GPDR", stringify!($bank)), GPIO_BASE + $data),
                control: [
                    IoReg::new(concat!("GPCR", stringify!($bank), "0"), GPIO_BASE + $ctrl),
                    IoReg::new(concat!("GPCR", stringify!($bank), "1"), GPIO_BASE + $ctrl + 1),
                    IoReg::new(concat!("GPCR", stringify!($bank), "2"), GPIO_BASE + $ctrl + 2),
                    IoReg::new(concat!("GPCR", stringify!($bank), "3"), GPIO_BASE + $ctrl + 3),
                    IoReg::new(concat!("GPCR", stringify!($bank), "4"), GPIO_BASE + $ctrl + 4),
                    IoReg::new(concat!("GPCR", stringify!($bank), "5"), GPIO_BASE + $ctrl + 5),
                    IoReg::new(concat!("GPCR", stringify!($bank), "6"), GPIO_BASE + $ctrl + 6),
                    IoReg::new(concat!("GPCR", stringify!($bank), "7"), GPIO_BASE + $ctrl + 7),
                ],
            };
        )*

        /// All banks, in register order.
        pub const BANKS: &[GpioBank] = &[$($bank),*];
    };
}

gpio_banks! {
    A: data 0x01, control 0x10;
    B: data 0x02, control 0x18;
    C: data 0x03, control 0x20;
    D: data 0x04, control 0x28;
    E: data 0x05, control 0x30;
    F: data 0x06, control 0x38;
    G: data 0x07, control 0x40;
    H: data 0x08, control 0x48;
    I: data 0x09, control 0x50;
    J: data 0x0A, control 0x58;
}
