// SPDX-License-Identifier: MPL-2.0

use core::{
    ops::Range,
    ptr::{self, NonNull},
};

use volatile::VolatilePtr;

use crate::{Error, prelude::*};

/// The part of the external RAM space holding the peripheral registers.
pub const REGISTER_WINDOW: Range<u16> = 0x1000..0x3000;

/// A register address space.
///
/// Implementations perform byte-wide loads and stores with the hardware's
/// semantics. No caching and no validation happen at this level: the value
/// owned by a register is whatever the hardware says it is.
pub trait RegisterSpace {
    /// Loads the byte at `addr`.
    fn load(&self, addr: u16) -> u8;

    /// Stores `value` at `addr`.
    fn store(&self, addr: u16, value: u8);
}

/// The memory-mapped register window of the controller.
#[derive(Debug)]
pub struct XramSpace {
    base: NonNull<u8>,
    window: Range<u16>,
}

impl XramSpace {
    /// Maps the register window `window`.
    ///
    /// # Safety
    ///
    /// The caller must ensure that `window` is the register window of the
    /// running chip, that its addresses are identity-mapped, and that no
    /// other `XramSpace` or code accesses the window concurrently.
    pub unsafe fn new(window: Range<u16>) -> Result<Self> {
        if window.is_empty() {
            return Err(Error::InvalidArgs);
        }
        let base = NonNull::new(ptr::with_exposed_provenance_mut(window.start as usize))
            .ok_or(Error::InvalidArgs)?;

        Ok(Self { base, window })
    }

    /// Returns the mapped window.
    pub fn window(&self) -> Range<u16> {
        self.window.clone()
    }

    /// # Panics
    ///
    /// This method will panic if `addr` is outside the window.
    fn reg_ptr(&self, addr: u16) -> VolatilePtr<'_, u8> {
        assert!(
            self.window.contains(&addr),
            "register {:#06x} is outside the window {:#06x?}",
            addr,
            self.window
        );
        let offset = usize::from(addr - self.window.start);
        // SAFETY: The address is inside the window whose validity is
        // guaranteed by the caller of `XramSpace::new`.
        unsafe { VolatilePtr::new(self.base.add(offset)) }
    }
}

impl RegisterSpace for XramSpace {
    fn load(&self, addr: u16) -> u8 {
        self.reg_ptr(addr).read()
    }

    fn store(&self, addr: u16, value: u8) {
        self.reg_ptr(addr).write(value);
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn empty_window_is_rejected() {
        // SAFETY: An empty window is never dereferenced.
        let result = unsafe { XramSpace::new(0x1600..0x1600) };
        assert_eq!(result.unwrap_err(), Error::InvalidArgs);
    }

    #[test]
    fn null_window_is_rejected() {
        // SAFETY: A null window is never dereferenced.
        let result = unsafe { XramSpace::new(0x0000..0x0100) };
        assert_eq!(result.unwrap_err(), Error::InvalidArgs);
    }

    #[test]
    fn window_is_kept() {
        // SAFETY: The space is constructed but never accessed.
        let space = unsafe { XramSpace::new(REGISTER_WINDOW) }.unwrap();
        assert_eq!(space.window(), REGISTER_WINDOW);
    }
}
