// SPDX-License-Identifier: MPL-2.0

use core::{fmt, marker::PhantomData};

use super::{
    RegisterSpace,
    access::{ReadWriteAccess, RegReadAccess, RegWriteAccess},
};

/// A byte-wide register at a fixed address of the register space.
///
/// The handle itself is inert: it only names an address. Loads and stores
/// happen against a [`RegisterSpace`], which is where the privilege lies.
/// The access marker `A` decides which of [`read`](Self::read),
/// [`write`](Self::write) and [`set_bits`](Self::set_bits) exist.
///
/// ```rust
/// use ecstd::io::{IoReg, RegisterSpace};
///
/// const SCRATCH: IoReg = IoReg::new("SCRATCH", 0x1000);
///
/// fn mark_ready(space: &impl RegisterSpace) {
///     SCRATCH.set_bits(space, 1 << 0);
/// }
/// ```
pub struct IoReg<A = ReadWriteAccess> {
    name: &'static str,
    addr: u16,
    access_marker: PhantomData<A>,
}

impl<A> IoReg<A> {
    /// Creates a handle for the register `name` at `addr`.
    pub const fn new(name: &'static str, addr: u16) -> Self {
        Self {
            name,
            addr,
            access_marker: PhantomData,
        }
    }

    /// Returns the register's name as spelled in the datasheet.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the register's address.
    pub const fn addr(&self) -> u16 {
        self.addr
    }
}

impl<A: RegReadAccess> IoReg<A> {
    /// Reads the register.
    #[inline]
    pub fn read<S: RegisterSpace + ?Sized>(&self, space: &S) -> u8 {
        space.load(self.addr)
    }
}

impl<A: RegWriteAccess> IoReg<A> {
    /// Overwrites all eight bits of the register.
    #[inline]
    pub fn write<S: RegisterSpace + ?Sized>(&self, space: &S, value: u8) {
        log::trace!("{} ({:#06x}) <- {:#04x}", self.name, self.addr, value);
        space.store(self.addr, value);
    }
}

impl<A: RegReadAccess + RegWriteAccess> IoReg<A> {
    /// Sets the bits of `mask`, keeping all other bits as they are.
    pub fn set_bits<S: RegisterSpace + ?Sized>(&self, space: &S, mask: u8) {
        let value = self.read(space) | mask;
        self.write(space, value);
    }
}

impl<A> Clone for IoReg<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for IoReg<A> {}

impl<A> fmt::Debug for IoReg<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{:#06x}", self.name, self.addr)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{io::ReadOnlyAccess, sim::SimSpace};

    const SCRATCH: IoReg = IoReg::new("SCRATCH", 0x1000);
    const CHIP_ID: IoReg<ReadOnlyAccess> = IoReg::new("ECHIPID1", 0x2000);

    #[test]
    fn write_overwrites_whole_byte() {
        let space = SimSpace::new();
        space.preset(SCRATCH.addr(), 0xFF);

        SCRATCH.write(&space, 0x48);

        assert_eq!(SCRATCH.read(&space), 0x48);
        assert_eq!(space.writes(), [(0x1000, 0x48)]);
    }

    #[test]
    fn set_bits_keeps_existing_bits() {
        let space = SimSpace::new();
        space.preset(SCRATCH.addr(), 0x01);

        SCRATCH.set_bits(&space, 1 << 7);

        assert_eq!(SCRATCH.read(&space), 0x81);
    }

    #[test]
    fn read_only_register_reads() {
        let space = SimSpace::new();
        space.preset(CHIP_ID.addr(), 0x85);

        assert_eq!(CHIP_ID.read(&space), 0x85);
        assert!(space.writes().is_empty());
    }

    #[test]
    fn debug_shows_name_and_address() {
        assert_eq!(alloc::format!("{:?}", SCRATCH), "SCRATCH@0x1000");
    }
}
