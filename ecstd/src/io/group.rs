// SPDX-License-Identifier: MPL-2.0

use super::{IoReg, RegisterSpace};
use crate::{Error, prelude::*};

/// The size of the address block owned by one peripheral.
pub const BLOCK_SIZE: u16 = 0x100;

/// The initialization procedure of one peripheral block.
///
/// The table is applied front to back. Every entry is a full 8-bit
/// overwrite; no entry reads the register first.
#[derive(Debug)]
pub struct RegisterGroup {
    name: &'static str,
    base: u16,
    writes: &'static [(IoReg, u8)],
}

impl RegisterGroup {
    /// Creates a group for the block at `base`.
    pub const fn new(name: &'static str, base: u16, writes: &'static [(IoReg, u8)]) -> Self {
        Self { name, base, writes }
    }

    /// Returns the name of the peripheral.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the base address of the peripheral block.
    pub const fn base(&self) -> u16 {
        self.base
    }

    /// Returns the `(register, value)` table in application order.
    pub const fn writes(&self) -> &'static [(IoReg, u8)] {
        self.writes
    }

    /// Checks that every register belongs to this block and that no two
    /// entries alias one address.
    ///
    /// Components evaluate this in a constant, so a malformed table is a
    /// build failure rather than a boot-time surprise.
    pub const fn check(&self) -> Result<()> {
        let mut i = 0;
        while i < self.writes.len() {
            let addr = self.writes[i].0.addr();
            if addr < self.base || addr - self.base >= BLOCK_SIZE {
                return Err(Error::OutOfBlock);
            }
            let mut j = i + 1;
            while j < self.writes.len() {
                if self.writes[j].0.addr() == addr {
                    return Err(Error::AliasedRegister);
                }
                j += 1;
            }
            i += 1;
        }
        Ok(())
    }

    /// Returns the value the table writes to the register at `addr`.
    pub const fn value_of(&self, addr: u16) -> Option<u8> {
        let mut i = 0;
        while i < self.writes.len() {
            if self.writes[i].0.addr() == addr {
                return Some(self.writes[i].1);
            }
            i += 1;
        }
        None
    }

    /// Writes every value of the table to its register, in order.
    pub fn apply<S: RegisterSpace + ?Sized>(&self, space: &S) {
        log::debug!(
            "{}: writing {} registers at {:#06x}",
            self.name,
            self.writes.len(),
            self.base
        );
        for (reg, value) in self.writes {
            reg.write(space, *value);
        }
    }
}
