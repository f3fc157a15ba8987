// SPDX-License-Identifier: MPL-2.0

//! A host-side model of the controller, for tests and for the host build of
//! the firmware.
//!
//! [`SimSpace`] is a 64 KiB external RAM image that journals every store, so
//! a test can check both the final register state and the order in which it
//! was reached. A space built with [`SimSpace::strict`] only implements the
//! registers it is told about and panics on any other access, like the
//! silicon's undecoded addresses would fault a simulator. [`SimPlatform`]
//! traps the terminal control transfers instead of performing them.

use alloc::{boxed::Box, collections::BTreeMap, vec, vec::Vec};
use core::ops::RangeInclusive;

use spin::{Mutex, Once};

use crate::{io::RegisterSpace, platform::Platform};

/// A simulated register space.
pub struct SimSpace {
    inner: Mutex<SimState>,
}

struct SimState {
    xram: Vec<u8>,
    regs: BTreeMap<u16, Masks>,
    /// Whether accesses outside `regs` are rejected.
    strict: bool,
    journal: Vec<(u16, u8)>,
}

/// How a register deviates from plain read-write memory.
#[derive(Clone, Copy, Default, Debug)]
struct Masks {
    /// Bits that stores cannot change.
    read_only: u8,
    /// Bits that a store of 1 clears and a store of 0 keeps.
    write_clear: u8,
    /// Bits that always load as 0.
    write_only: u8,
}

impl SimState {
    fn masks(&self, addr: u16) -> Masks {
        match self.regs.get(&addr) {
            Some(masks) => *masks,
            None if !self.strict => Masks::default(),
            None => panic!("unimplemented register {:#06x}", addr),
        }
    }
}

impl SimSpace {
    /// Creates a space where every byte is plain memory reading as zero.
    pub fn new() -> Self {
        Self::with_map(false)
    }

    /// Creates a space with no registers; see [`SimSpace::map`].
    pub fn strict() -> Self {
        Self::with_map(true)
    }

    fn with_map(strict: bool) -> Self {
        Self {
            inner: Mutex::new(SimState {
                xram: vec![0; 0x1_0000],
                regs: BTreeMap::new(),
                strict,
                journal: Vec::new(),
            }),
        }
    }

    /// Implements the register at `addr` as plain read-write memory.
    pub fn map(&self, addr: u16) {
        self.inner.lock().regs.entry(addr).or_default();
    }

    /// Implements every register in `addrs`.
    pub fn map_range(&self, addrs: RangeInclusive<u16>) {
        for addr in addrs {
            self.map(addr);
        }
    }

    /// Returns whether the register at `addr` is implemented.
    pub fn is_mapped(&self, addr: u16) -> bool {
        let state = self.inner.lock();
        !state.strict || state.regs.contains_key(&addr)
    }

    /// Returns the addresses of the implemented registers, in order.
    pub fn registers(&self) -> Vec<u16> {
        self.inner.lock().regs.keys().copied().collect()
    }

    /// Sets the byte at `addr` as the hardware would at power-on.
    ///
    /// Presets bypass every mask and are not journaled.
    pub fn preset(&self, addr: u16, value: u8) {
        self.inner.lock().xram[usize::from(addr)] = value;
    }

    /// Makes the bits of `mask` at `addr` read-only, implementing the
    /// register if needed.
    pub fn protect(&self, addr: u16, mask: u8) {
        self.inner.lock().regs.entry(addr).or_default().read_only |= mask;
    }

    /// Makes the bits of `mask` at `addr` write-1-to-clear.
    pub fn write_clear(&self, addr: u16, mask: u8) {
        self.inner.lock().regs.entry(addr).or_default().write_clear |= mask;
    }

    /// Makes the bits of `mask` at `addr` load as 0.
    pub fn write_only(&self, addr: u16, mask: u8) {
        self.inner.lock().regs.entry(addr).or_default().write_only |= mask;
    }

    /// Returns every store performed so far, oldest first.
    pub fn writes(&self) -> Vec<(u16, u8)> {
        self.inner.lock().journal.clone()
    }

    /// Forgets the stores performed so far, keeping the register state.
    pub fn clear_journal(&self) {
        self.inner.lock().journal.clear();
    }
}

impl Default for SimSpace {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterSpace for SimSpace {
    fn load(&self, addr: u16) -> u8 {
        let state = self.inner.lock();
        let masks = state.masks(addr);
        state.xram[usize::from(addr)] & !masks.write_only
    }

    fn store(&self, addr: u16, value: u8) {
        let mut state = self.inner.lock();
        let masks = state.masks(addr);
        let slot = &mut state.xram[usize::from(addr)];
        let old = *slot;
        let kept = old & masks.read_only;
        let cleared = old & !value & masks.write_clear & !masks.read_only;
        let written = value & !(masks.read_only | masks.write_clear);
        *slot = kept | cleared | written;
        state.journal.push((addr, value));
    }
}

/// A terminal control transfer caught by [`SimPlatform`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Trap {
    /// The reset trampoline was taken.
    Reset,
    /// The idle loop was entered.
    Idle,
}

/// A platform whose terminal transfers unwind with a [`Trap`] payload.
///
/// Catch the unwind with [`std::panic::catch_unwind`] and downcast the
/// payload to learn which transfer happened.
#[derive(Debug, Default)]
pub struct SimPlatform;

impl Platform for SimPlatform {
    fn reset(&self) -> ! {
        log::info!("reset trampoline taken");
        std::panic::panic_any(Trap::Reset)
    }

    fn idle(&self) -> ! {
        log::info!("entering idle loop");
        std::panic::panic_any(Trap::Idle)
    }
}

impl Trap {
    /// Extracts the trap from the payload of a caught unwind.
    pub fn from_payload(payload: &(dyn core::any::Any + Send)) -> Option<Self> {
        payload.downcast_ref::<Trap>().copied()
    }
}

/// Keeps [`Trap`] unwinds off the panic output.
///
/// Other panics still reach the previously installed hook. Installing more
/// than once has no further effect.
pub fn silence_traps() {
    static INSTALLED: Once = Once::new();
    INSTALLED.call_once(|| {
        let default_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if Trap::from_payload(info.payload()).is_none() {
                default_hook(info);
            }
        }));
    });
}

#[cfg(test)]
mod test {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use super::*;

    #[test]
    fn store_is_journaled_and_visible() {
        let space = SimSpace::new();
        space.store(0x1601, 0x80);
        space.store(0x1600, 0x04);

        assert_eq!(space.load(0x1601), 0x80);
        assert_eq!(space.writes(), [(0x1601, 0x80), (0x1600, 0x04)]);
    }

    #[test]
    fn preset_is_not_journaled() {
        let space = SimSpace::new();
        space.preset(0x1607, 0x01);

        assert_eq!(space.load(0x1607), 0x01);
        assert!(space.writes().is_empty());
    }

    #[test]
    fn read_only_bits_survive_stores() {
        let space = SimSpace::new();
        space.preset(0x2006, 0x02);
        space.protect(0x2006, 0x03);

        space.store(0x2006, 0x84);

        assert_eq!(space.load(0x2006), 0x86);
        assert_eq!(space.writes(), [(0x2006, 0x84)]);
    }

    #[test]
    fn write_clear_bits_clear_on_one() {
        let space = SimSpace::new();
        space.preset(0x2006, 0x43);
        space.write_clear(0x2006, 0x03);

        space.store(0x2006, 0x81);

        assert_eq!(space.load(0x2006), 0x82);
    }

    #[test]
    fn write_only_bits_load_as_zero() {
        let space = SimSpace::new();
        space.write_only(0x200B, 0xFF);

        space.store(0x200B, 0x5A);

        assert_eq!(space.load(0x200B), 0x00);
        assert_eq!(space.writes(), [(0x200B, 0x5A)]);
    }

    #[test]
    fn strict_space_implements_mapped_registers() {
        let space = SimSpace::strict();
        space.map(0x1506);
        space.map_range(0x1610..=0x1617);

        space.store(0x1506, 0x41);
        space.store(0x1617, 0x44);

        assert_eq!(space.load(0x1506), 0x41);
        assert!(space.is_mapped(0x1610));
        assert!(!space.is_mapped(0x1507));
        assert_eq!(space.registers().len(), 9);
    }

    #[test]
    #[should_panic(expected = "unimplemented register 0x1517")]
    fn strict_space_rejects_unmapped_store() {
        let space = SimSpace::strict();
        space.map(0x1516);
        space.store(0x1517, 0x41);
    }

    #[test]
    #[should_panic(expected = "unimplemented register 0x1601")]
    fn strict_space_rejects_unmapped_load() {
        let space = SimSpace::strict();
        space.load(0x1601);
    }

    #[test]
    fn clear_journal_keeps_state() {
        let space = SimSpace::new();
        space.store(0x1300, 0x48);
        space.clear_journal();

        assert!(space.writes().is_empty());
        assert_eq!(space.load(0x1300), 0x48);
    }

    #[test]
    fn platform_traps_reset() {
        silence_traps();
        let payload = catch_unwind(AssertUnwindSafe(|| SimPlatform.reset())).unwrap_err();
        assert_eq!(Trap::from_payload(&*payload), Some(Trap::Reset));
    }

    #[test]
    fn platform_traps_idle() {
        silence_traps();
        silence_traps();
        let payload = catch_unwind(AssertUnwindSafe(|| SimPlatform.idle())).unwrap_err();
        assert_eq!(Trap::from_payload(&*payload), Some(Trap::Idle));
    }
}
