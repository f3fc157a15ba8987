// SPDX-License-Identifier: MPL-2.0

//! Register I/O.
//!
//! Every peripheral of the controller is a block of byte-wide registers in
//! one flat address space. Software reaches them through two pieces:
//!  - [`RegisterSpace`], the privileged backend that performs the actual
//!    loads and stores (MMIO on hardware, [`crate::sim::SimSpace`] on a host);
//!  - [`IoReg`], a handle naming one register and restricting, through its
//!    access marker, whether it may be read, written, or both.
//!
//! Initialization procedures are [`RegisterGroup`]s: static tables of
//! `(register, value)` pairs applied in order.

mod access;
mod group;
mod reg;
mod space;

pub use self::{
    access::{ReadOnlyAccess, ReadWriteAccess, RegReadAccess, RegWriteAccess, WriteOnlyAccess},
    group::{BLOCK_SIZE, RegisterGroup},
    reg::IoReg,
    space::{REGISTER_WINDOW, RegisterSpace, XramSpace},
};
