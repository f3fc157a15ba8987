// SPDX-License-Identifier: MPL-2.0

//! The prelude.

/// A specialized [`Result`] type for this crate.
///
/// [`Result`]: core::result::Result
pub type Result<T> = core::result::Result<T, crate::error::Error>;

pub use crate::{
    io::{IoReg, RegisterGroup, RegisterSpace},
    platform::Platform,
};
