// SPDX-License-Identifier: MPL-2.0

/// The error type which is returned from the APIs of this crate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Error {
    /// An argument is malformed, e.g., an empty register window.
    InvalidArgs,
    /// A global facility (such as the logger) was initialized twice.
    AlreadyInitialized,
    /// A register lies outside the block of the group that writes it.
    OutOfBlock,
    /// Two entries of one group resolve to the same address.
    AliasedRegister,
    /// The hardware reports something this firmware does not support.
    Unsupported,
}
