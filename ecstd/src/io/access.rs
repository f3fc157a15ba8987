// SPDX-License-Identifier: MPL-2.0

//! Access markers for [`IoReg`](super::IoReg).

/// The register may only be read (e.g., chip identification).
pub struct ReadOnlyAccess;
/// The register may only be written.
pub struct WriteOnlyAccess;
/// The register may be read and written.
pub struct ReadWriteAccess;

/// Markers that permit loads.
pub trait RegReadAccess {}
/// Markers that permit stores.
pub trait RegWriteAccess {}

impl RegReadAccess for ReadOnlyAccess {}
impl RegReadAccess for ReadWriteAccess {}
impl RegWriteAccess for WriteOnlyAccess {}
impl RegWriteAccess for ReadWriteAccess {}
