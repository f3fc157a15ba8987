// SPDX-License-Identifier: MPL-2.0

//! Power-on bring-up of the embedded controller.
//!
//! [`run`] is everything the firmware does: it walks the [`Stage`]s once,
//! in their fixed order, and then parks the controller in the idle loop.

#![no_std]
#![deny(unsafe_code)]

#[cfg(not(target_os = "none"))]
pub mod board;
mod config;
mod sequence;

use ecstd::prelude::*;

pub use self::{
    config::BootConfig,
    sequence::{PATCH_PIN, Stage, bring_up, post_init_patch},
};

/// Installs the logger according to `config`.
pub fn init(config: &BootConfig) -> Result<()> {
    ecstd::logger::init(config.log_level)
}

/// Brings the controller up and enters the idle loop.
pub fn run<S, P>(space: &S, platform: &P) -> !
where
    S: RegisterSpace + ?Sized,
    P: Platform + ?Sized,
{
    match ec_gctrl::probe(space) {
        Ok(chip) => log::info!("chip: {}", chip),
        Err(err) => log::warn!("chip probe failed: {:?}", err),
    }

    bring_up(space);
    log::info!("bring-up complete");

    platform.idle()
}
