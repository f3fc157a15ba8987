// SPDX-License-Identifier: MPL-2.0

//! The firmware image.
//!
//! On the chip this is a `no_std` image whose `main` is jumped to by the
//! startup code. On a hosted target the same bring-up runs against a
//! simulated IT5570 and the resulting register state is printed.

#![cfg_attr(target_os = "none", no_std, no_main)]

#[cfg(target_os = "none")]
mod bare {
    use core::panic::PanicInfo;

    use ec_kernel::BootConfig;
    use ecstd::{
        io::{REGISTER_WINDOW, XramSpace},
        platform::{BareMetal, Platform},
    };

    #[unsafe(no_mangle)]
    pub extern "C" fn main() -> ! {
        if let Err(err) = ec_kernel::init(&BootConfig::from_build_env()) {
            log::warn!("logger: {:?}", err);
        }

        // SAFETY: This is the only `XramSpace`, the window is the chip's
        // register window, and nothing else runs during bring-up.
        let space = match unsafe { XramSpace::new(REGISTER_WINDOW) } {
            Ok(space) => space,
            Err(err) => {
                log::error!("cannot map registers: {:?}", err);
                BareMetal.reset()
            }
        };

        ec_kernel::run(&space, &BareMetal)
    }

    #[panic_handler]
    fn panic(info: &PanicInfo) -> ! {
        log::error!("panic: {}", info);
        BareMetal.reset()
    }
}

#[cfg(not(target_os = "none"))]
fn main() -> std::process::ExitCode {
    use std::{
        panic::{self, AssertUnwindSafe},
        process::ExitCode,
    };

    use ec_kernel::{BootConfig, Stage, board::Board};
    use ecstd::sim::{SimPlatform, Trap, silence_traps};

    ecstd::console::inject_console(|args| eprint!("{}", args));
    if let Err(err) = ec_kernel::init(&BootConfig::from_build_env()) {
        eprintln!("logger: {:?}", err);
    }

    // The idle loop is trapped by unwinding; keep it off the panic output.
    silence_traps();

    let space = Board::It5570.power_on();
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| ec_kernel::run(&space, &SimPlatform)));
    let trap = outcome.err().and_then(|payload| Trap::from_payload(&*payload));
    if trap != Some(Trap::Idle) {
        eprintln!("bring-up did not reach the idle loop: {:?}", trap);
        return ExitCode::FAILURE;
    }

    let groups = Stage::ORDER.iter().filter_map(|stage| stage.group());
    for group in groups.chain([&ec_ps2::INIT]) {
        println!("[{}]", group.name());
        for (reg, _) in group.writes() {
            println!("{:<10} {:#06x} = {:#04x}", reg.name(), reg.addr(), reg.read(&space));
        }
    }

    ExitCode::SUCCESS
}
