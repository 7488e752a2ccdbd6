//! Firmware for the ATmega328P: port B blinks its odd pins, port D gets pin 0 as output.
//!
//! Built for any other architecture, the binary runs a few phases against RAM-backed registers
//! and logs the output register after each one.

#![cfg_attr(target_arch = "avr", no_std)]
#![cfg_attr(target_arch = "avr", no_main)]

#[cfg(target_arch = "avr")]
use panic_halt as _;

use portblink::{
    regs::{atmega328p, PortBlock, RegisterAccess},
    BlinkConfig,
};

fn ports<A: RegisterAccess>(access: &A) -> (PortBlock<'_, A>, PortBlock<'_, A>) {
    (
        PortBlock::new(access, atmega328p::PORTB),
        PortBlock::new(access, atmega328p::PORTD),
    )
}

#[cfg(target_arch = "avr")]
#[no_mangle]
pub extern "C" fn main() -> ! {
    use portblink::{regs::Mmio, BusyWait};

    // SAFETY: the port base addresses are the I/O registers of the ATmega328P, which this
    // binary is built for, and nothing else accesses them.
    let mmio = unsafe { Mmio::new() };
    let (primary, secondary) = ports(&mmio);

    portblink::blink_forever(primary, secondary, BusyWait::default(), BlinkConfig::DEFAULT)
}

#[cfg(not(target_arch = "avr"))]
mod dry_run {
    use portblink::{
        regs::{atmega328p, Address, PortBlock, RegisterFile},
        Blinker, DelayNs,
    };
    use portblink_debug::log::{info, warn};

    pub const WINDOW_SIZE: usize = 0x100;

    /// Window of RAM-backed registers starting at the lower of the two port bases.
    pub type Window = RegisterFile<WINDOW_SIZE>;

    pub const fn window_base(a: Address, b: Address) -> Address {
        if a < b {
            a
        } else {
            b
        }
    }

    pub fn window() -> Window {
        Window::new(window_base(atmega328p::PORTB, atmega328p::PORTD))
    }

    /// Returns whether all three registers of `port` are backed by `regs`.
    pub fn covers(regs: &Window, port: &PortBlock<'_, Window>) -> bool {
        [port.pin(), port.ddr(), port.port()]
            .iter()
            .all(|reg| regs.contains(reg.address()))
    }

    struct Sleep;

    impl DelayNs for Sleep {
        fn delay_ns(&mut self, ns: u32) {
            std::thread::sleep(std::time::Duration::from_nanos(u64::from(ns)));
        }
    }

    pub fn run(phases: usize) {
        let regs = window();
        let (primary, secondary) = super::ports(&regs);
        let config = super::BlinkConfig::DEFAULT;

        info!("register window at {}, {} bytes", regs.base(), WINDOW_SIZE);
        for port in [&primary, &secondary] {
            if !covers(&regs, port) {
                warn!(
                    "port at {} lies outside of the register window, its accesses are dropped",
                    port.base()
                );
            }
        }

        portblink::init(&primary, &secondary, &config);
        info!(
            "DDR at {} = {}, DDR at {} = {}",
            primary.ddr().address(),
            primary.ddr().read(),
            secondary.ddr().address(),
            secondary.ddr().read()
        );

        let mut blinker = Blinker::new(primary, Sleep, config);
        for _ in 0..phases {
            let phase = blinker.step();
            info!(
                "held {} for {} ms: PORT at {} = {}",
                phase.as_str(),
                config.hold_ms,
                primary.port().address(),
                primary.port().read()
            );
        }
    }
}

#[cfg(not(target_arch = "avr"))]
fn main() {
    const DRY_RUN_PHASES: usize = 4;

    #[cfg(feature = "log")]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("trace")).init();

    dry_run::run(DRY_RUN_PHASES);
}
