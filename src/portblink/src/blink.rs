use embedded_hal::delay::DelayNs;
use portblink_debug::log::{debug, info, trace};
use portblink_regs::{Bit, Direction, PortBlock, RegisterAccess};

use crate::BlinkConfig;

/// Configures the direction registers of both ports.
///
/// The primary port's direction register is overwritten with `config.pattern`. Bit 0 of the
/// secondary port's direction register is set, its other bits are left as they are.
pub fn init<A: RegisterAccess>(
    primary: &PortBlock<'_, A>,
    secondary: &PortBlock<'_, A>,
    config: &BlinkConfig,
) {
    info!(
        "port at {}: direction {}",
        primary.base(),
        config.pattern
    );
    primary.ddr().write(config.pattern);

    // Pin 0 of the secondary port is never driven afterwards.
    debug!("port at {}: pin 0 set to output, unused", secondary.base());
    secondary.set_direction(Bit::Bit0, Direction::Output);
}

/// One half-period of the toggle loop.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// The pattern is driven.
    High,
    /// All pins are driven low.
    Low,
}

impl Phase {
    /// Returns the output register value for this phase.
    pub const fn output(self, pattern: u8) -> u8 {
        match self {
            Phase::High => pattern,
            Phase::Low => 0x00,
        }
    }

    /// Returns the phase following this one.
    pub const fn next(self) -> Self {
        match self {
            Phase::High => Phase::Low,
            Phase::Low => Phase::High,
        }
    }

    /// Returns a short lowercase name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Phase::High => "high",
            Phase::Low => "low",
        }
    }
}

/// Alternates the output register of a port between the pattern and zero.
pub struct Blinker<'a, A: RegisterAccess, D: DelayNs> {
    port: PortBlock<'a, A>,
    delay: D,
    config: BlinkConfig,
    phase: Phase,
    cycles: u32,
}

impl<'a, A: RegisterAccess, D: DelayNs> Blinker<'a, A, D> {
    /// Creates a blinker starting in [`Phase::High`].
    ///
    /// Does not touch any register until the first [`Blinker::step()`].
    pub fn new(port: PortBlock<'a, A>, delay: D, config: BlinkConfig) -> Self {
        Self {
            port,
            delay,
            config,
            phase: Phase::High,
            cycles: 0,
        }
    }

    /// Returns the phase applied by the next [`Blinker::step()`].
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the number of completed high+low periods (wrapping).
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Applies the current phase, blocks for the hold time and advances to the next phase.
    ///
    /// Returns the phase that was held.
    pub fn step(&mut self) -> Phase {
        let phase = self.phase;
        trace!("phase {}", phase.as_str());

        self.port.port().write(phase.output(self.config.pattern));
        self.delay.delay_ms(self.config.hold_ms);

        if phase == Phase::Low {
            self.cycles = self.cycles.wrapping_add(1);
        }
        self.phase = phase.next();
        phase
    }

    /// Toggles forever.
    pub fn run(mut self) -> ! {
        loop {
            self.step();
        }
    }
}

/// Configures both ports, then toggles the primary port forever.
pub fn blink_forever<A: RegisterAccess, D: DelayNs>(
    primary: PortBlock<'_, A>,
    secondary: PortBlock<'_, A>,
    delay: D,
    config: BlinkConfig,
) -> ! {
    init(&primary, &secondary, &config);
    Blinker::new(primary, delay, config).run()
}
