use embedded_hal::delay::DelayNs;

use crate::config::CPU_HZ;

// Processor cycles taken by one iteration of `spin_4_cycles`.
const CYCLES_PER_ITERATION: u64 = 4;

cfg_if::cfg_if! {
    if #[cfg(target_arch = "avr")] {
        /// Busy-waits for `count * 4` cycles. `count` must be non-zero.
        #[inline(always)]
        fn spin_4_cycles(count: u16) {
            // SAFETY: only decrements the register pair holding `count`; touches neither memory
            // nor the stack.
            unsafe {
                core::arch::asm!(
                    "1: sbiw {count}, 1",
                    "brne 1b",
                    count = inout(reg_iw) count => _,
                    options(nomem, nostack),
                );
            }
        }
    } else {
        // Keeps the same iteration count so that timing-independent behavior matches the
        // device build.
        fn spin_4_cycles(count: u16) {
            for _ in 0..count {
                core::hint::spin_loop();
            }
        }
    }
}

fn spin(mut iterations: u64) {
    while iterations > 0 {
        let chunk = u16::try_from(iterations).unwrap_or(u16::MAX);
        spin_4_cycles(chunk);
        iterations -= u64::from(chunk);
    }
}

/// Blocking delay that burns processor cycles.
///
/// Accuracy depends on `cpu_hz` matching the real processor clock, and on no interrupt
/// stealing cycles while waiting. Durations are rounded up to whole loop iterations.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BusyWait {
    cpu_hz: u32,
}

impl BusyWait {
    /// Creates a busy-wait delay for a processor clocked at `cpu_hz`.
    pub const fn new(cpu_hz: u32) -> Self {
        Self { cpu_hz }
    }

    /// Returns the processor clock this delay is calibrated for.
    pub const fn cpu_hz(&self) -> u32 {
        self.cpu_hz
    }

    fn iterations(&self, duration: u32, units_per_second: u64) -> u64 {
        let cycles_scaled = u64::from(duration) * u64::from(self.cpu_hz);
        cycles_scaled.div_ceil(units_per_second * CYCLES_PER_ITERATION)
    }
}

impl Default for BusyWait {
    /// Calibrated for [`CPU_HZ`].
    fn default() -> Self {
        Self::new(CPU_HZ)
    }
}

impl DelayNs for BusyWait {
    fn delay_ns(&mut self, ns: u32) {
        spin(self.iterations(ns, 1_000_000_000));
    }

    fn delay_us(&mut self, us: u32) {
        spin(self.iterations(us, 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        let per_ms = self.iterations(1, 1_000);
        for _ in 0..ms {
            spin(per_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iteration_counts() {
        let delay = BusyWait::new(16_000_000);
        // 16 MHz: 16_000 cycles per millisecond, 4 cycles per iteration.
        assert_eq!(delay.iterations(1, 1_000), 4_000);
        assert_eq!(delay.iterations(1_000, 1_000), 4_000_000);
        assert_eq!(delay.iterations(1, 1_000_000), 4);
        // 62.5 ns per cycle, so 100 ns rounds up to one iteration.
        assert_eq!(delay.iterations(100, 1_000_000_000), 1);
        assert_eq!(delay.iterations(0, 1_000_000_000), 0);
    }

    #[test]
    fn no_overflow_on_large_durations() {
        let delay = BusyWait::new(u32::MAX);
        let iterations = delay.iterations(u32::MAX, 1_000);
        assert!(iterations > u64::from(u32::MAX));
    }

    #[test]
    fn default_uses_configured_clock() {
        assert_eq!(BusyWait::default().cpu_hz(), CPU_HZ);
    }

    #[test]
    fn short_delays_return() {
        let mut delay = BusyWait::new(1_000_000);
        delay.delay_ns(0);
        delay.delay_ns(500);
        delay.delay_us(10);
        delay.delay_ms(1);
    }
}
