//! Fixed timing of the control loop.
//!
//! Nothing here changes at runtime. The values are checked at compile time, so a bad edit fails
//! the build instead of producing a window that never expires.

use crate::components::{Channel, Pulse};

/// Timing parameters for the control loop, all in milliseconds.
///
/// Only [`Timing::new`] builds one, and it rejects any combination the window timer cannot
/// represent. Used in a `const`, a bad value fails the build.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timing {
    /// Nominal period of one loop cycle. Every sample, edge and window tick happens once per cycle.
    cycle_ms: u32,
    /// Cycles of quiet after the most recent press before the tap count is evaluated
    window_cycles: u16,
    /// Pulse length for [`Channel::Output1`] and [`Channel::Output2`]
    long_pulse_ms: u32,
    /// Pulse length for [`Channel::Output3`]
    short_pulse_ms: u32,
}

impl Timing {
    /// 2 ms cycles, a 1 s observation window, 1 s long pulses and 500 ms short pulses.
    pub const DEFAULT: Self = Self::new(2, 1000, 1000, 500);

    /// Build a timing set.
    ///
    /// # Panics
    ///
    /// If `cycle_ms` is zero, if `observation_ms` is shorter than one cycle, or if the window is
    /// longer than [`u16::MAX`] cycles.
    pub const fn new(
        cycle_ms: u32,
        observation_ms: u32,
        long_pulse_ms: u32,
        short_pulse_ms: u32,
    ) -> Self {
        assert!(cycle_ms > 0, "cycle period must be non-zero");
        let window_cycles = observation_ms / cycle_ms;
        assert!(
            window_cycles > 0,
            "observation window must last at least one cycle"
        );
        assert!(
            window_cycles <= u16::MAX as u32,
            "observation window does not fit the window timer"
        );

        Self {
            cycle_ms,
            window_cycles: window_cycles as u16,
            long_pulse_ms,
            short_pulse_ms,
        }
    }

    /// Nominal period of one loop cycle
    pub const fn cycle_ms(&self) -> u32 {
        self.cycle_ms
    }

    /// Number of cycles after the most recent press before the window expires.
    ///
    /// ```
    /// use brake_tap_remote::config::Timing;
    ///
    /// assert_eq!(Timing::DEFAULT.window_cycles(), 500);
    /// ```
    pub const fn window_cycles(&self) -> u16 {
        self.window_cycles
    }

    /// Output action for a window that expired after `taps` presses.
    ///
    /// A single press is ignored so that ordinary braking never triggers an output. Anything past
    /// four presses is ignored too.
    pub const fn pulse_for(&self, taps: u8) -> Option<Pulse> {
        match taps {
            2 => Some(Pulse::new(Channel::Output1, self.long_pulse_ms)),
            3 => Some(Pulse::new(Channel::Output2, self.long_pulse_ms)),
            4 => Some(Pulse::new(Channel::Output3, self.short_pulse_ms)),
            _ => None,
        }
    }
}

impl Default for Timing {
    fn default() -> Self {
        Self::DEFAULT
    }
}
