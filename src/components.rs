//! Output lines of the remote control
use embedded_hal::{delay::DelayNs, digital::OutputPin};

/// The three remote-control outputs. At most one is asserted per expired window.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Channel {
    /// Two presses
    Output1,
    /// Three presses
    Output2,
    /// Four presses
    Output3,
}

impl Channel {
    /// Index into [`RemoteOutputs`]
    const fn index(self) -> usize {
        match self {
            Channel::Output1 => 0,
            Channel::Output2 => 1,
            Channel::Output3 => 2,
        }
    }
}

/// A single output action: hold `channel` high for `duration_ms`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Pulse {
    /// Line to assert
    pub channel: Channel,
    /// How long the line stays high
    pub duration_ms: u32,
}

impl Pulse {
    /// Create a pulse
    pub const fn new(channel: Channel, duration_ms: u32) -> Self {
        Self {
            channel,
            duration_ms,
        }
    }
}

/// Controls the three output pins, indexed by [`Channel`]
pub struct RemoteOutputs<O> {
    /// Output 1, 2 and 3 in order
    pins: [O; 3],
}

impl<O: OutputPin> RemoteOutputs<O> {
    /// Take ownership of the output pins and drive all of them low.
    pub fn init(pins: [O; 3]) -> Result<Self, O::Error> {
        let mut outputs = Self { pins };
        outputs.all_low()?;
        Ok(outputs)
    }

    /// Assert `pulse.channel` and block for `pulse.duration_ms`.
    ///
    /// Nothing else runs while the delay is active, so brake presses during a pulse are not seen.
    /// The line is left high; [`RemoteOutputs::all_low`] releases it.
    pub fn pulse<D: DelayNs>(&mut self, pulse: Pulse, delay: &mut D) -> Result<(), O::Error> {
        info!("pulse {} for {=u32} ms", pulse.channel, pulse.duration_ms);
        self.pins[pulse.channel.index()].set_high()?;
        delay.delay_ms(pulse.duration_ms);
        Ok(())
    }

    /// Drive every output low. Each pin is attempted even if an earlier one fails; the first
    /// error is returned.
    pub fn all_low(&mut self) -> Result<(), O::Error> {
        self.pins
            .iter_mut()
            .map(OutputPin::set_low)
            .fold(Ok(()), Result::and)
    }

    /// Release the output pins
    pub fn free(self) -> [O; 3] {
        self.pins
    }
}
