//! The per-cycle control loop: debounce, count taps, fire an output.
use embedded_hal::{
    delay::DelayNs,
    digital::{InputPin, OutputPin},
};

use crate::{
    components::{Pulse, RemoteOutputs},
    config::Timing,
    debounce::Debouncer,
    taps::TapCounter,
};

/// All state carried from one cycle to the next.
///
/// [`Controller::step`] is the entire decision made each cycle. It touches no hardware, so any
/// input sequence can be replayed against it.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Controller {
    /// Loop timing and pulse durations
    timing: Timing,
    /// Brake input filter
    debouncer: Debouncer,
    /// Observation window
    taps: TapCounter,
}

impl Controller {
    /// Boot state: input released, no taps, window dormant.
    pub const fn new(timing: Timing) -> Self {
        Self {
            timing,
            debouncer: Debouncer::new(),
            taps: TapCounter::new(timing.window_cycles()),
        }
    }

    /// Run one cycle on a raw brake sample. Returns the pulse to fire, if the window expired on a
    /// tap count that maps to an output.
    pub fn step(&mut self, raw: bool) -> Option<Pulse> {
        let state = self.debouncer.update(raw);
        #[cfg(feature = "trace_cycles")]
        debug!("raw {=bool} debounced {=bool}", raw, state);

        self.taps
            .update(state)
            .and_then(|taps| self.timing.pulse_for(taps.get()))
    }

    /// Debounced brake state
    pub fn is_pressed(&self) -> bool {
        self.debouncer.is_high()
    }

    /// Taps counted in the open window
    pub fn edge_count(&self) -> u8 {
        self.taps.edges().get()
    }

    /// Cycles since the most recent tap
    pub fn window_cycles(&self) -> u16 {
        self.taps.window().get()
    }

    /// Timing this controller was built with
    pub fn timing(&self) -> &Timing {
        &self.timing
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(Timing::DEFAULT)
    }
}

/// Binds a [`Controller`] to the brake input, the output pins and a blocking delay.
///
/// The delay owns the execution context: while a pulse or the cycle delay runs, nothing else
/// happens.
pub struct Remote<I, O, D> {
    /// Brake-light sense input
    brake: I,
    /// Output 1/2/3
    outputs: RemoteOutputs<O>,
    /// Blocking delay for pulses and the cycle period
    delay: D,
    /// Loop state
    controller: Controller,
}

impl<I, O, D> Remote<I, O, D>
where
    I: InputPin,
    O: OutputPin<Error = I::Error>,
    D: DelayNs,
{
    /// Assemble the loop. `outputs` are expected to be low already, see [`RemoteOutputs::init`].
    pub fn new(brake: I, outputs: RemoteOutputs<O>, delay: D, timing: Timing) -> Self {
        Self {
            brake,
            outputs,
            delay,
            controller: Controller::new(timing),
        }
    }

    /// One loop iteration: sample the brake, step the controller, fire the chosen pulse, release
    /// every output and wait out the cycle period.
    ///
    /// Returns the pulse fired on this cycle. A pin error is returned only after the outputs have
    /// been released and the cycle period has passed.
    pub fn cycle(&mut self) -> Result<Option<Pulse>, I::Error> {
        let raw = self.brake.is_high()?;
        let fired = self.controller.step(raw);

        let pulsed = match fired {
            Some(pulse) => self.outputs.pulse(pulse, &mut self.delay),
            None => Ok(()),
        };
        // Outputs never stay asserted into the next cycle
        let released = self.outputs.all_low();

        self.delay.delay_ms(self.controller.timing().cycle_ms());
        pulsed.and(released)?;
        Ok(fired)
    }

    /// Loop state, for inspection
    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    /// Release the hardware
    pub fn free(self) -> (I, RemoteOutputs<O>, D) {
        (self.brake, self.outputs, self.delay)
    }
}
