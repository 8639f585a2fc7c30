//! One-time RP2040 setup: clocks, watchdog, pins and the delay timer.
//!
//! This is the only place that touches chip registers. The control loop only sees the
//! [`embedded_hal`] pins and delay handed out by [`Board::init`].
use defmt::{debug, info};
use embedded_hal::digital::PinState;
use rp2040_hal::{
    clocks::init_clocks_and_plls,
    gpio::{
        bank0::Gpio3, DynPinId, FunctionSioInput, FunctionSioOutput, Pin, Pins, PullDown, PullNone,
    },
    pac, Clock, Sio, Timer, Watchdog,
};

/// External high-speed crystal on the pico board is 12Mhz
pub const XOSC_FREQ_HZ: u32 = 12_000_000;

/// Brake-light sense input on GPIO3
pub type BrakePin = Pin<Gpio3, FunctionSioInput, PullNone>;
/// Output 1/2/3 on GPIO0/1/2
pub type RemotePin = Pin<DynPinId, FunctionSioOutput, PullDown>;

/// Peripherals the control loop runs on
pub struct Board {
    /// Debounced in software, Schmitt trigger enabled
    pub brake: BrakePin,
    /// Output 1, 2 and 3, all low
    pub outputs: [RemotePin; 3],
    /// 1 MHz system timer, used for every blocking wait
    pub timer: Timer,
}

impl Board {
    /// Panic message if the peripherals were already taken
    const NO_PERIPHERALS_PANIC_MSG: &'static str = "Peripherals have already been taken";
    /// Panic message if the crystal or PLLs fail to start
    const CLOCKS_PANIC_MSG: &'static str = "Unable to start crystal oscillator and PLLs";

    /// Configure the chip. Must be called exactly once, before the control loop starts.
    ///
    /// The watchdog is needed to bring up the clocks but is never started, so a long pulse can
    /// never reset the board.
    pub fn init() -> Self {
        let mut pac = pac::Peripherals::take().expect(Self::NO_PERIPHERALS_PANIC_MSG);
        let mut watchdog = Watchdog::new(pac.WATCHDOG);
        let sio = Sio::new(pac.SIO);

        let clocks = init_clocks_and_plls(
            XOSC_FREQ_HZ,
            pac.XOSC,
            pac.CLOCKS,
            pac.PLL_SYS,
            pac.PLL_USB,
            &mut pac.RESETS,
            &mut watchdog,
        )
        .ok()
        .expect(Self::CLOCKS_PANIC_MSG);
        info!(
            "System clock running at {=u32} Hz",
            clocks.system_clock.freq().to_Hz()
        );

        let pins = Pins::new(
            pac.IO_BANK0,
            pac.PADS_BANK0,
            sio.gpio_bank0,
            &mut pac.RESETS,
        );

        debug!("init brake input on GPIO3");
        let mut brake = pins.gpio3.into_floating_input();
        brake.set_schmitt_enabled(true);

        debug!("init outputs on GPIO0-2");
        let outputs = [
            pins.gpio0
                .into_push_pull_output_in_state(PinState::Low)
                .into_dyn_pin(),
            pins.gpio1
                .into_push_pull_output_in_state(PinState::Low)
                .into_dyn_pin(),
            pins.gpio2
                .into_push_pull_output_in_state(PinState::Low)
                .into_dyn_pin(),
        ];

        let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);

        Self {
            brake,
            outputs,
            timer,
        }
    }
}
