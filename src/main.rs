//! Brake-tap remote controller firmware for the RP2040.
#![no_std]
#![no_main]
#![warn(missing_docs)]

use brake_tap_remote::{components::RemoteOutputs, config::Timing, controller::Remote};
use cortex_m::singleton;
use defmt::info;
#[allow(unused_imports)]
use defmt_rtt as _;
#[allow(unused_imports)]
use panic_probe as _;
use rp2040_hal::{entry, Timer};

use crate::board::{Board, BrakePin, RemotePin};

mod board;

/// Second-stage bootloader, from [rp2040-boot2](https://docs.rs/rp2040-boot2)
#[link_section = ".boot2"]
#[used]
pub static BOOT2: [u8; 256] = rp2040_boot2::BOOT_LOADER_W25Q080;

/// The control loop as wired on this board
type BoardRemote = Remote<BrakePin, RemotePin, Timer>;

/// Main operation loop
#[entry]
fn main() -> ! {
    info!("Brake remote startup");
    let board = Board::init();

    let outputs = match RemoteOutputs::init(board.outputs) {
        Ok(outputs) => outputs,
        Err(never) => match never {},
    };
    let remote = singleton!(
        : BoardRemote = Remote::new(board.brake, outputs, board.timer, Timing::DEFAULT)
    )
    .expect("Control loop has already been created");

    info!(
        "Observing brake taps: {=u32} ms cycles, {=u16} cycle window",
        Timing::DEFAULT.cycle_ms(),
        Timing::DEFAULT.window_cycles()
    );
    loop {
        // GPIO on the RP2040 cannot fail
        match remote.cycle() {
            Ok(_) => {}
            Err(never) => match never {},
        }
    }
}
