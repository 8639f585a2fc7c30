//! Shift-register debouncing of the brake-light input.

/// Debounces a raw digital input sampled once per cycle.
///
/// The last 8 raw samples are kept in a shift register. The debounced state only flips once all 8
/// agree, so noise shorter than 8 cycles (16 ms with 2 ms cycles) never reaches the tap counter.
///
/// ```
/// use brake_tap_remote::debounce::Debouncer;
///
/// let mut debouncer = Debouncer::new();
/// for _ in 0..7 {
///     assert!(!debouncer.update(true));
/// }
/// assert!(debouncer.update(true));
///
/// // A single low sample is not enough to release it
/// assert!(debouncer.update(false));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Debouncer {
    /// Most recent raw sample in the LSB
    history: u8,
    /// Debounced output
    state: bool,
}

impl Debouncer {
    /// All 8 samples high
    const ALL_HIGH: u8 = 0xff;
    /// All 8 samples low
    const ALL_LOW: u8 = 0x00;

    /// Boot state: empty history, released.
    pub const fn new() -> Self {
        Self {
            history: Self::ALL_LOW,
            state: false,
        }
    }

    /// Shift in `raw` and return the debounced state.
    pub fn update(&mut self, raw: bool) -> bool {
        self.history = (self.history << 1) | raw as u8;

        match self.history {
            Self::ALL_HIGH => self.state = true,
            Self::ALL_LOW => self.state = false,
            _ => {}
        }
        self.state
    }

    /// Current debounced state, without sampling
    pub fn is_high(&self) -> bool {
        self.state
    }
}
