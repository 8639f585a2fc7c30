//! Counting brake taps inside the observation window.
//!
//! The window is dormant until the first rising edge of the debounced input. Every further edge
//! restarts it, so the count is evaluated once the brake has been left alone for a full window.

/// Number of rising edges seen in the current window. Saturates at [`u8::MAX`].
#[derive(Default, Debug, Ord, PartialOrd, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct EdgeCount(u8);

impl EdgeCount {
    /// Get current count
    pub fn get(&self) -> u8 {
        self.0
    }

    /// Count one more edge. Stays at [`u8::MAX`] instead of wrapping.
    pub fn increment(&mut self) {
        match self.0.checked_add(1) {
            Some(count) => self.0 = count,
            None => warn!("edge count saturated at {=u8}", self.0),
        }
    }

    /// Whether the window is open
    pub fn is_observing(&self) -> bool {
        self.0 > 0
    }
}

/// Cycles elapsed since the most recent rising edge
#[derive(Default, Debug, Ord, PartialOrd, Eq, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WindowTimer(u16);

impl WindowTimer {
    /// Get elapsed cycles
    pub fn get(&self) -> u16 {
        self.0
    }

    /// Advance by one cycle
    pub fn tick(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Restart from zero
    pub fn restart(&mut self) {
        self.0 = 0;
    }
}

/// Edge-counting state machine fed with the debounced brake state once per cycle
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapCounter {
    /// Rising edges in the current window
    edges: EdgeCount,
    /// Time since the most recent edge
    window: WindowTimer,
    /// Debounced state of the previous cycle
    prev_state: bool,
    /// Cycles of quiet after the most recent edge before the window expires
    window_cycles: u16,
}

impl TapCounter {
    /// Idle counter that expires `window_cycles` cycles after the most recent edge.
    ///
    /// # Panics
    ///
    /// If `window_cycles` is zero, which would expire an empty window on every cycle.
    pub const fn new(window_cycles: u16) -> Self {
        assert!(window_cycles > 0, "window must last at least one cycle");
        Self {
            edges: EdgeCount(0),
            window: WindowTimer(0),
            prev_state: false,
            window_cycles,
        }
    }

    /// Feed the current debounced state.
    ///
    /// Returns the final tap count when the window expires on this cycle. The counter is idle
    /// again afterwards, whatever the count was.
    pub fn update(&mut self, state: bool) -> Option<EdgeCount> {
        if !self.prev_state && state {
            self.edges.increment();
            self.window.restart();
            debug!("tap {=u8}: window restarted", self.edges.get());
        }

        if self.edges.is_observing() {
            self.window.tick();
        }

        let expired = if self.window.get() >= self.window_cycles {
            let taps = self.edges;
            info!("window expired after {=u8} taps", taps.get());
            self.edges = EdgeCount::default();
            self.window.restart();
            Some(taps)
        } else {
            None
        };

        self.prev_state = state;
        expired
    }

    /// Rising edges counted in the current window
    pub fn edges(&self) -> EdgeCount {
        self.edges
    }

    /// Cycles since the most recent edge
    pub fn window(&self) -> WindowTimer {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u16 = 500;

    /// Feed `state` for `cycles` cycles, returning the cycle offset and count of any expiry
    fn hold(counter: &mut TapCounter, state: bool, cycles: usize) -> Option<(usize, u8)> {
        let mut expired = None;
        for cycle in 0..cycles {
            if let Some(taps) = counter.update(state) {
                assert!(expired.is_none(), "window expired twice");
                expired = Some((cycle, taps.get()));
            }
        }
        expired
    }

    #[test]
    fn idle_window_never_advances() {
        let mut counter = TapCounter::new(WINDOW);
        assert_eq!(hold(&mut counter, false, 10_000), None);
        assert_eq!(counter.edges().get(), 0);
        assert_eq!(counter.window().get(), 0);
    }

    #[test]
    fn held_input_counts_one_edge() {
        let mut counter = TapCounter::new(WINDOW);
        assert_eq!(counter.update(true), None);
        assert_eq!(counter.edges().get(), 1);
        assert_eq!(counter.window().get(), 1);

        // Expires on the 500th cycle counted from the edge cycle itself
        assert_eq!(hold(&mut counter, true, 499), Some((498, 1)));
        assert_eq!(counter.edges().get(), 0);
        assert_eq!(counter.window().get(), 0);

        // Still held: no new edge, window stays dormant
        assert_eq!(hold(&mut counter, true, 2_000), None);
    }

    #[test]
    fn every_edge_restarts_window() {
        let mut counter = TapCounter::new(WINDOW);
        counter.update(true);
        assert_eq!(hold(&mut counter, false, 400), None);
        assert_eq!(counter.window().get(), 401);

        counter.update(true);
        assert_eq!(counter.edges().get(), 2);
        assert_eq!(counter.window().get(), 1);

        assert_eq!(hold(&mut counter, false, 499), Some((498, 2)));
    }

    #[test]
    fn edge_on_expiry_cycle_postpones_expiry() {
        let mut counter = TapCounter::new(WINDOW);
        counter.update(true);
        // 498 more cycles: window at 499, one short of expiry
        assert_eq!(hold(&mut counter, false, 498), None);
        assert_eq!(counter.window().get(), 499);

        // The cycle that would have expired the window carries a new edge instead
        assert_eq!(counter.update(true), None);
        assert_eq!(counter.window().get(), 1);
        assert_eq!(counter.edges().get(), 2);
    }

    #[test]
    fn edge_count_saturates() {
        let mut counter = TapCounter::new(WINDOW);
        for _ in 0..300 {
            counter.update(true);
            counter.update(false);
        }
        assert_eq!(counter.edges().get(), u8::MAX);

        assert_eq!(hold(&mut counter, false, WINDOW as usize), Some((497, u8::MAX)));
        assert_eq!(counter.edges(), EdgeCount::default());
    }

    #[test]
    #[should_panic(expected = "window must last at least one cycle")]
    fn empty_window_is_rejected() {
        TapCounter::new(0);
    }

    #[test]
    fn window_timer_saturates() {
        let mut timer = WindowTimer(u16::MAX - 1);
        timer.tick();
        timer.tick();
        assert_eq!(timer.get(), u16::MAX);
    }
}
