// Per-button gesture state machine
//
//   Idle --(held for debounce)--> Pressed --(held for long press)--> LongPressed
//     ^                              |                                  |
//     +------- Click (on release) ---+------- Release (on release) -----+
//
// Fed one "pressed now?" sample per tick.  All times are whole ticks.
//
// Noise on the ladder shows up as single samples landing in a gap
// between bands.  Any unpressed run shorter than the debounce window is
// bridged: it neither resets a press that is still being debounced nor
// ends one already confirmed.  A press ends only after the debounce
// window of consecutive unpressed samples.

use crate::error::ConfigError;

/// Events emitted by a [`GestureDetector`].  At most one per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// Press survived the debounce window.
    PressStart,
    /// Released before the long-press threshold.
    Click,
    /// Held up to the long-press threshold.  Fires once per press.
    LongPressStart,
    /// Released after a long press.  Never followed by a click.
    Release,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Pressed,
    LongPressed,
}

/// Debounce window and long-press threshold, in poll ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    debounce_ticks: u32,
    long_press_ticks: u32,
}

impl Timing {
    /// Converts millisecond thresholds to ticks of `poll_ms`, rounding up.
    pub fn from_millis(
        poll_ms: u32,
        debounce_ms: u32,
        long_press_ms: u32,
    ) -> Result<Self, ConfigError> {
        let invalid = ConfigError::InvalidTiming {
            poll_ms,
            debounce_ms,
            long_press_ms,
        };
        if poll_ms == 0 || debounce_ms == 0 || debounce_ms >= long_press_ms {
            return Err(invalid);
        }

        let debounce_ticks = debounce_ms.div_ceil(poll_ms);
        let long_press_ticks = long_press_ms.div_ceil(poll_ms);
        // a poll period this coarse cannot tell the two apart
        if debounce_ticks >= long_press_ticks {
            return Err(invalid);
        }

        Ok(Self {
            debounce_ticks,
            long_press_ticks,
        })
    }

    pub const fn debounce_ticks(&self) -> u32 {
        self.debounce_ticks
    }

    pub const fn long_press_ticks(&self) -> u32 {
        self.long_press_ticks
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GestureDetector {
    timing: Timing,
    phase: Phase,
    // tick of first contact of the current (candidate) press
    press_start: u32,
    // pressed samples seen while debouncing
    held: u32,
    // consecutive unpressed samples
    gap: u32,
}

impl GestureDetector {
    pub const fn new(timing: Timing) -> Self {
        Self {
            timing,
            phase: Phase::Idle,
            press_start: 0,
            held: 0,
            gap: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// True while a press is pending confirmation.
    pub fn is_debouncing(&self) -> bool {
        self.phase == Phase::Idle && self.held > 0
    }

    /// Advance by one sample taken at `tick`.
    pub fn update(&mut self, pressed: bool, tick: u32) -> Option<Gesture> {
        match (self.phase, pressed) {
            (Phase::Idle, true) => {
                if self.held == 0 {
                    self.press_start = tick;
                }
                self.held = self.held.saturating_add(1);
                self.gap = 0;

                if self.held >= self.timing.debounce_ticks {
                    self.phase = Phase::Pressed;
                    return Some(Gesture::PressStart);
                }
                None
            }
            (Phase::Idle, false) => {
                if self.held > 0 {
                    self.gap += 1;
                    if self.gap >= self.timing.debounce_ticks {
                        self.reset();
                    }
                }
                None
            }
            (Phase::Pressed, true) => {
                self.gap = 0;
                if self.elapsed(tick) >= self.timing.long_press_ticks {
                    self.phase = Phase::LongPressed;
                    return Some(Gesture::LongPressStart);
                }
                None
            }
            (Phase::LongPressed, true) => {
                self.gap = 0;
                None
            }
            (Phase::Pressed | Phase::LongPressed, false) => {
                self.gap += 1;
                if self.gap < self.timing.debounce_ticks {
                    return None;
                }
                let gesture = if self.phase == Phase::Pressed {
                    Gesture::Click
                } else {
                    Gesture::Release
                };
                self.reset();
                Some(gesture)
            }
        }
    }

    // inclusive: a press sampled on ticks 1..=k has lasted k ticks
    fn elapsed(&self, tick: u32) -> u32 {
        tick.wrapping_sub(self.press_start).wrapping_add(1)
    }

    fn reset(&mut self) {
        self.phase = Phase::Idle;
        self.held = 0;
        self.gap = 0;
    }
}
