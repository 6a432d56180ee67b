// Debounced, classified input from the ADC ladder and the BOOT button
//
// One call to `poll` is one tick:
//   1. one ADC conversion, decoded to at most one ladder button
//   2. one GPIO read for BOOT
//   3. every button's gesture detector advances by one sample
//   4. each gesture is dispatched to its handler before the next
//      button is looked at
//
// A failed read leaves the buttons on that source untouched for the
// tick.  Consecutive failures are counted and logged periodically.

use embedded_hal::digital::InputPin;
use log::{debug, info, warn};

use crate::board::button::{BandClassifier, ButtonId};
use crate::drivers::gesture::{Gesture, GestureDetector, Phase, Timing};
use crate::drivers::registry::{ButtonHandle, Registry};
use crate::drivers::sampler::{AnalogChannel, Sampler};
use crate::error::HardwareReadError;

/// Consecutive failed reads of one source between two warnings.
pub const READ_FAILURE_WARN_TICKS: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub button: ButtonId,
    pub gesture: Gesture,
}

/// Gestures produced by one tick, in poll order.  At most one per button.
#[derive(Debug, Clone, Copy)]
pub struct TickEvents {
    buf: [Option<Event>; ButtonId::COUNT],
    len: usize,
}

impl TickEvents {
    const fn new() -> Self {
        Self {
            buf: [None; ButtonId::COUNT],
            len: 0,
        }
    }

    fn push(&mut self, ev: Event) {
        if let Some(slot) = self.buf.get_mut(self.len) {
            *slot = Some(ev);
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Event> + '_ {
        self.buf[..self.len].iter().flatten().copied()
    }
}

/// Consecutive failed reads per source.  Reset by the next good read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadFailures {
    pub analog: u32,
    pub digital: u32,
}

pub struct InputDriver<A, P, C> {
    sampler: Sampler<A, P>,
    classifier: BandClassifier<'static>,
    detectors: [GestureDetector; ButtonId::COUNT],
    registry: Registry<C>,
    tick: u32,
    failures: ReadFailures,
}

impl<A, P, C> InputDriver<A, P, C>
where
    A: AnalogChannel,
    P: InputPin,
{
    pub fn new(
        sampler: Sampler<A, P>,
        classifier: BandClassifier<'static>,
        timing: Timing,
    ) -> Self {
        Self {
            sampler,
            classifier,
            detectors: [GestureDetector::new(timing); ButtonId::COUNT],
            registry: Registry::new(),
            tick: 0,
            failures: ReadFailures::default(),
        }
    }

    /// Handler registration for `id`.  Setup only.
    pub fn button(&mut self, id: ButtonId) -> ButtonHandle<'_, C> {
        self.registry.button(id)
    }

    /// Run one tick; handlers are called with `ctx`.
    pub fn poll(&mut self, ctx: &mut C) -> TickEvents {
        self.tick = self.tick.wrapping_add(1);
        let tick = self.tick;

        let ladder = match self.sampler.read_analog() {
            Ok(mv) => {
                recovered(&mut self.failures.analog, HardwareReadError::Analog);
                Some(self.classifier.classify(mv))
            }
            Err(e) => {
                failed(&mut self.failures.analog, e);
                None
            }
        };
        let boot = match self.sampler.read_digital() {
            Ok(pressed) => {
                recovered(&mut self.failures.digital, HardwareReadError::Digital);
                Some(pressed)
            }
            Err(e) => {
                failed(&mut self.failures.digital, e);
                None
            }
        };

        let mut events = TickEvents::new();
        for id in ButtonId::ALL {
            let sample = if id.is_analog() {
                ladder.map(|hit| hit == Some(id))
            } else {
                boot
            };
            let Some(pressed) = sample else {
                continue;
            };
            let Some(gesture) = self.detectors[id.index()].update(pressed, tick) else {
                continue;
            };

            debug!("input: {} {:?}", id, gesture);
            events.push(Event {
                button: id,
                gesture,
            });
            self.registry.dispatch(id, gesture, ctx);
        }
        events
    }

    pub fn phase(&self, id: ButtonId) -> Phase {
        self.detectors[id.index()].phase()
    }

    /// True while any button is inside its debounce window.
    pub fn is_debouncing(&self) -> bool {
        self.detectors.iter().any(GestureDetector::is_debouncing)
    }

    pub fn ticks(&self) -> u32 {
        self.tick
    }

    pub fn read_failures(&self) -> ReadFailures {
        self.failures
    }
}

fn failed(count: &mut u32, err: HardwareReadError) {
    *count = count.saturating_add(1);
    if *count % READ_FAILURE_WARN_TICKS == 0 {
        warn!("input: {} ({} ticks in a row)", err, count);
    }
}

fn recovered(count: &mut u32, source: HardwareReadError) {
    if *count >= READ_FAILURE_WARN_TICKS {
        info!("input: {:?} reads recovered after {} ticks", source, count);
    }
    *count = 0;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::button::{DEBOUNCE_MS, LONG_PRESS_MS, XY_DEVKIT_BANDS};
    use crate::drivers::sampler::ActiveLevel;
    use core::cell::Cell;
    use embedded_hal::digital::{ErrorKind, ErrorType};
    use std::rc::Rc;
    use std::vec::Vec;

    #[derive(Clone, Default)]
    struct Ladder(Rc<Cell<Option<u16>>>);

    impl AnalogChannel for Ladder {
        type Error = ();

        fn read_mv(&mut self) -> nb::Result<u16, ()> {
            self.0.get().ok_or(nb::Error::Other(()))
        }
    }

    // Active-low BOOT pin; `None` makes the read fail.
    #[derive(Clone)]
    struct BootPin(Rc<Cell<Option<bool>>>);

    impl ErrorType for BootPin {
        type Error = ErrorKind;
    }

    impl InputPin for BootPin {
        fn is_high(&mut self) -> Result<bool, ErrorKind> {
            self.is_low().map(|low| !low)
        }

        fn is_low(&mut self) -> Result<bool, ErrorKind> {
            self.0.get().ok_or(ErrorKind::Other)
        }
    }

    type Driver = InputDriver<Ladder, BootPin, Vec<Event>>;

    fn rig() -> (Driver, Rc<Cell<Option<u16>>>, Rc<Cell<Option<bool>>>) {
        let ladder = Ladder::default();
        let level = ladder.0.clone();
        level.set(Some(3000));
        let boot = Rc::new(Cell::new(Some(false)));
        let sampler = Sampler::new(ladder, BootPin(boot.clone()), ActiveLevel::Low);
        let classifier = BandClassifier::new(XY_DEVKIT_BANDS).unwrap();
        let timing = Timing::from_millis(10, DEBOUNCE_MS, LONG_PRESS_MS).unwrap();
        (InputDriver::new(sampler, classifier, timing), level, boot)
    }

    fn driver() -> (Driver, Rc<Cell<Option<u16>>>) {
        let (input, level, _) = rig();
        (input, level)
    }

    #[test]
    fn ladder_press_is_attributed_to_one_button() {
        let (mut input, level) = driver();
        let mut seen = Vec::new();
        level.set(Some(1650));
        for _ in 0..3 {
            seen.extend(input.poll(&mut Vec::new()).iter());
        }
        assert_eq!(
            seen,
            [Event {
                button: ButtonId::Play,
                gesture: Gesture::PressStart
            }]
        );
        assert_eq!(input.phase(ButtonId::Play), Phase::Pressed);
        assert_eq!(input.phase(ButtonId::Mode), Phase::Idle);
    }

    #[test]
    fn failed_adc_read_keeps_state() {
        let (mut input, level) = driver();
        input
            .button(ButtonId::Play)
            .on_click(|log: &mut Vec<Event>| {
                log.push(Event {
                    button: ButtonId::Play,
                    gesture: Gesture::Click,
                })
            });

        let mut log = Vec::new();
        level.set(Some(1650));
        for _ in 0..5 {
            input.poll(&mut log);
        }
        // a dead ADC is not a release
        level.set(None);
        for _ in 0..10 {
            assert!(input.poll(&mut log).is_empty());
        }
        assert_eq!(input.phase(ButtonId::Play), Phase::Pressed);
        assert_eq!(input.read_failures().analog, 10);

        level.set(Some(3000));
        for _ in 0..3 {
            input.poll(&mut log);
        }
        assert_eq!(input.read_failures(), ReadFailures::default());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn failed_gpio_read_keeps_boot_pressed() {
        let (mut input, _, boot) = rig();
        let mut log = Vec::new();
        input.button(ButtonId::Boot).on_click(|log: &mut Vec<Event>| {
            log.push(Event {
                button: ButtonId::Boot,
                gesture: Gesture::Click,
            })
        });

        boot.set(Some(true));
        for _ in 0..5 {
            input.poll(&mut log);
        }
        assert_eq!(input.phase(ButtonId::Boot), Phase::Pressed);

        // a dead GPIO is not a release
        boot.set(None);
        for _ in 0..10 {
            assert!(input.poll(&mut log).is_empty());
        }
        assert_eq!(input.phase(ButtonId::Boot), Phase::Pressed);
        assert_eq!(
            input.read_failures(),
            ReadFailures {
                analog: 0,
                digital: 10
            }
        );
        assert!(log.is_empty());

        boot.set(Some(false));
        let mut seen = Vec::new();
        for _ in 0..3 {
            seen.extend(input.poll(&mut log).iter());
        }
        assert_eq!(input.read_failures(), ReadFailures::default());
        assert_eq!(
            seen,
            [Event {
                button: ButtonId::Boot,
                gesture: Gesture::Click
            }]
        );
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn debouncing_is_visible() {
        let (mut input, level) = driver();
        level.set(Some(380));
        input.poll(&mut Vec::new());
        assert!(input.is_debouncing());
        input.poll(&mut Vec::new());
        input.poll(&mut Vec::new());
        assert!(!input.is_debouncing());
        assert_eq!(input.ticks(), 3);
    }
}
