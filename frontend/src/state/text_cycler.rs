//! Typewriter effect for the hero search preview.
//!
//! [`TextCycler`] is the pure state machine; [`CycleDriver`] feeds it from a
//! [`Scheduler`] and publishes the visible text after every step.

use crate::config::CycleTiming;
use crate::utils::timer::Scheduler;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use yew::Callback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Typing,
    PausedFull,
    Erasing,
    PausedEmpty,
}

/// Result of one timer expiry: what to show and when to fire next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
    pub visible: String,
    pub next_delay_ms: u32,
}

#[derive(Clone, Debug)]
pub struct TextCycler {
    phrases: Vec<String>,
    timing: CycleTiming,
    phase: Phase,
    text_idx: usize,
    char_idx: usize,
    // Set when an erase completes; the next PausedEmpty expiry moves to
    // the following phrase. Clear at bootstrap so the loop opens on phrase 0.
    advance_owed: bool,
}

impl TextCycler {
    pub fn new<I, S>(phrases: I, timing: CycleTiming) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            phrases: phrases.into_iter().map(Into::into).collect(),
            timing,
            phase: Phase::PausedEmpty,
            text_idx: 0,
            char_idx: 0,
            advance_owed: false,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn text_idx(&self) -> usize {
        self.text_idx
    }

    pub fn char_idx(&self) -> usize {
        self.char_idx
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    /// Delay before the first expiry, or `None` when there is nothing to animate.
    pub fn initial_delay(&self) -> Option<u32> {
        (!self.is_empty()).then_some(self.timing.pause_empty_ms)
    }

    pub fn active_phrase(&self) -> &str {
        self.phrases
            .get(self.text_idx)
            .map(String::as_str)
            .unwrap_or("")
    }

    fn active_len(&self) -> usize {
        self.active_phrase().chars().count()
    }

    /// The currently revealed prefix of the active phrase.
    pub fn visible(&self) -> String {
        self.active_phrase().chars().take(self.char_idx).collect()
    }

    /// Handles the expiry of the pending timer.
    pub fn advance(&mut self) -> Option<Step> {
        if self.phrases.is_empty() {
            return None;
        }
        let next_delay_ms = match self.phase {
            Phase::PausedEmpty => {
                if self.advance_owed {
                    self.text_idx = (self.text_idx + 1) % self.phrases.len();
                    self.advance_owed = false;
                }
                self.phase = Phase::Typing;
                self.type_char()
            }
            Phase::Typing => self.type_char(),
            Phase::PausedFull => {
                self.phase = Phase::Erasing;
                self.erase_char()
            }
            Phase::Erasing => self.erase_char(),
        };
        Some(Step {
            visible: self.visible(),
            next_delay_ms,
        })
    }

    // A fully typed phrase still waits one typing tick before the dwell
    // is scheduled, and an emptied one waits one erasing tick before the pause.
    fn type_char(&mut self) -> u32 {
        if self.char_idx < self.active_len() {
            self.char_idx += 1;
            self.timing.type_ms
        } else {
            self.phase = Phase::PausedFull;
            self.timing.pause_full_ms
        }
    }

    fn erase_char(&mut self) -> u32 {
        if self.char_idx > 0 {
            self.char_idx -= 1;
            self.timing.erase_ms
        } else {
            self.phase = Phase::PausedEmpty;
            self.advance_owed = true;
            self.timing.pause_empty_ms
        }
    }
}

struct DriverState<S: Scheduler> {
    cycler: TextCycler,
    scheduler: S,
    pending: Option<S::Handle>,
    on_text: Callback<String>,
    stopped: bool,
}

/// Runs a [`TextCycler`] on a scheduler for as long as it is not stopped.
///
/// Exactly one timer is pending at a time. Timer callbacks only hold a weak
/// reference, so a dropped driver can never be woken again.
pub struct CycleDriver<S: Scheduler + 'static> {
    state: Rc<RefCell<DriverState<S>>>,
}

impl<S: Scheduler + 'static> CycleDriver<S> {
    pub fn new(cycler: TextCycler, scheduler: S, on_text: Callback<String>) -> Self {
        Self {
            state: Rc::new(RefCell::new(DriverState {
                cycler,
                scheduler,
                pending: None,
                on_text,
                stopped: false,
            })),
        }
    }

    pub fn start(&self) {
        let delay = {
            let state = self.state.borrow();
            if state.stopped || state.pending.is_some() {
                return;
            }
            state.cycler.initial_delay()
        };
        match delay {
            Some(delay) => {
                log::debug!("Starting hero text cycle");
                Self::arm(&self.state, delay);
            }
            None => log::debug!("No hero phrases configured, text cycle idle"),
        }
    }

    /// Cancels the pending timer. Safe to call more than once.
    pub fn stop(&self) {
        let pending = {
            let mut state = self.state.borrow_mut();
            state.stopped = true;
            state.pending.take()
        };
        if pending.is_some() {
            log::debug!("Stopping hero text cycle");
        }
        drop(pending);
    }

    pub fn is_running(&self) -> bool {
        let state = self.state.borrow();
        !state.stopped && state.pending.is_some()
    }

    pub fn snapshot(&self) -> TextCycler {
        self.state.borrow().cycler.clone()
    }

    fn arm(state: &Rc<RefCell<DriverState<S>>>, delay_ms: u32) {
        let weak = Rc::downgrade(state);
        let handle = state
            .borrow()
            .scheduler
            .schedule(delay_ms, Box::new(move || Self::fire(&weak)));
        // Replacing the handle drops the one that just fired.
        let previous = state.borrow_mut().pending.replace(handle);
        drop(previous);
    }

    fn fire(weak: &Weak<RefCell<DriverState<S>>>) {
        let Some(state) = weak.upgrade() else {
            return;
        };
        let (step, on_text) = {
            let mut inner = state.borrow_mut();
            if inner.stopped {
                return;
            }
            match inner.cycler.advance() {
                Some(step) => (step, inner.on_text.clone()),
                None => return,
            }
        };
        on_text.emit(step.visible);
        if !state.borrow().stopped {
            Self::arm(&state, step.next_delay_ms);
        }
    }
}

impl<S: Scheduler + 'static> Drop for CycleDriver<S> {
    fn drop(&mut self) {
        self.stop();
    }
}
