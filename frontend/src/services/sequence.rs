//! Browser driver for the processing sequencer.
//!
//! Runs a [`Sequencer`] off the page clock: one interval re-renders the
//! progress every [`TICK_INTERVAL`], one timeout lands exactly on the next
//! stage boundary. Both timers are cleared by [`BrowserSequence::stop`] or
//! on drop, after which no further events are delivered.
//!
//! Timer callbacks only hold a `Weak` reference to the driver state, so the
//! owner of the `BrowserSequence` decides its lifetime.

use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};
use leptos::{set_interval_with_handle, set_timeout_with_handle};
use medipredict::{Schedule, SequenceEvent, Sequencer};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use std::time::Duration;

use crate::config::TICK_INTERVAL;
use crate::types::{AppError, AppResult};

/// Event handler. Receives the sequencer state after the whole batch the
/// event belongs to has been applied.
pub type EventHandler = Box<dyn Fn(&Sequencer, SequenceEvent)>;

/// Clock-free half of the driver: advances the sequencer and hands events
/// to the handler until stopped.
struct Dispatch {
    sequencer: RefCell<Sequencer>,
    stopped: Rc<Cell<bool>>,
    on_event: EventHandler,
}

impl Dispatch {
    fn new(sequencer: Sequencer, stopped: Rc<Cell<bool>>, on_event: EventHandler) -> Self {
        Self {
            sequencer: RefCell::new(sequencer),
            stopped,
            on_event,
        }
    }

    /// Deliver everything due at `elapsed`. Returns the next deadline, or
    /// `None` once the run is over or the driver was stopped.
    fn advance(&self, elapsed: Duration) -> Option<Duration> {
        if self.stopped.get() {
            return None;
        }
        let events = self.sequencer.borrow_mut().advance_to(elapsed);

        let sequencer = self.sequencer.borrow();
        for event in events {
            // The handler may stop the driver, e.g. by navigating away.
            if self.stopped.get() {
                return None;
            }
            (self.on_event)(&sequencer, event);
        }

        if self.stopped.get() {
            return None;
        }
        sequencer.next_deadline()
    }
}

struct Inner {
    dispatch: Dispatch,
    started_at_ms: f64,
    tick: Cell<Option<IntervalHandle>>,
    boundary: Cell<Option<TimeoutHandle>>,
}

/// A running processing animation.
pub struct BrowserSequence {
    inner: Rc<Inner>,
}

impl BrowserSequence {
    /// Start driving `schedule`, calling `on_event` for every event.
    pub fn start(
        schedule: Schedule,
        on_event: impl Fn(&Sequencer, SequenceEvent) + 'static,
    ) -> AppResult<Self> {
        let inner = Rc::new(Inner {
            dispatch: Dispatch::new(
                Sequencer::new(schedule),
                Rc::new(Cell::new(false)),
                Box::new(on_event),
            ),
            started_at_ms: js_sys::Date::now(),
            tick: Cell::new(None),
            boundary: Cell::new(None),
        });

        let weak = Rc::downgrade(&inner);
        let handle = set_interval_with_handle(move || step(&weak), TICK_INTERVAL)
            .map_err(|e| AppError::Browser(format!("setInterval failed: {:?}", e)))?;
        inner.tick.set(Some(handle));

        // Emit the first StageStarted right away instead of one tick later.
        step(&Rc::downgrade(&inner));

        log::debug!("processing sequence started");
        Ok(Self { inner })
    }

    /// Clear all pending timers. Idempotent.
    pub fn stop(&self) {
        self.inner.stop();
    }

    pub fn is_finished(&self) -> bool {
        self.inner.dispatch.sequencer.borrow().is_finished()
    }
}

impl Drop for BrowserSequence {
    fn drop(&mut self) {
        self.inner.stop();
    }
}

impl Inner {
    fn stop(&self) {
        if self.dispatch.stopped.replace(true) {
            return;
        }
        if let Some(handle) = self.tick.take() {
            handle.clear();
        }
        if let Some(handle) = self.boundary.take() {
            handle.clear();
        }
    }

    fn elapsed(&self) -> Duration {
        elapsed_since(self.started_at_ms, js_sys::Date::now())
    }
}

fn step(weak: &Weak<Inner>) {
    let Some(inner) = weak.upgrade() else {
        return;
    };

    let elapsed = inner.elapsed();
    let next_deadline = inner.dispatch.advance(elapsed);

    if let Some(handle) = inner.boundary.take() {
        handle.clear();
    }
    let Some(deadline) = next_deadline else {
        inner.stop();
        return;
    };

    let weak = Rc::downgrade(&inner);
    match set_timeout_with_handle(move || step(&weak), delay_until(deadline, elapsed)) {
        Ok(handle) => inner.boundary.set(Some(handle)),
        // The interval still catches the boundary, one tick late.
        Err(e) => log::warn!("setTimeout failed: {:?}", e),
    }
}

/// Time between two `Date.now()` readings, never negative.
fn elapsed_since(start_ms: f64, now_ms: f64) -> Duration {
    Duration::from_secs_f64((now_ms - start_ms).max(0.0) / 1000.0)
}

/// How long to wait for `deadline` when `elapsed` has already passed.
fn delay_until(deadline: Duration, elapsed: Duration) -> Duration {
    deadline.saturating_sub(elapsed)
}
