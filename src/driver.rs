//! Timer driver for the countdown.
//!
//! The driver turns a one-second tick stream into [`Event`]s: every tick
//! decrements the remaining time until it reaches zero, then the countdown is
//! stopped and reset. The stream itself is a [`Ticker`], a cancellable handle
//! over bubbletea tick commands.
//!
//! Ticks are tagged with the ticker's `id` and the `tag` of the stream that
//! produced them. Disposing the ticker or scheduling a new stream makes every
//! tick already in flight stale, so a restarted countdown never runs two tick
//! streams at once.

use crate::store::{CountdownConfig, Event, Store};
use bubbletea_rs::{tick as bubbletea_tick, Cmd, Msg};
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;
use tracing::{debug, info, trace};

// Internal ID management for ticker instances
static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Default delay between two ticks.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Message delivered once per interval while a tick stream is live.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Identifies the [`Ticker`] that scheduled this tick.
    pub id: i64,
    tag: i64,
}

impl TickMsg {
    /// The tick `ticker` would currently accept.
    #[cfg(test)]
    pub(crate) fn live(ticker: &Ticker) -> Self {
        Self {
            id: ticker.id,
            tag: ticker.tag,
        }
    }
}

/// Handle over the recurring tick stream.
///
/// At most one stream is live per ticker. [`Ticker::dispose`] is idempotent
/// and safe on a ticker that never started.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    id: i64,
    tag: i64,
    active: bool,
}

impl Ticker {
    /// Creates an inactive ticker.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            id: next_id(),
            tag: 0,
            active: false,
        }
    }

    /// Unique id of this ticker.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Delay between ticks.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether a stream is currently live.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Starts a fresh stream, invalidating any earlier one.
    pub fn schedule(&mut self) -> Cmd {
        self.tag += 1;
        self.active = true;
        self.tick()
    }

    /// The next tick of the live stream, if there is one.
    pub fn next(&self) -> Option<Cmd> {
        if !self.active {
            return None;
        }
        Some(self.tick())
    }

    /// Reports whether `msg` belongs to the live stream.
    pub fn accepts(&self, msg: &TickMsg) -> bool {
        self.active && msg.id == self.id && msg.tag == self.tag
    }

    /// Cancels the live stream. Ticks already in flight are dropped on arrival.
    pub fn dispose(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        trace!(id = self.id, tag = self.tag, "tick stream disposed");
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        bubbletea_tick(self.interval, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

/// Whether the driver currently owns a live countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No tick stream.
    Idle,
    /// Ticking once per interval.
    Running,
}

/// Drives a [`Store`] from the tick stream.
#[derive(Debug)]
pub struct Driver {
    ticker: Ticker,
    phase: Phase,
}

impl Driver {
    /// An idle driver ticking every `interval` once started.
    pub fn new(interval: Duration) -> Self {
        Self {
            ticker: Ticker::new(interval),
            phase: Phase::Idle,
        }
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The tick stream handle.
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Initializes and starts a countdown, replacing any running one.
    ///
    /// `config` is expected to be validated already. A reversed range is not
    /// rejected here; it is stopped and reset on the first tick.
    pub fn start(&mut self, store: &mut Store, config: CountdownConfig) -> Cmd {
        if self.phase == Phase::Running {
            info!("restarting countdown, cancelling previous tick stream");
        }
        self.ticker.dispose();

        store.dispatch(Event::Initialize(config));
        store.dispatch(Event::Start);
        self.phase = Phase::Running;

        info!(
            start = %config.start_time,
            stop = %config.stop_time,
            "countdown started"
        );
        self.ticker.schedule()
    }

    /// Handles a message, returning the next tick when the countdown goes on.
    ///
    /// Anything other than a live [`TickMsg`] is ignored.
    pub fn update(&mut self, msg: &Msg, store: &mut Store) -> Option<Cmd> {
        let tick = msg.downcast_ref::<TickMsg>()?;
        if !self.ticker.accepts(tick) {
            trace!(id = tick.id, "ignoring stale tick");
            return None;
        }

        let finished = match store.state().countdown().remaining() {
            Ok(left) => left.is_zero(),
            Err(_) => true,
        };

        if finished {
            self.finish(store);
            return None;
        }

        store.dispatch(Event::Decrement);
        self.ticker.next()
    }

    /// Cancels any live stream without touching the store.
    pub fn teardown(&mut self) {
        if self.phase == Phase::Running {
            debug!("tearing down running countdown");
        }
        self.ticker.dispose();
        self.phase = Phase::Idle;
    }

    fn finish(&mut self, store: &mut Store) {
        self.ticker.dispose();
        self.phase = Phase::Idle;
        store.dispatch(Event::Stop);
        store.dispatch(Event::Reset);
        info!("countdown finished");
    }
}

impl Default for Driver {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl Drop for Driver {
    fn drop(&mut self) {
        self.teardown();
    }
}
