//! Interval polling for views that mirror backend state.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend has no push channel, so the order boards, the wait-staff table
//! view and the assistance list re-fetch on a timer. Each poll loop lives as
//! long as the reactive scope that spawned it: `on_cleanup` flips the alive
//! flag and the loop exits before its next tick.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

/// Tables needing assistance.
pub const ASSISTANCE_INTERVAL: Duration = Duration::from_secs(5);
/// Manager and kitchen order boards.
pub const ORDER_BOARD_INTERVAL: Duration = Duration::from_secs(2);
/// Wait-staff focused table and ready-to-serve list.
pub const WAIT_STAFF_INTERVAL: Duration = Duration::from_secs(10);

/// Run `tick` every `interval` until the owning scope is cleaned up.
///
/// The first tick fires after one interval; callers load initial data
/// themselves. Ticks never overlap since each one is awaited before the
/// next sleep. SSR builds spawn nothing.
pub fn spawn_poll<F, Fut>(interval: Duration, tick: F)
where
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::on_cleanup;

        let alive = PollAlive::new();
        let stopper = alive.clone();
        leptos::task::spawn_local(run_poll(alive, move || gloo_timers::future::sleep(interval), tick));
        on_cleanup(move || stopper.stop());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (interval, tick);
    }
}

/// Sleep then tick until `alive` is stopped. The flag is checked after each
/// sleep, so a loop stopped mid-sleep never ticks again.
#[cfg(any(test, feature = "hydrate"))]
async fn run_poll<S, SFut, F, Fut>(alive: PollAlive, sleep: S, tick: F)
where
    S: Fn() -> SFut,
    SFut: Future<Output = ()>,
    F: Fn() -> Fut,
    Fut: Future<Output = ()>,
{
    loop {
        sleep().await;
        if !alive.is_alive() {
            break;
        }
        tick().await;
    }
}

/// Liveness of one poll loop, cleared by the owning scope's cleanup.
#[derive(Clone, Debug)]
pub struct PollAlive(Arc<AtomicBool>);

impl PollAlive {
    pub fn new() -> Self {
        Self(Arc::new(AtomicBool::new(true)))
    }

    pub fn stop(&self) {
        self.0.store(false, Ordering::Relaxed);
    }

    pub fn is_alive(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

impl Default for PollAlive {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared busy flag so a poll tick and a manual refresh of the same view
/// never fetch at the same time.
///
/// A refresh requested while a fetch runs is not dropped: it is queued and
/// the running fetch goes around once more before releasing.
#[derive(Clone, Debug, Default)]
pub struct InFlight {
    busy: Arc<AtomicBool>,
    queued: Arc<AtomicBool>,
}

impl InFlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the flag, or `None` while another fetch holds it. Poll ticks use
    /// this; a tick that loses the race is simply skipped.
    pub fn try_begin(&self) -> Option<InFlightGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard { busy: self.busy.clone(), queued: self.queued.clone() })
    }

    /// Claim the flag for a refresh that must happen. When busy, the request
    /// is queued for the current holder and `None` is returned.
    pub fn request(&self) -> Option<InFlightGuard> {
        let guard = self.try_begin();
        if guard.is_none() {
            self.queued.store(true, Ordering::Release);
        }
        guard
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }
}

/// Releases the `InFlight` flag on drop.
#[derive(Debug)]
pub struct InFlightGuard {
    busy: Arc<AtomicBool>,
    queued: Arc<AtomicBool>,
}

impl InFlightGuard {
    /// Consume a queued request. The holder fetches again while this is true.
    pub fn rerun(&self) -> bool {
        self.queued.swap(false, Ordering::AcqRel)
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
