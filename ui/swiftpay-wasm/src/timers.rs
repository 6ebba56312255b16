//! Browser timers.

use gloo_timers::callback::Timeout;
use sp_ui_core::Scheduler;

/// Fire-and-forget: `task` runs after `delay_ms` even if the component that
/// scheduled it is torn down in the meantime.
pub fn after(delay_ms: u32, task: impl FnOnce() + 'static) {
    Timeout::new(delay_ms, task).forget();
}

/// `window.setTimeout` as a cancellable `Scheduler`. Dropping a handle
/// clears the timeout and frees its closure.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }

    fn cancel(&self, handle: Timeout) {
        drop(handle);
    }
}
