//! Deferred work on the UI event loop.

/// Runs a task once after a delay. No cancellation and no ordering between
/// unrelated tasks.
pub trait Scheduler: Clone + 'static {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Browser timer backed by `setTimeout`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TimeoutScheduler;

#[cfg(feature = "hydrate")]
impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        gloo_timers::callback::Timeout::new(delay_ms, task).forget();
    }
}
