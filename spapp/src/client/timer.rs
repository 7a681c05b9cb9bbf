use gloo_timers::callback::Timeout;
use spcore::copy::{Timer, TimerHandle};
use std::time::Duration;

pub struct BrowserTimer;

/// Dropping the handle also cancels the timeout.
pub struct TimeoutHandle(Timeout);

impl Timer for BrowserTimer {
    type Handle = TimeoutHandle;

    fn schedule(
        &self,
        delay: Duration,
        task: Box<dyn FnOnce() + 'static>,
    ) -> TimeoutHandle {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        TimeoutHandle(Timeout::new(millis, task))
    }
}

impl TimerHandle for TimeoutHandle {
    fn cancel(self) {
        drop(self.0.cancel());
    }
}
