use spcore::copy::{Timer, TimerHandle};
use std::{
    cell::RefCell,
    rc::Rc,
    time::Duration,
};

type Task = Box<dyn FnOnce() + 'static>;

struct Pending {
    id: u64,
    deadline: Duration,
    task: Task,
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_id: u64,
    pending: Vec<Pending>,
}

/// A timer driven by explicitly advancing a simulated clock.
#[derive(Clone, Default)]
pub struct ManualTimer(Rc<RefCell<Clock>>);

pub struct ManualHandle {
    id: u64,
    clock: Rc<RefCell<Clock>>,
}

impl ManualTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.0.borrow().now
    }

    pub fn pending(&self) -> usize {
        self.0.borrow().pending.len()
    }

    pub fn advance_ms(&self, millis: u64) -> usize {
        self.advance(Duration::from_millis(millis))
    }

    /// Moves the clock forward, running every task that falls due in
    /// deadline order.  Returns how many tasks ran.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.0.borrow().now + by;
        let mut ran = 0;
        loop {
            // the task is taken out before running so it may schedule more
            let due = {
                let mut clock = self.0.borrow_mut();
                let next = clock.pending.iter()
                    .enumerate()
                    .filter(|(_, p)| p.deadline <= target)
                    .min_by_key(|(_, p)| (p.deadline, p.id))
                    .map(|(i, _)| i);
                match next {
                    Some(i) => {
                        let pending = clock.pending.remove(i);
                        clock.now = pending.deadline;
                        Some(pending.task)
                    }
                    None => {
                        clock.now = target;
                        None
                    }
                }
            };
            match due {
                Some(task) => {
                    task();
                    ran += 1;
                }
                None => break ran,
            }
        }
    }
}

impl Timer for ManualTimer {
    type Handle = ManualHandle;

    fn schedule(&self, delay: Duration, task: Task) -> ManualHandle {
        let mut clock = self.0.borrow_mut();
        let id = clock.next_id;
        clock.next_id += 1;
        let deadline = clock.now + delay;
        clock.pending.push(Pending { id, deadline, task });
        ManualHandle { id, clock: self.0.clone() }
    }
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        self.clock.borrow_mut()
            .pending
            .retain(|p| p.id != self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn runs_due_tasks_in_order() {
        let timer = ManualTimer::new();
        let log = Rc::new(RefCell::new(Vec::new()));
        for (name, ms) in [("b", 20), ("a", 10), ("c", 30)] {
            let log = log.clone();
            timer.schedule(Duration::from_millis(ms), Box::new(move || {
                log.borrow_mut().push(name)
            }));
        }
        assert_eq!(timer.advance_ms(9), 0);
        assert_eq!(timer.advance_ms(11), 2);
        assert_eq!(*log.borrow(), ["a", "b"]);
        assert_eq!(timer.now(), Duration::from_millis(20));
        assert_eq!(timer.advance_ms(100), 1);
        assert_eq!(timer.pending(), 0);
    }

    #[test]
    fn cancelled_never_runs() {
        let timer = ManualTimer::new();
        let fired = Rc::new(Cell::new(false));
        let handle = {
            let fired = fired.clone();
            timer.schedule(Duration::from_millis(5), Box::new(move || fired.set(true)))
        };
        handle.cancel();
        assert_eq!(timer.advance_ms(10), 0);
        assert!(!fired.get());
    }
}
