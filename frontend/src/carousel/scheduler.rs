use gloo_timers::callback::{Interval, Timeout};

/// Source of one-shot and recurring timers.
///
/// Dropping a handle cancels its timer. Callers tie a timer's lifetime to
/// whatever owns the handle.
pub trait Scheduler: Clone + 'static {
    type Handle: 'static;

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> Self::Handle;

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> Self::Handle;
}

/// Timers backed by `setTimeout` / `setInterval`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserScheduler;

// Never read, only held until dropped
#[allow(dead_code)]
pub enum BrowserTimer {
    Timeout(Timeout),
    Interval(Interval),
}

impl Scheduler for BrowserScheduler {
    type Handle = BrowserTimer;

    fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> BrowserTimer {
        BrowserTimer::Timeout(Timeout::new(millis, callback))
    }

    fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> BrowserTimer {
        BrowserTimer::Interval(Interval::new(millis, callback))
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::Scheduler;

    enum Task {
        Once(Box<dyn FnOnce()>),
        Repeat(u32, Box<dyn FnMut()>),
    }

    struct Entry {
        due: u64,
        seq: u64,
        alive: Rc<Cell<bool>>,
        task: Task,
    }

    #[derive(Default)]
    struct Queue {
        now: u64,
        seq: u64,
        entries: Vec<Entry>,
    }

    impl Queue {
        fn push(&mut self, due: u64, alive: Rc<Cell<bool>>, task: Task) {
            self.seq += 1;
            let seq = self.seq;
            self.entries.push(Entry { due, seq, alive, task });
        }

        fn pop_due(&mut self, until: u64) -> Option<Entry> {
            self.entries.retain(|e| e.alive.get());
            let pos = self
                .entries
                .iter()
                .enumerate()
                .filter(|(_, e)| e.due <= until)
                .min_by_key(|(_, e)| (e.due, e.seq))
                .map(|(i, _)| i)?;
            let entry = self.entries.remove(pos);
            self.now = entry.due;
            Some(entry)
        }
    }

    /// Virtual-clock scheduler. Nothing fires until `advance` is called.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        alive: Rc<Cell<bool>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            self.alive.set(false);
        }
    }

    impl ManualScheduler {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn now(&self) -> u64 {
            self.queue.borrow().now
        }

        /// Timers that are scheduled and not cancelled.
        pub fn pending(&self) -> usize {
            self.queue
                .borrow()
                .entries
                .iter()
                .filter(|e| e.alive.get())
                .count()
        }

        /// Moves the clock forward, firing due timers in order. Callbacks run
        /// with the queue released so they may schedule or cancel timers.
        pub fn advance(&self, millis: u64) {
            let until = self.now() + millis;
            while let Some(entry) = self.pop_due(until) {
                match entry.task {
                    Task::Once(callback) => {
                        entry.alive.set(false);
                        callback();
                    }
                    Task::Repeat(period, mut callback) => {
                        callback();
                        if entry.alive.get() {
                            self.queue.borrow_mut().push(
                                entry.due + u64::from(period),
                                entry.alive,
                                Task::Repeat(period, callback),
                            );
                        }
                    }
                }
            }
            self.queue.borrow_mut().now = until;
        }

        fn pop_due(&self, until: u64) -> Option<Entry> {
            self.queue.borrow_mut().pop_due(until)
        }

        fn schedule(&self, millis: u32, task: Task) -> ManualHandle {
            let alive = Rc::new(Cell::new(true));
            let mut queue = self.queue.borrow_mut();
            let due = queue.now + u64::from(millis);
            queue.push(due, alive.clone(), task);
            ManualHandle { alive }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn timeout(&self, millis: u32, callback: Box<dyn FnOnce()>) -> ManualHandle {
            self.schedule(millis, Task::Once(callback))
        }

        fn interval(&self, millis: u32, callback: Box<dyn FnMut()>) -> ManualHandle {
            self.schedule(millis, Task::Repeat(millis, callback))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn timeout_fires_once_at_its_deadline() {
            let sched = ManualScheduler::new();
            let hits = Rc::new(Cell::new(0));
            let h = hits.clone();
            let _handle = sched.timeout(500, Box::new(move || h.set(h.get() + 1)));

            sched.advance(499);
            assert_eq!(hits.get(), 0);
            sched.advance(1);
            assert_eq!(hits.get(), 1);
            sched.advance(10_000);
            assert_eq!(hits.get(), 1);
            assert_eq!(sched.pending(), 0);
        }

        #[test]
        fn interval_repeats_until_dropped() {
            let sched = ManualScheduler::new();
            let hits = Rc::new(Cell::new(0));
            let h = hits.clone();
            let handle = sched.interval(100, Box::new(move || h.set(h.get() + 1)));

            sched.advance(350);
            assert_eq!(hits.get(), 3);
            drop(handle);
            sched.advance(1_000);
            assert_eq!(hits.get(), 3);
            assert_eq!(sched.pending(), 0);
        }

        #[test]
        fn dropped_timeout_never_fires() {
            let sched = ManualScheduler::new();
            let fired = Rc::new(Cell::new(false));
            let f = fired.clone();
            let handle = sched.timeout(10, Box::new(move || f.set(true)));
            drop(handle);
            sched.advance(100);
            assert!(!fired.get());
        }
    }
}
