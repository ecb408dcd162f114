//! Testimonial rotation: a fixed list, one index, one transition lock.
//!
//! [`Rotator`] is the bare state machine. [`Carousel`] mounts it against a
//! [`Scheduler`] and owns the auto-advance interval and the pending unlock.
//! Timer callbacks only hold weak references, so dropping the carousel
//! cancels every timer it started.

pub mod rotator;
pub mod scheduler;

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};

use crate::config::CarouselTiming;

pub use rotator::{Command, Outcome, Rotator, Snapshot};
pub use scheduler::{BrowserScheduler, Scheduler};

struct Shared<S: Scheduler> {
    rotator: Rotator,
    unlock: Option<S::Handle>,
    notify: Rc<dyn Fn(Snapshot)>,
}

pub struct Carousel<S: Scheduler> {
    shared: Rc<RefCell<Shared<S>>>,
    scheduler: S,
    timing: CarouselTiming,
    _auto_advance: S::Handle,
}

impl<S: Scheduler> Carousel<S> {
    /// Starts the auto-advance interval. `notify` receives the new snapshot
    /// after every state change.
    pub fn mount<F>(scheduler: S, rotator: Rotator, timing: CarouselTiming, notify: F) -> Self
    where
        F: Fn(Snapshot) + 'static,
    {
        let shared = Rc::new(RefCell::new(Shared {
            rotator,
            unlock: None,
            notify: Rc::new(notify),
        }));

        let auto_advance = {
            let weak = Rc::downgrade(&shared);
            let sched = scheduler.clone();
            scheduler.interval(
                timing.auto_advance_ms,
                Box::new(move || {
                    if let Some(shared) = weak.upgrade() {
                        dispatch(&shared, &sched, timing, Command::Tick);
                    }
                }),
            )
        };

        debug!("Carousel mounted with {} testimonials", shared.borrow().rotator.len());

        Self {
            shared,
            scheduler,
            timing,
            _auto_advance: auto_advance,
        }
    }

    pub fn next(&self) -> Outcome {
        self.send(Command::Next)
    }

    pub fn previous(&self) -> Outcome {
        self.send(Command::Previous)
    }

    pub fn go_to(&self, index: usize) -> Outcome {
        self.send(Command::GoTo(index))
    }

    pub fn snapshot(&self) -> Snapshot {
        self.shared.borrow().rotator.snapshot()
    }

    fn send(&self, command: Command) -> Outcome {
        dispatch(&self.shared, &self.scheduler, self.timing, command)
    }
}

/// Mounts a carousel over `len` items, or nothing when the list is empty.
pub fn mount_for<S, F>(
    len: usize,
    scheduler: S,
    timing: CarouselTiming,
    notify: F,
) -> Option<Carousel<S>>
where
    S: Scheduler,
    F: Fn(Snapshot) + 'static,
{
    let rotator = Rotator::for_len(len)?;
    Some(Carousel::mount(scheduler, rotator, timing, notify))
}

impl<S: Scheduler> Drop for Carousel<S> {
    fn drop(&mut self) {
        debug!("Carousel unmounted");
    }
}

fn dispatch<S: Scheduler>(
    shared: &Rc<RefCell<Shared<S>>>,
    scheduler: &S,
    timing: CarouselTiming,
    command: Command,
) -> Outcome {
    let (outcome, snapshot, notify) = {
        let mut state = shared.borrow_mut();
        let outcome = state.rotator.apply(command);
        match outcome {
            Outcome::Accepted => {
                state.unlock = Some(schedule_unlock(Rc::downgrade(shared), scheduler, timing));
            }
            Outcome::Locked => {
                debug!("{:?} dropped, transition in flight", command);
                return outcome;
            }
            Outcome::OutOfRange => {
                warn!("{:?} ignored, only {} testimonials", command, state.rotator.len());
                return outcome;
            }
        }
        (outcome, state.rotator.snapshot(), state.notify.clone())
    };

    notify(snapshot);
    outcome
}

fn schedule_unlock<S: Scheduler>(
    weak: Weak<RefCell<Shared<S>>>,
    scheduler: &S,
    timing: CarouselTiming,
) -> S::Handle {
    scheduler.timeout(
        timing.transition_ms,
        Box::new(move || {
            let Some(shared) = weak.upgrade() else {
                return;
            };
            // The fired handle stays in `unlock` until the next accepted
            // command replaces it; a timer must not drop its own closure.
            let (snapshot, notify) = {
                let mut state = shared.borrow_mut();
                state.rotator.settle();
                (state.rotator.snapshot(), state.notify.clone())
            };
            notify(snapshot);
        }),
    )
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::scheduler::ManualScheduler;
    use super::*;

    const TIMING: CarouselTiming = CarouselTiming {
        transition_ms: 500,
        auto_advance_ms: 6000,
    };

    struct Harness {
        sched: ManualScheduler,
        carousel: Option<Carousel<ManualScheduler>>,
        seen: Rc<RefCell<Vec<Snapshot>>>,
    }

    impl Harness {
        fn mount(n: usize) -> Self {
            let sched = ManualScheduler::new();
            let seen = Rc::new(RefCell::new(Vec::new()));
            let log = seen.clone();
            let carousel = Carousel::mount(
                sched.clone(),
                Rotator::for_len(n).expect("non-empty"),
                TIMING,
                move |snap| log.borrow_mut().push(snap),
            );
            Self {
                sched,
                carousel: Some(carousel),
                seen,
            }
        }

        fn carousel(&self) -> &Carousel<ManualScheduler> {
            self.carousel.as_ref().expect("mounted")
        }

        fn index(&self) -> usize {
            self.carousel().snapshot().index
        }

        fn wait(&self, millis: u64) {
            self.sched.advance(millis);
        }
    }

    #[test]
    fn lock_clears_after_transition_delay() {
        let h = Harness::mount(3);
        h.carousel().next();
        assert!(h.carousel().snapshot().transitioning);
        h.wait(499);
        assert!(h.carousel().snapshot().transitioning);
        h.wait(1);
        assert!(!h.carousel().snapshot().transitioning);
    }

    #[test]
    fn three_item_walkthrough() {
        let h = Harness::mount(3);
        assert_eq!(h.carousel().next(), Outcome::Accepted);
        assert_eq!(h.index(), 1);
        h.wait(500);
        assert_eq!(h.carousel().next(), Outcome::Accepted);
        assert_eq!(h.index(), 2);
        assert_eq!(h.carousel().next(), Outcome::Locked);
        assert_eq!(h.index(), 2);
        h.wait(500);
        assert_eq!(h.carousel().next(), Outcome::Accepted);
        assert_eq!(h.index(), 0);
    }

    #[test]
    fn go_to_skips_intermediate_indices() {
        let h = Harness::mount(3);
        h.carousel().go_to(2);
        assert_eq!(h.index(), 2);
        let indices: Vec<usize> = h.seen.borrow().iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![2]);
    }

    #[test]
    fn go_to_lands_on_every_index() {
        let h = Harness::mount(4);
        for i in 0..4 {
            assert_eq!(h.carousel().go_to(i), Outcome::Accepted);
            assert_eq!(h.index(), i);
            h.wait(500);
        }
    }

    #[test]
    fn out_of_range_go_to_takes_no_lock() {
        let h = Harness::mount(3);
        assert_eq!(h.carousel().go_to(7), Outcome::OutOfRange);
        assert!(!h.carousel().snapshot().transitioning);
        assert!(h.seen.borrow().is_empty());
        assert_eq!(h.carousel().next(), Outcome::Accepted);
    }

    #[test]
    fn auto_advance_ticks_every_interval() {
        let h = Harness::mount(3);
        h.wait(6000);
        assert_eq!(h.index(), 1);
        h.wait(6000);
        assert_eq!(h.index(), 2);
        h.wait(6000);
        assert_eq!(h.index(), 0);
    }

    #[test]
    fn tick_during_manual_transition_is_dropped() {
        let h = Harness::mount(3);
        h.wait(5800);
        h.carousel().next();
        h.wait(200);
        // The tick fired inside the lock window.
        assert_eq!(h.index(), 1);
        h.wait(300);
        assert!(!h.carousel().snapshot().transitioning);
        assert_eq!(h.index(), 1);
    }

    #[test]
    fn tick_and_manual_next_at_same_instant_advance_once() {
        let h = Harness::mount(3);
        h.wait(6000);
        assert_eq!(h.carousel().next(), Outcome::Locked);
        assert_eq!(h.index(), 1);
    }

    #[test]
    fn notifies_on_change_and_unlock() {
        let h = Harness::mount(2);
        h.carousel().next();
        h.wait(500);
        let seen = h.seen.borrow().clone();
        assert_eq!(
            seen,
            vec![
                Snapshot { index: 1, transitioning: true },
                Snapshot { index: 1, transitioning: false },
            ]
        );
    }

    #[test]
    fn unmount_cancels_all_timers() {
        let mut h = Harness::mount(3);
        h.carousel().next();
        assert_eq!(h.sched.pending(), 2);

        h.carousel = None;
        assert_eq!(h.sched.pending(), 0);

        let before = h.seen.borrow().len();
        h.wait(60_000);
        assert_eq!(h.seen.borrow().len(), before);
    }

    #[test]
    fn unmount_after_unlock_leaves_nothing_behind() {
        let mut h = Harness::mount(3);
        h.carousel().next();
        h.wait(500);
        h.carousel = None;
        let before = h.seen.borrow().len();
        h.wait(6000);
        assert_eq!(h.seen.borrow().len(), before);
        assert_eq!(h.sched.pending(), 0);
    }

    #[test]
    fn mount_for_empty_list_starts_no_timers() {
        let sched = ManualScheduler::new();
        let carousel = mount_for(0, sched.clone(), TIMING, |_| {});
        assert!(carousel.is_none());
        assert_eq!(sched.pending(), 0);
    }

    #[test]
    fn slot_cleared_on_unmount_cancels_timers() {
        let sched = ManualScheduler::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = seen.clone();
        let slot = Rc::new(RefCell::new(mount_for(3, sched.clone(), TIMING, move |snap| {
            log.borrow_mut().push(snap)
        })));
        assert_eq!(sched.pending(), 1);

        if let Some(c) = slot.borrow().as_ref() {
            c.next();
        }
        assert_eq!(sched.pending(), 2);

        slot.borrow_mut().take();
        assert_eq!(sched.pending(), 0);

        let before = seen.borrow().len();
        sched.advance(60_000);
        assert_eq!(seen.borrow().len(), before);
    }

    #[test]
    fn notify_may_read_the_carousel_state() {
        let sched = ManualScheduler::new();
        let calls = Rc::new(Cell::new(0));
        let c = calls.clone();
        let carousel = Carousel::mount(
            sched.clone(),
            Rotator::for_len(2).expect("non-empty"),
            TIMING,
            move |_| c.set(c.get() + 1),
        );
        carousel.previous();
        sched.advance(500);
        assert_eq!(calls.get(), 2);
        assert_eq!(carousel.snapshot().index, 1);
    }
}
