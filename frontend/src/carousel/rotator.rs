use std::num::NonZeroUsize;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Transitioning,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    GoTo(usize),
    /// Auto-advance. Same as `Next`, kept separate so logs can tell them apart.
    Tick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Index changed and the lock is now held. The caller owes one `settle`.
    Accepted,
    /// A transition is in flight, the request is dropped.
    Locked,
    OutOfRange,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub index: usize,
    pub transitioning: bool,
}

/// Index into a fixed, non-empty list with a single transition lock.
#[derive(Clone, Debug)]
pub struct Rotator {
    len: NonZeroUsize,
    index: usize,
    phase: Phase,
}

impl Rotator {
    pub fn new(len: NonZeroUsize) -> Self {
        Self {
            len,
            index: 0,
            phase: Phase::Idle,
        }
    }

    /// `None` for an empty list.
    pub fn for_len(len: usize) -> Option<Self> {
        NonZeroUsize::new(len).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.len.get()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            index: self.index,
            transitioning: self.phase == Phase::Transitioning,
        }
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        if self.phase == Phase::Transitioning {
            return Outcome::Locked;
        }

        let n = self.len.get();
        let target = match command {
            Command::Next | Command::Tick => (self.index + 1) % n,
            Command::Previous => (self.index + n - 1) % n,
            Command::GoTo(i) if i < n => i,
            Command::GoTo(_) => return Outcome::OutOfRange,
        };

        self.index = target;
        self.phase = Phase::Transitioning;
        Outcome::Accepted
    }

    /// Releases the transition lock. Called when the unlock delay elapses.
    pub fn settle(&mut self) {
        self.phase = Phase::Idle;
    }
}
