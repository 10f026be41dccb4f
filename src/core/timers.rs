use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Ends the party.
    Deactivate,
    /// Hides the party message while the party keeps going.
    MessageFade,
}

#[derive(Clone, Copy, Debug)]
struct Armed {
    kind: TimerKind,
    deadline: Duration,
}

/// Cancelable deadlines polled from the frame tick. Holds at most one entry
/// per `TimerKind`; arming a kind again replaces its deadline.
#[derive(Clone, Debug, Default)]
pub struct TimerTable {
    armed: SmallVec<[Armed; 2]>,
}

impl TimerTable {
    pub fn arm(&mut self, kind: TimerKind, now: Duration, after: Duration) {
        let deadline = now + after;
        match self.armed.iter_mut().find(|a| a.kind == kind) {
            Some(a) => a.deadline = deadline,
            None => self.armed.push(Armed { kind, deadline }),
        }
    }

    pub fn cancel_all(&mut self) {
        self.armed.clear();
    }

    /// Earliest armed deadline, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.armed.iter().map(|a| a.deadline).min()
    }

    /// Disarm and return every timer whose deadline is at or before `now`,
    /// earliest first.
    pub fn take_due(&mut self, now: Duration) -> SmallVec<[TimerKind; 2]> {
        let mut due: SmallVec<[Armed; 2]> = SmallVec::new();
        self.armed.retain(|a| {
            if a.deadline <= now {
                due.push(*a);
                false
            } else {
                true
            }
        });
        due.sort_by_key(|a| a.deadline);
        due.into_iter().map(|a| a.kind).collect()
    }
}

// read by host tests
#[allow(dead_code)]
impl TimerTable {
    /// Returns whether a timer of that kind was armed.
    pub fn cancel(&mut self, kind: TimerKind) -> bool {
        let before = self.armed.len();
        self.armed.retain(|a| a.kind != kind);
        self.armed.len() != before
    }

    #[inline]
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.armed.iter().any(|a| a.kind == kind)
    }

    pub fn deadline(&self, kind: TimerKind) -> Option<Duration> {
        self.armed.iter().find(|a| a.kind == kind).map(|a| a.deadline)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.armed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.armed.is_empty()
    }
}
