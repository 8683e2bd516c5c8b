//! Cancellable timers on a single logical timeline.
//!
//! Nothing here sleeps or spawns. The owner advances the clock and pulls due
//! entries one at a time, so a task fired at `t` can schedule follow-ups
//! that are still due within the same advance.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerGroup {
    Boot,
    Reveal,
    Stagger,
    ModeSwitch,
}

impl TimerGroup {
    pub fn label(self) -> &'static str {
        match self {
            Self::Boot => "boot",
            Self::Reveal => "reveal",
            Self::Stagger => "stagger",
            Self::ModeSwitch => "mode-switch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fired<T> {
    pub handle: TimerHandle,
    pub group: TimerGroup,
    pub due_ms: u64,
    pub task: T,
}

#[derive(Debug, Clone)]
struct Entry<T> {
    group: TimerGroup,
    task: T,
}

/// Entries are keyed by `(due, handle)`; handles grow monotonically, so
/// entries due at the same instant fire in scheduling order.
#[derive(Debug, Clone)]
pub struct Scheduler<T> {
    now_ms: u64,
    next_handle: u64,
    pending: BTreeMap<(u64, TimerHandle), Entry<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            next_handle: 1,
            pending: BTreeMap::new(),
        }
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn schedule(&mut self, delay_ms: u64, group: TimerGroup, task: T) -> TimerHandle {
        let handle = TimerHandle(self.next_handle);
        self.next_handle += 1;
        let due = self.now_ms.saturating_add(delay_ms);
        self.pending.insert((due, handle), Entry { group, task });
        handle
    }

    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let key = self.pending.keys().find(|(_, h)| *h == handle).copied();
        match key {
            Some(key) => self.pending.remove(&key).is_some(),
            None => false,
        }
    }

    pub fn cancel_group(&mut self, group: TimerGroup) -> usize {
        let before = self.pending.len();
        self.pending.retain(|_, entry| entry.group != group);
        before - self.pending.len()
    }

    pub fn cancel_all(&mut self) -> usize {
        let cancelled = self.pending.len();
        self.pending.clear();
        cancelled
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn pending_in(&self, group: TimerGroup) -> usize {
        self.pending
            .values()
            .filter(|entry| entry.group == group)
            .count()
    }

    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.keys().next().map(|(due, _)| *due)
    }

    /// Removes the earliest entry due at or before `until_ms` and moves the
    /// clock to its due time.
    pub fn pop_due(&mut self, until_ms: u64) -> Option<Fired<T>> {
        let (&(due, handle), _) = self.pending.iter().next()?;
        if due > until_ms {
            return None;
        }
        let entry = self.pending.remove(&(due, handle))?;
        self.now_ms = self.now_ms.max(due);
        Some(Fired {
            handle,
            group: entry.group,
            due_ms: due,
            task: entry.task,
        })
    }

    /// Moves the clock forward without firing anything. Never moves it back.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}
