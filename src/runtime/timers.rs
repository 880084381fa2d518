// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Timer queue for setInterval-style recurring work
//!
//! Runs on a virtual clock measured from page mount, so a test can move the
//! page forward by minutes without sleeping. `advance(by)` fires every
//! interval due within `by`, in deadline order.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

/// Timer entry in the queue
#[derive(Debug, Clone)]
struct TimerEntry<T> {
    /// Virtual time the timer fires at
    fire_at: Duration,
    /// Repeat period
    period: Duration,
    task: T,
    /// Insertion order, breaks ties between equal deadlines
    seq: u64,
}

impl<T> PartialEq for TimerEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.fire_at == other.fire_at && self.seq == other.seq
    }
}

impl<T> Eq for TimerEntry<T> {}

impl<T> PartialOrd for TimerEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TimerEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for a min-heap: earliest deadline, then earliest scheduled
        other
            .fire_at
            .cmp(&self.fire_at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Browsers clamp interval delays; zero would otherwise spin forever
const MIN_INTERVAL: Duration = Duration::from_millis(1);

/// Timer queue for repeating tasks
#[derive(Debug)]
pub struct TimerQueue<T> {
    timers: BinaryHeap<TimerEntry<T>>,
    now: Duration,
    next_seq: u64,
}

impl<T: Clone> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> TimerQueue<T> {
    /// Create a new timer queue
    pub fn new() -> Self {
        Self {
            timers: BinaryHeap::new(),
            now: Duration::ZERO,
            next_seq: 0,
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    fn push(&mut self, fire_at: Duration, period: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.push(TimerEntry {
            fire_at,
            period,
            task,
            seq,
        });
    }

    /// Schedule a repeating task; the first run is one period from now
    pub fn set_interval(&mut self, task: T, interval: Duration) {
        let period = interval.max(MIN_INTERVAL);
        self.push(self.now + period, period, task);
    }

    /// Number of scheduled intervals
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Wait duration until next timer fires
    pub fn time_until_next(&self) -> Option<Duration> {
        self.timers
            .peek()
            .map(|t| t.fire_at.saturating_sub(self.now))
    }

    /// Pop the earliest timer due at or before `deadline` and re-queue it
    /// one period after its own deadline, so it never drifts.
    fn next_due(&mut self, deadline: Duration) -> Option<TimerEntry<T>> {
        if !self.timers.peek().is_some_and(|t| t.fire_at <= deadline) {
            return None;
        }
        let entry = self.timers.pop()?;
        self.now = self.now.max(entry.fire_at);
        self.push(entry.fire_at + entry.period, entry.period, entry.task.clone());
        Some(entry)
    }

    /// Fire everything due within `by` from now, in deadline order, and
    /// leave the clock at `now + by`
    pub fn advance(&mut self, by: Duration) -> Vec<T> {
        let deadline = self.now + by;
        let mut fired = Vec::new();
        while let Some(entry) = self.next_due(deadline) {
            fired.push(entry.task);
        }
        self.now = self.now.max(deadline);
        fired
    }
}
