//! Virtual-time timer queue for the UI thread.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

struct Entry<T> {
    due: Duration,
    seq: u64,
    task: T,
}

impl<T> PartialEq for Entry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.due == other.due && self.seq == other.seq
    }
}

impl<T> Eq for Entry<T> {}

impl<T> PartialOrd for Entry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Entry<T> {
    // Reversed so the max-heap pops the earliest deadline first; ties go
    // to the task scheduled first.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .due
            .cmp(&self.due)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Tasks keyed by deadline, fired by whoever drives the clock.
///
/// Nothing sleeps: the owner calls [`TimerQueue::pop_due`] from its event
/// loop with the current time.
pub struct TimerQueue<T> {
    heap: BinaryHeap<Entry<T>>,
    next_seq: u64,
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    pub fn schedule(&mut self, due: Duration, task: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { due, seq, task });
    }

    /// Removes and returns the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: Duration) -> Option<T> {
        if self.heap.peek()?.due > now {
            return None;
        }
        self.heap.pop().map(|entry| entry.task)
    }

    pub fn next_deadline(&self) -> Option<Duration> {
        self.heap.peek().map(|entry| entry.due)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> std::fmt::Debug for TimerQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerQueue")
            .field("pending", &self.heap.len())
            .field("next_deadline", &self.next_deadline())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_pops_in_deadline_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(850), "remove");
        timers.schedule(ms(50), "fade");

        assert_eq!(timers.pop_due(ms(1000)), Some("fade"));
        assert_eq!(timers.pop_due(ms(1000)), Some("remove"));
        assert_eq!(timers.pop_due(ms(1000)), None);
    }

    #[test]
    fn test_not_due_stays_queued() {
        let mut timers = TimerQueue::new();
        timers.schedule(ms(50), 1);
        assert_eq!(timers.pop_due(ms(49)), None);
        assert_eq!(timers.len(), 1);
        assert_eq!(timers.pop_due(ms(50)), Some(1));
    }

    #[test]
    fn test_ties_fire_in_schedule_order() {
        let mut timers = TimerQueue::new();
        for i in 0..5 {
            timers.schedule(ms(10), i);
        }
        let fired: Vec<_> = std::iter::from_fn(|| timers.pop_due(ms(10))).collect();
        assert_eq!(fired, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_next_deadline() {
        let mut timers = TimerQueue::new();
        assert_eq!(timers.next_deadline(), None);
        timers.schedule(ms(30), ());
        timers.schedule(ms(20), ());
        assert_eq!(timers.next_deadline(), Some(ms(20)));
    }
}
