use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Milliseconds on the scene clock.
pub(crate) type Millis = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct TimerId(u64);

/// Virtual-clock scheduler for "run after duration" tasks.
///
/// Tasks are plain data. The owner pops due tasks and runs them; a task popped
/// at its due time moves the clock to that instant, so anything it schedules is
/// measured from when it was meant to run rather than from the frame that
/// happened to notice it.
pub(crate) struct Timers<T> {
    now: Millis,
    seq: u64,
    queue: BinaryHeap<Reverse<(Millis, u64)>>,
    tasks: HashMap<u64, T>,
}

impl<T> Timers<T> {
    pub(crate) fn new() -> Self {
        Self {
            now: 0,
            seq: 0,
            queue: BinaryHeap::new(),
            tasks: HashMap::new(),
        }
    }

    pub(crate) fn now(&self) -> Millis {
        self.now
    }

    pub(crate) fn after(&mut self, delay: Millis, task: T) -> TimerId {
        let id = self.seq;
        self.seq += 1;
        self.queue.push(Reverse((self.now + delay, id)));
        self.tasks.insert(id, task);
        TimerId(id)
    }

    /// Drops a pending task. Returns false if it already ran or was cancelled.
    #[cfg_attr(not(test), allow(dead_code))]
    pub(crate) fn cancel(&mut self, id: TimerId) -> bool {
        self.tasks.remove(&id.0).is_some()
    }

    pub(crate) fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Next task due at or before `until`, in (due, schedule order).
    pub(crate) fn pop_due(&mut self, until: Millis) -> Option<T> {
        while let Some(Reverse((due, id))) = self.queue.peek().copied() {
            if due > until {
                return None;
            }
            self.queue.pop();
            // cancelled entries stay in the heap until they surface
            if let Some(task) = self.tasks.remove(&id) {
                self.now = self.now.max(due);
                return Some(task);
            }
        }
        None
    }

    /// Moves the clock forward once every due task has been popped.
    pub(crate) fn advance(&mut self, until: Millis) {
        self.now = self.now.max(until);
    }
}
