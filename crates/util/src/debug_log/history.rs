//! An in-memory record of the most recent log lines, shown by the app's debug
//! info window.

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

/// How many lines the global history keeps before dropping the oldest ones.
pub const CAPACITY: usize = 500;

static HISTORY: History = History::new(CAPACITY);

/// A bounded queue of log lines.
#[derive(Debug)]
struct History {
    lines: Mutex<VecDeque<String>>,
    capacity: usize,
}

impl History {
    const fn new(capacity: usize) -> Self {
        Self {
            lines: Mutex::new(VecDeque::new()),
            capacity,
        }
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<String>> {
        // Nothing can leave the queue half-modified, so a poisoned lock is
        // still fine to use.
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn push(&self, line: String) {
        let mut lines = self.lock();
        if lines.len() >= self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    fn recent(&self) -> Vec<String> {
        self.lock().iter().cloned().collect()
    }
}

pub(super) fn push(line: String) {
    HISTORY.push(line);
}

/// A copy of the recorded lines, oldest first.
pub fn recent() -> Vec<String> {
    HISTORY.recent()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oldest_lines_are_dropped_at_capacity() {
        let history = History::new(3);
        for i in 0..5 {
            history.push(format!("line {i}"));
        }

        assert_eq!(history.recent(), ["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn empty_history_has_no_lines() {
        assert!(History::new(10).recent().is_empty());
    }
}
