use std::io::Write;
use std::thread;
use std::time::Duration;

use crate::thread_pool::ThreadPool;

/// Throttle a producer that schedules work faster than the pool retires it.
///
/// The pool queue is unbounded, so a producer walking a large file tree could otherwise park
/// the whole tree in memory as pending commands. The controller counts submissions and, once
/// the count exceeds the batch threshold, stalls the producer until it observes a zero queue
/// depth, polling on a fixed interval and printing a `.` per poll.
///
/// The stall ends on a zero queue-depth reading; one command per worker may still be
/// executing at that point. The enforced bound is on memory (at most threshold + workers + 1
/// commands outstanding at once), not on completion of the batch.
pub struct BackpressureController {
    batch_size: usize,
    poll_interval: Duration,
    submitted: usize,
}

impl BackpressureController {
    /// Create a controller that pauses submission after `batch_size` submissions. A zero
    /// `batch_size` disables throttling and lets the queue grow without bound.
    pub fn new(batch_size: usize) -> BackpressureController {
        BackpressureController {
            batch_size,
            poll_interval: Duration::from_secs(1),
            submitted: 0,
        }
    }

    /// Override the queue depth polling interval
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> BackpressureController {
        self.poll_interval = poll_interval;
        self
    }

    /// Record one submission and, when the batch threshold is exceeded, block the calling
    /// producer until `pool` reports an empty queue.
    ///
    /// The comparison is strict, so exactly `batch_size + 1` submissions go through before the
    /// first stall.
    pub fn throttle(&mut self, pool: &ThreadPool) {
        if self.batch_size == 0 {
            return;
        }
        self.submitted += 1;
        if self.submitted <= self.batch_size {
            return;
        }
        self.submitted = 0;
        while pool.len() > 0 {
            thread::sleep(self.poll_interval);
            print!(".");
            let _ = std::io::stdout().flush();
        }
    }
}
