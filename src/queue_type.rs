use std::fmt::{Display, Formatter};

/// Selects the queue implementation backing a thread pool.
///
/// [QueueType::BlockingQueue] parks idle workers on a condition variable and is the default.
/// [QueueType::CrossbeamBlockingQueue] waits with an exponential backoff instead and trades
/// idle CPU for lower dequeue latency under sustained load.
#[derive(Copy, Clone)]
pub enum QueueType {
    BlockingQueue,
    CrossbeamBlockingQueue,
}

impl Display for QueueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            QueueType::BlockingQueue => {
                write!(f, "BlockingQueue")
            }
            QueueType::CrossbeamBlockingQueue => {
                write!(f, "CrossbeamBlockingQueue")
            }
        }
    }
}
