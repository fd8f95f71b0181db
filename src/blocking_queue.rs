use std::collections::VecDeque;
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

/// Blocking unbounded queue
///
/// `E: Send + Sync` - the element type
/// This is a multiple producers / multiple consumers insertion-ordered queue. Enqueueing
/// never blocks; dequeueing blocks while the queue is empty.
/// Reference: [Producer-Consumer](https://en.wikipedia.org/wiki/Producer%E2%80%93consumer_problem)
pub struct BlockingQueue<E> where E: Send + Sync {
    elements: Mutex<VecDeque<E>>,
    available: Condvar,
}

impl<E> BlockingQueue<E> where E: Send + Sync {
    /// Create a new empty queue
    /// ```
    /// use s3_uploader::blocking_queue::BlockingQueue;
    /// let q: BlockingQueue<i32> = BlockingQueue::new();
    /// ```
    pub fn new() -> BlockingQueue<E> {
        BlockingQueue::<E> {
            elements: Mutex::new(VecDeque::new()),
            available: Condvar::new(),
        }
    }

    /// The current length of the queue. Note that the reported length is correct at the time
    /// of checking, the actual length may change between the call and the access to the result
    /// value. Should be used for diagnostic and monitoring only.
    /// ```
    /// use s3_uploader::blocking_queue::BlockingQueue;
    /// let q: BlockingQueue<i32> = BlockingQueue::new();
    /// q.enqueue(11);
    /// assert_eq!(q.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.elements.lock().unwrap().len()
    }

    /// Indication if the queue is empty in this point of time. Should be used for diagnostic
    /// and monitoring only.
    pub fn is_empty(&self) -> bool {
        self.elements.lock().unwrap().is_empty()
    }

    /// Enqueue an element. The queue is unbounded so this never blocks on capacity.
    pub fn enqueue(&self, element: E) {
        let mut elements = self.elements.lock().unwrap();
        elements.push_back(element);
        self.available.notify_one();
    }

    /// Dequeue an element from the queue. When the queue is empty will block until an element
    /// is available.
    pub fn dequeue(&self) -> Option<E> {
        self.try_dequeue(Duration::MAX)
    }

    /// Dequeue an element from the queue with timeout.
    pub fn try_dequeue(&self, timeout: Duration) -> Option<E> {
        let mut elements = self.elements.lock().unwrap();
        let mut t = timeout;
        let mut start = Instant::now();
        while elements.is_empty() {
            let (e, timeout_result) = self.available.wait_timeout(elements, t).unwrap();
            elements = e;
            if timeout_result.timed_out() {
                return elements.pop_front();
            } else {
                let elapsed = start.elapsed();
                if elapsed < t {
                    t -= elapsed;
                    start = Instant::now();
                } else {
                    return elements.pop_front();
                }
            }
        }
        elements.pop_front()
    }
}

impl<E> Default for BlockingQueue<E> where E: Send + Sync {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread::Builder;

    use super::*;

    #[test]
    fn test_try_dequeue() {
        let q = BlockingQueue::<i32>::new();

        let r = q.try_dequeue(Duration::from_millis(0));
        assert_eq!(r, None);
        let r = q.try_dequeue(Duration::from_millis(10));
        assert_eq!(r, None);
    }

    #[test]
    fn test_enqueue_never_blocks() {
        let q = BlockingQueue::<i32>::new();
        for i in 0..10_000 {
            q.enqueue(i);
        }
        assert_eq!(q.len(), 10_000);
    }

    #[test]
    fn test_fifo() {
        let q = BlockingQueue::<i32>::new();
        for i in 0..128 {
            q.enqueue(i);
        }

        for i in 0..128 {
            assert_eq!(q.dequeue().unwrap(), i);
        }
    }

    #[test]
    fn test_mpsc() {
        let q = Arc::new(BlockingQueue::<(i32, i32)>::new());
        let qp1 = q.clone();
        let qp2 = q.clone();
        let qc1 = q.clone();

        let p1 = Builder::new()
            .spawn(
                move || {
                    for i in 0..2048 {
                        qp1.enqueue((1, i));
                    }
                }
            );

        let p2 = Builder::new()
            .spawn(
                move || {
                    for i in 0..2048 {
                        qp2.enqueue((2, i));
                    }
                }
            );

        let c1 = Builder::new()
            .spawn(
                move || {
                    let mut collector = Vec::<(i32, i32)>::new();
                    loop {
                        let element = qc1.dequeue();
                        collector.push(element.unwrap());
                        if collector.len() == 4096 {
                            break collector;
                        }
                    }
                }
            );
        p1.unwrap().join().expect("failed to join producer");
        p2.unwrap().join().expect("failed to join producer");

        let mut collector = c1.unwrap().join().expect("failed to join consumer");
        for i in 0..2048 {
            let i1 = collector.iter().position(|e| *e == (1, i)).unwrap();
            collector.remove(i1);
            let i2 = collector.iter().position(|e| *e == (2, i)).unwrap();
            collector.remove(i2);
        }
        assert!(collector.is_empty());
    }
}
