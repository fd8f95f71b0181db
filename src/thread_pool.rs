use std::sync::{Arc, Barrier};
use std::thread::{Builder, JoinHandle};

use anyhow::anyhow;
use log::error;

use crate::blocking_queue_adapter::BlockingQueueAdapter;
use crate::command::Command;
use crate::job::Job;
use crate::queue_type::QueueType;

/// Execute upload commands concurrently while the producer stays in control of memory
/// consumption.
///
/// The pool owns an unbounded FIFO queue drained by a fixed set of worker threads, all started
/// by the constructor. Producers hold only the scheduling surface: a scheduled command is
/// dequeued by exactly one worker and executed to completion before that worker dequeues
/// again, so a slow or failing command delays only its own worker. A command error is logged
/// and remembered as the thread's last error; it never stops the worker loop.
///
/// Because [ThreadPool::schedule] never pushes back, a producer that outpaces the workers is
/// expected to throttle itself with [crate::backpressure::BackpressureController] using the
/// queue depth reported by [ThreadPool::len].
///
/// For reference see [Command Pattern](https://en.wikipedia.org/wiki/Command_pattern) and
/// [Producer-Consumer](https://en.wikipedia.org/wiki/Producer%E2%80%93consumer_problem)
pub struct ThreadPool {
    name: String,
    workers: usize,
    queue: Arc<BlockingQueueAdapter<Job>>,
    threads: Vec<JoinHandle<Result<(), anyhow::Error>>>,
    join_error_handler: fn(String, String),
    expired: bool,
}

impl ThreadPool {
    pub(crate) fn new(
        name: String,
        workers: usize,
        queue_type: QueueType,
        join_error_handler: fn(String, String),
    ) -> Result<ThreadPool, anyhow::Error> {
        if workers == 0 {
            return Err(anyhow!("the {name} pool needs at least one worker"));
        }
        let start_barrier = Arc::new(Barrier::new(workers + 1));
        let mut threads = Vec::<JoinHandle<Result<(), anyhow::Error>>>::new();
        let queue = Arc::new(BlockingQueueAdapter::new(queue_type));
        for i in 0..workers {
            let barrier = start_barrier.clone();
            let t = Self::create_thread(
                &name,
                i,
                barrier,
                queue.clone(),
            )?;
            threads.push(t);
        }

        start_barrier.wait();

        Ok(
            ThreadPool {
                name,
                workers,
                queue: queue.clone(),
                threads,
                join_error_handler,
                expired: false,
            }
        )
    }

    /// Get the number of worker threads in the pool
    pub fn workers(&self) -> usize {
        self.workers
    }

    fn create_thread(
        name: &String,
        index: usize,
        barrier: Arc<Barrier>,
        queue: Arc<BlockingQueueAdapter<Job>>,
    ) -> Result<JoinHandle<Result<(), anyhow::Error>>, anyhow::Error> {
        let builder = Builder::new();
        Ok(builder
            .name(format!("{name}-{index}"))
            .spawn(move || {
                barrier.wait();
                let mut r: Result<(), anyhow::Error> = Ok(());
                loop {
                    match queue.dequeue() {
                        Some(Job::Run(command)) => {
                            match command.execute() {
                                Ok(_) => {}
                                Err(e) => {
                                    error!(
                                        "{}: {e:#}",
                                        std::thread::current().name().unwrap_or("unnamed"),
                                    );
                                    r = Err(e);
                                }
                            }
                        }
                        Some(Job::Stop) => {
                            break r;
                        }
                        None => {}
                    }
                }
            }
            )?
        )
    }

    /// The number of scheduled commands that no worker has started yet. The reading is a
    /// snapshot, correct at the time of checking only. Should be used for monitoring and
    /// throttling decisions, never for correctness.
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Indication if the queue is empty in this point of time. A snapshot, like
    /// [ThreadPool::len].
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Schedule a command for execution.
    ///
    /// Never blocks: the queue is unbounded and the command is picked up in FIFO order by the
    /// first free worker. Safe to call from concurrent producers. Panics if the pool was
    /// already shut down.
    pub fn schedule(&self, command: Box<dyn Command + Send + Sync>) {
        assert!(!self.expired);
        self.queue.enqueue(Job::Run(command));
    }

    /// Shut down the thread pool.
    ///
    /// Enqueues one [Job::Stop] sentinel per worker, then joins all workers. Commands queued
    /// ahead of the sentinels are executed first, so shutdown means "finish everything
    /// scheduled so far, then stop", not a cancellation of pending work. Safe to call more
    /// than once; subsequent calls return without effect.
    pub fn shutdown(&mut self) -> Result<(), anyhow::Error> {
        if self.expired {
            return Ok(());
        }
        self.expired = true;
        for _i in 0..self.workers {
            self.queue.enqueue(Job::Stop);
        }
        self.join()
    }

    fn join(&mut self) -> Result<(), anyhow::Error> {
        let mut join_errors = Vec::<String>::new();
        while let Some(t) = self.threads.pop() {
            let name = t.thread().name().unwrap_or("unnamed").to_string();
            match t.join() {
                Ok(r) => {
                    match r {
                        Ok(_) => {}
                        Err(e) => {
                            let message = format!("{e:?}");
                            join_errors.push(message.clone());
                            (self.join_error_handler)(name, message);
                        }
                    }
                }
                Err(e) => {
                    let mut message = "Unknown error".to_string();
                    if let Some(error) = e.downcast_ref::<&'static str>() {
                        message = error.to_string();
                    }
                    join_errors.push(message.clone());
                    (self.join_error_handler)(name, message);
                }
            }
        }
        if join_errors.is_empty() {
            Ok(())
        } else {
            Err(anyhow!("Errors occurred in threads of the {} pool: {}", self.name, join_errors.join(", ")))
        }
    }
}

impl Drop for ThreadPool {
    /// Shutdown runs on every exit path. A pool dropped without an explicit shutdown still
    /// drains its queue and joins its workers.
    fn drop(&mut self) {
        if let Err(e) = self.shutdown() {
            error!("{}: {e:#}", self.name);
        }
    }
}
