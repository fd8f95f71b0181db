//! Upload file trees to an S3 bucket with a fixed pool of concurrent workers.
//!
//! The crate is organized around a thread pool that drains an unbounded FIFO job
//! queue. The producer walks the file trees named on the command line, schedules
//! one upload command per regular file and throttles itself through
//! [backpressure::BackpressureController] so that the queue never grows far beyond
//! one batch. Shutdown enqueues one termination sentinel per worker and joins them,
//! so every upload scheduled before shutdown is attempted before the process exits.

pub mod backpressure;
pub mod blocking_queue;
pub mod blocking_queue_adapter;
pub mod command;
pub mod config;
pub mod crossbeam_blocking_queue;
pub mod humanize;
pub mod job;
pub mod object_store;
pub mod queue_type;
pub mod thread_pool;
pub mod thread_pool_builder;
pub mod walker;
