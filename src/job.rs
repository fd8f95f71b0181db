use crate::command::Command;

/// A single entry in the pool queue.
///
/// `Stop` is the termination sentinel: the worker that dequeues it exits its loop without
/// dequeueing again. It is consumed by exactly one worker and is never treated as user work,
/// so the pool enqueues one per worker at shutdown.
pub enum Job {
    /// One unit of user work
    Run(Box<dyn Command + Send + Sync>),
    /// Stop the worker that dequeues this entry
    Stop,
}
