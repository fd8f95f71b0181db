/// Trait that specifies the interface for work executed on the upload pool
pub trait Command {
    /// The execute method will be executed in the context of one of the threads of the thread
    /// pool.
    ///
    /// The execute method should avoid panics. Returned errors are logged by the executing
    /// worker and the last one per thread is passed to the join handler set by
    /// [crate::thread_pool_builder::ThreadPoolBuilder::with_join_error_handler]; they never
    /// stop the worker loop.
    fn execute(&self) -> Result<(), anyhow::Error>;
}
