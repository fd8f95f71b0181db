use crate::queue_type::QueueType;
use crate::thread_pool::ThreadPool;

/// Build a [ThreadPool]
///
/// Modify default thread pool parameters and build the thread pool
pub struct ThreadPoolBuilder {
    name: String,
    workers: usize,
    queue_type: QueueType,
    join_error_handler: fn(String, String),
}

impl ThreadPoolBuilder {
    /// Create a new builder
    ///
    /// Default values:
    /// * `name` - "unnamed"
    /// * `workers` - 1
    /// * `queue_type` - [QueueType::BlockingQueue]
    /// * `join_error_handler` - logs the thread name and error message
    ///
    ///  # Example
    /// ```
    ///
    /// use s3_uploader::thread_pool::ThreadPool;
    /// use s3_uploader::thread_pool_builder::ThreadPoolBuilder;
    ///
    /// fn create_thread_pool() -> Result<ThreadPool, anyhow::Error> {
    ///     ThreadPoolBuilder::new()
    ///         .with_name_str("uploader")
    ///         .with_workers(4)
    ///         .build()
    /// }
    /// ```
    pub fn new() -> ThreadPoolBuilder {
        let join_error_handler = |name: String, message: String| {
            log::error!("Thread {name} ended with an error: {message}")
        };

        ThreadPoolBuilder {
            name: "unnamed".to_string(),
            workers: 1,
            queue_type: QueueType::BlockingQueue,
            join_error_handler,
        }
    }

    /// Set the base name for threads in the thread pool
    pub fn with_name(&mut self, name: String) -> &mut ThreadPoolBuilder {
        self.name = name.clone();
        self
    }

    /// Set the base name for threads in the thread pool. A convenience method that accepts &str
    pub fn with_name_str(&mut self, name: &str) -> &mut ThreadPoolBuilder {
        self.name = name.to_string();
        self
    }

    /// Set the number of worker threads in the thread pool
    pub fn with_workers(&mut self, workers: usize) -> &mut ThreadPoolBuilder {
        self.workers = workers;
        self
    }

    /// Specify the [QueueType]
    pub fn with_queue_type(&mut self, queue_type: QueueType) -> &mut ThreadPoolBuilder {
        self.queue_type = queue_type;
        self
    }

    /// Set the error handler that is called for each thread that exited with error during join
    pub fn with_join_error_handler(&mut self, join_error_handler: fn(String, String)) -> &mut ThreadPoolBuilder {
        self.join_error_handler = join_error_handler;
        self
    }

    /// Build the thread pool
    pub fn build(&self) -> Result<ThreadPool, anyhow::Error> {
        ThreadPool::new(
            self.name.clone(),
            self.workers,
            self.queue_type,
            self.join_error_handler,
        )
    }
}

impl Default for ThreadPoolBuilder {
    fn default() -> Self {
        Self::new()
    }
}
