use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Context;
use log::warn;

use crate::backpressure::BackpressureController;
use crate::command::Command;
use crate::humanize::humanize_size;
use crate::object_store::ObjectStore;
use crate::thread_pool::ThreadPool;

/// Upload of a single file, executed on a pool worker.
///
/// The file is stated and opened at execution time, not at scheduling time, so a file that
/// disappears or becomes unreadable while queued fails here and is reported by the worker.
/// One shot: a failed upload is not retried and not re-queued.
pub struct UploadCommand {
    store: Arc<dyn ObjectStore>,
    key: String,
    path: PathBuf,
    uploaded: Arc<AtomicUsize>,
}

impl UploadCommand {
    pub fn new(
        store: Arc<dyn ObjectStore>,
        key: String,
        path: PathBuf,
        uploaded: Arc<AtomicUsize>,
    ) -> UploadCommand {
        UploadCommand {
            store,
            key,
            path,
            uploaded,
        }
    }
}

impl Command for UploadCommand {
    fn execute(&self) -> Result<(), anyhow::Error> {
        let size = fs::metadata(&self.path)
            .with_context(|| format!("failed to stat {}", self.path.display()))?
            .len();
        let started = self.uploaded.fetch_add(1, Ordering::SeqCst) + 1;
        println!("uploading {} - {}", humanize_size(size), self.key);
        self.store.put_object(&self.key, &self.path)?;
        println!("uploaded - {} : {}", started, self.key);
        Ok(())
    }
}

/// Walks the file trees named on the command line and feeds upload commands to the pool,
/// throttling through the backpressure controller after every submission.
///
/// Owns the submission counter that numbers progress lines; the upload counter is shared with
/// the commands on the workers. Both are observability, not synchronization.
pub struct Walker {
    store: Arc<dyn ObjectStore>,
    throttle: BackpressureController,
    submitted: usize,
    uploaded: Arc<AtomicUsize>,
}

impl Walker {
    pub fn new(store: Arc<dyn ObjectStore>, throttle: BackpressureController) -> Walker {
        Walker {
            store,
            throttle,
            submitted: 0,
            uploaded: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of files scheduled so far, across all paths submitted to this walker.
    pub fn submitted(&self) -> usize {
        self.submitted
    }

    /// Number of uploads the workers have started. Best effort snapshot.
    pub fn uploaded(&self) -> usize {
        self.uploaded.load(Ordering::SeqCst)
    }

    /// Submit one path: a directory is walked recursively with keys relative to it, a regular
    /// file is scheduled under its base name. Symlinks are skipped either way, and an
    /// unreadable path is logged and skipped rather than failing the run.
    pub fn submit_path(&mut self, pool: &ThreadPool, path: &Path) {
        let metadata = match fs::symlink_metadata(path) {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!("skipping {}: {e}", path.display());
                return;
            }
        };
        if metadata.file_type().is_symlink() {
            warn!("skipping symlink {}", path.display());
            return;
        }
        if metadata.is_dir() {
            self.visit_dir(pool, path, path);
        } else {
            match path.file_name() {
                Some(name) => {
                    let key = name.to_string_lossy().into_owned();
                    self.schedule_file(pool, path, key);
                }
                None => {
                    warn!("skipping {}: not a named file", path.display());
                }
            }
        }
    }

    fn visit_dir(&mut self, pool: &ThreadPool, root: &Path, dir: &Path) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("skipping directory {}: {e}", dir.display());
                return;
            }
        };
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("skipping an entry of {}: {e}", dir.display());
                    continue;
                }
            };
            let path = entry.path();
            let metadata = match fs::symlink_metadata(&path) {
                Ok(metadata) => metadata,
                Err(e) => {
                    warn!("skipping {}: {e}", path.display());
                    continue;
                }
            };
            if metadata.file_type().is_symlink() {
                continue;
            }
            if metadata.is_dir() {
                self.visit_dir(pool, root, &path);
            } else {
                let key = object_key(root, &path);
                self.schedule_file(pool, &path, key);
            }
        }
    }

    fn schedule_file(&mut self, pool: &ThreadPool, path: &Path, key: String) {
        self.submitted += 1;
        println!("{} : {}", self.submitted, path.display());
        pool.schedule(Box::new(UploadCommand::new(
            self.store.clone(),
            key,
            path.to_path_buf(),
            self.uploaded.clone(),
        )));
        self.throttle.throttle(pool);
    }
}

/// Derive the destination key for `path` uploaded from the traversal root `root`.
pub fn object_key(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) => relative.to_string_lossy().into_owned(),
        Err(_) => path.to_string_lossy().into_owned(),
    }
}
