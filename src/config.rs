//! CLI argument parsing using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Upload file trees to an S3 bucket with a fixed pool of concurrent workers
#[derive(Parser, Debug, Clone)]
#[command(
    name = "s3-uploader",
    version,
    about = "Upload file trees to an S3 bucket with a fixed pool of concurrent workers",
    long_about = "Uploads every regular file under the given paths to an S3 bucket, keyed by \
                  the path relative to the traversal root. Directories are recursed into and \
                  symlinks are skipped. Submission pauses after every batch until the upload \
                  queue drains, so memory use stays bounded for arbitrarily large trees.",
    after_help = "EXAMPLES:\n    \
        s3-uploader -a KEY -s SECRET -b backups -r us-east-1 /var/backups\n    \
        s3-uploader -a KEY -s SECRET -b media -r eu-west-1 -w 20 photos/ report.csv"
)]
pub struct CliArgs {
    /// Access key
    #[arg(short = 'a', long, value_name = "ACCESS_KEY")]
    pub access_key: String,

    /// Secret key
    #[arg(short = 's', long, value_name = "SECRET_KEY")]
    pub secret_key: String,

    /// Target bucket
    #[arg(short = 'b', long, value_name = "BUCKET")]
    pub bucket: String,

    /// Bucket region
    #[arg(short = 'r', long, value_name = "REGION")]
    pub region: String,

    /// Number of upload workers
    #[arg(short = 'w', long, default_value_t = 10, value_name = "NUM")]
    pub workers: usize,

    /// Pause submission after this many files until the queue drains (0 disables throttling)
    #[arg(long, default_value_t = 1000, value_name = "NUM")]
    pub batch_size: usize,

    /// Directories or files to upload
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<PathBuf>,
}
