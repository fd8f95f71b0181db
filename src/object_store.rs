use std::path::Path;

use anyhow::Context;
use aws_sdk_s3::config::{BehaviorVersion, Credentials, Region};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use tokio::runtime::Runtime;

/// Destination for uploaded objects.
///
/// One operation: create or overwrite the object at `key` with the contents of the file at
/// `path`. The call is synchronous from the caller's point of view and may fail; the caller
/// decides what a failure means.
pub trait ObjectStore: Send + Sync {
    fn put_object(&self, key: &str, path: &Path) -> Result<(), anyhow::Error>;
}

/// [ObjectStore] over an S3 bucket.
///
/// The upload workers are plain OS threads, so the store owns a tokio runtime and drives each
/// transfer to completion with `block_on`. Objects are created with a private canned ACL and a
/// `Content-Disposition: attachment` metadata entry.
pub struct S3ObjectStore {
    bucket: String,
    client: aws_sdk_s3::Client,
    runtime: Runtime,
}

impl S3ObjectStore {
    /// Create a store for `bucket` from static credentials and an explicit region.
    pub fn new(
        access_key: &str,
        secret_key: &str,
        bucket: &str,
        region: &str,
    ) -> Result<S3ObjectStore, anyhow::Error> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
            .context("failed to create transfer runtime")?;

        let credentials = Credentials::new(access_key, secret_key, None, None, "s3-uploader");
        let config = aws_sdk_s3::config::Builder::new()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(credentials)
            .build();

        Ok(
            S3ObjectStore {
                bucket: bucket.to_string(),
                client: aws_sdk_s3::Client::from_conf(config),
                runtime,
            }
        )
    }
}

impl ObjectStore for S3ObjectStore {
    fn put_object(&self, key: &str, path: &Path) -> Result<(), anyhow::Error> {
        self.runtime.block_on(async {
            let body = ByteStream::from_path(path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            self.client
                .put_object()
                .bucket(&self.bucket)
                .key(key)
                .body(body)
                .acl(ObjectCannedAcl::Private)
                .metadata("Content-Disposition", "attachment")
                .send()
                .await
                .with_context(|| format!("failed to upload {key}"))?;
            Ok(())
        })
    }
}
