use async_trait::async_trait;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use aws_sdk_s3::primitives::ByteStream;
use bytes::Bytes;
use tracing::{debug, info};

use super::{FileStore, StorageError};
use crate::config::S3Settings;

/// Objects in a single S3 bucket (AWS or MinIO).
pub struct S3FileStore {
    client: aws_sdk_s3::Client,
    bucket: String,
}

impl S3FileStore {
    pub fn new(client: aws_sdk_s3::Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    /// Constructs a client configured for MinIO (custom endpoint) or AWS.
    pub async fn from_settings(settings: &S3Settings) -> Self {
        let credentials = Credentials::new(
            &settings.access_key_id,
            &settings.secret_access_key,
            None,
            None,
            "resume-api-static",
        );

        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(settings.region.clone()))
            .credentials_provider(credentials);
        if let Some(endpoint) = &settings.endpoint {
            loader = loader.endpoint_url(endpoint);
        }
        let sdk_config = loader.load().await;

        // MinIO only serves path-style URLs.
        let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
            .force_path_style(settings.endpoint.is_some())
            .build();

        info!("S3 file store initialized (bucket: {})", settings.bucket);
        Self::new(aws_sdk_s3::Client::from_conf(s3_config), &settings.bucket)
    }
}

#[async_trait]
impl FileStore for S3FileStore {
    async fn put(&self, key: &str, bytes: Bytes) -> Result<(), StorageError> {
        let len = bytes.len();
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| StorageError::Backend(format!("put_object {key}: {e}")))?;
        debug!("Uploaded {len} bytes to s3://{}/{key}", self.bucket);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Bytes, StorageError> {
        let output = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| {
                let service_error = e.into_service_error();
                if service_error.is_no_such_key() {
                    StorageError::NotFound(key.to_string())
                } else {
                    StorageError::Backend(format!("get_object {key}: {service_error}"))
                }
            })?;

        let data = output
            .body
            .collect()
            .await
            .map_err(|e| StorageError::Backend(format!("reading {key}: {e}")))?;
        Ok(data.into_bytes())
    }

    fn backend(&self) -> &'static str {
        "s3"
    }
}
