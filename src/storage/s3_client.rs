// S3 client backed by rust-s3

use async_trait::async_trait;
use s3::bucket::Bucket;
use s3::creds::Credentials;
use s3::Region;
use tokio::fs::File;
use tracing::{debug, info};

use super::ObjectStore;
use crate::config::Settings;
use crate::types::{ShutterError, ShutterResult};

/// Lifetime of generated presigned URLs.
pub const PRESIGN_EXPIRY_SECS: u32 = 3600;

pub struct S3Client {
    /// Bucket handle pointed at the upload endpoint.
    bucket: Box<Bucket>,
    /// Same bucket, addressed through the public `S3Url` host.
    presign_bucket: Box<Bucket>,
}

impl S3Client {
    pub fn new(settings: &Settings) -> ShutterResult<Self> {
        if settings.s3_url.trim().is_empty() {
            return Err(ShutterError::Client("S3Url is empty".to_string()));
        }
        let bucket = Self::create_bucket(settings, &settings.s3_endpoint)?;
        let presign_bucket = Self::create_bucket(settings, &settings.s3_url)?;
        Ok(Self { bucket, presign_bucket })
    }

    fn create_bucket(settings: &Settings, endpoint: &str) -> ShutterResult<Box<Bucket>> {
        let credentials = Credentials::new(
            Some(&settings.s3_access_key_id),
            Some(&settings.s3_secret_access_key),
            None,
            None,
            None,
        )
        .map_err(|e| ShutterError::Client(format!("invalid credentials: {}", e)))?;

        let region = Region::Custom {
            region: settings.s3_region.clone(),
            endpoint: endpoint.to_string(),
        };

        Bucket::new(&settings.s3_bucket, region, credentials)
            .map_err(|e| ShutterError::Client(format!("creating bucket handle: {}", e)))
    }
}

#[async_trait]
impl ObjectStore for S3Client {
    async fn upload(&self, key: &str, content_type: Option<&str>, body: &mut File) -> ShutterResult<()> {
        debug!("uploading s3://{}/{} ({:?})", self.bucket.name(), key, content_type);

        let result = match content_type {
            Some(content_type) => {
                self.bucket
                    .put_object_stream_with_content_type(body, key, content_type)
                    .await
            }
            None => self.bucket.put_object_stream(body, key).await,
        };
        result.map_err(|e| ShutterError::Upload {
            key: key.to_string(),
            message: e.to_string(),
        })?;

        info!("uploaded {}", key);
        Ok(())
    }

    async fn presign_get(&self, key: &str) -> ShutterResult<String> {
        self.presign_bucket
            .presign_get(key, PRESIGN_EXPIRY_SECS, None)
            .await
            .map_err(|e| ShutterError::Presign {
                key: key.to_string(),
                message: e.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_settings() -> Settings {
        Settings::from_json(
            r#"{
                "S3AccessKeyId": "AKIDEXAMPLE",
                "S3SecretAccessKey": "wJalrXUtnFEMI",
                "S3Bucket": "screenshots",
                "S3Url": "cdn.example.com"
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_client_construction() {
        let client = S3Client::new(&test_settings()).unwrap();

        assert_eq!(client.bucket.name(), "screenshots");
        assert_eq!(client.presign_bucket.name(), "screenshots");
    }

    #[test]
    fn test_empty_url_is_rejected() {
        let mut settings = test_settings();
        settings.s3_url = String::new();

        let err = S3Client::new(&settings).err().unwrap();
        assert!(matches!(err, ShutterError::Client(ref msg) if msg.contains("S3Url")));
    }

    #[tokio::test]
    async fn test_presign_uses_url_override() {
        let client = S3Client::new(&test_settings()).unwrap();

        let url = client.presign_get("photo.jpg").await.unwrap();

        assert!(url.starts_with("https://screenshots.cdn.example.com/photo.jpg?"), "{}", url);
        assert!(url.contains("X-Amz-Signature="));
        assert!(url.contains("X-Amz-Expires=3600"));
    }
}
