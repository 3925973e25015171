use serde::{Deserialize, Deserializer};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::types::{ShutterError, ShutterResult};

/// Config location relative to the user's home directory.
pub const SETTINGS_DIR: &str = ".shutter";
pub const SETTINGS_FILE: &str = "shutter-config";

/// Overrides the config location when set to a non-empty value.
pub const SETTINGS_PATH_ENV: &str = "SHUTTER_CONFIG";

pub const DEFAULT_REGION: &str = "ru-central1";
pub const DEFAULT_ENDPOINT: &str = "storage.yandexcloud.net";

/// Credentials and bucket settings read from `~/.shutter/shutter-config`.
///
/// Keys are PascalCase in the file (`S3AccessKeyId`, `S3SecretAccessKey`,
/// `S3Bucket`, `S3Url`); all-lowercase spellings are accepted too. Absent or
/// `null` keys fall back to an empty string, or to the defaults above for
/// region and upload endpoint.
#[derive(Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Settings {
    #[serde(default, alias = "s3accesskeyid", deserialize_with = "null_as_default")]
    pub s3_access_key_id: String,
    #[serde(default, alias = "s3secretaccesskey", deserialize_with = "null_as_default")]
    pub s3_secret_access_key: String,
    #[serde(default, alias = "s3bucket", deserialize_with = "null_as_default")]
    pub s3_bucket: String,
    /// Endpoint host the presigned URL is generated against.
    #[serde(default, alias = "s3url", deserialize_with = "null_as_default")]
    pub s3_url: String,
    #[serde(default = "default_region", alias = "s3region", deserialize_with = "null_as_region")]
    pub s3_region: String,
    /// Endpoint host uploads are sent to.
    #[serde(default = "default_endpoint", alias = "s3endpoint", deserialize_with = "null_as_endpoint")]
    pub s3_endpoint: String,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn null_as_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_region<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_region))
}

fn null_as_endpoint<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_endpoint))
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("s3_access_key_id", &self.s3_access_key_id)
            .field("s3_secret_access_key", &"<redacted>")
            .field("s3_bucket", &self.s3_bucket)
            .field("s3_url", &self.s3_url)
            .field("s3_region", &self.s3_region)
            .field("s3_endpoint", &self.s3_endpoint)
            .finish()
    }
}

impl Settings {
    /// Load settings from the per-user config file.
    pub fn load() -> ShutterResult<Self> {
        let path = settings_path()?;
        Self::from_path(&path)
    }

    pub fn from_path(path: &Path) -> ShutterResult<Self> {
        debug!("Reading settings from {:?}", path);
        let content = std::fs::read_to_string(path).map_err(|source| ShutterError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content).map_err(|source| ShutterError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}

/// Resolve the config file path, honouring `SHUTTER_CONFIG`.
pub fn settings_path() -> ShutterResult<PathBuf> {
    resolve_settings_path(std::env::var_os(SETTINGS_PATH_ENV), dirs::home_dir())
}

fn resolve_settings_path(
    override_path: Option<OsString>,
    home: Option<PathBuf>,
) -> ShutterResult<PathBuf> {
    if let Some(path) = override_path.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    let home = home.ok_or(ShutterError::HomeDirNotFound)?;
    Ok(home.join(SETTINGS_DIR).join(SETTINGS_FILE))
}
