// Shutter - upload a file to S3-compatible storage and print its public URL

pub mod config;
pub mod storage;
pub mod types;
pub mod upload;
pub mod utils;

// Re-exports for convenience
pub use config::Settings;
pub use types::{ShutterError, ShutterResult};
