use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;
use shutter::{config::Settings, storage::S3Client, upload, utils::init_logger};

#[derive(Debug, Parser)]
#[command(name = "shutter", version, about = "Upload a file to S3-compatible storage and print its URL")]
struct Cli {
    /// File to upload; the object key is its base name
    file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logger();

    let cli = Cli::parse();
    let Some(path) = cli.file else {
        return Ok(());
    };

    // Load configuration
    let settings = Settings::load()?;
    debug!("Configuration loaded: {:?}", settings);

    let client = S3Client::new(&settings)?;
    let url = upload::run(&client, &path).await?;

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(url.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
