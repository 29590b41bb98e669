use anyhow::{anyhow, Result};

use fintrack::log_buffer::LogBuffer;
use fintrack::logging::init_logging;
use fintrack::settings::Settings;
use fintrack::App;

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::new()?;
    settings.validate().map_err(|e| anyhow!("Invalid configuration: {}", e))?;

    let log_buffer = LogBuffer::new(5000);
    let logging = init_logging(log_buffer.clone())?;
    tracing::info!(path = %logging.log_path.display(), "Writing logs to file");

    let session = fintrack_session::load_session(settings.session_file.clone())?;

    App::new(settings, session, log_buffer).run().await?;

    Ok(())
}
