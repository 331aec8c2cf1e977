mod config;
mod player;

use std::process::ExitCode;

use clap::Parser;

use crate::config::HostConfig;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt::init();

    let config = HostConfig::parse();
    match player::play(&config).await {
        Ok(summary) => {
            tracing::info!(
                frames = summary.frames.len(),
                captured = summary.captured(),
                width = summary.width,
                height = summary.height,
                "shardpulse finished"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "shardpulse failed");
            ExitCode::FAILURE
        }
    }
}
