// CLI module for visiongate

use clap::Parser;

/// visiongate - HTTP gateway for Azure Computer Vision image analysis
#[derive(Parser, Debug)]
#[command(name = "visiongate", version, about, long_about = None)]
pub struct Args {
    /// Override the listening port from configuration
    #[arg(long)]
    pub port: Option<u16>,
}
