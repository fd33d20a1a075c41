use clap::Parser;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(
    name = "countrysrv",
    about = "HTTP server that serves country metadata from public APIs",
    version,
    author
)]
pub struct Args {
    /// Overrides SERVER_PORT
    #[arg(short, long)]
    pub port: Option<u16>,

    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    pub fn tracing_level(&self) -> Level {
        self.log_level.parse().unwrap_or(Level::INFO)
    }
}
