pub mod toml_config;

pub use toml_config::LottoConfig;

#[cfg(feature = "cli")]
use crate::core::generator::GenerationMode;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "lotto")]
#[command(about = "Lottery number generator and drawing statistics")]
pub struct CliConfig {
    /// Base URL of the lottery API
    #[arg(long, env = "LOTTO_API_BASE_URL")]
    pub base_url: Option<String>,

    /// Path to a TOML configuration file
    #[arg(short, long, env = "LOTTO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[arg(long, help = "Print results as JSON instead of text")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Generate candidate number sets
    Generate {
        #[arg(long, value_enum, default_value_t = GenerationMode::Random)]
        mode: GenerationMode,

        #[arg(long, default_value = "1")]
        count: usize,

        /// Skip the pacing delay between draws
        #[arg(long)]
        no_pacing: bool,
    },
    /// List historical drawings, one page at a time
    Drawings {
        /// 1-based page number
        #[arg(long, default_value = "1")]
        page: usize,

        #[arg(long)]
        size: Option<usize>,
    },
    /// Show overall and per-position frequency rankings
    Stats {
        /// How many overall entries to show
        #[arg(long)]
        top: Option<usize>,
    },
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Loads the file configuration (or defaults) and applies command-line
    /// overrides on top of it.
    pub fn resolve(&self) -> Result<LottoConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path.display());
                LottoConfig::from_file(path)?
            }
            None => LottoConfig::default(),
        };

        if let Some(base_url) = &self.base_url {
            config.source.base_url = base_url.clone();
        }
        if let Some(timeout) = self.timeout {
            config.source.timeout_seconds = Some(timeout);
        }

        match &self.command {
            Command::Generate { no_pacing: true, .. } => config.generator.pacing_ms = 0,
            Command::Drawings { size: Some(size), .. } => config.display.page_size = *size,
            Command::Stats { top: Some(top) } => config.display.ranking_size = *top,
            _ => {}
        }

        config.validate()?;
        Ok(config)
    }
}
