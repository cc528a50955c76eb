pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{CliConfig, Command};

pub use adapters::HttpLottoSource;
pub use app::{LottoApp, Tab};
pub use config::LottoConfig;
pub use core::{
    generator::{GenerationMode, Generator},
    sampler::NumberSampler,
    statistics::StatisticsAggregator,
};
pub use utils::error::{LottoError, Result};
