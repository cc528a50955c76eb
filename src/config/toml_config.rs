use crate::core::ConfigProvider;
use crate::utils::error::{LottoError, Result};
use crate::utils::validation::{validate_positive_number, validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;
pub const DEFAULT_PAGE_SIZE: usize = 30;
pub const DEFAULT_RANKING_SIZE: usize = 5;
pub const DEFAULT_PACING_MS: u64 = 800;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LottoConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub generator: GeneratorConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_ranking_size")]
    pub ranking_size: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Cosmetic pause before showing a generated draw; 0 disables it.
    #[serde(default = "default_pacing_ms")]
    pub pacing_ms: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_ranking_size() -> usize {
    DEFAULT_RANKING_SIZE
}

fn default_pacing_ms() -> u64 {
    DEFAULT_PACING_MS
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: None,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            ranking_size: DEFAULT_RANKING_SIZE,
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            pacing_ms: DEFAULT_PACING_MS,
        }
    }
}

impl LottoConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LottoError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LottoError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOTTO_API_BASE_URL})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LottoError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for LottoConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.base_url", &self.source.base_url)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validate_range("source.timeout_seconds", timeout, 1, 300)?;
        }

        validate_positive_number("display.page_size", self.display.page_size, 1)?;
        validate_positive_number("display.ranking_size", self.display.ranking_size, 1)?;
        validate_range("generator.pacing_ms", self.generator.pacing_ms, 0, 10_000)?;

        Ok(())
    }
}

impl ConfigProvider for LottoConfig {
    fn base_url(&self) -> &str {
        &self.source.base_url
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.source.timeout_seconds.unwrap_or(DEFAULT_TIMEOUT_SECONDS))
    }

    fn page_size(&self) -> usize {
        self.display.page_size
    }

    fn ranking_size(&self) -> usize {
        self.display.ranking_size
    }

    fn pacing(&self) -> Duration {
        Duration::from_millis(self.generator.pacing_ms)
    }
}
