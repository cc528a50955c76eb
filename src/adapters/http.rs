use crate::domain::dto::{DrawingPageDto, RecommendationDto};
use crate::domain::model::{FrequencyEntry, PositionFrequencyEntry};
use crate::domain::ports::{ConfigProvider, LottoSource};
use crate::utils::error::{LottoError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

const RECOMMENDATION_PATH: &str = "drawings/generate";
const DRAWINGS_PATH: &str = "drawings";
const FREQUENT_PATH: &str = "drawings/frequent";
const POSITION_FREQUENT_PATH: &str = "drawings/position/frequent";

/// [`LottoSource`] backed by the lottery REST API.
#[derive(Debug, Clone)]
pub struct HttpLottoSource {
    client: Client,
    base_url: Url,
}

impl HttpLottoSource {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let mut base_url = Url::parse(base_url).map_err(|e| LottoError::InvalidConfigValueError {
            field: "source.base_url".to_string(),
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;

        // Url::join drops the last segment unless the path ends with '/'.
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| LottoError::ConfigError {
                message: format!("failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client, base_url })
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::new(config.base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url.join(path).map_err(|e| LottoError::ConfigError {
            message: format!("cannot build URL for '{}': {}", path, e),
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, String)]) -> Result<T> {
        let url = self.endpoint(path)?;
        tracing::debug!("Making API request to: {}", url);

        let response = self
            .client
            .get(url.clone())
            .query(query)
            .send()
            .await
            .map_err(|e| LottoError::source_unavailable(url.as_str(), e))?;

        tracing::debug!("API response status: {}", response.status());

        let response = response
            .error_for_status()
            .map_err(|e| LottoError::source_unavailable(url.as_str(), e))?;

        response
            .json::<T>()
            .await
            .map_err(|e| LottoError::source_unavailable(url.as_str(), e))
    }
}

#[async_trait]
impl LottoSource for HttpLottoSource {
    async fn recommendation(&self) -> Result<RecommendationDto> {
        let body: serde_json::Value = self.get_json(RECOMMENDATION_PATH, &[]).await?;

        // A body that is JSON but not an object is a contract problem, not an outage.
        if !body.is_object() {
            return Err(LottoError::malformed(format!(
                "expected an object with first..sixth, got {}",
                body
            )));
        }
        serde_json::from_value(body).map_err(|e| LottoError::malformed(e.to_string()))
    }

    async fn drawings(&self, page_index: usize, size: usize) -> Result<DrawingPageDto> {
        self.get_json(
            DRAWINGS_PATH,
            &[("page", page_index.to_string()), ("size", size.to_string())],
        )
        .await
    }

    async fn frequent_numbers(&self) -> Result<Vec<FrequencyEntry>> {
        self.get_json(FREQUENT_PATH, &[]).await
    }

    async fn positional_frequent_numbers(&self) -> Result<Vec<PositionFrequencyEntry>> {
        self.get_json(POSITION_FREQUENT_PATH, &[]).await
    }
}
