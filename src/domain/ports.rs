use crate::domain::dto::{DrawingPageDto, RecommendationDto};
use crate::domain::model::{FrequencyEntry, PositionFrequencyEntry};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// The remote lottery data service. Every method is one independent
/// request/response exchange; transport and source-side failures come back
/// as `LottoError::SourceUnavailable`.
#[async_trait]
pub trait LottoSource: Send + Sync {
    async fn recommendation(&self) -> Result<RecommendationDto>;
    async fn drawings(&self, page_index: usize, size: usize) -> Result<DrawingPageDto>;
    async fn frequent_numbers(&self) -> Result<Vec<FrequencyEntry>>;
    async fn positional_frequent_numbers(&self) -> Result<Vec<PositionFrequencyEntry>>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn page_size(&self) -> usize;
    fn ranking_size(&self) -> usize;
    fn pacing(&self) -> Duration;
}

#[async_trait]
impl<T: LottoSource + ?Sized> LottoSource for std::sync::Arc<T> {
    async fn recommendation(&self) -> Result<RecommendationDto> {
        (**self).recommendation().await
    }

    async fn drawings(&self, page_index: usize, size: usize) -> Result<DrawingPageDto> {
        (**self).drawings(page_index, size).await
    }

    async fn frequent_numbers(&self) -> Result<Vec<FrequencyEntry>> {
        (**self).frequent_numbers().await
    }

    async fn positional_frequent_numbers(&self) -> Result<Vec<PositionFrequencyEntry>> {
        (**self).positional_frequent_numbers().await
    }
}
