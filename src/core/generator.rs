use crate::core::recommendation;
use crate::core::sampler::NumberSampler;
use crate::domain::model::Draw;
use crate::domain::ports::LottoSource;
use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum GenerationMode {
    #[default]
    Random,
    Recommended,
}

pub struct Generator<S: LottoSource> {
    source: S,
    sampler: NumberSampler,
    pacing: Duration,
}

impl<S: LottoSource> Generator<S> {
    pub fn new(source: S, pacing: Duration) -> Self {
        Self {
            source,
            sampler: NumberSampler::new(),
            pacing,
        }
    }

    pub fn with_sampler(mut self, sampler: NumberSampler) -> Self {
        self.sampler = sampler;
        self
    }

    /// Produces one draw. The pacing delay is cosmetic and runs before
    /// either mode; `Duration::ZERO` skips it.
    pub async fn generate(&self, mode: GenerationMode) -> Result<Draw> {
        if !self.pacing.is_zero() {
            tokio::time::sleep(self.pacing).await;
        }

        match mode {
            GenerationMode::Random => self.sampler.sample(),
            GenerationMode::Recommended => {
                let dto = self.source.recommendation().await?;
                let draw = recommendation::adapt(&dto)?;
                tracing::debug!("Recommended draw: {:?}", draw.numbers());
                Ok(draw)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dto::{DrawingPageDto, RecommendationDto};
    use crate::domain::model::{FrequencyEntry, PositionFrequencyEntry};
    use crate::utils::error::LottoError;
    use async_trait::async_trait;
    use std::time::Instant;

    struct StubSource {
        recommendation: Option<serde_json::Value>,
    }

    #[async_trait]
    impl LottoSource for StubSource {
        async fn recommendation(&self) -> Result<RecommendationDto> {
            match &self.recommendation {
                Some(body) => Ok(serde_json::from_value(body.clone())?),
                None => Err(LottoError::source_unavailable("/drawings/generate", "connection refused")),
            }
        }

        async fn drawings(&self, _page_index: usize, _size: usize) -> Result<DrawingPageDto> {
            unreachable!("generator never pages drawings")
        }

        async fn frequent_numbers(&self) -> Result<Vec<FrequencyEntry>> {
            unreachable!("generator never reads frequencies")
        }

        async fn positional_frequent_numbers(&self) -> Result<Vec<PositionFrequencyEntry>> {
            unreachable!("generator never reads frequencies")
        }
    }

    #[tokio::test]
    async fn test_random_mode_does_not_touch_source() {
        let generator = Generator::new(StubSource { recommendation: None }, Duration::ZERO);
        let draw = generator.generate(GenerationMode::Random).await.unwrap();

        assert!(draw.is_ascending());
    }

    #[tokio::test]
    async fn test_recommended_mode_keeps_source_order() {
        let source = StubSource {
            recommendation: Some(serde_json::json!({
                "first": 8, "second": 43, "third": 12, "fourth": 35, "fifth": 23, "sixth": 29
            })),
        };
        let generator = Generator::new(source, Duration::ZERO);
        let draw = generator.generate(GenerationMode::Recommended).await.unwrap();

        assert_eq!(draw.numbers(), &[8, 43, 12, 35, 23, 29]);
    }

    #[tokio::test]
    async fn test_recommended_mode_propagates_malformed_payload() {
        let source = StubSource {
            recommendation: Some(serde_json::json!({ "first": 8 })),
        };
        let generator = Generator::new(source, Duration::ZERO);
        let err = generator.generate(GenerationMode::Recommended).await.unwrap_err();

        assert!(matches!(err, LottoError::MalformedRecommendation { .. }));
    }

    #[tokio::test]
    async fn test_recommended_mode_reports_unavailable_source() {
        let generator = Generator::new(StubSource { recommendation: None }, Duration::ZERO);
        let err = generator.generate(GenerationMode::Recommended).await.unwrap_err();

        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_pacing_delay_is_applied() {
        let pacing = Duration::from_millis(30);
        let generator = Generator::new(StubSource { recommendation: None }, pacing);

        let started = Instant::now();
        generator.generate(GenerationMode::Random).await.unwrap();

        assert!(started.elapsed() >= pacing);
    }

    #[test]
    fn test_exhausted_sampler_surfaces_through_generator() {
        let generator = Generator::new(StubSource { recommendation: None }, Duration::ZERO)
            .with_sampler(NumberSampler::with_max_attempts(3));

        let result = tokio_test::block_on(generator.generate(GenerationMode::Random));

        assert!(matches!(result, Err(LottoError::GenerationExhausted { attempts: 3 })));
    }
}
