use crate::domain::dto::DrawingPageDto;
use crate::domain::model::{
    FrequencyRanking, Page, PositionFrequencyEntry, PositionalRanking, POSITIONS,
};
use crate::domain::ports::LottoSource;
use crate::utils::error::{LottoError, Result};
use crate::utils::validation::validate_positive_number;

/// Read-only view over the historical data exposed by a [`LottoSource`].
/// Each operation is a single request plus a pure transformation of the
/// response; nothing is cached or retried here.
pub struct StatisticsAggregator<S: LottoSource> {
    source: S,
}

impl<S: LottoSource> StatisticsAggregator<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetches one page of drawings. `page_number` is 1-based and is sent
    /// as `page_number - 1`; it is not clamped against `total_pages`.
    pub async fn fetch_page(&self, page_number: usize, page_size: usize) -> Result<Page> {
        validate_positive_number("page_number", page_number, 1)?;
        validate_positive_number("page_size", page_size, 1)?;

        let page_index = page_number - 1;
        tracing::debug!(
            "Requesting drawings page {} (index {}, size {})",
            page_number,
            page_index,
            page_size
        );

        let dto = self.source.drawings(page_index, page_size).await?;
        let page = into_page(dto, page_index, page_size)?;

        tracing::debug!(
            "Received {} drawings, {} pages in total",
            page.items.len(),
            page.total_pages
        );
        Ok(page)
    }

    /// Overall ranking exactly as the source ordered it.
    pub async fn fetch_frequency_ranking(&self) -> Result<FrequencyRanking> {
        let entries = self.source.frequent_numbers().await?;
        tracing::debug!("Received {} frequency entries", entries.len());
        Ok(FrequencyRanking::new(entries))
    }

    pub async fn fetch_positional_ranking(&self) -> Result<PositionalRanking> {
        let entries = self.source.positional_frequent_numbers().await?;
        tracing::debug!("Received {} positional entries", entries.len());
        Ok(partition_by_position(&entries))
    }
}

fn into_page(dto: DrawingPageDto, page_index: usize, page_size: usize) -> Result<Page> {
    let items = dto
        .content
        .into_iter()
        .map(|record| record.into_record())
        .collect::<Result<Vec<_>>>()
        .map_err(|e| LottoError::source_unavailable("/drawings", e))?;

    Ok(Page {
        items,
        page_index,
        page_size,
        total_pages: dto.total_pages,
    })
}

/// Stable partition of a flat, rank-ordered list into six groups. Relative
/// order inside each group is the source's rank order.
pub fn partition_by_position(entries: &[PositionFrequencyEntry]) -> PositionalRanking {
    let mut groups: [Vec<u8>; POSITIONS] = Default::default();

    for entry in entries {
        match (entry.position as usize).checked_sub(1).and_then(|idx| groups.get_mut(idx)) {
            Some(group) => group.push(entry.number),
            None => tracing::warn!(
                "Dropping number {} with out-of-range position {}",
                entry.number,
                entry.position
            ),
        }
    }

    PositionalRanking::from_groups(groups)
}
