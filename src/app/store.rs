use crate::core::generator::{GenerationMode, Generator};
use crate::core::statistics::StatisticsAggregator;
use crate::domain::model::{
    Draw, DrawingRecord, FrequencyEntry, FrequencyRanking, Page, PositionalRanking,
};
use crate::domain::ports::{ConfigProvider, LottoSource};
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    Generator,
    WinningNumbers,
    Statistics,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Generator, Tab::WinningNumbers, Tab::Statistics];

    pub fn id(&self) -> &'static str {
        match self {
            Tab::Generator => "generator",
            Tab::WinningNumbers => "winning-numbers",
            Tab::Statistics => "statistics",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct GeneratorState {
    pub mode: GenerationMode,
    pub numbers: Option<Draw>,
}

/// Ticket for one page load. Only the most recently issued ticket may
/// update the page state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub token: u64,
    pub page_number: usize,
    pub page_size: usize,
}

#[derive(Debug, Clone)]
pub struct WinningNumbersState {
    current_page: usize,
    page_size: usize,
    total_pages: Option<usize>,
    items: Vec<DrawingRecord>,
    last_token: u64,
}

impl WinningNumbersState {
    pub fn new(page_size: usize) -> Self {
        Self {
            current_page: 1,
            page_size,
            total_pages: None,
            items: Vec::new(),
            last_token: 0,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// `None` until the first page has been loaded.
    pub fn total_pages(&self) -> Option<usize> {
        self.total_pages
    }

    pub fn items(&self) -> &[DrawingRecord] {
        &self.items
    }

    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.total_pages.is_some_and(|total| self.current_page < total)
    }

    /// Issues a request for `page_number`, clamped to `[1, total_pages]`.
    /// Before the first response the total is unknown and the request is
    /// pinned to page 1. The current page only moves once the load succeeds.
    pub fn go_to(&mut self, page_number: usize) -> PageRequest {
        let page_number = match self.total_pages {
            Some(total) => page_number.clamp(1, total.max(1)),
            None => 1,
        };

        self.last_token += 1;

        PageRequest {
            token: self.last_token,
            page_number,
            page_size: self.page_size,
        }
    }

    pub fn next_page(&mut self) -> Option<PageRequest> {
        self.has_next().then(|| self.go_to(self.current_page + 1))
    }

    pub fn previous_page(&mut self) -> Option<PageRequest> {
        self.has_previous().then(|| self.go_to(self.current_page - 1))
    }

    pub fn reload(&mut self) -> PageRequest {
        self.go_to(self.current_page)
    }

    /// Applies a finished load. Responses to superseded requests and failed
    /// loads leave the state untouched; returns whether the state changed.
    pub fn complete(&mut self, request: PageRequest, result: Result<Page>) -> bool {
        if request.token != self.last_token {
            tracing::debug!(
                "Discarding stale response for page {} (token {}, latest {})",
                request.page_number,
                request.token,
                self.last_token
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.current_page = request.page_number;
                self.items = page.items;
                self.total_pages = Some(page.total_pages);
                true
            }
            Err(e) => {
                tracing::warn!("⚠️  Drawings page {} unavailable: {}", request.page_number, e);
                false
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatisticsState {
    pub frequency: FrequencyRanking,
    pub positional: PositionalRanking,
}

/// Explicit application state: active tab, generator output, the drawings
/// page counter and the statistics panels.
pub struct LottoApp<S: LottoSource> {
    tab: Tab,
    generator: Generator<Arc<S>>,
    aggregator: StatisticsAggregator<Arc<S>>,
    ranking_size: usize,
    pub generator_state: GeneratorState,
    pub winning_numbers: WinningNumbersState,
    pub statistics: StatisticsState,
}

impl<S: LottoSource> LottoApp<S> {
    pub fn new<C: ConfigProvider>(source: S, config: &C) -> Self {
        let source = Arc::new(source);
        Self {
            tab: Tab::default(),
            generator: Generator::new(Arc::clone(&source), config.pacing()),
            aggregator: StatisticsAggregator::new(source),
            ranking_size: config.ranking_size(),
            generator_state: GeneratorState::default(),
            winning_numbers: WinningNumbersState::new(config.page_size()),
            statistics: StatisticsState::default(),
        }
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn aggregator(&self) -> &StatisticsAggregator<Arc<S>> {
        &self.aggregator
    }

    /// Switches tabs and loads whatever the new tab displays.
    pub async fn select_tab(&mut self, tab: Tab) {
        tracing::debug!("Switching tab: {} -> {}", self.tab.id(), tab.id());
        self.tab = tab;

        match tab {
            Tab::Generator => {}
            Tab::WinningNumbers => {
                let request = self.winning_numbers.reload();
                self.load_page(request).await;
            }
            Tab::Statistics => self.refresh_statistics().await,
        }
    }

    pub fn set_generation_mode(&mut self, mode: GenerationMode) {
        self.generator_state.mode = mode;
    }

    /// On failure the previous numbers stay and the error goes to the caller.
    pub async fn generate(&mut self) -> Result<Draw> {
        let draw = self.generator.generate(self.generator_state.mode).await?;
        self.generator_state.numbers = Some(draw);
        Ok(draw)
    }

    pub async fn change_page(&mut self, page_number: usize) -> bool {
        let request = self.winning_numbers.go_to(page_number);
        self.load_page(request).await
    }

    pub async fn next_page(&mut self) -> bool {
        match self.winning_numbers.next_page() {
            Some(request) => self.load_page(request).await,
            None => false,
        }
    }

    pub async fn previous_page(&mut self) -> bool {
        match self.winning_numbers.previous_page() {
            Some(request) => self.load_page(request).await,
            None => false,
        }
    }

    async fn load_page(&mut self, request: PageRequest) -> bool {
        let result = self
            .aggregator
            .fetch_page(request.page_number, request.page_size)
            .await;
        self.winning_numbers.complete(request, result)
    }

    /// Loads both rankings concurrently. Each panel is replaced only if its
    /// own request succeeded.
    pub async fn refresh_statistics(&mut self) {
        let (frequency, positional) = tokio::join!(
            self.aggregator.fetch_frequency_ranking(),
            self.aggregator.fetch_positional_ranking()
        );

        match frequency {
            Ok(ranking) => self.statistics.frequency = ranking,
            Err(e) => tracing::warn!("⚠️  Frequency ranking unavailable: {}", e),
        }

        match positional {
            Ok(ranking) => self.statistics.positional = ranking,
            Err(e) => tracing::warn!("⚠️  Positional ranking unavailable: {}", e),
        }
    }

    /// Overall ranking capped to the configured display size.
    pub fn top_frequencies(&self) -> &[FrequencyEntry] {
        self.statistics.frequency.top(self.ranking_size)
    }
}
