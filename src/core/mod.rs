pub mod generator;
pub mod recommendation;
pub mod sampler;
pub mod statistics;

pub use crate::domain::model::{
    Draw, DrawingRecord, FrequencyEntry, FrequencyRanking, Page, PositionalRanking,
};
pub use crate::domain::ports::{ConfigProvider, LottoSource};
pub use crate::utils::error::Result;
