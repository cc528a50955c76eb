// Wire shapes returned by the lottery API. Conversion into canonical models
// happens in the core layer.

use crate::domain::model::{Draw, DrawingRecord};
use crate::utils::error::{LottoError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Recommendation payload. Fields are kept loose so that missing or mistyped
/// values reach the adapter instead of failing inside the decoder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationDto {
    #[serde(default, alias = "one")]
    pub first: Option<serde_json::Value>,
    #[serde(default, alias = "two")]
    pub second: Option<serde_json::Value>,
    #[serde(default, alias = "three")]
    pub third: Option<serde_json::Value>,
    #[serde(default, alias = "four")]
    pub fourth: Option<serde_json::Value>,
    #[serde(default, alias = "five")]
    pub fifth: Option<serde_json::Value>,
    #[serde(default, alias = "six")]
    pub sixth: Option<serde_json::Value>,
}

impl RecommendationDto {
    pub fn ordinal_fields(&self) -> [(&'static str, Option<&serde_json::Value>); 6] {
        [
            ("first", self.first.as_ref()),
            ("second", self.second.as_ref()),
            ("third", self.third.as_ref()),
            ("fourth", self.fourth.as_ref()),
            ("fifth", self.fifth.as_ref()),
            ("sixth", self.sixth.as_ref()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingRecordDto {
    pub round: u32,
    pub date: String,
    pub one: u8,
    pub two: u8,
    pub three: u8,
    pub four: u8,
    pub five: u8,
    pub six: u8,
    pub bonus: u8,
    #[serde(default)]
    pub first_winners: u64,
    #[serde(default)]
    pub first_win_prize: u64,
}

impl DrawingRecordDto {
    pub fn into_record(self) -> Result<DrawingRecord> {
        if self.round == 0 {
            return Err(LottoError::ValidationError {
                message: "round must be positive".to_string(),
            });
        }
        let date = parse_draw_date(&self.date)?;
        let draw = Draw::new([self.one, self.two, self.three, self.four, self.five, self.six])
            .map_err(|e| LottoError::ValidationError {
                message: format!("round {}: {}", self.round, e),
            })?;

        Ok(DrawingRecord {
            round: self.round,
            date,
            draw,
            bonus: self.bonus,
            first_winners: self.first_winners,
            first_win_prize: self.first_win_prize,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawingPageDto {
    #[serde(default)]
    pub content: Vec<DrawingRecordDto>,
    pub total_pages: usize,
}

/// Accepts `YYYY-MM-DD` with an optional trailing time part
/// (`2024-01-06T20:45:00`, `2024-01-06 20:45`).
pub fn parse_draw_date(raw: &str) -> Result<NaiveDate> {
    let day_part = raw
        .trim()
        .split(['T', ' '])
        .next()
        .unwrap_or_default();

    NaiveDate::parse_from_str(day_part, "%Y-%m-%d").map_err(|e| LottoError::ValidationError {
        message: format!("invalid draw date '{}': {}", raw, e),
    })
}
