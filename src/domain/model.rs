use crate::utils::error::{LottoError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 45;
pub const DRAW_SIZE: usize = 6;
pub const POSITIONS: usize = 6;

pub fn in_domain(number: i64) -> bool {
    (MIN_NUMBER as i64..=MAX_NUMBER as i64).contains(&number)
}

/// Six distinct numbers from the domain. Order is whatever the producer chose:
/// ascending for sampled draws, source order for recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Draw {
    numbers: [u8; DRAW_SIZE],
}

impl Draw {
    pub fn new(numbers: [u8; DRAW_SIZE]) -> Result<Self> {
        if let Some(n) = numbers.iter().find(|n| !in_domain(**n as i64)) {
            return Err(LottoError::ValidationError {
                message: format!(
                    "number {} outside {}..={}",
                    n, MIN_NUMBER, MAX_NUMBER
                ),
            });
        }

        let distinct: HashSet<u8> = numbers.iter().copied().collect();
        if distinct.len() != DRAW_SIZE {
            return Err(LottoError::ValidationError {
                message: format!("numbers {:?} are not pairwise distinct", numbers),
            });
        }

        Ok(Self { numbers })
    }

    pub fn numbers(&self) -> &[u8; DRAW_SIZE] {
        &self.numbers
    }

    pub fn is_ascending(&self) -> bool {
        self.numbers.windows(2).all(|w| w[0] < w[1])
    }

    pub fn contains(&self, number: u8) -> bool {
        self.numbers.contains(&number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DrawingRecord {
    pub round: u32,
    pub date: NaiveDate,
    pub draw: Draw,
    pub bonus: u8,
    pub first_winners: u64,
    pub first_win_prize: u64,
}

impl DrawingRecord {
    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrequencyEntry {
    pub number: u8,
    pub frequency: u32,
}

/// Overall ranking in the order the source ranked it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FrequencyRanking {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyRanking {
    pub fn new(entries: Vec<FrequencyEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Display cap. Truncates, never reorders.
    pub fn top(&self, n: usize) -> &[FrequencyEntry] {
        &self.entries[..n.min(self.entries.len())]
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionFrequencyEntry {
    pub number: u8,
    pub position: u8,
}

/// One ordered group of numbers per ordinal slot, positions 1 through 6.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PositionalRanking {
    groups: [Vec<u8>; POSITIONS],
}

impl PositionalRanking {
    pub fn from_groups(groups: [Vec<u8>; POSITIONS]) -> Self {
        Self { groups }
    }

    /// Numbers for a 1-based position; `None` outside 1..=6.
    pub fn position(&self, position: usize) -> Option<&[u8]> {
        position
            .checked_sub(1)
            .and_then(|idx| self.groups.get(idx))
            .map(Vec::as_slice)
    }

    pub fn groups(&self) -> &[Vec<u8>; POSITIONS] {
        &self.groups
    }

    /// `(position, numbers)` pairs with 1-based positions.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[u8])> {
        self.groups
            .iter()
            .enumerate()
            .map(|(idx, group)| (idx + 1, group.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.groups.iter().all(Vec::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    pub items: Vec<DrawingRecord>,
    pub page_index: usize,
    pub page_size: usize,
    pub total_pages: usize,
}

impl Page {
    /// 1-based page number as shown to users.
    pub fn page_number(&self) -> usize {
        self.page_index + 1
    }

    pub fn has_records(&self) -> bool {
        self.total_pages > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_rejects_duplicates() {
        let err = Draw::new([1, 2, 3, 4, 5, 5]).unwrap_err();
        assert!(matches!(err, LottoError::ValidationError { .. }));
    }

    #[test]
    fn test_draw_rejects_out_of_domain() {
        assert!(Draw::new([0, 2, 3, 4, 5, 6]).is_err());
        assert!(Draw::new([1, 2, 3, 4, 5, 46]).is_err());
    }

    #[test]
    fn test_draw_keeps_given_order() {
        let draw = Draw::new([5, 1, 40, 2, 33, 9]).unwrap();
        assert_eq!(draw.numbers(), &[5, 1, 40, 2, 33, 9]);
        assert!(!draw.is_ascending());
        assert!(draw.contains(40));
    }

    #[test]
    fn test_ranking_top_truncates_without_reordering() {
        let ranking = FrequencyRanking::new(vec![
            FrequencyEntry { number: 34, frequency: 123 },
            FrequencyEntry { number: 12, frequency: 119 },
            FrequencyEntry { number: 28, frequency: 125 },
        ]);

        let top = ranking.top(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].number, 34);
        assert_eq!(top[1].number, 12);
        assert_eq!(ranking.top(10).len(), 3);
    }

    #[test]
    fn test_positional_lookup_is_one_based() {
        let ranking = PositionalRanking::from_groups([
            vec![3, 7],
            vec![9],
            vec![],
            vec![],
            vec![],
            vec![],
        ]);

        assert_eq!(ranking.position(1), Some(&[3u8, 7][..]));
        assert_eq!(ranking.position(2), Some(&[9u8][..]));
        assert_eq!(ranking.position(0), None);
        assert_eq!(ranking.position(7), None);
        assert_eq!(ranking.iter().count(), POSITIONS);
    }

    #[test]
    fn test_record_date_segments() {
        let record = DrawingRecord {
            round: 1000,
            date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
            draw: Draw::new([1, 15, 23, 29, 34, 42]).unwrap(),
            bonus: 45,
            first_winners: 12,
            first_win_prize: 2_274_000_000,
        };

        assert_eq!((record.year(), record.month(), record.day()), (2024, 1, 6));
    }
}
