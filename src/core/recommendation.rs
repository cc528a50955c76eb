use crate::domain::dto::RecommendationDto;
use crate::domain::model::{in_domain, Draw, DRAW_SIZE};
use crate::utils::error::{LottoError, Result};
use std::collections::HashSet;

/// Turns a recommendation payload into a draw, keeping the order the source
/// sent. Unlike sampled draws the result is not sorted.
pub fn adapt(record: &RecommendationDto) -> Result<Draw> {
    let mut numbers = [0u8; DRAW_SIZE];
    let mut seen = HashSet::with_capacity(DRAW_SIZE);

    for (slot, (field, value)) in numbers.iter_mut().zip(record.ordinal_fields()) {
        let value = value
            .filter(|v| !v.is_null())
            .ok_or_else(|| LottoError::malformed(format!("missing field '{}'", field)))?;

        let number = value
            .as_i64()
            .ok_or_else(|| LottoError::malformed(format!("field '{}' is not an integer: {}", field, value)))?;

        if !in_domain(number) {
            return Err(LottoError::malformed(format!(
                "field '{}' is out of range: {}",
                field, number
            )));
        }

        if !seen.insert(number) {
            return Err(LottoError::malformed(format!(
                "field '{}' repeats number {}",
                field, number
            )));
        }

        *slot = number as u8;
    }

    Draw::new(numbers).map_err(|e| LottoError::malformed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn dto(value: serde_json::Value) -> RecommendationDto {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_adapt_preserves_source_order() {
        let record = dto(json!({"one": 5, "two": 1, "three": 40, "four": 2, "five": 33, "six": 9}));
        let draw = adapt(&record).unwrap();

        assert_eq!(draw.numbers(), &[5, 1, 40, 2, 33, 9]);
    }

    #[test]
    fn test_adapt_missing_field() {
        let record = dto(json!({"first": 5, "second": 1, "third": 40, "fourth": 2, "fifth": 33}));
        let err = adapt(&record).unwrap_err();

        assert!(matches!(err, LottoError::MalformedRecommendation { .. }));
        assert!(err.to_string().contains("sixth"));
    }

    #[test]
    fn test_adapt_null_field_counts_as_missing() {
        let record = dto(json!({"first": 5, "second": null, "third": 40, "fourth": 2, "fifth": 33, "sixth": 9}));
        assert!(matches!(
            adapt(&record),
            Err(LottoError::MalformedRecommendation { .. })
        ));
    }

    #[test]
    fn test_adapt_rejects_non_integer_and_out_of_range() {
        let text = dto(json!({"first": "5", "second": 1, "third": 40, "fourth": 2, "fifth": 33, "sixth": 9}));
        let fractional = dto(json!({"first": 5.5, "second": 1, "third": 40, "fourth": 2, "fifth": 33, "sixth": 9}));
        let too_big = dto(json!({"first": 46, "second": 1, "third": 40, "fourth": 2, "fifth": 33, "sixth": 9}));
        let zero = dto(json!({"first": 0, "second": 1, "third": 40, "fourth": 2, "fifth": 33, "sixth": 9}));

        for record in [text, fractional, too_big, zero] {
            assert!(matches!(
                adapt(&record),
                Err(LottoError::MalformedRecommendation { .. })
            ));
        }
    }

    #[test]
    fn test_adapt_rejects_repeated_number() {
        let record = dto(json!({"first": 5, "second": 1, "third": 40, "fourth": 5, "fifth": 33, "sixth": 9}));
        let err = adapt(&record).unwrap_err();

        assert!(err.to_string().contains("fourth"));
    }
}
