use std::collections::HashMap;

use crate::models::InterestSummary;
use crate::services::records::SurveyRecord;
use crate::services::round1;

const DEFAULT_INTEREST: &str = "Non specificato";

/// Fold the interest sheet into per-category counts and an overall average.
/// A record counts only if its score parses as an integer; everything else is
/// skipped without affecting the totals.
pub fn summarize_interest(records: &[SurveyRecord]) -> InterestSummary {
    let mut interests: HashMap<String, u32> = HashMap::new();
    let mut total_interest = 0i64;
    let mut valid_entries = 0u32;

    for record in records {
        if let Some(value) = record.score_int() {
            total_interest += value;
            valid_entries += 1;

            *interests.entry(record.label_or(DEFAULT_INTEREST)).or_insert(0) += 1;
        }
    }

    let avg_interest = if valid_entries > 0 {
        round1(total_interest as f64 / valid_entries as f64)
    } else {
        0.0
    };

    InterestSummary {
        interests,
        avg_interest,
        total_entries: valid_entries,
    }
}
