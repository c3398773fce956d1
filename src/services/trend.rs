use chrono::Datelike;

use crate::models::TrendPoint;
use crate::services::records::SurveyRecord;
use crate::services::round1;

/// Month labels in canonical order, Italian 3-letter abbreviations.
pub const MONTHS: [&str; 12] = [
    "Gen", "Feb", "Mar", "Apr", "Mag", "Giu", "Lug", "Ago", "Set", "Ott", "Nov", "Dic",
];

/// Bucket ratings by the month of their row's date and average each bucket.
/// The output always has exactly twelve points in month order; a month with
/// no qualifying rows reports 0. Rows without a parseable date or a numeric
/// rating are skipped.
pub fn monthly_trend(records: &[SurveyRecord]) -> Vec<TrendPoint> {
    let mut buckets: [Vec<f64>; 12] = Default::default();

    for record in records {
        if let (Some(date), Some(rating)) = (record.date, record.score_float()) {
            buckets[date.month0() as usize].push(rating);
        }
    }

    MONTHS
        .iter()
        .zip(buckets.iter())
        .map(|(month, ratings)| {
            let rating = if ratings.is_empty() {
                0.0
            } else {
                round1(ratings.iter().sum::<f64>() / ratings.len() as f64)
            };
            TrendPoint { month, rating }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::records::parse_records;

    fn rows(data: &[&[&str]]) -> Vec<SurveyRecord> {
        let raw: Vec<Vec<String>> = data
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect();
        parse_records(&raw)
    }

    #[test]
    fn always_twelve_points_in_month_order() {
        let trend = monthly_trend(&[]);

        assert_eq!(trend.len(), 12);
        let labels: Vec<&str> = trend.iter().map(|p| p.month).collect();
        assert_eq!(labels, MONTHS);
        assert!(trend.iter().all(|p| p.rating == 0.0));
    }

    #[test]
    fn buckets_ratings_by_month() {
        let records = rows(&[
            &["2024-03-01", "Acme", "ProjX", "4.0"],
            &["2024-03-20", "Beta", "ProjX", "3.0"],
            &["2024-07-05", "Acme", "ProjY", "5.0"],
        ]);

        let trend = monthly_trend(&records);

        assert_eq!(trend[2], TrendPoint { month: "Mar", rating: 3.5 });
        assert_eq!(trend[6], TrendPoint { month: "Lug", rating: 5.0 });
        assert_eq!(trend[0].rating, 0.0);
    }

    #[test]
    fn bad_dates_and_missing_ratings_are_skipped() {
        let records = rows(&[
            &["sometime", "Acme", "ProjX", "4.0"],
            &["2024-03-01", "Acme", "ProjX", "alto"],
            &["2024-03-01", "Acme", "ProjX"],
            &["2024-03-09", "Beta", "ProjX", "2.0"],
        ]);

        let trend = monthly_trend(&records);

        assert_eq!(trend[2].rating, 2.0);
        assert_eq!(trend.iter().filter(|p| p.rating > 0.0).count(), 1);
    }
}
