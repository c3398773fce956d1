use std::collections::{HashMap, HashSet};

use crate::models::RatingSummary;
use crate::services::records::SurveyRecord;
use crate::services::round1;

const DEFAULT_PROJECT: &str = "Progetto non specificato";

/// Fold the ratings sheet into per-project averages, an overall average, and
/// the number of distinct companies that rated anything.
pub fn summarize_ratings(records: &[SurveyRecord]) -> RatingSummary {
    let mut project_ratings: HashMap<String, Vec<f64>> = HashMap::new();
    let mut total_rating = 0.0;
    let mut valid_entries = 0u32;
    let mut companies: HashSet<&str> = HashSet::new();

    for record in records {
        if let Some(rating) = record.score_float() {
            total_rating += rating;
            valid_entries += 1;

            project_ratings
                .entry(record.label_or(DEFAULT_PROJECT))
                .or_default()
                .push(rating);

            if let Some(company) = record.company.as_deref() {
                companies.insert(company);
            }
        }
    }

    let avg_rating = if valid_entries > 0 {
        round1(total_rating / valid_entries as f64)
    } else {
        0.0
    };

    let project_averages = project_ratings
        .into_iter()
        .map(|(project, ratings)| {
            let avg = ratings.iter().sum::<f64>() / ratings.len() as f64;
            (project, round1(avg))
        })
        .collect();

    RatingSummary {
        project_ratings: project_averages,
        avg_rating,
        total_entries: valid_entries,
        unique_companies: companies.len() as u32,
    }
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
    fn averages_per_project_and_overall() {
        let records = rows(&[
            &["d1", "Acme", "ProjX", "4.0"],
            &["d2", "Beta", "ProjX", "2.0"],
        ]);

        let summary = summarize_ratings(&records);

        assert_eq!(summary.project_ratings.get("ProjX"), Some(&3.0));
        assert_eq!(summary.avg_rating, 3.0);
        assert_eq!(summary.total_entries, 2);
        assert_eq!(summary.unique_companies, 2);
    }

    #[test]
    fn companies_only_counted_from_valid_rows() {
        let records = rows(&[
            &["d1", "Acme", "ProjX", "4.5"],
            &["d2", "Beta", "ProjX", "n/a"],
            &["d3", "Acme", "ProjY", "3.5"],
        ]);

        let summary = summarize_ratings(&records);

        assert_eq!(summary.unique_companies, 1);
        assert_eq!(summary.total_entries, 2);
    }

    #[test]
    fn missing_company_is_not_a_company() {
        let records = rows(&[&["d1", "", "ProjX", "4.0"]]);

        let summary = summarize_ratings(&records);

        assert_eq!(summary.unique_companies, 0);
        assert_eq!(summary.total_entries, 1);
    }

    #[test]
    fn blank_project_falls_back_to_default() {
        let records = rows(&[&["d1", "Acme", "", "2.5"]]);

        let summary = summarize_ratings(&records);

        assert_eq!(
            summary.project_ratings.get("Progetto non specificato"),
            Some(&2.5)
        );
    }

    #[test]
    fn one_decimal_rounding() {
        let records = rows(&[
            &["d1", "Acme", "ProjX", "4.0"],
            &["d2", "Beta", "ProjX", "3.0"],
            &["d3", "Gamma", "ProjX", "3.0"],
        ]);

        let summary = summarize_ratings(&records);

        // 10 / 3 = 3.333...
        assert_eq!(summary.project_ratings.get("ProjX"), Some(&3.3));
        assert_eq!(summary.avg_rating, 3.3);
    }

    #[test]
    fn empty_input_is_all_zeroes() {
        let summary = summarize_ratings(&[]);

        assert!(summary.project_ratings.is_empty());
        assert_eq!(summary.avg_rating, 0.0);
        assert_eq!(summary.total_entries, 0);
        assert_eq!(summary.unique_companies, 0);
    }
}
