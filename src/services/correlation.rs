use std::collections::HashMap;

use crate::models::CorrelationPoint;
use crate::services::records::SurveyRecord;
use crate::services::round1;

/// Join the two sheets on company id and emit one point per company present
/// in both.
///
/// The two sides deliberately disagree on how repeats are handled: interest
/// keeps only a company's latest value (later rows overwrite earlier ones),
/// while ratings are averaged across all of a company's rows. That asymmetry
/// is part of the public contract, not an accident to smooth over.
pub fn correlate(
    interest_records: &[SurveyRecord],
    rating_records: &[SurveyRecord],
) -> Vec<CorrelationPoint> {
    // First-insertion order, in-place overwrite on repeat keys.
    let mut company_interests: Vec<(String, i64)> = Vec::new();

    for record in interest_records {
        if let (Some(company), Some(interest)) = (record.company.as_deref(), record.score_int()) {
            match company_interests.iter_mut().find(|(c, _)| c == company) {
                Some(entry) => entry.1 = interest,
                None => company_interests.push((company.to_string(), interest)),
            }
        }
    }

    let mut company_ratings: HashMap<&str, Vec<f64>> = HashMap::new();

    for record in rating_records {
        if let (Some(company), Some(rating)) = (record.company.as_deref(), record.score_float()) {
            company_ratings.entry(company).or_default().push(rating);
        }
    }

    company_interests
        .into_iter()
        .filter_map(|(company, interest)| {
            let ratings = company_ratings.get(company.as_str())?;
            let rating = round1(ratings.iter().sum::<f64>() / ratings.len() as f64);
            Some(CorrelationPoint {
                company,
                interest,
                rating,
            })
        })
        .collect()
}
